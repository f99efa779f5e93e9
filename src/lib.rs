//! Decoder for Worms team statistics stored on raw memory card dumps.
//!
//! A card image is 128 KiB: a header table describing 15 save slots followed
//! by one 8 KiB save block per slot. The slot whose header carries the
//! `waoption` identifier holds the Worms save, a table of 9 teams.

pub mod card;
pub mod config;
pub mod error;
pub mod header;
pub mod layout;
pub mod locator;
pub mod reader;
pub mod render;
pub mod save;
pub mod text;

#[cfg(test)]
mod test_utils;

pub use card::{decode_card, CardDecoder, DecodedCard};
pub use error::DecodeError;
pub use header::SlotHeader;
pub use layout::CARD_SIZE;
pub use locator::GAME_TAG;
pub use save::{SaveSlot, TeamRecord};

/*
Card image layout
        00000   card preamble
        00080   slot headers, 15 x 0x80
        00800   unused
        02000   save blocks, 15 x 0x2000
        20000   end of card

Worms save block
        0000    preamble
        0200    team records, 9 x 0x340
        1f40    trailer
        2000    end of block
*/
