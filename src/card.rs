use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::header::decode_headers;
use crate::locator::{find_slot, GAME_TAG};
use crate::save::{decode_save, SaveSlot};

/// Result of decoding a card: the slot holding the Worms save and its teams.
///
/// Owns all of its data; the card buffer can be dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecodedCard {
    pub slot_index: usize,
    #[serde(flatten)]
    pub save: SaveSlot,
}

/// Decodes whole card images: header table, slot lookup, then the save block.
#[derive(Debug, Clone)]
pub struct CardDecoder {
    tag: [u8; 8],
}

impl Default for CardDecoder {
    fn default() -> Self {
        CardDecoder { tag: GAME_TAG }
    }
}

impl CardDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for a different identifier tag
    #[cfg(test)]
    pub fn with_tag(tag: [u8; 8]) -> Self {
        CardDecoder { tag }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedCard> {
        debug!("Decoding card image of {} bytes", bytes.len());
        let headers = decode_headers(bytes)?;
        let slot_index = find_slot(&headers, &self.tag)?;
        let save = decode_save(bytes, slot_index)?;
        Ok(DecodedCard { slot_index, save })
    }
}

/// Decode a card image looking for the Worms save.
pub fn decode_card(bytes: &[u8]) -> Result<DecodedCard> {
    CardDecoder::default().decode(bytes)
}
