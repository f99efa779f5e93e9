use log::{info, warn};

use crate::error::{DecodeError, Result};
use crate::header::SlotHeader;
use crate::text::decode_fixed_str;

/// Identifier tag of the Worms options save, NUL padded to 8 bytes.
pub const GAME_TAG: [u8; 8] = *b"waoption";

/// Find the slot whose identifier equals `tag` byte for byte.
///
/// Every header is checked. If more than one matches, the last one wins.
pub fn find_slot(headers: &[SlotHeader], tag: &[u8; 8]) -> Result<usize> {
    let matches: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| &h.identifier == tag)
        .map(|(i, _)| i)
        .collect();

    if matches.len() > 1 {
        warn!(
            "Tag {:?} present in slots {:?}, using the last one",
            decode_fixed_str(tag),
            matches
        );
    }

    match matches.last() {
        Some(&slot) => {
            info!("Found {:?} save in slot {}", decode_fixed_str(tag), slot);
            Ok(slot)
        }
        None => Err(DecodeError::NotFound {
            tag: decode_fixed_str(tag),
        }),
    }
}
