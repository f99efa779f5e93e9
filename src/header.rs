use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;

use log::{debug, trace};
use serde::{Serialize, Serializer};

use crate::error::{DecodeError, Result};
use crate::layout::{self, header, CARD_SIZE, SLOT_COUNT};
use crate::reader::{read_field_array, read_field_text, read_field_u8};
use crate::text::decode_fixed_str;

/// Decoded view of one 128-byte slot header.
///
/// Apart from the product code, values are passed through as found on the
/// card. The checksum is carried but never verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SlotHeader {
    pub save_type: u8,
    pub save_size: [u8; 3],
    pub pointer1: u8,
    pub pointer2: u8,
    pub region: [u8; 2],
    pub product_code: String,
    #[serde(serialize_with = "serialize_tag")]
    pub identifier: [u8; 8],
    pub xor_checksum: u8,
}

impl SlotHeader {
    /// Decode the header of `slot` from a full card image.
    pub fn decode(bytes: &[u8], slot: usize) -> Result<SlotHeader> {
        let base = layout::header_offset(slot);
        trace!("Decoding slot header {} at {:#06x}", slot, base);
        Ok(SlotHeader {
            save_type: read_field_u8(bytes, base, &header::SAVE_TYPE)?,
            save_size: read_field_array(bytes, base, &header::SAVE_SIZE)?,
            pointer1: read_field_u8(bytes, base, &header::POINTER1)?,
            pointer2: read_field_u8(bytes, base, &header::POINTER2)?,
            region: read_field_array(bytes, base, &header::REGION)?,
            product_code: read_field_text(bytes, base, &header::PRODUCT_CODE)?,
            identifier: read_field_array(bytes, base, &header::IDENTIFIER)?,
            xor_checksum: read_field_u8(bytes, base, &header::XOR_CHECKSUM)?,
        })
    }

    /// Identifier tag as text, for listings
    pub fn identifier_text(&self) -> String {
        decode_fixed_str(&self.identifier)
    }

    pub fn region_text(&self) -> String {
        decode_fixed_str(&self.region)
    }
}

fn serialize_tag<S: Serializer>(tag: &[u8; 8], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&decode_fixed_str(tag))
}

/// Decode all 15 slot headers of a card image.
///
/// Refuses anything shorter than a full card, even though the header table
/// itself sits in the first few kilobytes.
pub fn decode_headers(bytes: &[u8]) -> Result<Vec<SlotHeader>> {
    if bytes.len() < CARD_SIZE {
        return Err(DecodeError::TruncatedInput {
            expected: CARD_SIZE,
            actual: bytes.len(),
        });
    }
    let headers = (0..SLOT_COUNT)
        .map(|slot| SlotHeader::decode(bytes, slot))
        .collect::<Result<Vec<_>>>()?;
    debug!("Decoded {} slot headers", headers.len());
    Ok(headers)
}

impl Display for SlotHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        write!(
            f,
            "type {:#04x}  size {:02x}{:02x}{:02x}  region {:<2}  product {:<10}  id {:<8}  xor {:#04x}",
            self.save_type,
            self.save_size[0],
            self.save_size[1],
            self.save_size[2],
            self.region_text(),
            self.product_code,
            self.identifier_text(),
            self.xor_checksum,
        )
    }
}
