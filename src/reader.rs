//! Bounds-checked reads of fixed-offset fields.
//!
//! All decoders go through these helpers instead of indexing the card
//! buffer directly. The typed `read_field_*` readers refuse a `Field` whose
//! length or kind differs from what they return, so an edit to the layout
//! table cannot be silently decoded with stale widths.

use crate::error::{DecodeError, Result};
use crate::layout::{Field, FieldKind};
use crate::text::decode_fixed_str;

/// Borrow `length` bytes at `offset`.
pub fn read(buffer: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
    let out_of_bounds = || DecodeError::OutOfBounds {
        offset,
        length,
        available: buffer.len(),
    };
    let end = offset.checked_add(length).ok_or_else(out_of_bounds)?;
    buffer.get(offset..end).ok_or_else(out_of_bounds)
}

/// Read the bytes of `field` in a record that starts at `base`.
pub fn read_field<'a>(buffer: &'a [u8], base: usize, field: &Field) -> Result<&'a [u8]> {
    let offset = base.checked_add(field.offset).ok_or(DecodeError::OutOfBounds {
        offset: base,
        length: field.len,
        available: buffer.len(),
    })?;
    read(buffer, offset, field.len)
}

fn check_field(field: &Field, expected_len: usize, expected_kind: FieldKind) -> Result<()> {
    if field.len != expected_len || field.kind != expected_kind {
        return Err(DecodeError::FieldMismatch {
            field: field.name,
            len: field.len,
            kind: field.kind,
            expected_len,
            expected_kind,
        });
    }
    Ok(())
}

/// Raw bytes of a `Bytes` field whose table length is exactly `N`.
pub fn read_field_array<const N: usize>(buffer: &[u8], base: usize, field: &Field) -> Result<[u8; N]> {
    check_field(field, N, FieldKind::Bytes)?;
    field_array(buffer, base, field)
}

// length already checked against N
fn field_array<const N: usize>(buffer: &[u8], base: usize, field: &Field) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(read_field(buffer, base, field)?);
    Ok(out)
}

pub fn read_field_u8(buffer: &[u8], base: usize, field: &Field) -> Result<u8> {
    check_field(field, 1, FieldKind::Byte)?;
    Ok(read_field(buffer, base, field)?[0])
}

pub fn read_field_u32_be(buffer: &[u8], base: usize, field: &Field) -> Result<u32> {
    check_field(field, 4, FieldKind::U32Be)?;
    Ok(u32::from_be_bytes(field_array(buffer, base, field)?))
}

/// Text of a `Text` field, over whatever length the table gives it.
pub fn read_field_text(buffer: &[u8], base: usize, field: &Field) -> Result<String> {
    check_field(field, field.len, FieldKind::Text)?;
    Ok(decode_fixed_str(read_field(buffer, base, field)?))
}
