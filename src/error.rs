use thiserror::Error;

use crate::layout::FieldKind;

/// Everything that can go wrong while decoding a memory card image.
///
/// Decoding is all-or-nothing: any of these aborts the whole call and no
/// partial result is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("read of {length} bytes at offset {offset:#x} exceeds buffer of {available} bytes")]
    OutOfBounds {
        offset: usize,
        length: usize,
        available: usize,
    },

    #[error("card image truncated: expected {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("no save slot tagged {tag:?} found on card")]
    NotFound { tag: String },

    #[error("save block layout is {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("slot index {index} out of range (card has {slots} slots)")]
    SlotOutOfRange { index: usize, slots: usize },

    #[error("layout field {field} is {len} bytes of {kind:?}, decoder expects {expected_len} bytes of {expected_kind:?}")]
    FieldMismatch {
        field: &'static str,
        len: usize,
        kind: FieldKind,
        expected_len: usize,
        expected_kind: FieldKind,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
