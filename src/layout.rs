//! Byte layout of a raw memory card dump carrying a Worms save.
//!
//! Every offset the decoders use lives here, as constants or as `Field`
//! table entries, so the whole schema can be audited in one place.
//!
//! Card geometry:
//! ```text
//! offset   size        region
//! 0        128         card preamble
//! 128      15 * 128    slot header table
//! 2048     6144        unused
//! 8192     15 * 8192   save area, one block per slot
//! 131072               end of card
//! ```

/// How the bytes of a field are turned into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single raw byte
    Byte,
    /// Raw bytes passed through uninterpreted
    Bytes,
    /// NUL-padded fixed-length text
    Text,
    /// Big-endian unsigned 32-bit integer
    U32Be,
}

/// One named field at a fixed offset inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    /// Offset relative to the start of the enclosing record
    pub offset: usize,
    pub len: usize,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, offset: usize, len: usize, kind: FieldKind) -> Field {
        Field {
            name,
            offset,
            len,
            kind,
        }
    }

    /// First byte past the field, relative to the record start
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }
}

pub const SLOT_COUNT: usize = 15;

pub const CARD_PREAMBLE_SIZE: usize = 128;
pub const HEADER_SIZE: usize = 128;
pub const HEADER_TABLE_OFFSET: usize = CARD_PREAMBLE_SIZE;
pub const HEADER_GAP_SIZE: usize = 6144;

pub const SAVE_AREA_OFFSET: usize = HEADER_TABLE_OFFSET + SLOT_COUNT * HEADER_SIZE + HEADER_GAP_SIZE;

/// Size every save block must have on the card.
pub const SAVE_BLOCK_SIZE: usize = 8192;

pub const SAVE_PREAMBLE_SIZE: usize = 512;
pub const SAVE_TRAILER_SIZE: usize = 192;
pub const TEAM_COUNT: usize = 9;
pub const TEAM_RECORD_SIZE: usize = team::DEATHMATCH_DEATHS.end() + team::TAIL_SIZE;

/// Total size of a well-formed card image.
pub const CARD_SIZE: usize = SAVE_AREA_OFFSET + SLOT_COUNT * SAVE_BLOCK_SIZE;

/// Size of a save block as described by the team record schema.
///
/// Must equal `SAVE_BLOCK_SIZE`; the save decoder refuses to run otherwise.
pub const fn save_block_layout_size() -> usize {
    SAVE_PREAMBLE_SIZE + TEAM_COUNT * TEAM_RECORD_SIZE + SAVE_TRAILER_SIZE
}

/// Absolute offset of the header for `slot`.
pub const fn header_offset(slot: usize) -> usize {
    HEADER_TABLE_OFFSET + slot * HEADER_SIZE
}

/// Absolute offset of the save block for `slot`.
pub const fn save_block_offset(slot: usize) -> usize {
    SAVE_AREA_OFFSET + slot * SAVE_BLOCK_SIZE
}

/// Offset of team record `team` relative to the start of its save block.
pub const fn team_offset(team: usize) -> usize {
    SAVE_PREAMBLE_SIZE + team * TEAM_RECORD_SIZE
}

/// Slot header fields, relative to the header start.
pub mod header {
    use super::{Field, FieldKind};

    pub const SAVE_TYPE: Field = Field::new("save_type", 0, 1, FieldKind::Byte);
    pub const SAVE_SIZE: Field = Field::new("save_size", 4, 3, FieldKind::Bytes);
    pub const POINTER1: Field = Field::new("pointer1", 8, 1, FieldKind::Byte);
    pub const POINTER2: Field = Field::new("pointer2", 9, 1, FieldKind::Byte);
    pub const REGION: Field = Field::new("region", 10, 2, FieldKind::Bytes);
    pub const PRODUCT_CODE: Field = Field::new("product_code", 12, 10, FieldKind::Text);
    pub const IDENTIFIER: Field = Field::new("identifier", 22, 8, FieldKind::Bytes);
    pub const XOR_CHECKSUM: Field = Field::new("xor_checksum", 127, 1, FieldKind::Byte);

    pub const FIELDS: [Field; 8] = [
        SAVE_TYPE,
        SAVE_SIZE,
        POINTER1,
        POINTER2,
        REGION,
        PRODUCT_CODE,
        IDENTIFIER,
        XOR_CHECKSUM,
    ];
}

/// Team record fields, relative to the record start.
///
/// Counters come in (overall, deathmatch) pairs separated by 4-byte gaps
/// whose meaning is unknown. A second layout with one 16-byte gap is known
/// to exist for the draw region; this table follows the four-gap variant.
pub mod team {
    use super::{Field, FieldKind};

    pub const NAME_LEN: usize = 17;
    pub const WORMS_PER_TEAM: usize = 4;

    pub const TEAM_NAME: Field = Field::new("team_name", 4, NAME_LEN, FieldKind::Text);

    const WORM_BASE: usize = TEAM_NAME.end();

    pub const WORM_NAMES: [Field; WORMS_PER_TEAM] = [
        Field::new("worm_name_0", WORM_BASE, NAME_LEN, FieldKind::Text),
        Field::new("worm_name_1", WORM_BASE + NAME_LEN, NAME_LEN, FieldKind::Text),
        Field::new("worm_name_2", WORM_BASE + 2 * NAME_LEN, NAME_LEN, FieldKind::Text),
        Field::new("worm_name_3", WORM_BASE + 3 * NAME_LEN, NAME_LEN, FieldKind::Text),
    ];

    // team weapon, cpu level etc
    const SETTINGS_SIZE: usize = 38;
    const COUNTER_BASE: usize = WORM_BASE + WORMS_PER_TEAM * NAME_LEN + SETTINGS_SIZE;
    const GAP: usize = 4;
    const PAIR: usize = 8 + GAP;

    pub const LOSS_COUNT: Field = Field::new("loss_count", COUNTER_BASE, 4, FieldKind::U32Be);
    pub const DEATHMATCH_LOSS_COUNT: Field =
        Field::new("deathmatch_loss_count", COUNTER_BASE + 4, 4, FieldKind::U32Be);
    pub const WIN_COUNT: Field = Field::new("win_count", COUNTER_BASE + PAIR, 4, FieldKind::U32Be);
    pub const DEATHMATCH_WIN_COUNT: Field =
        Field::new("deathmatch_win_count", COUNTER_BASE + PAIR + 4, 4, FieldKind::U32Be);
    pub const DRAW_COUNT: Field = Field::new("draw_count", COUNTER_BASE + 2 * PAIR, 4, FieldKind::U32Be);
    pub const DEATHMATCH_DRAW_COUNT: Field =
        Field::new("deathmatch_draw_count", COUNTER_BASE + 2 * PAIR + 4, 4, FieldKind::U32Be);
    pub const KILLS: Field = Field::new("kills", COUNTER_BASE + 3 * PAIR, 4, FieldKind::U32Be);
    pub const DEATHMATCH_KILLS: Field =
        Field::new("deathmatch_kills", COUNTER_BASE + 3 * PAIR + 4, 4, FieldKind::U32Be);
    pub const DEATHS: Field = Field::new("deaths", COUNTER_BASE + 4 * PAIR, 4, FieldKind::U32Be);
    pub const DEATHMATCH_DEATHS: Field =
        Field::new("deathmatch_deaths", COUNTER_BASE + 4 * PAIR + 4, 4, FieldKind::U32Be);

    pub const COUNTERS: [Field; 10] = [
        LOSS_COUNT,
        DEATHMATCH_LOSS_COUNT,
        WIN_COUNT,
        DEATHMATCH_WIN_COUNT,
        DRAW_COUNT,
        DEATHMATCH_DRAW_COUNT,
        KILLS,
        DEATHMATCH_KILLS,
        DEATHS,
        DEATHMATCH_DEATHS,
    ];

    /// Zero-filled bytes after the last counter
    pub const TAIL_SIZE: usize = 649;
}
