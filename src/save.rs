//! Decoding of a Worms save block into its team table.

use log::{debug, trace};
use serde::Serialize;

use crate::error::{DecodeError, Result};
use crate::layout::{self, team, SAVE_BLOCK_SIZE, SLOT_COUNT, TEAM_COUNT};
use crate::reader::{read, read_field_text, read_field_u32_be};

/// One team of the save, with its lifetime statistics.
///
/// Counters are copied verbatim from the card; nothing is derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamRecord {
    pub team_name: String,
    pub worm_names: [String; team::WORMS_PER_TEAM],
    pub team_loss_count: u32,
    pub team_deathmatch_loss_count: u32,
    pub team_win_count: u32,
    pub team_deathmatch_win_count: u32,
    pub team_draw_count: u32,
    pub team_deathmatch_draw_count: u32,
    pub team_kills: u32,
    pub team_deathmatch_kills: u32,
    pub team_deaths: u32,
    pub team_deathmatch_deaths: u32,
}

impl TeamRecord {
    /// Decode the team record starting at `base` in `block`.
    pub fn decode(block: &[u8], base: usize) -> Result<TeamRecord> {
        let text = |field: &layout::Field| read_field_text(block, base, field);
        let counter = |field: &layout::Field| read_field_u32_be(block, base, field);

        Ok(TeamRecord {
            team_name: text(&team::TEAM_NAME)?,
            worm_names: [
                text(&team::WORM_NAMES[0])?,
                text(&team::WORM_NAMES[1])?,
                text(&team::WORM_NAMES[2])?,
                text(&team::WORM_NAMES[3])?,
            ],
            team_loss_count: counter(&team::LOSS_COUNT)?,
            team_deathmatch_loss_count: counter(&team::DEATHMATCH_LOSS_COUNT)?,
            team_win_count: counter(&team::WIN_COUNT)?,
            team_deathmatch_win_count: counter(&team::DEATHMATCH_WIN_COUNT)?,
            team_draw_count: counter(&team::DRAW_COUNT)?,
            team_deathmatch_draw_count: counter(&team::DEATHMATCH_DRAW_COUNT)?,
            team_kills: counter(&team::KILLS)?,
            team_deathmatch_kills: counter(&team::DEATHMATCH_KILLS)?,
            team_deaths: counter(&team::DEATHS)?,
            team_deathmatch_deaths: counter(&team::DEATHMATCH_DEATHS)?,
        })
    }

    /// A slot the game never filled in has no team name.
    pub fn is_empty(&self) -> bool {
        self.team_name.is_empty()
    }
}

/// The team table of one save block. Always holds `TEAM_COUNT` teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveSlot {
    pub teams: Vec<TeamRecord>,
}

/// Refuse a team record schema that does not fill a save block exactly.
fn check_block_size(layout_size: usize) -> Result<usize> {
    if layout_size != SAVE_BLOCK_SIZE {
        return Err(DecodeError::SizeMismatch {
            expected: SAVE_BLOCK_SIZE,
            actual: layout_size,
        });
    }
    Ok(layout_size)
}

/// Decode the save block belonging to `slot_index`.
pub fn decode_save(bytes: &[u8], slot_index: usize) -> Result<SaveSlot> {
    if slot_index >= SLOT_COUNT {
        return Err(DecodeError::SlotOutOfRange {
            index: slot_index,
            slots: SLOT_COUNT,
        });
    }

    let layout_size = check_block_size(layout::save_block_layout_size())?;

    let offset = layout::save_block_offset(slot_index);
    debug!("Decoding save block of slot {} at {:#07x}", slot_index, offset);
    let block = read(bytes, offset, layout_size)?;

    let teams = (0..TEAM_COUNT)
        .map(|t| {
            trace!("Team {} at block offset {:#06x}", t, layout::team_offset(t));
            TeamRecord::decode(block, layout::team_offset(t))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SaveSlot { teams })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FieldKind, CARD_SIZE};
    use crate::test_utils::CardImage;
    use test_log::test;

    #[test]
    fn decodes_names_and_counters() {
        let mut card = CardImage::new();
        card.set_team_text(7, 2, &team::TEAM_NAME, b"Grubs");
        card.set_team_text(7, 2, &team::WORM_NAMES[0], b"Boggy B");
        card.set_team_text(7, 2, &team::WORM_NAMES[3], b"Spadge");
        for (n, field) in team::COUNTERS.iter().enumerate() {
            card.set_team_counter(7, 2, field, 100 + n as u32);
        }

        let save = decode_save(card.bytes(), 7).unwrap();
        assert_eq!(save.teams.len(), TEAM_COUNT);
        let t = &save.teams[2];
        assert_eq!(t.team_name, "Grubs");
        assert_eq!(t.worm_names, ["Boggy B", "", "", "Spadge"].map(String::from));
        assert_eq!(t.team_loss_count, 100);
        assert_eq!(t.team_deathmatch_loss_count, 101);
        assert_eq!(t.team_win_count, 102);
        assert_eq!(t.team_deathmatch_win_count, 103);
        assert_eq!(t.team_draw_count, 104);
        assert_eq!(t.team_deathmatch_draw_count, 105);
        assert_eq!(t.team_kills, 106);
        assert_eq!(t.team_deathmatch_kills, 107);
        assert_eq!(t.team_deaths, 108);
        assert_eq!(t.team_deathmatch_deaths, 109);

        assert!(save.teams[1].is_empty());
        assert_eq!(save.teams[1], TeamRecord::default());
    }

    #[test]
    fn counters_are_big_endian() {
        let mut card = CardImage::new();
        card.set_team_counter(0, 0, &team::KILLS, 0x0102_0304);
        let save = decode_save(card.bytes(), 0).unwrap();
        assert_eq!(save.teams[0].team_kills, 0x0102_0304);
    }

    #[test]
    fn other_slots_are_untouched() {
        let mut card = CardImage::new();
        card.set_team_text(3, 0, &team::TEAM_NAME, b"Elsewhere");
        let save = decode_save(card.bytes(), 4).unwrap();
        assert!(save.teams.iter().all(TeamRecord::is_empty));
    }

    #[test]
    fn every_slot_decodes_a_full_block() {
        let card = CardImage::new();
        for slot in 0..SLOT_COUNT {
            let save = decode_save(card.bytes(), slot).unwrap();
            assert_eq!(save.teams.len(), TEAM_COUNT);
        }
    }

    #[test]
    fn last_slot_needs_whole_card() {
        let card = CardImage::new();
        let short = &card.bytes()[..CARD_SIZE - 1];
        assert!(matches!(
            decode_save(short, SLOT_COUNT - 1),
            Err(DecodeError::OutOfBounds { .. })
        ));
        assert!(decode_save(short, 0).is_ok());
    }

    #[test]
    fn schema_size_must_fill_block() {
        assert_eq!(check_block_size(SAVE_BLOCK_SIZE), Ok(SAVE_BLOCK_SIZE));
        assert_eq!(
            check_block_size(SAVE_BLOCK_SIZE - 16),
            Err(DecodeError::SizeMismatch {
                expected: SAVE_BLOCK_SIZE,
                actual: SAVE_BLOCK_SIZE - 16
            })
        );
        assert!(check_block_size(SAVE_BLOCK_SIZE + 4).is_err());
    }

    #[test]
    fn decoded_widths_follow_table() {
        assert_eq!(team::TEAM_NAME.kind, FieldKind::Text);
        assert!(team::WORM_NAMES.iter().all(|f| f.kind == FieldKind::Text));
        let mut card = CardImage::new();
        let full_name = [b'N'; team::NAME_LEN];
        card.set_team_text(0, 0, &team::TEAM_NAME, &full_name);
        card.set_team_text(0, 0, &team::WORM_NAMES[3], &full_name);
        card.set_team_counter(0, 0, &team::DEATHMATCH_DEATHS, u32::MAX);
        let t = &decode_save(card.bytes(), 0).unwrap().teams[0];
        assert_eq!(t.team_name.len(), team::TEAM_NAME.len);
        assert_eq!(t.worm_names[3].len(), team::WORM_NAMES[3].len);
        assert_eq!(t.team_deathmatch_deaths, u32::MAX);
        assert_eq!(t.team_deaths, 0);
    }

    #[test]
    fn slot_index_out_of_range() {
        let card = CardImage::new();
        assert_eq!(
            decode_save(card.bytes(), SLOT_COUNT),
            Err(DecodeError::SlotOutOfRange {
                index: SLOT_COUNT,
                slots: SLOT_COUNT
            })
        );
    }
}
