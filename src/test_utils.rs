// Test utilities for building synthetic card images without a real dump
use crate::layout::{self, Field, CARD_SIZE};

pub struct CardImage {
    pub memory: Vec<u8>,
}

impl CardImage {
    /// All-zero card of the full size
    pub fn new() -> Self {
        Self {
            memory: vec![0u8; CARD_SIZE],
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.memory
    }

    pub fn set_header_bytes(&mut self, slot: usize, offset: usize, data: &[u8]) {
        let start = layout::header_offset(slot) + offset;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }

    pub fn set_identifier(&mut self, slot: usize, tag: &[u8]) {
        self.set_header_bytes(slot, layout::header::IDENTIFIER.offset, tag);
    }

    fn team_base(slot: usize, team: usize) -> usize {
        layout::save_block_offset(slot) + layout::team_offset(team)
    }

    pub fn set_team_text(&mut self, slot: usize, team: usize, field: &Field, text: &[u8]) {
        assert!(text.len() <= field.len);
        let start = Self::team_base(slot, team) + field.offset;
        self.memory[start..start + text.len()].copy_from_slice(text);
    }

    pub fn set_team_counter(&mut self, slot: usize, team: usize, field: &Field, value: u32) {
        let start = Self::team_base(slot, team) + field.offset;
        self.memory[start..start + 4].copy_from_slice(&value.to_be_bytes());
    }
}
