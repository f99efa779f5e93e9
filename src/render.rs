//! Presentation of decoded cards: a text report for people, JSON for tools.

use std::fmt::{self, Display, Formatter};

use crate::card::DecodedCard;
use crate::header::SlotHeader;
use crate::save::TeamRecord;

/// JSON document for a decoded card, using the field names of the save format.
pub fn render_json(card: &DecodedCard, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(card)
    } else {
        serde_json::to_string(card)
    }
}

pub fn render_slots_json(headers: &[SlotHeader], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(headers)
    } else {
        serde_json::to_string(headers)
    }
}

/// Multi-line text report of a decoded card.
pub struct TextReport<'a> {
    pub card: &'a DecodedCard,
    /// Leave out teams that have no name
    pub skip_empty_teams: bool,
}

impl<'a> TextReport<'a> {
    pub fn new(card: &'a DecodedCard) -> Self {
        TextReport {
            card,
            skip_empty_teams: false,
        }
    }

    pub fn skip_empty_teams(mut self, skip: bool) -> Self {
        self.skip_empty_teams = skip;
        self
    }
}

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Worms save in slot {}", self.card.slot_index)?;
        for (i, team) in self.card.save.teams.iter().enumerate() {
            if self.skip_empty_teams && team.is_empty() {
                continue;
            }
            writeln!(f)?;
            write!(f, "Team {}: {}", i + 1, TeamDisplay(team))?;
        }
        Ok(())
    }
}

struct TeamDisplay<'a>(&'a TeamRecord);

impl Display for TeamDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let t = self.0;
        writeln!(f, "{}", t.team_name)?;
        writeln!(f, "  Worms:   {}", t.worm_names.join(", "))?;
        writeln!(f, "  {:<8} {:>10} {:>10}", "", "overall", "deathmatch")?;
        let rows = [
            ("Wins", t.team_win_count, t.team_deathmatch_win_count),
            ("Losses", t.team_loss_count, t.team_deathmatch_loss_count),
            ("Draws", t.team_draw_count, t.team_deathmatch_draw_count),
            ("Kills", t.team_kills, t.team_deathmatch_kills),
            ("Deaths", t.team_deaths, t.team_deathmatch_deaths),
        ];
        for (label, overall, deathmatch) in rows {
            writeln!(f, "  {:<8} {:>10} {:>10}", label, overall, deathmatch)?;
        }
        Ok(())
    }
}

/// One line per slot header, numbered from 0.
pub struct SlotListing<'a>(pub &'a [SlotHeader]);

impl Display for SlotListing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, header) in self.0.iter().enumerate() {
            writeln!(f, "{:>2}  {}", i, header)?;
        }
        Ok(())
    }
}
