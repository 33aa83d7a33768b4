//! Mode and modes renderers: one week to day-range units, runs of equal weeks to blocks.

use crate::days::label_tokens;
use crate::pipeline::Renderer;
use crate::sequence::compact_indices;
use crate::time::{format_slot, TimeText};
use mf_core::{Category, DaySlot, Result, Variant, WeeklyMode};

/// Distinct slots of one week with the day indices holding each, by first day.
pub fn group_days(mode: &WeeklyMode) -> Vec<(&DaySlot, Vec<usize>)> {
    let mut groups: Vec<(&DaySlot, Vec<usize>)> = Vec::new();
    for (day, slot) in mode.slots().iter().enumerate() {
        match groups.iter_mut().find(|(s, _)| *s == slot) {
            Some((_, days)) => days.push(day),
            None => groups.push((slot, vec![day])),
        }
    }
    groups
}

impl Renderer<'_> {
    /// `modes` share content; only the first is read.
    pub(crate) fn render_mode(&self, modes: &[&WeeklyMode]) -> Result<String> {
        let mut units = Vec::new();
        if let Some(mode) = modes.first() {
            for (slot, days) in group_days(mode) {
                let Some(time) = format_slot(slot) else {
                    continue;
                };
                let days = label_tokens(&compact_indices(&days, true), &self.config.day_names)?;
                units.push(self.mode_content(&days, &time));
            }
        }
        Ok(self.markup.mode(&units, &self.delimiters.mode_delimiter))
    }

    fn mode_content(&self, days: &str, time: &TimeText) -> String {
        match &time.pause {
            Some(pause) => self.markup.mode_content(&format!("{days} {}", time.span), Some(pause)),
            None => {
                let span = self.aliases.resolve(&time.span);
                let phrase = format!("{days} {span}");
                self.markup.mode_content(self.aliases.resolve(&phrase), None)
            }
        }
    }

    /// Flatten the categories' variants and render each adjacent run of equal ones once.
    pub(crate) fn render_modes(&self, categories: &[&Category]) -> Result<String> {
        let variants: Vec<&Variant> = categories.iter().flat_map(|c| c.variants.iter()).collect();
        let blocks = variants
            .chunk_by(|a, b| a.same_content(b))
            .map(|run| {
                let modes: Vec<&WeeklyMode> = run.iter().map(|v| &v.mode).collect();
                self.render_mode(&modes)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.markup.modes(&blocks, &self.delimiters.modes_delimiter))
    }
}
