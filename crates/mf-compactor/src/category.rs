//! Type and types renderers: digest-sorted category groups with combined labels.

use crate::pipeline::Renderer;
use mf_core::{Category, Result, ScheduleInput};
use tracing::debug;

/// Build every non-empty category, in key order.
pub fn build_categories(input: &ScheduleInput, day_count: usize) -> Result<Vec<Category>> {
    let mut categories = Vec::new();
    for (key, entries) in input {
        let Some(entries) = entries else {
            continue;
        };
        if let Some(category) = Category::from_entries(key, entries, day_count)? {
            categories.push(category);
        }
    }
    Ok(categories)
}

/// Sort by digest, then split equal-digest runs into groups of identical content.
pub fn group_categories(categories: &[Category]) -> Vec<Vec<&Category>> {
    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by_key(|c| c.digest);

    let mut groups: Vec<Vec<&Category>> = Vec::new();
    for bucket in sorted.chunk_by(|a, b| a.digest == b.digest) {
        let mut local: Vec<Vec<&Category>> = Vec::new();
        for &category in bucket {
            match local.iter_mut().find(|g| g[0].same_content(category)) {
                Some(group) => group.push(category),
                None => local.push(vec![category]),
            }
        }
        groups.extend(local);
    }
    groups
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Renderer<'_> {
    /// `"Cafes, bar and shop"`, or `None` when no name resolves to text.
    pub(crate) fn type_label(&self, categories: &[&Category]) -> Option<String> {
        let names: Vec<String> = categories
            .iter()
            .map(|c| self.config.type_label(&c.key, c.is_plural()))
            .collect();
        if names.iter().all(String::is_empty) {
            return None;
        }
        let label = match names.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!(
                "{}{}{last}",
                rest.join(self.delimiters.type_delimiter.as_str()),
                self.delimiters.type_delimiter_last
            ),
            _ => names.concat(),
        };
        Some(capitalize(&label))
    }

    /// Uniform categories render as one block, the rest one block each.
    pub(crate) fn render_type(&self, categories: &[&Category]) -> Result<String> {
        let label = self
            .type_label(categories)
            .map(|text| self.markup.label(&text, &self.delimiters.type_postfix));

        let (uniform, mixed): (Vec<&Category>, Vec<&Category>) =
            categories.iter().copied().partition(|c| c.variants_uniform);

        let mut blocks = Vec::with_capacity(mixed.len() + 1);
        if !uniform.is_empty() {
            blocks.push(self.render_modes(&uniform)?);
        }
        for category in mixed {
            blocks.push(self.render_modes(&[category])?);
        }
        Ok(self.markup.type_content(label.as_deref(), &blocks))
    }

    pub(crate) fn render_types(&self, categories: &[Category]) -> Result<String> {
        let groups = group_categories(categories);
        debug!(categories = categories.len(), groups = groups.len(), "rendering types");
        let rendered = groups
            .iter()
            .map(|group| self.render_type(group))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.markup.types(&rendered))
    }
}
