//! Formatter pipeline: validated configuration plus the render entry points.

use crate::alias::AliasTable;
use crate::category::build_categories;
use crate::markup::{HtmlMarkup, Markup};
use mf_core::{Category, Delimiters, FormatterConfig, Result, ScheduleInput, Variant, WeeklyMode};

/// Read-only view the renderers work against for one call.
pub(crate) struct Renderer<'a> {
    pub config: &'a FormatterConfig,
    pub delimiters: &'a Delimiters,
    pub aliases: &'a AliasTable,
    pub markup: &'a dyn Markup,
}

/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct ModeFormatter {
    config: FormatterConfig,
    delimiters: Delimiters,
    aliases: AliasTable,
}

impl ModeFormatter {
    pub fn new(config: FormatterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config))
    }

    fn assemble(config: FormatterConfig) -> Self {
        let delimiters = Delimiters::new(&config);
        let aliases = AliasTable::seeded(&config);
        Self { config, delimiters, aliases }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    fn renderer<'a>(&'a self, markup: &'a dyn Markup) -> Renderer<'a> {
        Renderer {
            config: &self.config,
            delimiters: &self.delimiters,
            aliases: &self.aliases,
            markup,
        }
    }

    /// Normalize and digest every category. Fails before any rendering.
    pub fn build_categories(&self, input: &ScheduleInput) -> Result<Vec<Category>> {
        build_categories(input, self.config.day_count())
    }

    /// Render a category map as HTML.
    pub fn render(&self, input: &ScheduleInput) -> Result<String> {
        self.render_with(input, &HtmlMarkup)
    }

    pub fn render_with(&self, input: &ScheduleInput, markup: &dyn Markup) -> Result<String> {
        let categories = self.build_categories(input)?;
        self.renderer(markup).render_types(&categories)
    }

    /// Parse a JSON category map and render it with `markup`.
    pub fn render_json(&self, json: &str, markup: &dyn Markup) -> Result<String> {
        let input: ScheduleInput = serde_json::from_str(json)?;
        self.render_with(&input, markup)
    }

    /// Render bare weekly modes as one unlabelled category.
    pub fn render_modes<S: AsRef<str>>(&self, modes: &[Vec<S>]) -> Result<String> {
        self.render_modes_with(modes, &HtmlMarkup)
    }

    pub fn render_modes_with<S: AsRef<str>>(
        &self,
        modes: &[Vec<S>],
        markup: &dyn Markup,
    ) -> Result<String> {
        let day_count = self.config.day_count();
        let variants = modes
            .iter()
            .map(|mode| WeeklyMode::parse(mode.as_slice(), day_count, "").map(Variant::new))
            .collect::<Result<Vec<_>>>()?;
        let categories: Vec<Category> = Category::new("", variants).into_iter().collect();
        self.renderer(markup).render_types(&categories)
    }
}

impl Default for ModeFormatter {
    fn default() -> Self {
        Self::assemble(FormatterConfig::default())
    }
}
