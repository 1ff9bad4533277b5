//! End-to-end deck building: template lookup, parsing, planning, writing.

use crate::error::{Error, Result};
use crate::parser::SlideParser;
use crate::plan::{plan_deck, DeckPlan};
use crate::registry::TemplateRegistry;
use crate::template::TemplateOverrides;
use crate::writer::PresentationWriter;
use std::borrow::Cow;

/// Builds deck plans from text against a template catalog.
///
/// The builder only reads the registry. Customizations are applied to a copy
/// of the chosen template for this build only.
#[derive(Debug, Clone)]
pub struct DeckBuilder<'a> {
    registry: &'a TemplateRegistry,
    parser: SlideParser,
    overrides: TemplateOverrides,
}

impl<'a> DeckBuilder<'a> {
    /// Create a builder that looks templates up in `registry`.
    pub fn new(registry: &'a TemplateRegistry) -> Self {
        Self {
            registry,
            parser: SlideParser::new(),
            overrides: TemplateOverrides::default(),
        }
    }

    /// Apply these customizations to whichever template is used.
    pub fn with_overrides(mut self, overrides: TemplateOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Parse `text` and resolve it against the named template.
    pub fn plan(&self, text: &str, template_name: &str) -> Result<DeckPlan> {
        if text.trim_start_matches('\u{feff}').trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let base = self.registry.get(template_name)?;
        let template = if self.overrides.is_empty() {
            Cow::Borrowed(base)
        } else {
            Cow::Owned(base.with_overrides(&self.overrides)?)
        };

        let records = self.parser.parse(text);
        log::debug!(
            "Planning {} slides with template '{}'",
            records.len(),
            template.name
        );

        Ok(plan_deck(&records, &template))
    }

    /// Plan the deck and hand it to `writer`.
    pub fn build<W: PresentationWriter>(
        &self,
        text: &str,
        template_name: &str,
        writer: &mut W,
    ) -> Result<DeckPlan> {
        let plan = self.plan(text, template_name)?;
        writer.write_deck(&plan)?;
        Ok(plan)
    }
}
