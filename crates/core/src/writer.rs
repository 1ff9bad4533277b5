//! The seam to presentation writers.
//!
//! Rendering to an actual presentation file happens outside this crate. A
//! writer receives a [`DeckPlan`] and is responsible for creating slides in
//! the planned layouts, applying the style directives, fetching images and
//! drawing charts.

use crate::error::Result;
use crate::plan::DeckPlan;
use std::io::Write;

/// Something that can turn a planned deck into output.
pub trait PresentationWriter {
    /// Write the whole deck.
    fn write_deck(&mut self, plan: &DeckPlan) -> Result<()>;
}

/// Writes the deck plan as JSON, for writers living in another process.
#[derive(Debug)]
pub struct JsonPlanWriter<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonPlanWriter<W> {
    /// Create a writer emitting pretty-printed JSON.
    pub fn new(out: W) -> Self {
        Self { out, pretty: true }
    }

    /// Set whether to pretty-print.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Get the underlying output back.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationWriter for JsonPlanWriter<W> {
    fn write_deck(&mut self, plan: &DeckPlan) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, plan)?;
        } else {
            serde_json::to_writer(&mut self.out, plan)?;
        }
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::plan::plan_deck;
    use crate::registry::TemplateRegistry;

    #[test]
    fn test_json_writer_output() {
        let registry = TemplateRegistry::builtin();
        let plan = plan_deck(
            &parse("# Deck\n## Sub\n# A\n- a"),
            registry.get("Sleek Black").unwrap(),
        );

        let mut writer = JsonPlanWriter::new(Vec::new()).with_pretty(false);
        writer.write_deck(&plan).unwrap();
        let bytes = writer.into_inner();
        assert_eq!(bytes.last(), Some(&b'\n'));

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["template"]["name"], "Sleek Black");
        assert_eq!(value["slides"][0]["record"]["kind"], "title");
        assert_eq!(value["slides"][0]["record"]["subtitle"], "Sub");
        assert_eq!(value["slides"][1]["layout"], "title_and_content");
        assert_eq!(value["slides"][1]["background"]["fill"]["type"], "solid");
        assert_eq!(value["slides"][1]["background"]["fill"]["color"], "#F5F5F5");
        assert_eq!(value["slides"][1]["background"]["shape"]["shape"], "rectangle");

        let back: DeckPlan = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, plan);
    }
}
