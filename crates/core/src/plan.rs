//! Deck planning: pair each parsed slide with the directives a presentation
//! writer needs to render it.

use crate::chart::ChartSpec;
use crate::resolve::{
    resolve_background, resolve_quote_style, resolve_text_style, BackgroundDirectives, Bounds,
    TextRole, TextStyleDirective,
};
use crate::template::Template;
use crate::types::{SlideLayout, SlideRecord};
use serde::{Deserialize, Serialize};

/// Heading shown on quote slides.
pub const QUOTE_HEADING: &str = "Quote";

/// How a chart should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    ClusteredColumn,
}

/// A chart ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPlan {
    pub chart_type: ChartType,
    pub data: ChartSpec,
}

/// One slide with everything needed to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSlide {
    /// 1-based slide number.
    pub number: usize,

    pub layout: SlideLayout,

    /// Position of `layout` in the default slide master.
    pub layout_index: usize,

    /// Text for the slide's title placeholder.
    pub heading: String,

    pub record: SlideRecord,

    pub background: BackgroundDirectives,

    pub title_style: TextStyleDirective,

    /// Style for the subtitle, body or quote text. `None` for slides without
    /// a text body.
    pub body_style: Option<TextStyleDirective>,

    /// Where to place the picture or chart, for image and chart slides.
    pub placement: Option<Bounds>,

    /// Parsed chart. `None` for non-chart slides and for charts whose spec
    /// could not be parsed.
    pub chart: Option<ChartPlan>,
}

/// A fully planned deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckPlan {
    /// The template every slide was resolved against.
    pub template: Template,

    pub slides: Vec<PlannedSlide>,

    /// Problems that were recovered from while planning.
    pub warnings: Vec<String>,
}

/// Box an image is fitted into, keeping its aspect ratio.
pub fn image_bounds() -> Bounds {
    Bounds::from_inches(1.0, 1.5, 8.0, 5.5)
}

/// Area a chart is placed into.
pub fn chart_bounds() -> Bounds {
    Bounds::from_inches(2.0, 2.0, 6.0, 4.5)
}

/// Resolve styles for every slide against one template.
///
/// Chart specs are parsed here. A spec that fails to parse, or that has
/// nothing to plot, is logged and recorded in [`DeckPlan::warnings`]; the
/// slide is kept without a chart.
pub fn plan_deck(records: &[SlideRecord], template: &Template) -> DeckPlan {
    let background = resolve_background(template);
    let title_style = resolve_text_style(template, TextRole::Title);
    let body_style = resolve_text_style(template, TextRole::Body);
    let quote_style = resolve_quote_style(template);

    let mut warnings = Vec::new();
    let mut slides = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        let number = idx + 1;
        let layout = record.kind().layout();
        let mut planned = PlannedSlide {
            number,
            layout,
            layout_index: layout.master_index(),
            heading: record.title().unwrap_or(QUOTE_HEADING).to_string(),
            record: record.clone(),
            background,
            title_style: title_style.clone(),
            body_style: None,
            placement: None,
            chart: None,
        };

        match record {
            SlideRecord::Title { .. }
            | SlideRecord::Content { .. }
            | SlideRecord::Section { .. } => {
                planned.body_style = Some(body_style.clone());
            }
            SlideRecord::Quote { .. } => {
                planned.body_style = Some(quote_style.clone());
            }
            SlideRecord::Image { .. } => {
                planned.placement = Some(image_bounds());
            }
            SlideRecord::Chart { chart_spec, .. } => {
                planned.placement = Some(chart_bounds());
                match ChartSpec::parse(chart_spec) {
                    Ok(data) if data.is_empty() => {
                        log::warn!("Slide {}: chart has nothing to plot", number);
                        warnings.push(format!("Slide {}: chart skipped: no data", number));
                    }
                    Ok(data) => {
                        planned.chart = Some(ChartPlan {
                            chart_type: ChartType::ClusteredColumn,
                            data,
                        });
                    }
                    Err(e) => {
                        log::warn!("Slide {}: skipping chart: {}", number, e);
                        warnings.push(format!("Slide {}: chart skipped: {}", number, e));
                    }
                }
            }
        }

        slides.push(planned);
    }

    DeckPlan {
        template: template.clone(),
        slides,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::registry::TemplateRegistry;
    use crate::resolve::FillDirective;
    use crate::template::{Alignment, Rgb};

    fn elegant_blue() -> Template {
        TemplateRegistry::builtin()
            .get("Elegant Blue")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_plan_every_kind() {
        let records = parse(
            "# Deck\n## Tagline\n# Agenda\n- one\n![pic](a.png)\n@chart {Categories: A,B; S1: 1,2}\n> Ship it",
        );
        let plan = plan_deck(&records, &elegant_blue());

        let layouts: Vec<SlideLayout> = plan.slides.iter().map(|s| s.layout).collect();
        assert_eq!(
            layouts,
            vec![
                SlideLayout::Title,
                SlideLayout::TitleOnly,
                SlideLayout::TitleOnly,
                SlideLayout::TitleOnly,
                SlideLayout::TitleAndContent,
            ]
        );
        assert!(plan.warnings.is_empty());

        let numbers: Vec<usize> = plan.slides.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        let indexes: Vec<usize> = plan.slides.iter().map(|s| s.layout_index).collect();
        assert_eq!(indexes, vec![0, 5, 5, 5, 1]);

        // Title slide: subtitle uses the body style.
        assert!(plan.slides[0].body_style.is_some());
        assert_eq!(plan.slides[0].heading, "Deck");

        // Image inherits the open slide's title and has a placement.
        assert_eq!(plan.slides[1].heading, "Agenda");
        assert_eq!(plan.slides[1].placement, Some(image_bounds()));
        assert!(plan.slides[1].body_style.is_none());

        // Chart is parsed.
        let chart = plan.slides[2].chart.as_ref().unwrap();
        assert_eq!(chart.chart_type, ChartType::ClusteredColumn);
        assert_eq!(chart.data.categories, vec!["A", "B"]);
        assert_eq!(plan.slides[2].placement, Some(chart_bounds()));

        // Quote gets the fixed heading and quote styling.
        assert_eq!(plan.slides[3].heading, QUOTE_HEADING);
        let quote_style = plan.slides[3].body_style.as_ref().unwrap();
        assert!(quote_style.italic);
        assert_eq!(quote_style.alignment, Alignment::Center);

        // Content slide is flushed last.
        assert_eq!(plan.slides[4].heading, "Agenda");
        assert!(plan.slides[4].body_style.as_ref().unwrap().bulleted);
    }

    #[test]
    fn test_every_slide_shares_the_background() {
        let records = parse("# Deck\n# A\n# B");
        let plan = plan_deck(&records, &elegant_blue());
        assert_eq!(plan.slides.len(), 3);
        for slide in &plan.slides {
            assert!(matches!(slide.background.fill, FillDirective::Gradient { .. }));
            assert_eq!(slide.title_style.color, Rgb::new(0, 102, 204));
        }
    }

    #[test]
    fn test_bad_chart_is_skipped_not_fatal() {
        let records = parse("# Deck\n# Data\n@chart {Categories: A,B; S1: 1,x}\n- after");
        let plan = plan_deck(&records, &elegant_blue());

        assert_eq!(plan.slides.len(), 3);
        assert!(plan.slides[1].chart.is_none());
        assert_eq!(plan.warnings.len(), 1);
        assert!(plan.warnings[0].starts_with("Slide 2: chart skipped"));
        assert_eq!(plan.slides[2].heading, "Data");
    }

    #[test]
    fn test_blank_chart_clause_is_skipped() {
        let records = parse("# Deck\n# Data\n@chart {Categories: A; S1: 4;}");
        let plan = plan_deck(&records, &elegant_blue());

        assert!(plan.slides[1].chart.is_none());
        assert_eq!(plan.slides[1].placement, Some(chart_bounds()));
        assert_eq!(plan.warnings.len(), 1);
        assert!(plan.warnings[0].contains("missing a ':' separator"));
    }

    #[test]
    fn test_chart_without_series_is_skipped() {
        let records = parse("# Deck\n@chart {Categories: A,B}\n## Data\n- x");
        let plan = plan_deck(&records, &elegant_blue());

        assert_eq!(plan.slides[1].layout, SlideLayout::TitleOnly);
        assert!(plan.slides[1].chart.is_none());
        assert_eq!(plan.warnings, vec!["Slide 2: chart skipped: no data"]);
        assert_eq!(plan.slides[2].layout_index, 2);
    }

    #[test]
    fn test_empty_deck() {
        let plan = plan_deck(&[], &elegant_blue());
        assert!(plan.slides.is_empty());
        assert_eq!(plan.template.name, "Elegant Blue");
    }
}
