//! Core of the slide deck generator: parse markdown-like text into slide
//! records and resolve template styles into concrete rendering directives.

pub mod builder;
pub mod chart;
pub mod error;
pub mod parser;
pub mod plan;
pub mod registry;
pub mod resolve;
pub mod template;
pub mod types;
pub mod writer;

pub use builder::DeckBuilder;
pub use chart::{parse_chart_spec, ChartSeries, ChartSpec};
pub use error::{ChartParseError, Error, Result};
pub use parser::{parse, SlideParser};
pub use plan::{plan_deck, ChartPlan, ChartType, DeckPlan, PlannedSlide};
pub use registry::{TemplateRegistry, DEFAULT_TEMPLATE};
pub use resolve::{
    resolve_background, resolve_quote_style, resolve_text_style, BackgroundDirectives, Bounds,
    FillDirective, ShapeDirective, TextRole, TextStyleDirective,
};
pub use template::{Alignment, DecorativeShape, Gradient, Rgb, Template, TemplateOverrides};
pub use types::{ContentLine, SlideKind, SlideLayout, SlideRecord};
pub use writer::{JsonPlanWriter, PresentationWriter};
