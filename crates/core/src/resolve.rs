//! Template resolution: turn a template into concrete style directives.
//!
//! Every function here is a pure function of its inputs, so resolving the
//! same template twice always gives identical directives.

use crate::template::{Alignment, DecorativeShape, Rgb, Template};
use serde::{Deserialize, Serialize};

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// Default slide width (10 in).
pub const SLIDE_WIDTH: i64 = 10 * EMU_PER_INCH;

/// Default slide height (7.5 in).
pub const SLIDE_HEIGHT: i64 = 15 * EMU_PER_INCH / 2;

/// Space before and after each body paragraph, in points.
pub const PARAGRAPH_SPACING_POINTS: u32 = 6;

/// Body size used on quote slides, in points.
pub const QUOTE_FONT_SIZE: u32 = 24;

/// A rectangle on the slide, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    /// The whole slide.
    pub const FULL_SLIDE: Bounds = Bounds {
        left: 0,
        top: 0,
        width: SLIDE_WIDTH,
        height: SLIDE_HEIGHT,
    };

    /// Build bounds from inch measurements.
    pub fn from_inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        let emu = |inches: f64| (inches * EMU_PER_INCH as f64).round() as i64;
        Self {
            left: emu(left),
            top: emu(top),
            width: emu(width),
            height: emu(height),
        }
    }
}

/// How to fill the slide background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FillDirective {
    Solid { color: Rgb },
    Gradient { start: Rgb, end: Rgb },
}

/// A decorative shape to draw beneath slide content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDirective {
    pub shape: DecorativeShape,
    pub fill_color: Rgb,
    pub line_color: Rgb,
    pub bounds: Bounds,
}

/// Everything needed to paint a slide background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundDirectives {
    pub fill: FillDirective,
    pub shape: Option<ShapeDirective>,
}

/// Which text element of a slide is being styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    Title,
    Body,
}

/// Concrete text formatting for one element of a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyleDirective {
    pub font: String,
    pub size_points: u32,
    pub bold: bool,
    pub italic: bool,
    pub alignment: Alignment,
    pub color: Rgb,
    pub bulleted: bool,
    /// Space before and after each paragraph, in points.
    pub paragraph_spacing_points: u32,
    /// Shrink the text so it fits its shape.
    pub auto_fit: bool,
}

/// Resolve the background fill and optional decorative shape.
pub fn resolve_background(template: &Template) -> BackgroundDirectives {
    let fill = match template.gradient {
        Some(gradient) => FillDirective::Gradient {
            start: gradient.start,
            end: gradient.end,
        },
        None => FillDirective::Solid {
            color: template.background_color,
        },
    };

    let shape = template.decorative_shape.map(|shape| ShapeDirective {
        shape,
        fill_color: template.theme_color,
        line_color: template.theme_color,
        bounds: Bounds::FULL_SLIDE,
    });

    BackgroundDirectives { fill, shape }
}

/// Resolve the text style for a title or body element.
///
/// Titles use the theme color. Body text is black on a pure white
/// background and white on anything else.
pub fn resolve_text_style(template: &Template, role: TextRole) -> TextStyleDirective {
    match role {
        TextRole::Title => TextStyleDirective {
            font: template.font_family.clone(),
            size_points: template.title_font_size,
            bold: template.title_bold,
            italic: false,
            alignment: template.title_alignment,
            color: template.theme_color,
            bulleted: false,
            paragraph_spacing_points: 0,
            auto_fit: true,
        },
        TextRole::Body => TextStyleDirective {
            font: template.font_family.clone(),
            size_points: template.content_font_size,
            bold: template.content_bold,
            italic: false,
            alignment: template.content_alignment,
            color: body_text_color(template.background_color),
            bulleted: true,
            paragraph_spacing_points: PARAGRAPH_SPACING_POINTS,
            auto_fit: true,
        },
    }
}

/// Resolve the body style for a quote slide: the body style, set in large
/// centered italics without bullets.
pub fn resolve_quote_style(template: &Template) -> TextStyleDirective {
    TextStyleDirective {
        size_points: QUOTE_FONT_SIZE,
        italic: true,
        alignment: Alignment::Center,
        bulleted: false,
        ..resolve_text_style(template, TextRole::Body)
    }
}

fn body_text_color(background: Rgb) -> Rgb {
    if background == Rgb::WHITE {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
