//! Visual templates: named bundles of colors, fonts and alignment.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Allowed title font sizes, in points.
pub const TITLE_FONT_SIZE_RANGE: RangeInclusive<u32> = 10..=100;

/// Allowed body font sizes, in points.
pub const CONTENT_FONT_SIZE_RANGE: RangeInclusive<u32> = 8..=72;

/// An RGB color. Serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `#RRGGBB` or `RRGGBB` (hex digits in either case).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTemplate(format!("invalid color '{}', expected #RRGGBB", s));
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Decorative shape drawn behind slide content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorativeShape {
    Rectangle,
    Oval,
    Trapezoid,
}

/// Two-stop background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: Rgb,
    pub end: Rgb,
}

impl Gradient {
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }
}

/// A named style bundle applied uniformly to every slide of a deck.
///
/// Templates are plain values. Customizing one produces a new template via
/// [`Template::with_overrides`]; nothing mutates a template in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub theme_color: Rgb,
    pub background_color: Rgb,
    pub font_family: String,
    pub title_font_size: u32,
    pub content_font_size: u32,
    #[serde(default)]
    pub title_alignment: Alignment,
    #[serde(default)]
    pub content_alignment: Alignment,
    #[serde(default)]
    pub title_bold: bool,
    #[serde(default)]
    pub content_bold: bool,
    /// When set, replaces the solid background fill.
    #[serde(default)]
    pub gradient: Option<Gradient>,
    #[serde(default)]
    pub decorative_shape: Option<DecorativeShape>,
}

impl Template {
    /// Check that the template can be rendered.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidTemplate("template name is empty".to_string()));
        }
        if self.font_family.trim().is_empty() {
            return Err(Error::InvalidTemplate(format!(
                "{}: font family is empty",
                self.name
            )));
        }
        if !TITLE_FONT_SIZE_RANGE.contains(&self.title_font_size) {
            return Err(Error::InvalidTemplate(format!(
                "{}: title font size {} is outside {}-{} pt",
                self.name,
                self.title_font_size,
                TITLE_FONT_SIZE_RANGE.start(),
                TITLE_FONT_SIZE_RANGE.end()
            )));
        }
        if !CONTENT_FONT_SIZE_RANGE.contains(&self.content_font_size) {
            return Err(Error::InvalidTemplate(format!(
                "{}: content font size {} is outside {}-{} pt",
                self.name,
                self.content_font_size,
                CONTENT_FONT_SIZE_RANGE.start(),
                CONTENT_FONT_SIZE_RANGE.end()
            )));
        }
        Ok(())
    }

    /// Build a customized copy of this template.
    ///
    /// Only the attributes set in `overrides` change; the result keeps this
    /// template's name. Fails if the customized template is out of range.
    pub fn with_overrides(&self, overrides: &TemplateOverrides) -> Result<Template> {
        let mut template = self.clone();

        if let Some(font) = &overrides.font_family {
            template.font_family = font.clone();
        }
        if let Some(size) = overrides.title_font_size {
            template.title_font_size = size;
        }
        if let Some(size) = overrides.content_font_size {
            template.content_font_size = size;
        }
        if let Some(color) = overrides.theme_color {
            template.theme_color = color;
        }
        if let Some(color) = overrides.background_color {
            template.background_color = color;
        }
        if let Some(bold) = overrides.title_bold {
            template.title_bold = bold;
        }
        if let Some(bold) = overrides.content_bold {
            template.content_bold = bold;
        }

        template.validate()?;
        Ok(template)
    }
}

/// User customizations to apply on top of a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOverrides {
    pub font_family: Option<String>,
    pub title_font_size: Option<u32>,
    pub content_font_size: Option<u32>,
    pub theme_color: Option<Rgb>,
    pub background_color: Option<Rgb>,
    pub title_bold: Option<bool>,
    pub content_bold: Option<bool>,
}

impl TemplateOverrides {
    /// Check if no attribute is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Template {
        Template {
            name: "Sample".to_string(),
            theme_color: Rgb::new(0, 102, 204),
            background_color: Rgb::WHITE,
            font_family: "Calibri".to_string(),
            title_font_size: 44,
            content_font_size: 24,
            title_alignment: Alignment::Center,
            content_alignment: Alignment::Left,
            title_bold: true,
            content_bold: false,
            gradient: None,
            decorative_shape: None,
        }
    }

    #[test]
    fn test_rgb_display_and_parse() {
        let color = Rgb::new(0, 102, 204);
        assert_eq!(color.to_string(), "#0066CC");
        assert_eq!("#0066cc".parse::<Rgb>().unwrap(), color);
        assert_eq!("0066CC".parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_rgb_rejects_bad_input() {
        assert!("#0066C".parse::<Rgb>().is_err());
        assert!("#GG0000".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
        assert!("#ÄÄÄ".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_template_json_roundtrip_defaults() {
        let json = r##"{
            "name": "Plain",
            "theme_color": "#112233",
            "background_color": "#FFFFFF",
            "font_family": "Arial",
            "title_font_size": 40,
            "content_font_size": 20
        }"##;
        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.theme_color, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(template.title_alignment, Alignment::Left);
        assert!(!template.title_bold);
        assert!(template.gradient.is_none());
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_with_overrides_is_a_new_value() {
        let base = sample();
        let overrides = TemplateOverrides {
            font_family: Some("Georgia".to_string()),
            content_font_size: Some(30),
            background_color: Some(Rgb::BLACK),
            content_bold: Some(true),
            ..Default::default()
        };

        let custom = base.with_overrides(&overrides).unwrap();
        assert_eq!(custom.name, "Sample");
        assert_eq!(custom.font_family, "Georgia");
        assert_eq!(custom.content_font_size, 30);
        assert_eq!(custom.background_color, Rgb::BLACK);
        assert!(custom.content_bold);
        assert_eq!(custom.title_font_size, 44);

        // The base template is untouched.
        assert_eq!(base, sample());
    }

    #[test]
    fn test_empty_overrides_are_identity() {
        let overrides = TemplateOverrides::default();
        assert!(overrides.is_empty());
        assert_eq!(sample().with_overrides(&overrides).unwrap(), sample());
    }

    #[test]
    fn test_with_overrides_rejects_out_of_range_sizes() {
        let too_big = TemplateOverrides {
            title_font_size: Some(101),
            ..Default::default()
        };
        assert!(matches!(
            sample().with_overrides(&too_big),
            Err(Error::InvalidTemplate(_))
        ));

        let too_small = TemplateOverrides {
            content_font_size: Some(0),
            ..Default::default()
        };
        assert!(sample().with_overrides(&too_small).is_err());
    }
}
