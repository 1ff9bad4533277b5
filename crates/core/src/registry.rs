//! The named template catalog.

use crate::error::{Error, Result};
use crate::template::{Alignment, DecorativeShape, Gradient, Rgb, Template, TemplateOverrides};
use std::io::Read;

/// Template used when the caller does not pick one.
pub const DEFAULT_TEMPLATE: &str = "Elegant Blue";

/// An ordered catalog of templates, looked up by name.
///
/// The registry is an ordinary value: build one at startup and pass it by
/// reference to whatever needs lookups. Order is registration order, which is
/// the order templates are offered to users.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in templates.
    pub fn builtin() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }

    /// Add a template, replacing any existing template with the same name.
    pub fn register(&mut self, template: Template) -> Result<()> {
        template.validate()?;

        match self.templates.iter_mut().find(|t| t.name == template.name) {
            Some(existing) => {
                log::debug!("Replacing template '{}'", template.name);
                *existing = template;
            }
            None => self.templates.push(template),
        }
        Ok(())
    }

    /// Look up a template by exact name.
    pub fn get(&self, name: &str) -> Result<&Template> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| Error::TemplateNotFound(name.to_string()))
    }

    /// Replace the named template with a customized copy and return it.
    ///
    /// The registry is left unchanged if the name is unknown or the
    /// customization is invalid. Callers sharing a registry across threads
    /// must serialize this against lookups of the same name.
    pub fn customize(&mut self, name: &str, overrides: &TemplateOverrides) -> Result<&Template> {
        let index = self
            .templates
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| Error::TemplateNotFound(name.to_string()))?;

        let customized = self.templates[index].with_overrides(overrides)?;
        self.templates[index] = customized;
        Ok(&self.templates[index])
    }

    /// Template names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Register every template from a JSON array of template definitions.
    ///
    /// All definitions are validated before any is registered, so a bad file
    /// leaves the registry as it was. Returns how many were loaded.
    pub fn load_json<R: Read>(&mut self, reader: R) -> Result<usize> {
        let templates: Vec<Template> = serde_json::from_reader(reader)?;
        for template in &templates {
            template.validate()?;
        }

        let count = templates.len();
        for template in templates {
            self.register(template)?;
        }
        Ok(count)
    }
}

/// The built-in catalog.
fn builtin_templates() -> Vec<Template> {
    vec![
        preset(
            "Elegant Blue",
            Rgb::new(0, 102, 204),
            Rgb::WHITE,
            "Calibri",
            (44, 24),
            (Alignment::Center, true),
            Some(Gradient::new(Rgb::new(0, 102, 204), Rgb::new(204, 229, 255))),
            None,
        ),
        preset(
            "Modern Gray",
            Rgb::new(34, 34, 34),
            Rgb::WHITE,
            "Arial",
            (40, 22),
            (Alignment::Left, true),
            Some(Gradient::new(Rgb::new(34, 34, 34), Rgb::new(102, 102, 102))),
            None,
        ),
        preset(
            "Vibrant Green",
            Rgb::new(0, 153, 76),
            Rgb::new(240, 255, 240),
            "Verdana",
            (42, 20),
            (Alignment::Left, true),
            Some(Gradient::new(Rgb::new(0, 153, 76), Rgb::new(144, 238, 144))),
            None,
        ),
        preset(
            "Creative Purple",
            Rgb::new(102, 0, 204),
            Rgb::new(245, 245, 245),
            "Helvetica",
            (46, 22),
            (Alignment::Center, true),
            Some(Gradient::new(Rgb::new(102, 0, 204), Rgb::new(204, 153, 255))),
            None,
        ),
        preset(
            "Sleek Black",
            Rgb::BLACK,
            Rgb::new(245, 245, 245),
            "Tahoma",
            (48, 24),
            (Alignment::Left, false),
            None,
            Some(DecorativeShape::Rectangle),
        ),
        preset(
            "Sunny Yellow",
            Rgb::new(255, 204, 0),
            Rgb::new(255, 255, 224),
            "Century Gothic",
            (40, 20),
            (Alignment::Left, true),
            Some(Gradient::new(Rgb::new(255, 204, 0), Rgb::new(255, 255, 224))),
            None,
        ),
        preset(
            "Ocean Teal",
            Rgb::new(0, 128, 128),
            Rgb::new(224, 255, 255),
            "Calibri Light",
            (44, 22),
            (Alignment::Center, true),
            Some(Gradient::new(Rgb::new(0, 128, 128), Rgb::new(175, 238, 238))),
            None,
        ),
        preset(
            "Minimalist White",
            Rgb::WHITE,
            Rgb::new(245, 245, 245),
            "Segoe UI",
            (42, 20),
            (Alignment::Left, false),
            None,
            Some(DecorativeShape::Oval),
        ),
    ]
}

/// Built-in templates all use left-aligned, regular-weight body text.
#[allow(clippy::too_many_arguments)]
fn preset(
    name: &str,
    theme_color: Rgb,
    background_color: Rgb,
    font_family: &str,
    (title_font_size, content_font_size): (u32, u32),
    (title_alignment, title_bold): (Alignment, bool),
    gradient: Option<Gradient>,
    decorative_shape: Option<DecorativeShape>,
) -> Template {
    Template {
        name: name.to_string(),
        theme_color,
        background_color,
        font_family: font_family.to_string(),
        title_font_size,
        content_font_size,
        title_alignment,
        content_alignment: Alignment::Left,
        title_bold,
        content_bold: false,
        gradient,
        decorative_shape,
    }
}
