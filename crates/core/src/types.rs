//! Domain types for representing parsed slide content.

use serde::{Deserialize, Serialize};

/// The kind of a parsed slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Title,
    Content,
    Section,
    Image,
    Chart,
    Quote,
}

impl SlideKind {
    /// The slide layout a writer should use for this kind.
    pub fn layout(self) -> SlideLayout {
        match self {
            SlideKind::Title => SlideLayout::Title,
            SlideKind::Content => SlideLayout::TitleAndContent,
            SlideKind::Section => SlideLayout::SectionHeader,
            SlideKind::Image | SlideKind::Chart | SlideKind::Quote => SlideLayout::TitleOnly,
        }
    }
}

/// Standard slide layouts a presentation writer is expected to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    Title,
    TitleAndContent,
    SectionHeader,
    TitleOnly,
}

impl SlideLayout {
    /// Index of the layout in the default slide master.
    pub fn master_index(self) -> usize {
        match self {
            SlideLayout::Title => 0,
            SlideLayout::TitleAndContent => 1,
            SlideLayout::SectionHeader => 2,
            SlideLayout::TitleOnly => 5,
        }
    }
}

/// One line of body text on a content or section slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLine {
    /// Text with any bullet marker stripped.
    pub text: String,

    /// Whether the line was written as a bullet (`-`, `*` or `•`).
    pub bulleted: bool,
}

impl ContentLine {
    /// A line that was introduced by a bullet marker.
    pub fn bullet(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bulleted: true,
        }
    }

    /// A line of plain text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bulleted: false,
        }
    }
}

/// A single parsed slide.
///
/// Each variant carries exactly the fields that make sense for its kind, so a
/// quote can never have bullets and an image always has a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlideRecord {
    /// Opening slide of the deck.
    Title {
        title: String,
        subtitle: Option<String>,
    },

    /// Slide started by a `# heading`.
    Content {
        title: String,
        content: Vec<ContentLine>,
    },

    /// Slide started by a `## heading`.
    Section {
        title: String,
        content: Vec<ContentLine>,
    },

    /// Slide emitted by a `![alt](source)` line.
    Image {
        title: String,
        alt: String,
        image_source: String,
    },

    /// Slide emitted by a `@chart {...}` line. The spec stays unparsed until
    /// the chart is actually planned.
    Chart { title: String, chart_spec: String },

    /// Slide emitted by a `> quote` line.
    Quote { quote_text: String },
}

impl SlideRecord {
    /// The kind of this slide.
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideRecord::Title { .. } => SlideKind::Title,
            SlideRecord::Content { .. } => SlideKind::Content,
            SlideRecord::Section { .. } => SlideKind::Section,
            SlideRecord::Image { .. } => SlideKind::Image,
            SlideRecord::Chart { .. } => SlideKind::Chart,
            SlideRecord::Quote { .. } => SlideKind::Quote,
        }
    }

    /// The slide's own title, if its kind has one.
    pub fn title(&self) -> Option<&str> {
        match self {
            SlideRecord::Title { title, .. }
            | SlideRecord::Content { title, .. }
            | SlideRecord::Section { title, .. }
            | SlideRecord::Image { title, .. }
            | SlideRecord::Chart { title, .. } => Some(title),
            SlideRecord::Quote { .. } => None,
        }
    }

    /// Body lines for content and section slides; empty for everything else.
    pub fn content(&self) -> &[ContentLine] {
        match self {
            SlideRecord::Content { content, .. } | SlideRecord::Section { content, .. } => {
                content
            }
            _ => &[],
        }
    }
}
