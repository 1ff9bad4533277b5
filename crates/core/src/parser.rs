//! Markdown-like text to slide record parser.
//!
//! Input is read one line at a time. Each trimmed line is classified by the
//! first matching directive:
//!
//! | Line                  | Effect                                         |
//! |-----------------------|------------------------------------------------|
//! | (blank)               | ignored                                        |
//! | `# Title`             | starts a content slide                         |
//! | `## Title`            | starts a section slide                         |
//! | `![alt](source)`      | emits an image slide                           |
//! | `@chart {spec}`       | emits a chart slide                            |
//! | `> text`              | emits a quote slide                            |
//! | `- text` `* text` `• text` | adds a bullet to the open slide           |
//! | anything else         | adds a plain line to the open slide            |
//!
//! A `# Title` on the very first line becomes the deck's title slide, and a
//! `## Subtitle` right after it becomes that slide's subtitle.
//!
//! Parsing never fails. A line that looks like a directive but does not fit
//! its pattern (say `@chart {` with no closing brace) is kept as plain text.

use crate::types::{ContentLine, SlideKind, SlideRecord};
use regex::Regex;
use std::sync::LazyLock;

/// Title given to an image slide emitted before any titled slide is open.
pub const IMAGE_PLACEHOLDER_TITLE: &str = "Image Slide";

/// Title given to a chart slide emitted before any titled slide is open.
pub const CHART_PLACEHOLDER_TITLE: &str = "Chart Slide";

/// UTF-8 byte order mark. `str::trim` does not remove it.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// `# Title`, or a bare `#` which yields an empty title.
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:\s+(.*))?$").unwrap());

/// `## Title`, or a bare `##`.
static SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##(?:\s+(.*))?$").unwrap());

/// `![alt](source)`. Anything after the last `)` is ignored.
static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[(.*)\]\((.*)\)").unwrap());

/// `@chart {spec}` with a non-empty spec.
static CHART_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@chart\s*\{(.+)\}").unwrap());

static QUOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^> (.+)").unwrap());

static BULLET_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•] (.+)").unwrap());

/// What a single trimmed input line means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive<'a> {
    Blank,
    Heading(&'a str),
    Section(&'a str),
    Image { alt: &'a str, source: &'a str },
    Chart(&'a str),
    Quote(&'a str),
    Bullet(&'a str),
    Text(&'a str),
}

/// Classify a trimmed line. First match wins, in table order.
fn classify_line(line: &str) -> Directive<'_> {
    if line.is_empty() {
        return Directive::Blank;
    }

    if let Some(caps) = HEADING_REGEX.captures(line) {
        return Directive::Heading(caps.get(1).map_or("", |m| m.as_str().trim()));
    }

    if let Some(caps) = SECTION_REGEX.captures(line) {
        return Directive::Section(caps.get(1).map_or("", |m| m.as_str().trim()));
    }

    if let Some(caps) = IMAGE_REGEX.captures(line) {
        return Directive::Image {
            alt: caps.get(1).map_or("", |m| m.as_str().trim()),
            source: caps.get(2).map_or("", |m| m.as_str().trim()),
        };
    }

    if let Some(caps) = CHART_REGEX.captures(line) {
        return Directive::Chart(caps.get(1).map_or("", |m| m.as_str()));
    }

    if let Some(caps) = QUOTE_REGEX.captures(line) {
        return Directive::Quote(caps.get(1).map_or("", |m| m.as_str().trim()));
    }

    if let Some(caps) = BULLET_REGEX.captures(line) {
        return Directive::Bullet(caps.get(1).map_or("", |m| m.as_str().trim()));
    }

    Directive::Text(line)
}

/// A content or section slide that is still collecting lines.
#[derive(Debug)]
struct OpenSlide {
    kind: SlideKind,
    title: String,
    content: Vec<ContentLine>,
}

impl OpenSlide {
    fn new(kind: SlideKind, title: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            content: Vec::new(),
        }
    }

    fn into_record(self) -> SlideRecord {
        match self.kind {
            SlideKind::Section => SlideRecord::Section {
                title: self.title,
                content: self.content,
            },
            _ => SlideRecord::Content {
                title: self.title,
                content: self.content,
            },
        }
    }
}

/// Parser for the slide description language.
#[derive(Debug, Clone, Default)]
pub struct SlideParser;

impl SlideParser {
    /// Create a new slide parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse text into slide records, in input order.
    ///
    /// Blank input yields an empty list. Image, chart and quote lines are
    /// emitted as their own slides right where they appear; they do not close
    /// the content or section slide that is collecting lines around them.
    /// A leading byte order mark is ignored.
    pub fn parse(&self, text: &str) -> Vec<SlideRecord> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let mut slides = Vec::new();
        let mut lines = text
            .lines()
            .map(str::trim)
            .skip_while(|line| line.is_empty())
            .peekable();

        if let Some(title_slide) = Self::take_title_slide(&mut lines) {
            slides.push(title_slide);
        }

        let mut current: Option<OpenSlide> = None;

        for line in lines {
            match classify_line(line) {
                Directive::Blank => {}
                Directive::Heading(title) => {
                    Self::close(current.take(), &mut slides);
                    current = Some(OpenSlide::new(SlideKind::Content, title));
                }
                Directive::Section(title) => {
                    Self::close(current.take(), &mut slides);
                    current = Some(OpenSlide::new(SlideKind::Section, title));
                }
                Directive::Image { alt, source } => {
                    slides.push(SlideRecord::Image {
                        title: inherited_title(current.as_ref(), IMAGE_PLACEHOLDER_TITLE),
                        alt: alt.to_string(),
                        image_source: source.to_string(),
                    });
                }
                Directive::Chart(spec) => {
                    slides.push(SlideRecord::Chart {
                        title: inherited_title(current.as_ref(), CHART_PLACEHOLDER_TITLE),
                        chart_spec: spec.to_string(),
                    });
                }
                Directive::Quote(text) => {
                    slides.push(SlideRecord::Quote {
                        quote_text: text.to_string(),
                    });
                }
                Directive::Bullet(text) => {
                    Self::append(current.as_mut(), ContentLine::bullet(text));
                }
                Directive::Text(text) => {
                    Self::append(current.as_mut(), ContentLine::plain(text));
                }
            }
        }

        Self::close(current, &mut slides);

        log::debug!("Parsed {} slides", slides.len());
        slides
    }

    /// Consume a leading `# Title` (and an optional `## Subtitle` after it).
    fn take_title_slide<'a, I>(lines: &mut std::iter::Peekable<I>) -> Option<SlideRecord>
    where
        I: Iterator<Item = &'a str>,
    {
        let title = match lines.peek().map(|line| classify_line(*line)) {
            Some(Directive::Heading(title)) if !title.is_empty() => title.to_string(),
            _ => return None,
        };
        lines.next();

        let subtitle = match lines.peek().map(|line| classify_line(*line)) {
            Some(Directive::Section(subtitle)) if !subtitle.is_empty() => {
                Some(subtitle.to_string())
            }
            _ => None,
        };
        if subtitle.is_some() {
            lines.next();
        }

        Some(SlideRecord::Title { title, subtitle })
    }

    /// Push the open slide to the output if it has a title.
    fn close(open: Option<OpenSlide>, slides: &mut Vec<SlideRecord>) {
        match open {
            Some(slide) if !slide.title.is_empty() => slides.push(slide.into_record()),
            Some(slide) => {
                log::debug!(
                    "Discarding untitled slide with {} content lines",
                    slide.content.len()
                );
            }
            None => {}
        }
    }

    fn append(open: Option<&mut OpenSlide>, line: ContentLine) {
        match open {
            Some(slide) => slide.content.push(line),
            None => log::debug!("Ignoring line before the first heading: {}", line.text),
        }
    }
}

/// Title for an inline image or chart slide: the open slide's title when it
/// has one, otherwise the placeholder.
fn inherited_title(open: Option<&OpenSlide>, placeholder: &str) -> String {
    open.map(|slide| slide.title.as_str())
        .filter(|title| !title.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

/// Parse text into slide records with a default [`SlideParser`].
pub fn parse(text: &str) -> Vec<SlideRecord> {
    SlideParser::new().parse(text)
}
