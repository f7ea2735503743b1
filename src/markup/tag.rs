//! The `<color ...>` tag dialect embedded in entry text.
//!
//! Tags match non-greedily and never nest; adjacent tags resolve
//! independently. Parsing is total — unknown attribute keys, malformed
//! tokens, and unparsable color values degrade to the default style
//! instead of erroring.

use super::Color;
use regex::Regex;
use std::sync::LazyLock;

/// One tag occurrence: `<color ATTRS>CONTENT</color>`, element name
/// case-insensitive, content non-greedy.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<color\s(?<attrs>.*?)>(?<content>.*?)</color>").expect("Invalid tag regex")
});

/// Attribute tokens are whitespace-separated `key=value` pairs.
static ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?<key>\w+)=(?<value>#?\w+)").expect("Invalid attribute regex"));

/// Foreground/background pair extracted from a tag's attributes; `None`
/// means the renderer's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

/// Parsed runs of a message, separating content from style so one parse
/// serves both ANSI-capable and plain-text consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any tag, emitted under the default style.
    Plain(String),
    /// A tag's content together with its parsed style.
    Styled(String, Style),
}

impl Segment {
    /// The raw text, without ANSI escapes inflating the length.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(t) | Self::Styled(t, _) => t,
        }
    }

    /// ANSI rendering; a styled segment with neither color resolved is
    /// indistinguishable from plain text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Plain(t) => t.clone(),
            Self::Styled(t, style) => {
                let mut escapes = String::new();
                if let Some(fg) = style.fg {
                    escapes.push_str(&fg.fg_ansi());
                }
                if let Some(bg) = style.bg {
                    escapes.push_str(&bg.bg_ansi());
                }
                if escapes.is_empty() {
                    return t.clone();
                }
                format!("{escapes}{t}{reset}", reset = Color::RESET)
            }
        }
    }
}

/// Splits a message into segments, left to right: text before, between, and
/// after tag matches becomes plain runs; each match becomes a styled run.
#[must_use]
pub fn parse(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in TAG_REGEX.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };

        if whole.start() > cursor {
            segments.push(Segment::Plain(text[cursor..whole.start()].to_string()));
        }

        let attrs = caps.name("attrs").map_or("", |m| m.as_str());
        let content = caps.name("content").map_or("", |m| m.as_str());
        segments.push(Segment::Styled(content.to_string(), parse_attrs(attrs)));

        cursor = whole.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }

    segments
}

/// Replaces every matched tag with its content in one left-to-right pass.
/// The pass does not recurse into content, so stripping already-stripped
/// text is a no-op.
#[must_use]
pub fn strip(text: &str) -> String {
    TAG_REGEX.replace_all(text, "$content").into_owned()
}

/// Terminal-facing rendering — the styled counterpart of [`render_plain`].
#[must_use]
pub fn render(segments: &[Segment]) -> String {
    segments.iter().map(Segment::render).collect()
}

/// Content only; file and JSONL sinks must not carry ANSI escapes.
#[must_use]
pub fn render_plain(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

fn parse_attrs(attrs: &str) -> Style {
    let mut style = Style::default();

    for caps in ATTR_REGEX.captures_iter(attrs) {
        let value = caps.name("value").map_or("", |m| m.as_str());
        match caps
            .name("key")
            .map_or("", |m| m.as_str())
            .to_lowercase()
            .as_str()
        {
            "fg" => style.fg = resolve_color(value),
            "bg" => style.bg = resolve_color(value),
            // Unknown keys are not an error
            _ => {}
        }
    }

    style
}

fn resolve_color(value: &str) -> Option<Color> {
    if value.starts_with('#') {
        Color::from_hex(value)
    } else {
        Color::from_name(value)
    }
}
