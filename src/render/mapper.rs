//! Mapping format differences to markup.
//!
//! Two strategies implement [`FormatMapper`]: inline style declarations and
//! semantic tags. The exporter picks one per export call via
//! [`mapper_for`], so both share the same traversal.

use crate::model::{BrushStyle, Capitalization, CharFormat, CSS_WEIGHT_FACTOR};

use super::EmissionStrategy;

/// Named font sizes, indexed by relative size level + 1.
const SIZE_NAMES: [&str; 5] = ["small", "medium", "large", "x-large", "xx-large"];

/// Headings matching [`SIZE_NAMES`] entry for entry.
const SIZE_HEADINGS: [Heading; 5] = [
    Heading::H5,
    Heading::H4,
    Heading::H3,
    Heading::H2,
    Heading::H1,
];

/// Table index for a relative size level, if the level is in `[-1, 3]`.
fn size_index(level: i32) -> Option<usize> {
    let index = usize::try_from(level.checked_add(1)?).ok()?;
    (index < SIZE_NAMES.len()).then_some(index)
}

/// Named size for a relative size level, if the level is in `[-1, 3]`.
pub fn size_name(level: i32) -> Option<&'static str> {
    size_index(level).and_then(|index| SIZE_NAMES.get(index).copied())
}

/// Block wrapper chosen from a relative size level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    H1,
    H2,
    H3,
    H4,
    H5,
    Paragraph,
}

impl Heading {
    /// Heading for a relative size level; paragraph when out of range.
    pub fn from_level(level: i32) -> Self {
        size_index(level)
            .and_then(|index| SIZE_HEADINGS.get(index).copied())
            .unwrap_or(Heading::Paragraph)
    }

    /// Opening tag.
    pub fn open_tag(self) -> &'static str {
        match self {
            Heading::H1 => "<h1>",
            Heading::H2 => "<h2>",
            Heading::H3 => "<h3>",
            Heading::H4 => "<h4>",
            Heading::H5 => "<h5>",
            Heading::Paragraph => "<p>",
        }
    }

    /// Closing tag.
    pub fn close_tag(self) -> &'static str {
        match self {
            Heading::H1 => "</h1>",
            Heading::H2 => "</h2>",
            Heading::H3 => "</h3>",
            Heading::H4 => "</h4>",
            Heading::H5 => "</h5>",
            Heading::Paragraph => "</p>",
        }
    }
}

/// Turns a format difference into opening markup.
pub trait FormatMapper {
    /// Strategy implemented by this mapper.
    fn strategy(&self) -> EmissionStrategy;

    /// Append the opening markers for `diff` (taken against `default`) to
    /// `out` and return the closing markers in opening order. The caller
    /// emits them in reverse after the wrapped content.
    fn open_format(
        &self,
        diff: &CharFormat,
        default: &CharFormat,
        out: &mut String,
    ) -> Vec<&'static str>;

    /// Tag of the container wrapped around ordinary paragraphs, if any.
    fn paragraph_tag(&self) -> Option<&'static str>;
}

/// Create the mapper for a strategy.
pub fn mapper_for(strategy: EmissionStrategy) -> Box<dyn FormatMapper> {
    match strategy {
        EmissionStrategy::Attribute => Box::new(StyleAttributeMapper),
        EmissionStrategy::SemanticTag => Box::new(SemanticTagMapper),
    }
}

/// Emits differences as a `<span style="...">` wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleAttributeMapper;

impl StyleAttributeMapper {
    /// Inline style declarations for `diff`, each written as ` name:value;`.
    /// Empty when nothing needs to be emitted.
    pub fn style_declarations(diff: &CharFormat, default: &CharFormat) -> String {
        let mut css = String::new();

        if let Some(pt) = diff
            .font_point_size
            .filter(|pt| pt.floor() != default.font_point_size().floor())
        {
            css.push_str(&format!(" font-size:{}pt;", pt));
        } else if let Some(level) = diff.font_size_adjustment {
            if let Some(name) = size_name(level) {
                css.push_str(&format!(" font-size:{};", name));
            }
        } else if let Some(px) = diff.font_pixel_size {
            css.push_str(&format!(" font-size:{}px;", px));
        }

        if diff.font_weight.is_some() && diff.font_weight() != default.font_weight() {
            css.push_str(&format!(
                " font-weight:{};",
                diff.font_weight() * CSS_WEIGHT_FACTOR
            ));
        }

        if diff.font_italic.is_some() && diff.font_italic() != default.font_italic() {
            let style = if diff.font_italic() { "italic" } else { "normal" };
            css.push_str(&format!(" font-style:{};", style));
        }

        if let Some(decoration) = text_decoration(diff, default) {
            css.push_str(&format!(" text-decoration:{};", decoration));
        }

        let foreground = diff.foreground();
        if diff.foreground.is_some()
            && foreground != default.foreground()
            && foreground.style != BrushStyle::NoBrush
        {
            css.push_str(&format!(" color:{};", foreground.color.css_value()));
        }

        let background = diff.background();
        if diff.background.is_some()
            && background != default.background()
            && background.style == BrushStyle::SolidPattern
        {
            css.push_str(&format!(
                " background-color:{};",
                background.color.css_value()
            ));
        }

        let valign = diff.vertical_alignment();
        if diff.vertical_alignment.is_some() && valign != default.vertical_alignment() {
            if let Some(name) = valign.css_name() {
                css.push_str(&format!(" vertical-align:{};", name));
            }
        }

        match diff.font_capitalization {
            Some(Capitalization::AllUppercase) => css.push_str(" text-transform:uppercase;"),
            Some(Capitalization::AllLowercase) => css.push_str(" text-transform:lowercase;"),
            Some(Capitalization::SmallCaps) => css.push_str(" font-variant:small-caps;"),
            _ => {}
        }

        if let Some(spacing) = diff.font_word_spacing.filter(|s| *s != 0.0) {
            css.push_str(&format!(" word-spacing:{}px;", spacing));
        }

        css
    }
}

/// Combined decoration value: `None` when no decoration differs, `"none"`
/// when every differing decoration is off.
fn text_decoration(diff: &CharFormat, default: &CharFormat) -> Option<String> {
    let mut differs = false;
    let mut active = Vec::new();

    if diff.declares_underline() && diff.underlined() != default.underlined() {
        differs = true;
        if diff.underlined() {
            active.push("underline");
        }
    }
    if diff.font_overline.is_some() && diff.font_overline() != default.font_overline() {
        differs = true;
        if diff.font_overline() {
            active.push("overline");
        }
    }
    if diff.font_strike_out.is_some() && diff.font_strike_out() != default.font_strike_out() {
        differs = true;
        if diff.font_strike_out() {
            active.push("line-through");
        }
    }

    if !differs {
        return None;
    }
    if active.is_empty() {
        Some("none".to_string())
    } else {
        Some(active.join(" "))
    }
}

impl FormatMapper for StyleAttributeMapper {
    fn strategy(&self) -> EmissionStrategy {
        EmissionStrategy::Attribute
    }

    fn open_format(
        &self,
        diff: &CharFormat,
        default: &CharFormat,
        out: &mut String,
    ) -> Vec<&'static str> {
        let css = Self::style_declarations(diff, default);
        if css.is_empty() {
            return Vec::new();
        }
        out.push_str("<span style=\"");
        out.push_str(&css);
        out.push_str("\">");
        vec!["</span>"]
    }

    fn paragraph_tag(&self) -> Option<&'static str> {
        Some("p")
    }
}

/// Emits differences as heading and phrase tags.
///
/// Every run is wrapped in a heading or paragraph element, even when no
/// size level is present and nothing else differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticTagMapper;

impl FormatMapper for SemanticTagMapper {
    fn strategy(&self) -> EmissionStrategy {
        EmissionStrategy::SemanticTag
    }

    fn open_format(
        &self,
        diff: &CharFormat,
        default: &CharFormat,
        out: &mut String,
    ) -> Vec<&'static str> {
        let mut closers = Vec::new();

        let heading = diff
            .font_size_adjustment
            .map(Heading::from_level)
            .unwrap_or(Heading::Paragraph);
        out.push_str(heading.open_tag());
        closers.push(heading.close_tag());

        if diff.font_weight.is_some() && diff.font_weight() != default.font_weight() {
            out.push_str("<strong>");
            closers.push("</strong>");
        }

        if diff.font_italic.is_some() && diff.font_italic() != default.font_italic() {
            out.push_str("<em>");
            closers.push("</em>");
        }

        // TODO: underline has no tag mapping in this strategy yet
        if diff.font_strike_out.is_some()
            && diff.font_strike_out() != default.font_strike_out()
            && diff.font_strike_out()
        {
            out.push_str("<del>");
            closers.push("</del>");
        }

        closers
    }

    fn paragraph_tag(&self) -> Option<&'static str> {
        None
    }
}
