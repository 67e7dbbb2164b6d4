//! Character formats, fonts, colors and the structural format diff.
//!
//! A [`CharFormat`] only records the properties explicitly declared at a
//! node. Every property also has a resolved getter that falls back to the
//! property default, so callers can compare effective values without caring
//! whether a value was inherited.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normal font weight on the internal scale.
pub const WEIGHT_NORMAL: i32 = 50;

/// Bold font weight on the internal scale.
pub const WEIGHT_BOLD: i32 = 75;

/// Factor converting the internal weight scale to CSS weights.
pub const CSS_WEIGHT_FACTOR: i32 = 8;

macro_rules! char_format {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty = $default:expr ),* $(,)?) => {
        /// Character-level formatting overrides declared at a node.
        ///
        /// Undeclared properties are `None` and mean "inherit".
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct CharFormat {
            $(
                $(#[$meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl CharFormat {
            $(
                /// Resolved value: the declared value or the property default.
                pub fn $field(&self) -> $ty {
                    self.$field.clone().unwrap_or_else(|| $default)
                }
            )*

            /// Merge `other` over `self`; properties declared in `other` win.
            pub fn merge(&mut self, other: &CharFormat) {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field.clone();
                    }
                )*
            }

            /// Properties declared in `target` whose value differs from the
            /// value declared here.
            pub fn difference(&self, target: &CharFormat) -> CharFormat {
                let mut diff = CharFormat::default();
                $(
                    if target.$field.is_some() && target.$field != self.$field {
                        diff.$field = target.$field.clone();
                    }
                )*
                diff
            }

            /// Check if no property is declared.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            /// Number of declared properties.
            pub fn declared_count(&self) -> usize {
                0 $( + usize::from(self.$field.is_some()) )*
            }
        }
    };
}

char_format! {
    /// Font family name
    font_family: String = String::new(),
    /// Font size in points
    font_point_size: f64 = 0.0,
    /// Relative size level, 0 being the default size
    font_size_adjustment: i32 = 0,
    /// Font size in pixels
    font_pixel_size: i32 = 0,
    /// Weight on the internal scale (normal 50, bold 75)
    font_weight: i32 = WEIGHT_NORMAL,
    /// Italic flag
    font_italic: bool = false,
    /// Underline flag
    font_underline: bool = false,
    /// Underline style; takes precedence over the underline flag
    underline_style: UnderlineStyle = UnderlineStyle::NoUnderline,
    /// Overline flag
    font_overline: bool = false,
    /// Strike-out flag
    font_strike_out: bool = false,
    /// Capitalization mode
    font_capitalization: Capitalization = Capitalization::MixedCase,
    /// Extra spacing between words, in pixels
    font_word_spacing: f64 = 0.0,
    /// Text brush
    foreground: Brush = Brush::none(),
    /// Background brush
    background: Brush = Brush::none(),
    /// Vertical alignment relative to the baseline
    vertical_alignment: VerticalAlignment = VerticalAlignment::Normal,
    /// Whether the run is an anchor
    anchor: bool = false,
    /// Anchor destination
    anchor_href: String = String::new(),
    /// Anchor name
    anchor_name: String = String::new(),
}

impl CharFormat {
    /// Create an empty format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a format declaring every property the font carries.
    pub fn from_font(font: &Font) -> Self {
        let mut format = Self {
            font_family: Some(font.family.clone()),
            font_weight: Some(font.weight),
            font_italic: Some(font.italic),
            font_underline: Some(font.underline),
            font_overline: Some(font.overline),
            font_strike_out: Some(font.strike_out),
            font_capitalization: Some(font.capitalization),
            font_word_spacing: Some(font.word_spacing),
            ..Self::default()
        };
        match font.size {
            FontSize::Points(pt) => format.font_point_size = Some(pt),
            FontSize::Pixels(px) => format.font_pixel_size = Some(px),
        }
        format
    }

    /// The seed default used by the exporter.
    ///
    /// Decorations are cleared since the default font alone cannot express
    /// "off" for them in the emitted markup.
    pub fn export_default(font: &Font) -> Self {
        let mut format = Self::from_font(font);
        format.font_underline = None;
        format.font_overline = None;
        format.font_strike_out = None;
        format.underline_style = None;
        format
    }

    /// Bold text.
    pub fn bold() -> Self {
        Self {
            font_weight: Some(WEIGHT_BOLD),
            ..Self::default()
        }
    }

    /// Italic text.
    pub fn italic() -> Self {
        Self {
            font_italic: Some(true),
            ..Self::default()
        }
    }

    /// Text at a relative size level.
    pub fn sized(level: i32) -> Self {
        Self {
            font_size_adjustment: Some(level),
            ..Self::default()
        }
    }

    /// Hyperlink to `href`.
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            anchor: Some(true),
            anchor_href: Some(href.into()),
            ..Self::default()
        }
    }

    /// Named anchor.
    pub fn named_anchor(name: impl Into<String>) -> Self {
        Self {
            anchor: Some(true),
            anchor_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Effective underline state.
    pub fn underlined(&self) -> bool {
        match self.underline_style {
            Some(style) => style != UnderlineStyle::NoUnderline,
            None => self.font_underline(),
        }
    }

    /// Check if underline is declared through either property.
    pub fn declares_underline(&self) -> bool {
        self.font_underline.is_some() || self.underline_style.is_some()
    }

    /// Check if the run is an anchor.
    pub fn is_anchor(&self) -> bool {
        self.anchor()
    }
}

/// Diff of `to` against the ambient format `from`.
pub fn format_difference(from: &CharFormat, to: &CharFormat) -> CharFormat {
    from.difference(to)
}

/// Font size in one of its two absolute units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    /// Size in points
    Points(f64),
    /// Size in pixels
    Pixels(i32),
}

/// A document's default font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// Family name
    pub family: String,
    /// Size
    pub size: FontSize,
    /// Weight on the internal scale
    pub weight: i32,
    /// Italic flag
    pub italic: bool,
    /// Underline flag
    pub underline: bool,
    /// Overline flag
    pub overline: bool,
    /// Strike-out flag
    pub strike_out: bool,
    /// Capitalization
    pub capitalization: Capitalization,
    /// Word spacing in pixels
    pub word_spacing: f64,
}

impl Font {
    /// Create a font with the given family and point size.
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self {
            family: family.into(),
            size: FontSize::Points(point_size),
            ..Self::default()
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: FontSize::Points(12.0),
            weight: WEIGHT_NORMAL,
            italic: false,
            underline: false,
            overline: false,
            strike_out: false,
            capitalization: Capitalization::MixedCase,
            word_spacing: 0.0,
        }
    }
}

/// Underline style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnderlineStyle {
    #[default]
    NoUnderline,
    Single,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    Wave,
}

/// Capitalization mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capitalization {
    #[default]
    MixedCase,
    AllUppercase,
    AllLowercase,
    SmallCaps,
    Capitalize,
}

/// Vertical alignment of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    #[default]
    Normal,
    SuperScript,
    SubScript,
    Middle,
    Top,
    Bottom,
    Baseline,
}

impl VerticalAlignment {
    /// CSS keyword, if the alignment has one.
    pub fn css_name(self) -> Option<&'static str> {
        match self {
            VerticalAlignment::SubScript => Some("sub"),
            VerticalAlignment::SuperScript => Some("super"),
            VerticalAlignment::Middle => Some("middle"),
            VerticalAlignment::Top => Some("top"),
            VerticalAlignment::Bottom => Some("bottom"),
            VerticalAlignment::Normal | VerticalAlignment::Baseline => None,
        }
    }
}

/// Fill pattern of a brush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushStyle {
    #[default]
    NoBrush,
    SolidPattern,
    Dense,
    Horizontal,
    Vertical,
    Cross,
    Gradient,
    Texture,
}

/// A color plus fill pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    /// Fill pattern
    #[serde(default)]
    pub style: BrushStyle,
    /// Color
    pub color: Color,
}

impl Brush {
    /// The empty brush.
    pub const fn none() -> Self {
        Self {
            style: BrushStyle::NoBrush,
            color: Color::BLACK,
        }
    }

    /// A solid brush of the given color.
    pub const fn solid(color: Color) -> Self {
        Self {
            style: BrushStyle::SolidPattern,
            color,
        }
    }
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color value: `#rrggbb`, or `rgba(...)` when translucent.
    pub fn css_value(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = f64::from(self.a) / 255.0;
            format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with '#': {}", s))?;
        if !hex.is_ascii() {
            return Err(format!("Invalid color: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("Invalid color: {}", s))
        };
        match hex.len() {
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color: {}", s)),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_with_self_is_empty() {
        let format = CharFormat {
            font_weight: Some(WEIGHT_BOLD),
            font_italic: Some(true),
            foreground: Some(Brush::solid(Color::rgb(255, 0, 0))),
            ..Default::default()
        };
        assert!(format.difference(&format).is_empty());
    }

    #[test]
    fn test_difference_ignores_properties_only_in_from() {
        let from = CharFormat::bold();
        let to = CharFormat::italic();
        let diff = format_difference(&from, &to);
        assert_eq!(diff.font_italic, Some(true));
        assert_eq!(diff.font_weight, None);
        assert_eq!(diff.declared_count(), 1);
    }

    #[test]
    fn test_difference_keeps_value_undeclared_in_from() {
        let from = CharFormat::default();
        let to = CharFormat::sized(0);
        let diff = format_difference(&from, &to);
        assert_eq!(diff.font_size_adjustment, Some(0));
    }

    #[test]
    fn test_merge_child_wins() {
        let mut base = CharFormat::bold();
        base.font_italic = Some(false);
        base.merge(&CharFormat::italic());
        assert_eq!(base.font_weight(), WEIGHT_BOLD);
        assert!(base.font_italic());
    }

    #[test]
    fn test_resolved_defaults() {
        let format = CharFormat::new();
        assert_eq!(format.font_weight(), WEIGHT_NORMAL);
        assert!(!format.font_italic());
        assert_eq!(format.foreground().style, BrushStyle::NoBrush);
        assert!(format.is_empty());
    }

    #[test]
    fn test_underline_style_precedence() {
        let format = CharFormat {
            font_underline: Some(true),
            underline_style: Some(UnderlineStyle::NoUnderline),
            ..Default::default()
        };
        assert!(!format.underlined());
        assert!(format.declares_underline());
    }

    #[test]
    fn test_export_default_clears_decorations() {
        let font = Font {
            underline: true,
            ..Font::default()
        };
        let seed = CharFormat::export_default(&font);
        assert!(seed.font_underline.is_none());
        assert!(seed.font_overline.is_none());
        assert!(seed.font_strike_out.is_none());
        assert_eq!(seed.font_point_size, Some(12.0));
        assert_eq!(seed.font_family.as_deref(), Some("sans-serif"));
    }

    #[test]
    fn test_color_parse_and_css() {
        let red: Color = "#ff0000".parse().unwrap();
        assert_eq!(red, Color::rgb(255, 0, 0));
        assert_eq!(red.css_value(), "#ff0000");

        let short: Color = "#0f0".parse().unwrap();
        assert_eq!(short, Color::rgb(0, 255, 0));

        let translucent: Color = "#00000000".parse().unwrap();
        assert_eq!(translucent.css_value(), "rgba(0,0,0,0)");

        assert!("red".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
    }
}
