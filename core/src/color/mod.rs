//! Color model
//!
//! Parsing of the color notations accepted in gauge configs, hex conversion,
//! dedup keys, text contrast and severity blending. Conversions never panic:
//! anything unparseable comes back as `None`.

mod keywords;
mod palette;

pub use palette::{PALETTE, palette_color};

use gauge_types::{Color, CssColor, SeverityLevel};

use crate::theme::ThemeLookup;

use keywords::KEYWORDS;

pub const BLACK: Color = [0, 0, 0, 255];
pub const WHITE: Color = [255, 255, 255, 255];

/// Limit on chained `var()` references
const MAX_VAR_DEPTH: usize = 8;

/// A color as handed to [`to_rgb`] / [`to_hex`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput<'a> {
    Rgb(Color),
    Css(&'a str),
}

impl<'a> From<&'a CssColor> for ColorInput<'a> {
    fn from(color: &'a CssColor) -> Self {
        Self::Css(color.as_str())
    }
}

impl From<Color> for ColorInput<'_> {
    fn from(color: Color) -> Self {
        Self::Rgb(color)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve any supported notation to RGBA bytes.
pub fn to_rgb<'a>(input: impl Into<ColorInput<'a>>, theme: &dyn ThemeLookup) -> Option<Color> {
    match input.into() {
        ColorInput::Rgb(color) => Some(color),
        ColorInput::Css(text) => parse_css(text, theme, 0),
    }
}

/// Tuple to `#RRGGBB` (uppercase); CSS text passes through untouched.
pub fn to_hex<'a>(input: impl Into<ColorInput<'a>>) -> String {
    match input.into() {
        ColorInput::Rgb([r, g, b, _]) => rgb_to_hex(r as f64, g as f64, b as f64),
        ColorInput::Css(text) => text.to_string(),
    }
}

/// Hex string from loose channel values (clamped to 0..=255 and rounded)
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    format!("#{:02X}{:02X}{:02X}", channel(r), channel(g), channel(b))
}

/// Build a color from a numeric tuple: `[r, g, b]` or `[r, g, b, alpha]`
/// with alpha in 0..=1.
pub fn rgb_from_channels(channels: &[f64]) -> Option<Color> {
    match *channels {
        [r, g, b] => Some([channel(r), channel(g), channel(b), 255]),
        [r, g, b, a] => Some([channel(r), channel(g), channel(b), alpha_byte(a)]),
        _ => None,
    }
}

/// Key used to decide whether two colors are the same for auto assignment.
///
/// Resolvable colors compare by uppercase `#RRGGBB`, so `var(--x)`, `red`
/// and `#ff0000` collide when they render the same. Anything else compares
/// by its uppercase text.
pub fn color_key(color: &CssColor, theme: &dyn ThemeLookup) -> String {
    match to_rgb(color, theme) {
        Some(rgb) => to_hex(rgb),
        None => color.as_str().trim().to_uppercase(),
    }
}

fn channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

fn alpha_byte(alpha: f64) -> u8 {
    if alpha.is_nan() {
        return 255;
    }
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ─────────────────────────────────────────────────────────────────────────────
// CSS Parsing
// ─────────────────────────────────────────────────────────────────────────────

fn parse_css(text: &str, theme: &dyn ThemeLookup, depth: usize) -> Option<Color> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let lower = text.to_ascii_lowercase();

    if let Some(inner) = function_args(&lower, "var") {
        if depth >= MAX_VAR_DEPTH {
            return None;
        }
        let (name, fallback) = match inner.split_once(',') {
            Some((name, fallback)) => (name, Some(fallback)),
            None => (inner, None),
        };
        let name = name.trim().trim_start_matches("--");
        return match theme.variable(name) {
            Some(value) => parse_css(&value, theme, depth + 1),
            None => fallback.and_then(|f| parse_css(f, theme, depth + 1)),
        };
    }

    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(inner) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
        return parse_rgb_function(inner);
    }

    if lower == "transparent" {
        return Some([0, 0, 0, 0]);
    }

    KEYWORDS.get(lower.as_str()).map(|&[r, g, b]| [r, g, b, 255])
}

/// Arguments of `name(...)`, if `text` is that function call
fn function_args<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some([nibble(0)?, nibble(1)?, nibble(2)?, 255]),
        4 => Some([nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?]),
        6 => Some([byte(0)?, byte(2)?, byte(4)?, 255]),
        8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
        _ => None,
    }
}

/// `rgb(1, 2, 3)`, `rgba(1, 2, 3, 0.5)` and the space / slash syntax
fn parse_rgb_function(inner: &str) -> Option<Color> {
    let parts: Vec<&str> = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        let value = match part.strip_suffix('%') {
            Some(pct) => pct.parse::<f64>().ok()? * 255.0 / 100.0,
            None => part.parse::<f64>().ok()?,
        };
        *slot = channel(value);
    }

    let alpha = match parts.get(3) {
        Some(part) => match part.strip_suffix('%') {
            Some(pct) => alpha_byte(pct.parse::<f64>().ok()? / 100.0),
            None => alpha_byte(part.parse::<f64>().ok()?),
        },
        None => 255,
    };

    Some([rgb[0], rgb[1], rgb[2], alpha])
}

// ─────────────────────────────────────────────────────────────────────────────
// Contrast
// ─────────────────────────────────────────────────────────────────────────────

/// Black or white, whichever reads better on `background`.
///
/// Perceived brightness is `(R*299 + G*587 + B*114) / 1000`; above 125 gets
/// black text. Exactly 125 gets white.
pub fn text_color(background: Color) -> Color {
    let [r, g, b, _] = background;
    let weighted = r as u32 * 299 + g as u32 * 587 + b as u32 * 114;
    if weighted > 125_000 { BLACK } else { WHITE }
}

/// Explicit text color if set, else the contrast color of `background`,
/// else `default`.
pub fn get_text_color(
    explicit: Option<&CssColor>,
    default: Option<&CssColor>,
    background: Option<&CssColor>,
    theme: &dyn ThemeLookup,
) -> Option<CssColor> {
    if let Some(color) = explicit {
        return Some(color.clone());
    }
    background
        .and_then(|bg| to_rgb(bg, theme))
        .map(|bg| CssColor::new(to_hex(text_color(bg))))
        .or_else(|| default.cloned())
}

// ─────────────────────────────────────────────────────────────────────────────
// Blending
// ─────────────────────────────────────────────────────────────────────────────

/// Interpolate between two severity levels for `value`.
pub fn blend(
    start: &SeverityLevel,
    end: &SeverityLevel,
    value: f64,
    theme: &dyn ThemeLookup,
) -> CssColor {
    if start.from == end.from {
        return start.color.clone();
    }

    let t = ((value - start.from) / (end.from - start.from)).clamp(0.0, 1.0);
    let t = if t.is_nan() { 0.0 } else { t };

    let from = to_rgb(&start.color, theme).unwrap_or([0, 0, 0, 0]);
    let to = to_rgb(&end.color, theme).unwrap_or([0, 0, 0, 0]);
    let mix = |i: usize| from[i] as f64 + (to[i] as f64 - from[i] as f64) * t;

    let (r, g, b) = (mix(0).round(), mix(1).round(), mix(2).round());
    let alpha = ((mix(3) / 255.0) * 1000.0).round() / 1000.0;

    if alpha >= 1.0 {
        CssColor::new(format!("rgb({r}, {g}, {b})"))
    } else {
        CssColor::new(format!("rgba({r}, {g}, {b}, {alpha})"))
    }
}
