//! Text style composer
//!
//! Maps symbolic [`TextStyle`] flags to CSS declarations. Conflicting flags
//! resolve by fixed precedence so any flag combination yields at most one
//! value per property.

use gauge_types::{CssColor, TextStyle};
use serde::ser::{Serialize, SerializeMap, Serializer};

const SHADOW_LIGHT: &str = "1px 1px 2px rgba(0, 0, 0, 0.3)";
const SHADOW_MEDIUM: &str = "2px 2px 4px rgba(0, 0, 0, 0.5)";
const SHADOW_HEAVY: &str = "3px 3px 6px rgba(0, 0, 0, 0.7)";
const SHADOW_HARD: &str = "2px 2px 0 rgba(0, 0, 0, 1)";
const NEON_FALLBACK: &str = "#FFFFFF";

/// CSS declarations in a fixed property order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations(Vec<(&'static str, String)>);

impl StyleDeclarations {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `property: value;` pairs joined by spaces
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn set(&mut self, property: &'static str, value: impl Into<String>) {
        self.0.push((property, value.into()));
    }
}

impl Serialize for StyleDeclarations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (property, value) in &self.0 {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

/// Compose declarations for `flags`. `base_color` tints the neon glow.
pub fn compose_style(flags: &[TextStyle], base_color: Option<&CssColor>) -> StyleDeclarations {
    let has = |flag: TextStyle| flags.contains(&flag);
    let mut style = StyleDeclarations::default();

    if let Some(weight) = first_of(
        &has,
        &[
            (TextStyle::WeightBolder, "bolder"),
            (TextStyle::WeightBold, "bold"),
            (TextStyle::WeightLighter, "lighter"),
        ],
    ) {
        style.set("font-weight", weight);
    }

    if has(TextStyle::StyleItalic) {
        style.set("font-style", "italic");
    }

    let decorations: Vec<&str> = [
        (TextStyle::DecorationUnderline, "underline"),
        (TextStyle::DecorationOverline, "overline"),
        (TextStyle::DecorationLineThrough, "line-through"),
    ]
    .into_iter()
    .filter(|(flag, _)| has(*flag))
    .map(|(_, value)| value)
    .collect();
    if !decorations.is_empty() {
        style.set("text-decoration", decorations.join(" "));
    }

    if let Some(transform) = first_of(
        &has,
        &[
            (TextStyle::TransformUppercase, "uppercase"),
            (TextStyle::TransformLowercase, "lowercase"),
            (TextStyle::TransformCapitalize, "capitalize"),
        ],
    ) {
        style.set("text-transform", transform);
    }

    if has(TextStyle::FamilyMonospace) {
        style.set("font-family", "monospace");
    }

    if let Some(outline) = first_of(
        &has,
        &[
            (TextStyle::BlackOutline, "1px black"),
            (TextStyle::WhiteOutline, "1px white"),
        ],
    ) {
        style.set("-webkit-text-stroke", outline);
    }

    if has(TextStyle::ShadowNeon) {
        let glow = base_color.map_or(NEON_FALLBACK, CssColor::as_str);
        style.set("color", glow);
        style.set(
            "text-shadow",
            format!("0 0 2px #FFFFFF, 0 0 4px {glow}, 0 0 8px {glow}, 0 0 12px {glow}, 0 0 16px {glow}"),
        );
    } else if let Some(shadow) = first_of(
        &has,
        &[
            (TextStyle::ShadowHard, SHADOW_HARD),
            (TextStyle::ShadowHeavy, SHADOW_HEAVY),
            (TextStyle::ShadowMedium, SHADOW_MEDIUM),
            (TextStyle::ShadowLight, SHADOW_LIGHT),
        ],
    ) {
        style.set("text-shadow", shadow);
    }

    style
}

/// Value of the first flag present, in precedence order
fn first_of(
    has: &impl Fn(TextStyle) -> bool,
    ladder: &[(TextStyle, &'static str)],
) -> Option<&'static str> {
    ladder
        .iter()
        .find(|(flag, _)| has(*flag))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_flags_no_declarations() {
        assert!(compose_style(&[], None).is_empty());
    }

    #[test]
    fn weight_precedence() {
        let style = compose_style(&[TextStyle::WeightLighter, TextStyle::WeightBolder, TextStyle::WeightBold], None);
        assert_eq!(style.get("font-weight"), Some("bolder"));

        let style = compose_style(&[TextStyle::WeightLighter, TextStyle::WeightBold], None);
        assert_eq!(style.get("font-weight"), Some("bold"));
    }

    #[test]
    fn decorations_are_additive_in_fixed_order() {
        let style = compose_style(
            &[TextStyle::DecorationLineThrough, TextStyle::DecorationUnderline],
            None,
        );
        assert_eq!(style.get("text-decoration"), Some("underline line-through"));
    }

    #[test]
    fn transform_precedence() {
        let style = compose_style(&[TextStyle::TransformCapitalize, TextStyle::TransformLowercase], None);
        assert_eq!(style.get("text-transform"), Some("lowercase"));
    }

    #[test]
    fn black_outline_beats_white() {
        let style = compose_style(&[TextStyle::WhiteOutline, TextStyle::BlackOutline], None);
        assert_eq!(style.get("-webkit-text-stroke"), Some("1px black"));
    }

    #[test]
    fn one_shadow_only() {
        let style = compose_style(&[TextStyle::ShadowLight, TextStyle::ShadowHeavy], None);
        assert_eq!(style.get("text-shadow"), Some(SHADOW_HEAVY));
        assert_eq!(style.iter().filter(|(p, _)| *p == "text-shadow").count(), 1);

        let style = compose_style(&[TextStyle::ShadowHard, TextStyle::ShadowMedium], None);
        assert_eq!(style.get("text-shadow"), Some(SHADOW_HARD));
    }

    #[test]
    fn neon_uses_base_color() {
        let red = CssColor::from("red");
        let style = compose_style(&[TextStyle::ShadowNeon, TextStyle::ShadowHard], Some(&red));
        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(
            style.get("text-shadow"),
            Some("0 0 2px #FFFFFF, 0 0 4px red, 0 0 8px red, 0 0 12px red, 0 0 16px red")
        );

        let style = compose_style(&[TextStyle::ShadowNeon], None);
        assert_eq!(style.get("color"), Some("#FFFFFF"));
    }

    #[test]
    fn css_and_json_output() {
        let style = compose_style(&[TextStyle::StyleItalic, TextStyle::FamilyMonospace], None);
        assert_eq!(style.to_css(), "font-style: italic; font-family: monospace;");

        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["font-family"], "monospace");
    }
}
