//! Severity threshold coloring

use gauge_types::{CssColor, SeverityLevel};

use crate::color::blend;
use crate::theme::ThemeLookup;

/// Color for `value` given levels sorted by `from`, highest first.
///
/// The first level whose `from` is at or below the value wins. With
/// `blend_levels`, the color is interpolated toward the next higher level.
/// No matching level leaves the base color.
pub fn severity_color(
    levels: &[SeverityLevel],
    value: f64,
    base: &CssColor,
    blend_levels: bool,
    theme: &dyn ThemeLookup,
) -> CssColor {
    let Some(index) = levels.iter().position(|level| level.from <= value) else {
        return base.clone();
    };

    let matched = &levels[index];
    match index.checked_sub(1).map(|i| &levels[i]) {
        Some(higher) if blend_levels => blend(matched, higher, value, theme),
        _ => matched.color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::NoTheme;

    fn levels() -> Vec<SeverityLevel> {
        vec![
            SeverityLevel { from: 100.0, color: CssColor::from("#FF0000") },
            SeverityLevel { from: 50.0, color: CssColor::from("#FFFF00") },
            SeverityLevel { from: 0.0, color: CssColor::from("#00FF00") },
        ]
    }

    #[test]
    fn first_level_at_or_below_wins() {
        let base = CssColor::from("blue");
        assert_eq!(severity_color(&levels(), 75.0, &base, false, &NoTheme).as_str(), "#FFFF00");
        assert_eq!(severity_color(&levels(), 100.0, &base, false, &NoTheme).as_str(), "#FF0000");
        assert_eq!(severity_color(&levels(), 0.0, &base, false, &NoTheme).as_str(), "#00FF00");
    }

    #[test]
    fn below_all_levels_keeps_base() {
        let base = CssColor::from("blue");
        assert_eq!(severity_color(&levels(), -1.0, &base, false, &NoTheme), base);
        assert_eq!(severity_color(&[], 10.0, &base, true, &NoTheme), base);
    }

    #[test]
    fn blends_toward_next_level() {
        let base = CssColor::from("blue");
        // halfway between yellow (50) and red (100)
        assert_eq!(
            severity_color(&levels(), 75.0, &base, true, &NoTheme).as_str(),
            "rgb(255, 128, 0)"
        );
        // top level has nothing above it
        assert_eq!(severity_color(&levels(), 150.0, &base, true, &NoTheme).as_str(), "#FF0000");
    }
}
