//! Vertical-rhythm and modular-scale helpers.
//!
//! Every margin, padding and font size in the page chrome is derived from
//! these two functions so the whole layout moves together when the base
//! measurements change.

/// Base line height in rem. One rhythm unit.
pub const BASE_LINE_HEIGHT: f64 = 1.75;

/// Ratio between successive steps of the modular type scale.
pub const SCALE_RATIO: f64 = 2.0;

/// A font-size / line-height pair produced by [`scale`].
#[derive(Debug, Clone, PartialEq)]
pub struct TypeScale {
    pub font_size: String,
    pub line_height: String,
}

/// Returns `multiplier` rhythm units as a CSS length.
pub fn rhythm(multiplier: f64) -> String {
    format_rem(multiplier * BASE_LINE_HEIGHT)
}

/// Returns the type size `steps` positions along the modular scale,
/// with a line height snapped up to the nearest half rhythm unit so
/// text stays on the vertical grid.
pub fn scale(steps: f64) -> TypeScale {
    let font_size = SCALE_RATIO.powf(steps);
    let half_rhythm = BASE_LINE_HEIGHT / 2.0;
    let lines = (font_size / half_rhythm).ceil();
    TypeScale {
        font_size: format_rem(font_size),
        line_height: format_rem(lines * half_rhythm),
    }
}

fn format_rem(value: f64) -> String {
    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}rem")
}

#[cfg(test)]
mod tests {
    use super::{rhythm, scale};

    #[test]
    fn rhythm_is_a_multiple_of_the_base_line_height() {
        assert_eq!(rhythm(1.0), "1.75rem");
        assert_eq!(rhythm(1.5), "2.625rem");
        assert_eq!(rhythm(0.75), "1.3125rem");
        assert_eq!(rhythm(24.0), "42rem");
    }

    #[test]
    fn rhythm_trims_trailing_zeros() {
        assert_eq!(rhythm(2.0), "3.5rem");
        assert_eq!(rhythm(0.0), "0rem");
    }

    #[test]
    fn scale_zero_is_the_base_size() {
        let base = scale(0.0);
        assert_eq!(base.font_size, "1rem");
        assert_eq!(base.line_height, "1.75rem");
    }

    #[test]
    fn scale_snaps_line_height_to_half_rhythm() {
        let heading = scale(1.5);
        assert_eq!(heading.font_size, "2.8284rem");
        assert_eq!(heading.line_height, "3.5rem");
    }
}
