use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colors
// ---------------------------------------------------------------------------

/// Marker color for economically extractable blocks.
pub const IN_PIT_COLOR: Color32 = Color32::from_rgb(214, 57, 48);
/// Marker color for blocks left in the ground.
pub const OUT_PIT_COLOR: Color32 = Color32::from_rgb(66, 110, 214);
/// Marker color before any classification has run.
pub const UNCLASSIFIED_COLOR: Color32 = Color32::GRAY;

/// Map a hue-saturation-lightness triple to an egui color.
fn hsl_color(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Profit ramp: profit value → Color32
// ---------------------------------------------------------------------------

/// Maps profit values onto a blue→red hue ramp for the optional
/// color-by-profit rendering mode.
#[derive(Debug, Clone, Copy)]
pub struct ProfitRamp {
    min: f64,
    max: f64,
}

impl ProfitRamp {
    /// Build a ramp spanning the finite profits in `profits`.
    /// Returns `None` when no finite profit exists.
    pub fn from_profits<I: IntoIterator<Item = f64>>(profits: I) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for p in profits {
            if p.is_finite() {
                min = min.min(p);
                max = max.max(p);
            }
        }
        if min > max {
            return None;
        }
        Some(ProfitRamp { min, max })
    }

    /// Look up the color for a profit value.  NaN falls back to gray.
    pub fn color_for(&self, profit: f64) -> Color32 {
        if !profit.is_finite() {
            return UNCLASSIFIED_COLOR;
        }
        let span = self.max - self.min;
        let t = if span > 0.0 {
            ((profit - self.min) / span).clamp(0.0, 1.0) as f32
        } else {
            0.5
        };
        // Hue 240 (blue, lowest profit) down to 0 (red, highest).
        hsl_color(240.0 * (1.0 - t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_spans_only_finite_profits() {
        let ramp = ProfitRamp::from_profits([f64::NAN, -10.0, 60.0]).unwrap();
        assert_ne!(ramp.color_for(-10.0), ramp.color_for(60.0));
    }

    #[test]
    fn all_nan_profits_yield_no_ramp() {
        assert!(ProfitRamp::from_profits([f64::NAN, f64::NAN]).is_none());
        assert!(ProfitRamp::from_profits(std::iter::empty()).is_none());
    }

    #[test]
    fn nan_profit_falls_back_to_gray() {
        let ramp = ProfitRamp::from_profits([0.0, 1.0]).unwrap();
        assert_eq!(ramp.color_for(f64::NAN), UNCLASSIFIED_COLOR);
    }

    #[test]
    fn degenerate_range_still_produces_a_color() {
        let ramp = ProfitRamp::from_profits([5.0, 5.0]).unwrap();
        // Every value maps to the midpoint color rather than dividing by zero.
        assert_eq!(ramp.color_for(5.0), ramp.color_for(100.0));
    }
}
