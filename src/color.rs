use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Continuous "blues" scale: low accuracy → pale, high accuracy → deep blue
// ---------------------------------------------------------------------------

const HUE: f32 = 212.0;
const LIGHTNESS_LOW: f32 = 0.85;
const LIGHTNESS_HIGH: f32 = 0.25;

/// Blue shade for a position `t` in `[0, 1]` along the scale.
pub fn blues(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lightness = LIGHTNESS_LOW + (LIGHTNESS_HIGH - LIGHTNESS_LOW) * t;
    let hsl = Hsl::new(HUE, 0.7, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Maps a numeric value (accuracy %) onto the blues scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    /// Scale spanning the finite values in `values`; `[0, 1]` if there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            ColorScale { min: 0.0, max: 1.0 }
        } else {
            ColorScale { min, max }
        }
    }

    /// Position of `value` along the scale, clamped to `[0, 1]`.
    pub fn position(&self, value: f64) -> f32 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            return 0.5;
        }
        (((value - self.min) / range) as f32).clamp(0.0, 1.0)
    }

    pub fn color_for(&self, value: f64) -> Color32 {
        blues(self.position(value))
    }

    /// Evenly spaced `(label, colour)` stops for the colour-bar legend.
    pub fn legend_entries(&self, steps: usize) -> Vec<(String, Color32)> {
        if steps < 2 {
            return vec![(format!("{:.1}", self.min), blues(0.0))];
        }
        (0..steps)
            .map(|i| {
                let t = i as f64 / (steps - 1) as f64;
                let value = self.min + (self.max - self.min) * t;
                (format!("{value:.1}"), blues(t as f32))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brightness(c: Color32) -> u32 {
        c.r() as u32 + c.g() as u32 + c.b() as u32
    }

    #[test]
    fn higher_values_are_darker() {
        let scale = ColorScale::from_values([20.0, 30.0, 45.0]);
        let low = scale.color_for(20.0);
        let high = scale.color_for(45.0);
        assert!(brightness(low) > brightness(high));
        assert!(high.b() > high.r());
    }

    #[test]
    fn out_of_range_values_clamp() {
        let scale = ColorScale::from_values([20.0, 40.0]);
        assert_eq!(scale.position(-100.0), 0.0);
        assert_eq!(scale.position(100.0), 1.0);
        assert_eq!(scale.color_for(100.0), scale.color_for(40.0));
    }

    #[test]
    fn degenerate_scales() {
        let flat = ColorScale::from_values([33.0, 33.0]);
        assert_eq!(flat.position(33.0), 0.5);

        let empty = ColorScale::from_values(std::iter::empty());
        assert_eq!(empty.position(0.5), 0.5);
    }

    #[test]
    fn legend_spans_range() {
        let scale = ColorScale::from_values([10.0, 50.0]);
        let entries = scale.legend_entries(5);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].0, "10.0");
        assert_eq!(entries[4].0, "50.0");
    }
}
