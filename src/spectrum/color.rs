//! Moral score to color mapping

use crate::person::clamp_score;

/// Hue for a score of 100; 0 maps to hue 0 (red)
pub const MAX_HUE: i32 = 120;
pub const SATURATION: u8 = 80;
pub const LIGHTNESS: u8 = 50;

/// Linear hue in [0, 120] for a moral score
#[inline]
pub fn moral_hue(score: i32) -> f64 {
    (clamp_score(score) * MAX_HUE) as f64 / 100.0
}

/// HSL color string, red at 0 through yellow at 50 to green at 100
pub fn moral_color(score: i32) -> String {
    format!(
        "hsl({}, {}%, {}%)",
        moral_hue(score),
        SATURATION,
        LIGHTNESS
    )
}
