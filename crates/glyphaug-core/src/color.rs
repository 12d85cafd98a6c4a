//! RGB/HSV color-space conversions.
//!
//! All channels are normalized to [0, 1]: hue wraps around the [0, 1)
//! interval instead of 0-360 degrees, matching how the recolor transform
//! draws its random triplets.

/// Convert a normalized RGB pixel to HSV.
///
/// # Arguments
/// * `rgb` - Red, green, blue channel values (0.0 to 1.0)
///
/// # Returns
/// Hue, saturation, value, each in [0, 1]. A neutral (gray) pixel reports
/// hue 0 and saturation 0.
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let value = max;

    let saturation = if max > 0.0 { delta / max } else { 0.0 };

    let hue = if delta <= 0.0 {
        0.0
    } else if max == r {
        let h = ((g - b) / delta) / 6.0;
        if h < 0.0 {
            h + 1.0
        } else {
            h
        }
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    [hue, saturation, value]
}

/// Convert a normalized HSV pixel back to RGB.
///
/// # Arguments
/// * `hsv` - Hue, saturation, value (0.0 to 1.0; hue wraps)
///
/// # Returns
/// Red, green, blue channel values in [0, 1].
pub fn hsv_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;

    if s <= 0.0 {
        return [v, v, v];
    }

    // Sector 0..6 with fractional position inside the sector
    let h6 = (h.rem_euclid(1.0)) * 6.0;
    let sector = (h6.floor() as u32) % 6;
    let f = h6 - h6.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!(
                (a[i] - b[i]).abs() < EPS,
                "channel {}: {} vs {}",
                i,
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn test_primaries_to_hsv() {
        // Red: hue 0
        assert_close(rgb_to_hsv([1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        // Green: hue 1/3
        assert_close(rgb_to_hsv([0.0, 1.0, 0.0]), [1.0 / 3.0, 1.0, 1.0]);
        // Blue: hue 2/3
        assert_close(rgb_to_hsv([0.0, 0.0, 1.0]), [2.0 / 3.0, 1.0, 1.0]);
    }

    #[test]
    fn test_gray_has_no_hue_or_saturation() {
        assert_close(rgb_to_hsv([0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]);
        assert_close(rgb_to_hsv([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_close(rgb_to_hsv([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hsv_to_primaries() {
        assert_close(hsv_to_rgb([0.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);
        assert_close(hsv_to_rgb([1.0 / 3.0, 1.0, 1.0]), [0.0, 1.0, 0.0]);
        assert_close(hsv_to_rgb([2.0 / 3.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_close(hsv_to_rgb([0.42, 0.0, 0.3]), [0.3, 0.3, 0.3]);
    }

    #[test]
    fn test_hue_wraps() {
        let a = hsv_to_rgb([0.25, 0.8, 0.9]);
        let b = hsv_to_rgb([1.25, 0.8, 0.9]);
        assert_close(a, b);
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            [0.2, 0.4, 0.6],
            [0.9, 0.1, 0.3],
            [0.33, 0.33, 0.34],
            [1.0, 0.5, 0.0],
            [0.05, 0.95, 0.5],
        ];
        for rgb in samples {
            let back = hsv_to_rgb(rgb_to_hsv(rgb));
            assert_close(back, rgb);
        }
    }

    #[test]
    fn test_magenta_sector() {
        // Magenta sits in sector 5
        let hsv = rgb_to_hsv([1.0, 0.0, 1.0]);
        assert!((hsv[0] - 5.0 / 6.0).abs() < EPS);
        assert_close(hsv_to_rgb(hsv), [1.0, 0.0, 1.0]);
    }
}
