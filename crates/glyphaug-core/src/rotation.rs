//! Canvas rotation with bounding-box expansion.
//!
//! Rotation uses inverse mapping: for each pixel of the expanded output, the
//! contributing source location is found by rotating back into the input and
//! sampled bilinearly. Locations that fall outside the input fill with zero,
//! which introduces background-colored corner regions - the caller is
//! expected to resample the expanded result back to its own canvas size.

use crate::canvas::Canvas;

/// Compute the dimensions of the bounding box for a rotated canvas.
///
/// When a canvas is rotated, the corners extend beyond the original bounds.
/// This function calculates the minimum bounding box that contains the
/// entire rotated canvas.
///
/// # Arguments
///
/// * `width` - Original canvas width
/// * `height` - Original canvas height
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    // Normalize angle to handle 360, 720, etc.
    let angle_normalized = angle_degrees % 360.0;

    // Fast path: no rotation needed (including near-zero and multiples of 360)
    if angle_normalized.abs() < 0.001 || (360.0 - angle_normalized.abs()).abs() < 0.001 {
        return (width, height);
    }

    // Fast path: exact 90/270 degree rotations (swap dimensions)
    let abs_angle = angle_normalized.abs();
    if (abs_angle - 90.0).abs() < 0.001 || (abs_angle - 270.0).abs() < 0.001 {
        return (height, width);
    }

    // Fast path: exact 180 degree rotation (same dimensions)
    if (abs_angle - 180.0).abs() < 0.001 {
        return (width, height);
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    // Bounding box of a rotated rectangle:
    // new_w = |w*cos| + |h*sin|, new_h = |w*sin| + |h*cos|
    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate a canvas about its center into an expanded bounding box.
///
/// The output canvas grows to contain the entire rotated content without
/// clipping; regions with no source coverage are zero-filled.
pub fn rotate_expanded(canvas: &Canvas, angle_degrees: f64) -> Canvas {
    // Fast path: no rotation needed
    if angle_degrees.abs() < 0.001 {
        return canvas.clone();
    }

    let (src_w, src_h) = (canvas.width as f64, canvas.height as f64);
    let (dst_w, dst_h) = compute_rotated_bounds(canvas.width, canvas.height, angle_degrees);

    // Negate angle for correct visual rotation direction
    // (positive angle should rotate counter-clockwise visually)
    let angle_rad = -angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut output = vec![0u8; (dst_w as usize) * (dst_h as usize) * 3];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Translate destination point to origin at center
            let dx = dst_x as f64 - dst_cx;
            let dy = dst_y as f64 - dst_cy;

            // Apply inverse rotation to find source coordinates
            let src_x = dx * cos - dy * sin + src_cx;
            let src_y = dx * sin + dy * cos + src_cy;

            let dst_idx = ((dst_y * dst_w + dst_x) * 3) as usize;
            let pixel = sample_bilinear(canvas, src_x, src_y);

            output[dst_idx] = pixel[0];
            output[dst_idx + 1] = pixel[1];
            output[dst_idx + 2] = pixel[2];
        }
    }

    Canvas {
        width: dst_w,
        height: dst_h,
        pixels: output,
    }
}

/// Get a pixel as [f64; 3] from a canvas at the given coordinates.
#[inline]
fn get_pixel_f64(canvas: &Canvas, px: usize, py: usize) -> [f64; 3] {
    let idx = (py * canvas.width as usize + px) * 3;
    [
        canvas.pixels[idx] as f64,
        canvas.pixels[idx + 1] as f64,
        canvas.pixels[idx + 2] as f64,
    ]
}

/// Sample a pixel using bilinear interpolation over the 4 nearest pixels.
/// Out-of-bounds locations read as zero (background).
fn sample_bilinear(canvas: &Canvas, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = (canvas.width as i64, canvas.height as i64);

    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return [0, 0, 0];
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(canvas, x0, y0);
    let p10 = get_pixel_f64(canvas, x1, y0);
    let p01 = get_pixel_f64(canvas, x0, y1);
    let p11 = get_pixel_f64(canvas, x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test canvas with a gradient pattern.
    fn test_canvas(width: u32, height: u32) -> Canvas {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((x + y) * 8) as u8;
                pixels.push(v);
                pixels.push(v);
                pixels.push(v);
            }
        }
        Canvas::new(width, height, pixels)
    }

    #[test]
    fn test_no_rotation() {
        let canvas = test_canvas(100, 50);
        let result = rotate_expanded(&canvas, 0.0);

        assert_eq!(result.width, 100);
        assert_eq!(result.height, 50);
        assert_eq!(result.pixels, canvas.pixels);
    }

    #[test]
    fn test_tiny_rotation_fast_path() {
        let canvas = test_canvas(100, 50);
        let result = rotate_expanded(&canvas, 0.0001);

        assert_eq!(result.width, 100);
        assert_eq!(result.height, 50);
    }

    #[test]
    fn test_90_degree_rotation_bounds() {
        let (w, h) = compute_rotated_bounds(100, 50, 90.0);
        assert_eq!(w, 50);
        assert_eq!(h, 100);
    }

    #[test]
    fn test_180_degree_rotation_bounds() {
        let (w, h) = compute_rotated_bounds(100, 50, 180.0);
        assert_eq!(w, 100);
        assert_eq!(h, 50);
    }

    #[test]
    fn test_45_degree_rotation_bounds() {
        let (w, h) = compute_rotated_bounds(100, 100, 45.0);
        // Diagonal of 100x100 square is ~141.4
        assert!(w > 140 && w < 143, "width was {}", w);
        assert!(h > 140 && h < 143, "height was {}", h);
    }

    #[test]
    fn test_negative_rotation_bounds_match_positive() {
        let (w1, h1) = compute_rotated_bounds(100, 50, 30.0);
        let (w2, h2) = compute_rotated_bounds(100, 50, -30.0);
        assert_eq!(w1, w2);
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_large_angles_normalize() {
        // 720 degrees = 2 full rotations
        let (w, h) = compute_rotated_bounds(100, 50, 720.0);
        assert_eq!(w, 100);
        assert_eq!(h, 50);

        // 450 degrees = 360 + 90
        let (w, h) = compute_rotated_bounds(100, 50, 450.0);
        assert_eq!(w, 50);
        assert_eq!(h, 100);
    }

    #[test]
    fn test_rotation_expands_canvas() {
        let canvas = test_canvas(100, 100);
        let result = rotate_expanded(&canvas, 45.0);

        assert!(result.width > canvas.width);
        assert!(result.height > canvas.height);
    }

    #[test]
    fn test_rotation_corners_are_background() {
        let canvas = Canvas::filled(50, 50, 200);
        let result = rotate_expanded(&canvas, 45.0);

        // The expanded corners have no source coverage and read as zero.
        let top_left = &result.pixels[0..3];
        assert_eq!(top_left, &[0, 0, 0]);
    }

    #[test]
    fn test_small_canvas_rotation() {
        let canvas = test_canvas(4, 4);
        let result = rotate_expanded(&canvas, 30.0);
        assert!(result.width > 0);
        assert!(result.height > 0);
    }

    #[test]
    fn test_1x1_canvas_rotation() {
        let canvas = Canvas::new(1, 1, vec![128, 128, 128]);
        let result = rotate_expanded(&canvas, 45.0);
        assert!(result.width >= 1);
        assert!(result.height >= 1);
    }

    #[test]
    fn test_rotation_produces_valid_buffer() {
        let canvas = test_canvas(50, 50);
        let result = rotate_expanded(&canvas, 37.0);

        assert_eq!(
            result.pixels.len(),
            (result.width as usize) * (result.height as usize) * 3
        );
    }

    #[test]
    fn test_rotation_center_preservation() {
        // A bright 3x3 block at the center should stay center-ish after a
        // 90 degree rotation.
        let size = 21;
        let mut canvas = Canvas::filled(size, size, 0);
        let center = size / 2;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                let px = (center as i32 + dx) as u32;
                let py = (center as i32 + dy) as u32;
                let idx = ((py * size + px) * 3) as usize;
                canvas.pixels[idx] = 255;
                canvas.pixels[idx + 1] = 255;
                canvas.pixels[idx + 2] = 255;
            }
        }

        let result = rotate_expanded(&canvas, 90.0);

        let center_x = result.width / 2;
        let center_y = result.height / 2;
        let mut found_bright = false;
        for dy in -2i32..=2 {
            for dx in -2i32..=2 {
                let px = (center_x as i32 + dx).max(0) as u32;
                let py = (center_y as i32 + dy).max(0) as u32;
                if px < result.width && py < result.height {
                    let idx = ((py * result.width + px) * 3) as usize;
                    if result.pixels[idx] > 50 {
                        found_bright = true;
                    }
                }
            }
        }

        assert!(
            found_bright,
            "Center region should contain bright pixels after rotation"
        );
    }

    #[test]
    fn test_bounds_never_zero() {
        for angle in [1.0, 15.0, 45.0, 89.0, 90.0, 135.0, 179.0, 180.0, 270.0, 359.0] {
            let (w, h) = compute_rotated_bounds(10, 10, angle);
            assert!(w > 0, "Width should be > 0 for angle {}", angle);
            assert!(h > 0, "Height should be > 0 for angle {}", angle);
        }
    }
}
