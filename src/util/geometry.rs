// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Fitting a video frame into the space available on screen.

/// Largest size with the frame's aspect ratio that fits in `available`.
pub fn fit_size(frame: (u32, u32), available: (f32, f32)) -> (f32, f32) {
    let (frame_w, frame_h) = frame;
    let (avail_w, avail_h) = available;
    if frame_w == 0 || frame_h == 0 || avail_w <= 0.0 || avail_h <= 0.0 {
        return (0.0, 0.0);
    }

    let frame_aspect = frame_w as f32 / frame_h as f32;
    if frame_aspect > avail_w / avail_h {
        // Frame is wider - fit to width
        (avail_w, avail_w / frame_aspect)
    } else {
        // Frame is taller - fit to height
        (avail_h * frame_aspect, avail_h)
    }
}

/// Offset that centres `size` inside `available`.
pub fn center_offset(size: (f32, f32), available: (f32, f32)) -> (f32, f32) {
    ((available.0 - size.0) / 2.0, (available.1 - size.1) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_area() {
        let (w, h) = fit_size((854, 480), (1708.0, 600.0));
        assert!((h - 600.0).abs() < 0.001);
        assert!((w - 1067.5).abs() < 0.01);
    }

    #[test]
    fn test_fit_tall_area() {
        let (w, h) = fit_size((854, 480), (427.0, 1000.0));
        assert_eq!(w, 427.0);
        assert!((h - 240.0).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(fit_size((0, 480), (100.0, 100.0)), (0.0, 0.0));
        assert_eq!(fit_size((854, 480), (0.0, 100.0)), (0.0, 0.0));
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset((80.0, 40.0), (100.0, 100.0)), (10.0, 30.0));
    }
}
