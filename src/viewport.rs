use crate::constants::{LARGE_CANVAS_MAX_DPR, SMALL_CANVAS_AREA, SMALL_CANVAS_MAX_DPR};

/// Device pixel ratio to render at for a CSS-sized canvas.
///
/// Small canvases (think banner strips) never go above 1x; everything else is
/// capped at 1.5x.
#[inline]
pub fn effective_pixel_ratio(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> f64 {
    let w = css_width.max(1.0);
    let h = css_height.max(1.0);
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let cap = if w * h < SMALL_CANVAS_AREA {
        SMALL_CANVAS_MAX_DPR
    } else {
        LARGE_CANVAS_MAX_DPR
    };
    dpr.min(cap)
}

/// Backing store size in device pixels, never smaller than 1x1.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let ratio = effective_pixel_ratio(css_width, css_height, device_pixel_ratio);
    let w = (css_width.max(1.0) * ratio) as u32;
    let h = (css_height.max(1.0) * ratio) as u32;
    (w.max(1), h.max(1))
}

/// New backing size when the CSS box no longer matches `current`.
#[inline]
pub fn resized_backing(
    current: (u32, u32),
    css_width: f64,
    css_height: f64,
    device_pixel_ratio: f64,
) -> Option<(u32, u32)> {
    let next = backing_size(css_width, css_height, device_pixel_ratio);
    (next != current).then_some(next)
}
