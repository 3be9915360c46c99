// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-fit transforms: extent (letterbox) and fill (cover) policies.

use kurbo::{Affine, Point, Size, Vec2};

use crate::modes::AutoFitMode;
use crate::transform::scale_about;

/// Computes the extent-fit transform: the whole content visible inside the
/// viewport, aspect ratio preserved, letterboxed on the slack axis.
///
/// The scale is the smaller of the two per-axis fit ratios, limited to
/// `[min_zoom, max_zoom]`, applied about the content center; the bounds
/// clamp then centers the result in the viewport. Returns `None` when either
/// size is degenerate, leaving the caller's transform unchanged.
#[must_use]
pub fn extent_transform(
    panel: Size,
    content: Size,
    min_zoom: f64,
    max_zoom: f64,
) -> Option<Affine> {
    let (zx, zy) = fit_ratios(panel, content)?;
    let zoom = limit_zoom(zx.min(zy), min_zoom, max_zoom);
    let content_center = Point::new(content.width / 2.0, content.height / 2.0);
    Some(scale_about(zoom, content_center))
}

/// Computes the fill-fit transform: content covers the whole viewport,
/// aspect ratio preserved, overflow on the slack axis cropped.
///
/// The scale is the larger of the two per-axis fit ratios, limited to
/// `[min_zoom, max_zoom]`. The content center is moved onto the viewport
/// center first, then the scale is applied about the viewport center, so the
/// overflow splits evenly until the bounds clamp trims it. Returns `None`
/// when either size is degenerate.
#[must_use]
pub fn fill_transform(panel: Size, content: Size, min_zoom: f64, max_zoom: f64) -> Option<Affine> {
    let (zx, zy) = fit_ratios(panel, content)?;
    let zoom = limit_zoom(zx.max(zy), min_zoom, max_zoom);
    let center_delta = Vec2::new(
        (panel.width - content.width) / 2.0,
        (panel.height - content.height) / 2.0,
    );
    let panel_center = Point::new(panel.width / 2.0, panel.height / 2.0);
    Some(scale_about(zoom, panel_center) * Affine::translate(center_delta))
}

/// Dispatches to the fit policy selected by `mode`.
///
/// [`AutoFitMode::None`] computes no transform; the caller keeps whatever
/// the user set and only re-clamps bounds.
#[must_use]
pub fn auto_fit_transform(
    mode: AutoFitMode,
    panel: Size,
    content: Size,
    min_zoom: f64,
    max_zoom: f64,
) -> Option<Affine> {
    match mode {
        AutoFitMode::None => None,
        AutoFitMode::Extent => extent_transform(panel, content, min_zoom, max_zoom),
        AutoFitMode::Fill => fill_transform(panel, content, min_zoom, max_zoom),
    }
}

fn fit_ratios(panel: Size, content: Size) -> Option<(f64, f64)> {
    if !panel.is_finite() || panel.width <= 0.0 || panel.height <= 0.0 {
        return None;
    }
    if !content.is_finite() || content.width <= 0.0 || content.height <= 0.0 {
        return None;
    }
    Some((
        panel.width / content.width.max(f64::MIN_POSITIVE),
        panel.height / content.height.max(f64::MIN_POSITIVE),
    ))
}

// `min`/`max` rather than `clamp`: unordered or NaN limits must degrade,
// never panic.
fn limit_zoom(zoom: f64, min_zoom: f64, max_zoom: f64) -> f64 {
    let (lo, hi) = if min_zoom <= max_zoom {
        (min_zoom, max_zoom)
    } else {
        (max_zoom, min_zoom)
    };
    zoom.min(hi).max(lo)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{auto_fit_transform, extent_transform, fill_transform};
    use crate::modes::AutoFitMode;
    use crate::transform::scale_of;

    const PANEL: Size = Size::new(800.0, 600.0);

    #[test]
    fn extent_picks_smaller_ratio_and_prescales_about_content_center() {
        let t = extent_transform(PANEL, Size::new(400.0, 300.0), 1.0, 10.0).unwrap();
        assert_eq!(scale_of(t), 2.0);
        let [_, _, _, _, ox, oy] = t.as_coeffs();
        assert_eq!(ox, -200.0);
        assert_eq!(oy, -150.0);
    }

    #[test]
    fn extent_is_limited_by_max_zoom() {
        let t = extent_transform(PANEL, Size::new(20.0, 20.0), 1.0, 10.0).unwrap();
        assert_eq!(scale_of(t), 10.0);
    }

    #[test]
    fn fill_picks_larger_ratio_and_centers_content_on_viewport() {
        let content = Size::new(400.0, 100.0);
        let t = fill_transform(PANEL, content, 1.0, 10.0).unwrap();
        assert_eq!(scale_of(t), 6.0);

        let content_center = Point::new(content.width / 2.0, content.height / 2.0);
        let mapped = t * content_center;
        assert!((mapped.x - 400.0).abs() < 1e-9);
        assert!((mapped.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_sizes_yield_no_transform() {
        assert!(extent_transform(PANEL, Size::ZERO, 1.0, 10.0).is_none());
        assert!(extent_transform(PANEL, Size::new(0.0, 50.0), 1.0, 10.0).is_none());
        assert!(extent_transform(PANEL, Size::new(f64::NAN, 50.0), 1.0, 10.0).is_none());
        assert!(fill_transform(Size::ZERO, Size::new(10.0, 10.0), 1.0, 10.0).is_none());
        assert!(fill_transform(PANEL, Size::new(10.0, -1.0), 1.0, 10.0).is_none());
        assert!(fill_transform(PANEL, Size::new(f64::INFINITY, 10.0), 1.0, 10.0).is_none());
    }

    #[test]
    fn auto_fit_dispatches_on_mode() {
        let content = Size::new(400.0, 300.0);
        assert!(auto_fit_transform(AutoFitMode::None, PANEL, content, 1.0, 10.0).is_none());

        let extent = auto_fit_transform(AutoFitMode::Extent, PANEL, content, 1.0, 10.0).unwrap();
        assert_eq!(extent, extent_transform(PANEL, content, 1.0, 10.0).unwrap());

        let fill = auto_fit_transform(AutoFitMode::Fill, PANEL, content, 1.0, 10.0).unwrap();
        assert_eq!(fill, fill_transform(PANEL, content, 1.0, 10.0).unwrap());
    }
}
