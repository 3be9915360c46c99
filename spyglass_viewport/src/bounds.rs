// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds clamping: keep transformed content inside or centered in the view.

use kurbo::{Affine, Size, Vec2};

/// Clamps the translation of `t` so the scaled content stays usable.
///
/// Per axis, independently:
/// - if the content extent (natural size times current scale) fits inside
///   the viewport, the offset is replaced so the content is centered;
/// - otherwise the offset is clamped into `[viewport - extent, 0]`, which
///   pins the content edges to the viewport edges.
///
/// Scale coefficients are never touched, only the translation. The result is
/// a fixed point: clamping a clamped transform returns it unchanged.
#[must_use]
pub fn clamp_translation(t: Affine, viewport: Size, content: Size) -> Affine {
    let [sx, _, _, sy, ox, oy] = t.as_coeffs();
    let extent_w = content.width * sx;
    let extent_h = content.height * sy;
    t.with_translation(Vec2::new(
        clamp_axis(ox, viewport.width, extent_w),
        clamp_axis(oy, viewport.height, extent_h),
    ))
}

fn clamp_axis(offset: f64, viewport: f64, extent: f64) -> f64 {
    if extent <= viewport {
        (viewport - extent) / 2.0
    } else {
        offset.min(0.0).max(viewport - extent)
    }
}
