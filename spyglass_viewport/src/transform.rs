// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition helpers for the accumulated view transform.
//!
//! The engine keeps one [`Affine`] mapping content coordinates into view
//! coordinates. New operations compose onto it on one of two sides, and the
//! side matters:
//!
//! - **Prepend** (right factor, `t * op`): `op` acts in content space,
//!   before the accumulated transform. Incremental gestures anchored to the
//!   cursor compose this way; a content point held fixed by `op` keeps its
//!   current position on screen.
//! - **Append** (left factor, `op * t`): `op` acts in view space, after the
//!   accumulated transform. Absolute screen-space offset adjustments
//!   (page stepping, scrollbar drags) compose this way.
//!
//! Picking the wrong side makes repeated zoom-to-cursor drift away from the
//! cursor, so the gesture paths in [`crate::PanZoom`] route through the
//! helpers here rather than composing ad hoc.

use kurbo::{Affine, Point};

/// Returns the uniform scale factor of `t`.
///
/// The engine only ever composes uniform scales, so the horizontal scale
/// coefficient is the zoom level.
#[must_use]
pub fn scale_of(t: Affine) -> f64 {
    t.as_coeffs()[0]
}

/// Scale about a fixed point.
///
/// Built as translate(`center`) * scale(`factor`) * translate(-`center`), so
/// `center` maps to itself.
#[must_use]
pub fn scale_about(factor: f64, center: Point) -> Affine {
    Affine::translate(center.to_vec2())
        * Affine::scale(factor)
        * Affine::translate(-center.to_vec2())
}

/// Prepends a scale about a fixed content-space point onto `t`.
///
/// `center` is in content coordinates; its position under `t` on screen is
/// unchanged by the result. Repeated calls accumulate multiplicatively,
/// which is what lets successive wheel notches stay anchored to the cursor.
#[must_use]
pub fn scale_about_prepend(t: Affine, factor: f64, center: Point) -> Affine {
    t * scale_about(factor, center)
}
