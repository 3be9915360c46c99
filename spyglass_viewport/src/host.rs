// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the engine and the hosting framework.

use kurbo::{Affine, Size, Vec2};

/// Host-side services the engine needs while committing an operation.
///
/// The engine never measures, lays out, renders, or captures anything
/// itself; it asks the host through this trait, which is passed `&mut` into
/// every mutating [`crate::PanZoom`] operation. Implementations are expected
/// to report finite, non-negative sizes.
///
/// Only the sizes and the transform notification are mandatory. Pointer
/// capture and scroll invalidation default to no-ops for hosts without
/// those facilities.
pub trait ViewportHost {
    /// Current laid-out size of the viewport container.
    fn viewport_size(&self) -> Size;

    /// Natural (unscaled) size of the hosted content, or `None` while no
    /// content is attached.
    ///
    /// While this returns `None`, every gesture, auto-fit, and scroll
    /// operation is a no-op.
    fn content_size(&self) -> Option<Size>;

    /// Called after every committed mutation with the new transform.
    ///
    /// The host re-renders the content under this matrix and may re-publish
    /// layout to its own framework.
    fn transform_changed(&mut self, transform: Affine);

    /// Requests pointer capture at pan-start, so move events keep arriving
    /// while the pointer is outside the container bounds.
    fn capture_pointer(&mut self) {}

    /// Releases pointer capture at pan-end or cancel.
    fn release_pointer(&mut self) {}

    /// Called after every committed mutation so a scroll host re-reads
    /// [`ScrollMetrics`].
    fn invalidate_scroll_info(&mut self) {}
}

/// Scroll-host view of the current viewport state.
///
/// Derived on demand by [`crate::PanZoom::metrics`], never stored: `extent`
/// is the content natural size scaled by the current zoom, `viewport` is the
/// container size, and `offset` is the negated transform translation, so a
/// scrollbar sees conventional non-negative scroll positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Scaled content size.
    pub extent: Size,
    /// Container size.
    pub viewport: Size,
    /// Scroll position; `offset.x` is the horizontal offset, `offset.y` the
    /// vertical one.
    pub offset: Vec2,
}
