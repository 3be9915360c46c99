// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spyglass_viewport --heading-base-level=0

//! Spyglass Viewport: a headless pan-and-zoom engine for hosted 2D content.
//!
//! This crate models an interactive viewport over a single content element as
//! one uniform-scale affine transform plus a small state machine around it.
//! It focuses on:
//! - Cursor-anchored zooming with configurable speed and limits.
//! - Drag panning and pinch gestures with pointer-capture bookkeeping.
//! - Bounds clamping that keeps content inside (or centered in) the viewport.
//! - Auto-fit policies (`Extent`, `Fill`) re-applied on layout passes.
//! - Scroll-host metrics and direct scrollbar offset commands.
//!
//! It does **not** measure layout, render, or listen to raw input. Callers
//! are expected to:
//! - Report viewport and content sizes through [`ViewportHost`].
//! - Call [`PanZoom::auto_fit`] after every layout pass.
//! - Apply the transform published via [`ViewportHost::transform_changed`]
//!   to the hosted content.
//! - Translate pointer and keyboard events into engine operations, either
//!   directly or through the `spyglass_input` crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Size};
//! use spyglass_viewport::{PanZoom, ViewportHost};
//!
//! struct Host {
//!     viewport: Size,
//!     content: Option<Size>,
//! }
//!
//! impl ViewportHost for Host {
//!     fn viewport_size(&self) -> Size {
//!         self.viewport
//!     }
//!     fn content_size(&self) -> Option<Size> {
//!         self.content
//!     }
//!     fn transform_changed(&mut self, _transform: Affine) {
//!         // Apply the transform to the hosted content here.
//!     }
//! }
//!
//! let mut host = Host {
//!     viewport: Size::new(800.0, 600.0),
//!     content: Some(Size::new(400.0, 300.0)),
//! };
//! let mut view = PanZoom::new();
//!
//! // Fit the whole content into the viewport (2x here).
//! view.fit_extent(&mut host);
//! assert_eq!(view.zoom(), 2.0);
//!
//! // One wheel notch in, anchored under the cursor.
//! view.wheel_zoom(1.0, Point::new(400.0, 300.0), &mut host);
//! assert!((view.zoom() - 2.4).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Transforms are axis-aligned with a **uniform** zoom factor; rotation is
//!   out of scope.
//! - Gesture points arrive in view (container) coordinates; conversion into
//!   content space happens inside the engine.
//! - Changes are pushed: every committed operation reports the new transform
//!   and invalidates scroll metrics, rather than being polled.
//! - Invalid inputs (NaN sizes, non-positive zoom factors, gestures with no
//!   content attached) degrade to no-ops instead of panicking.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod fit;
mod host;
mod modes;
mod panzoom;
mod transform;

pub use bounds::clamp_translation;
pub use fit::{auto_fit_transform, extent_transform, fill_transform};
pub use host::{ScrollMetrics, ViewportHost};
pub use modes::AutoFitMode;
pub use panzoom::{PanZoom, PanZoomDebugInfo};
pub use transform::{scale_about, scale_about_prepend, scale_of};
