// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spyglass_input --heading-base-level=0

//! Spyglass Input: `ui-events` bindings for the Spyglass viewport engine.
//!
//! This crate translates raw pointer and keyboard events into
//! [`spyglass_viewport::PanZoom`] gestures:
//! - Pointer down / move / up drive a drag pan, gated by a configurable
//!   filter over modifiers and device type.
//! - Pointer cancel ends an active pan, so capture is never leaked.
//! - Scroll wheel input becomes a cursor-anchored zoom step.
//! - Pinch gestures become zooms about the gesture origin.
//! - Arrow and page keys become line and page scroll steps.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kurbo::{Affine, Size};
//! use spyglass_input::PanZoomBinding;
//! use spyglass_viewport::{PanZoom, ViewportHost};
//! use ui_events::pointer::PointerType;
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
//!     fn transform_changed(&mut self, _transform: Affine) {}
//! }
//!
//! let mut host = Host {
//!     viewport: Size::new(800.0, 600.0),
//!     content: Some(Size::new(1600.0, 1200.0)),
//! };
//! let mut view = PanZoom::new();
//!
//! // Pan on unmodified mouse drags and on any touch drag.
//! let binding = PanZoomBinding::new().with_pan_filter(|modifiers, pointer_type| {
//!     modifiers.is_empty() || pointer_type == PointerType::Touch
//! });
//!
//! // In the host's event loop:
//! // binding.on_pointer(&pointer_event, &mut view, &mut host);
//! // binding.on_keyboard(&keyboard_event, &mut view, &mut host);
//!
//! // On teardown, end any in-flight gesture and release capture.
//! binding.detach(&mut view, &mut host);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;

use kurbo::Vec2;
use spyglass_viewport::{PanZoom, ViewportHost};
use ui_events::{
    ScrollDelta,
    keyboard::{Key, KeyboardEvent, Modifiers, NamedKey},
    pointer::*,
};

/// Filter deciding whether a pointer-down may start a pan, from its modifier
/// keys and pointer device type.
pub type PointerFilter = dyn Fn(Modifiers, PointerType) -> bool;

/// Maps `ui-events` input onto a [`PanZoom`] engine.
///
/// The binding is stateless apart from its configuration; the gesture state
/// lives in the engine. One binding can therefore serve any number of
/// viewports.
#[derive(Clone)]
pub struct PanZoomBinding {
    pan_filter: Rc<PointerFilter>,
}

impl core::fmt::Debug for PanZoomBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PanZoomBinding")
            .field("pan_filter", &"<function>")
            .finish()
    }
}

impl Default for PanZoomBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl PanZoomBinding {
    /// Creates a binding whose pan filter accepts every pointer-down.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pan_filter: Rc::new(|_, _| true),
        }
    }

    /// Replaces the pan filter.
    #[must_use]
    pub fn with_pan_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(Modifiers, PointerType) -> bool + 'static,
    {
        self.pan_filter = Rc::new(filter);
        self
    }

    /// Routes a pointer event into viewport gestures.
    ///
    /// Down starts a pan when the pan filter accepts the event; Move
    /// continues an active pan; Up and Cancel end it. Scroll becomes a wheel
    /// zoom at the pointer, and a pinch gesture becomes a zoom about its
    /// origin. Returns `true` when the event drove the engine.
    pub fn on_pointer(
        &self,
        event: &PointerEvent,
        view: &mut PanZoom,
        host: &mut impl ViewportHost,
    ) -> bool {
        match event {
            PointerEvent::Down(e) => {
                if !(self.pan_filter)(e.state.modifiers, e.pointer.pointer_type) {
                    return false;
                }
                view.start_pan(e.state.logical_point(), host);
                view.is_panning()
            }
            PointerEvent::Move(PointerUpdate { current, .. }) => {
                if !view.is_panning() {
                    return false;
                }
                view.pan_to(current.logical_point(), host);
                true
            }
            PointerEvent::Up(_) | PointerEvent::Cancel(_) => {
                let was_panning = view.is_panning();
                view.end_pan(host);
                was_panning
            }
            PointerEvent::Scroll(e) => {
                let amount = scroll_amount(&e.delta, e.state.scale_factor);
                if amount == 0.0 {
                    return false;
                }
                view.wheel_zoom(amount, e.state.logical_point(), host);
                true
            }
            PointerEvent::Gesture(e) => {
                let PointerGesture::Pinch(delta) = &e.gesture else {
                    return false;
                };
                if *delta == 0.0 {
                    return false;
                }
                view.pinch(
                    Vec2::ZERO,
                    1.0 + f64::from(*delta),
                    e.state.logical_point(),
                    host,
                );
                true
            }
            PointerEvent::Enter(_) | PointerEvent::Leave(_) => false,
        }
    }

    /// Routes a keyboard event into scroll steps.
    ///
    /// Arrow keys map to line steps and the page keys to page steps, on key
    /// down only. Returns `true` when the event drove the engine.
    pub fn on_keyboard(
        &self,
        event: &KeyboardEvent,
        view: &mut PanZoom,
        host: &mut impl ViewportHost,
    ) -> bool {
        if !event.state.is_down() {
            return false;
        }
        match event.key {
            Key::Named(NamedKey::ArrowUp) => view.line_up(host),
            Key::Named(NamedKey::ArrowDown) => view.line_down(host),
            Key::Named(NamedKey::ArrowLeft) => view.line_left(host),
            Key::Named(NamedKey::ArrowRight) => view.line_right(host),
            Key::Named(NamedKey::PageUp) => view.page_up(host),
            Key::Named(NamedKey::PageDown) => view.page_down(host),
            _ => return false,
        }
        true
    }

    /// Ends any active pan, releasing pointer capture.
    ///
    /// Call when the input surface is torn down or loses the pointer stream
    /// without a matching up or cancel event. Safe to call when idle.
    pub fn detach(&self, view: &mut PanZoom, host: &mut impl ViewportHost) {
        view.end_pan(host);
    }
}

/// Resolves a scroll delta to the wheel amount: the vertical component, with
/// pixel deltas converted to logical units.
fn scroll_amount(delta: &ScrollDelta, scale_factor: f64) -> f64 {
    match delta {
        ScrollDelta::PixelDelta(pos) => pos.to_logical(scale_factor).y,
        ScrollDelta::LineDelta(_, y) => f64::from(*y),
        ScrollDelta::PageDelta(_, y) => f64::from(*y),
    }
}
