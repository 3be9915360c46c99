// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::bounds::clamp_translation;
use crate::fit::{auto_fit_transform, extent_transform, fill_transform};
use crate::host::{ScrollMetrics, ViewportHost};
use crate::modes::AutoFitMode;
use crate::transform::{scale_about_prepend, scale_of};

const DEFAULT_ZOOM_SPEED: f64 = 1.2;
const DEFAULT_MIN_ZOOM: f64 = 1.0;
const DEFAULT_MAX_ZOOM: f64 = 10.0;

/// View-space magnitude of one page (and line) scroll step.
const SCROLL_STEP: f64 = 10.0;

/// Active pan gesture bookkeeping, live from `start_pan` to `end_pan`.
#[derive(Clone, Copy, Debug)]
struct PanGesture {
    /// Previous pointer sample in view coordinates.
    last: Point,
    /// Running view-space offset since gesture start.
    total: Vec2,
}

/// Pan-and-zoom state machine for one hosted content element.
///
/// `PanZoom` owns a single content-to-view [`Affine`] and mutates it in
/// response to semantic gestures (wheel zoom, drag pan, pinch), auto-fit
/// requests, and scroll commands. Every committed mutation runs the bounds
/// clamp and notifies the host, so the published transform always keeps the
/// content inside (or centered in) the viewport and the zoom inside the
/// configured limits.
///
/// The engine is headless: sizes, rendering, and pointer capture are
/// obtained through a [`ViewportHost`] passed into each operation, and raw
/// input translation lives in a separate layer. All gesture points arrive in
/// view (container) coordinates.
#[derive(Clone, Debug)]
pub struct PanZoom {
    transform: Affine,
    gesture: Option<PanGesture>,
    mode: AutoFitMode,
    zoom_speed: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for PanZoom {
    fn default() -> Self {
        Self::new()
    }
}

impl PanZoom {
    /// Creates an engine with the identity transform, auto-fit off, zoom
    /// speed 1.2, and zoom limits `[1.0, 10.0]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transform: Affine::IDENTITY,
            gesture: None,
            mode: AutoFitMode::default(),
            zoom_speed: DEFAULT_ZOOM_SPEED,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Returns the current content-to-view transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the current zoom level (the transform's uniform scale).
    #[must_use]
    pub fn zoom(&self) -> f64 {
        scale_of(self.transform)
    }

    /// Returns the current auto-fit mode.
    #[must_use]
    pub fn auto_fit_mode(&self) -> AutoFitMode {
        self.mode
    }

    /// Returns the wheel step multiplier.
    #[must_use]
    pub fn zoom_speed(&self) -> f64 {
        self.zoom_speed
    }

    /// Returns the lower zoom limit.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Returns the upper zoom limit.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Returns `true` while a pan gesture is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.gesture.is_some()
    }

    /// Returns the running view-space pan offset of the active gesture, or
    /// `None` when no pan is in progress.
    #[must_use]
    pub fn pan_offset(&self) -> Option<Vec2> {
        self.gesture.map(|g| g.total)
    }

    /// Converts a view-space point into content coordinates.
    ///
    /// The transform is always invertible: its scale stays inside the zoom
    /// limits, which are validated to be positive.
    #[must_use]
    pub fn view_to_content(&self, point: Point) -> Point {
        self.transform.inverse() * point
    }

    /// Derives the scroll-host metrics for the current state.
    ///
    /// With no content attached the extent is zero.
    #[must_use]
    pub fn metrics(&self, host: &impl ViewportHost) -> ScrollMetrics {
        let [sx, _, _, sy, ox, oy] = self.transform.as_coeffs();
        let extent = match host.content_size() {
            Some(content) => Size::new(content.width * sx, content.height * sy),
            None => Size::ZERO,
        };
        ScrollMetrics {
            extent,
            viewport: host.viewport_size(),
            offset: Vec2::new(-ox, -oy),
        }
    }

    /// Snapshot of the current engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanZoomDebugInfo {
        PanZoomDebugInfo {
            transform: self.transform,
            zoom: self.zoom(),
            auto_fit_mode: self.mode,
            zoom_speed: self.zoom_speed,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            is_panning: self.is_panning(),
            pan_offset: self.pan_offset(),
        }
    }

    /// Sets the wheel step multiplier.
    ///
    /// Non-finite or non-positive values are ignored.
    pub fn set_zoom_speed(&mut self, speed: f64) {
        if !speed.is_finite() || speed <= 0.0 {
            return;
        }
        self.zoom_speed = speed;
    }

    /// Sets the zoom limits, normalized so `min <= max`.
    ///
    /// Non-finite or non-positive values are ignored. If the current zoom
    /// falls outside the new range it is re-clamped about the viewport
    /// center and the change is committed.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64, host: &mut impl ViewportHost) {
        if !min_zoom.is_finite() || !max_zoom.is_finite() || min_zoom <= 0.0 || max_zoom <= 0.0 {
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;

        let zoom = self.zoom();
        let clamped = zoom.clamp(min_zoom, max_zoom);
        if clamped != zoom {
            let viewport = host.viewport_size();
            let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
            self.apply_zoom(clamped, center);
            self.commit(host);
        }
    }

    /// Zooms to an exact level about `center` (view coordinates).
    ///
    /// The target is clamped into the zoom limits before the factor is
    /// derived, so one call can never overshoot the ceiling or floor. The
    /// content point currently under `center` keeps its position on screen.
    /// Non-finite or non-positive targets and non-finite centers are no-ops.
    pub fn zoom_to(&mut self, zoom: f64, center: Point, host: &mut impl ViewportHost) {
        if host.content_size().is_none() {
            return;
        }
        if !zoom.is_finite() || zoom <= 0.0 || !center.is_finite() {
            return;
        }
        self.apply_zoom(zoom, center);
        self.commit(host);
    }

    /// Zooms by a multiplicative factor about `center` (view coordinates).
    ///
    /// Equivalent to [`Self::zoom_to`] with `current * factor` as the
    /// target.
    pub fn zoom_by(&mut self, factor: f64, center: Point, host: &mut impl ViewportHost) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.zoom_to(self.zoom() * factor, center, host);
    }

    /// Applies one wheel notch at `point` (view coordinates).
    ///
    /// Disables auto-fit, then zooms by the configured speed for a positive
    /// delta or its reciprocal for a negative one. A zero or non-finite delta
    /// is a no-op.
    pub fn wheel_zoom(&mut self, delta: f64, point: Point, host: &mut impl ViewportHost) {
        if host.content_size().is_none() {
            return;
        }
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        self.mode = AutoFitMode::None;
        let factor = if delta > 0.0 {
            self.zoom_speed
        } else {
            1.0 / self.zoom_speed
        };
        self.zoom_by(factor, point, host);
    }

    /// Begins a pan gesture at `point` (view coordinates).
    ///
    /// Disables auto-fit, resets the gesture bookkeeping, and requests
    /// pointer capture from the host. Starting while a gesture is already
    /// active re-bases it on the new point.
    pub fn start_pan(&mut self, point: Point, host: &mut impl ViewportHost) {
        if host.content_size().is_none() || !point.is_finite() {
            return;
        }
        self.mode = AutoFitMode::None;
        self.gesture = Some(PanGesture {
            last: point,
            total: Vec2::ZERO,
        });
        host.capture_pointer();
    }

    /// Continues the active pan gesture to `point` (view coordinates).
    ///
    /// Applies the step since the previous sample; the content under the
    /// pointer follows it one-to-one in view units. A no-op without an
    /// active gesture.
    pub fn pan_to(&mut self, point: Point, host: &mut impl ViewportHost) {
        if host.content_size().is_none() || !point.is_finite() {
            return;
        }
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        let delta = point - gesture.last;
        gesture.last = point;
        gesture.total += delta;
        // Prepend composes inside the current scale, so the view-space step
        // converts to content units first.
        let step = delta / self.zoom();
        self.transform *= Affine::translate(step);
        self.commit(host);
    }

    /// Ends the active pan gesture and releases pointer capture.
    ///
    /// A no-op when no gesture is active; capture is released exactly once
    /// per gesture.
    pub fn end_pan(&mut self, host: &mut impl ViewportHost) {
        if self.gesture.take().is_some() {
            host.release_pointer();
        }
    }

    /// Pans by a view-space delta outside any gesture.
    ///
    /// Used by hosts for programmatic scrolling; the pinch path applies its
    /// translation the same way. Does not touch the auto-fit mode.
    pub fn pan_by(&mut self, delta: Vec2, host: &mut impl ViewportHost) {
        if host.content_size().is_none() || !delta.is_finite() {
            return;
        }
        self.transform = Affine::translate(delta) * self.transform;
        self.commit(host);
    }

    /// Applies one pinch/manipulation update: a view-space translation and a
    /// scale factor arriving together, anchored at `origin`.
    ///
    /// Disables auto-fit; the translation lands first, then the zoom about
    /// `origin`, then one bounds clamp and one notification for the pair.
    pub fn pinch(
        &mut self,
        translation: Vec2,
        factor: f64,
        origin: Point,
        host: &mut impl ViewportHost,
    ) {
        if host.content_size().is_none() {
            return;
        }
        if !translation.is_finite() || !origin.is_finite() {
            return;
        }
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.mode = AutoFitMode::None;
        self.transform = Affine::translate(translation) * self.transform;
        self.apply_zoom(self.zoom() * factor, origin);
        self.commit(host);
    }

    /// Fits the whole content inside the viewport and selects
    /// [`AutoFitMode::Extent`] for future layout passes.
    ///
    /// With degenerate sizes the transform is left unchanged (the mode still
    /// switches).
    pub fn fit_extent(&mut self, host: &mut impl ViewportHost) {
        let Some(content) = host.content_size() else {
            return;
        };
        self.mode = AutoFitMode::Extent;
        if let Some(t) =
            extent_transform(host.viewport_size(), content, self.min_zoom, self.max_zoom)
        {
            self.transform = t;
        }
        self.commit(host);
    }

    /// Covers the whole viewport with content and selects
    /// [`AutoFitMode::Fill`] for future layout passes.
    pub fn fit_fill(&mut self, host: &mut impl ViewportHost) {
        let Some(content) = host.content_size() else {
            return;
        };
        self.mode = AutoFitMode::Fill;
        if let Some(t) = fill_transform(host.viewport_size(), content, self.min_zoom, self.max_zoom)
        {
            self.transform = t;
        }
        self.commit(host);
    }

    /// Re-applies the current auto-fit policy; the host calls this after
    /// every layout pass (viewport or content resized).
    ///
    /// In [`AutoFitMode::None`] the transform is kept but the bounds clamp
    /// still runs, so a shrinking viewport pulls overflowing content back
    /// into view.
    pub fn auto_fit(&mut self, host: &mut impl ViewportHost) {
        let Some(content) = host.content_size() else {
            return;
        };
        if let Some(t) = auto_fit_transform(
            self.mode,
            host.viewport_size(),
            content,
            self.min_zoom,
            self.max_zoom,
        ) {
            self.transform = t;
        }
        self.commit(host);
    }

    /// Cycles the auto-fit mode `None -> Extent -> Fill -> None`.
    ///
    /// Mode only; the newly selected policy takes effect on the next layout
    /// pass or explicit fit call.
    pub fn toggle_auto_fit_mode(&mut self) {
        self.mode = self.mode.cycled();
    }

    /// Resets to the identity transform with auto-fit off, then commits.
    pub fn reset(&mut self, host: &mut impl ViewportHost) {
        self.transform = Affine::IDENTITY;
        self.mode = AutoFitMode::None;
        self.commit(host);
    }

    /// Scrolls one page step up (content moves down).
    pub fn page_up(&mut self, host: &mut impl ViewportHost) {
        self.step(Vec2::new(0.0, SCROLL_STEP), host);
    }

    /// Scrolls one page step down (content moves up).
    pub fn page_down(&mut self, host: &mut impl ViewportHost) {
        self.step(Vec2::new(0.0, -SCROLL_STEP), host);
    }

    /// Scrolls one page step left (content moves right).
    pub fn page_left(&mut self, host: &mut impl ViewportHost) {
        self.step(Vec2::new(SCROLL_STEP, 0.0), host);
    }

    /// Scrolls one page step right (content moves left).
    pub fn page_right(&mut self, host: &mut impl ViewportHost) {
        self.step(Vec2::new(-SCROLL_STEP, 0.0), host);
    }

    /// Alias of [`Self::page_up`]; there is no smaller line granularity.
    pub fn line_up(&mut self, host: &mut impl ViewportHost) {
        self.page_up(host);
    }

    /// Alias of [`Self::page_down`]; there is no smaller line granularity.
    pub fn line_down(&mut self, host: &mut impl ViewportHost) {
        self.page_down(host);
    }

    /// Alias of [`Self::page_left`]; there is no smaller line granularity.
    pub fn line_left(&mut self, host: &mut impl ViewportHost) {
        self.page_left(host);
    }

    /// Alias of [`Self::page_right`]; there is no smaller line granularity.
    pub fn line_right(&mut self, host: &mut impl ViewportHost) {
        self.page_right(host);
    }

    /// Sets the horizontal scroll position directly.
    ///
    /// The transform's X offset becomes `-offset`, with no bounds pass:
    /// scrollbars are trusted to stay inside the extent they were shown.
    pub fn set_horizontal_offset(&mut self, offset: f64, host: &mut impl ViewportHost) {
        if host.content_size().is_none() || !offset.is_finite() {
            return;
        }
        let translation = self.transform.translation();
        self.transform = self
            .transform
            .with_translation(Vec2::new(-offset, translation.y));
        self.notify(host);
    }

    /// Sets the vertical scroll position directly.
    ///
    /// The transform's Y offset becomes `-offset`, with no bounds pass.
    pub fn set_vertical_offset(&mut self, offset: f64, host: &mut impl ViewportHost) {
        if host.content_size().is_none() || !offset.is_finite() {
            return;
        }
        let translation = self.transform.translation();
        self.transform = self
            .transform
            .with_translation(Vec2::new(translation.x, -offset));
        self.notify(host);
    }

    /// Applies the clamped zoom target about a view-space anchor.
    fn apply_zoom(&mut self, target: f64, center: Point) {
        let clamped = target.clamp(self.min_zoom, self.max_zoom);
        let factor = clamped / self.zoom();
        let anchor = self.view_to_content(center);
        self.transform = scale_about_prepend(self.transform, factor, anchor);
    }

    /// Page/line step body: append the view-space delta, then commit.
    fn step(&mut self, delta: Vec2, host: &mut impl ViewportHost) {
        if host.content_size().is_none() {
            return;
        }
        self.transform = Affine::translate(delta) * self.transform;
        self.commit(host);
    }

    /// Clamps bounds (when content is present) and notifies the host.
    fn commit(&mut self, host: &mut impl ViewportHost) {
        if let Some(content) = host.content_size() {
            self.transform = clamp_translation(self.transform, host.viewport_size(), content);
        }
        self.notify(host);
    }

    fn notify(&self, host: &mut impl ViewportHost) {
        host.transform_changed(self.transform);
        host.invalidate_scroll_info();
    }
}

/// Debug snapshot of a [`PanZoom`] state.
#[derive(Clone, Copy, Debug)]
pub struct PanZoomDebugInfo {
    /// Current content-to-view transform.
    pub transform: Affine,
    /// Current zoom level.
    pub zoom: f64,
    /// Current auto-fit mode.
    pub auto_fit_mode: AutoFitMode,
    /// Wheel step multiplier.
    pub zoom_speed: f64,
    /// Lower zoom limit.
    pub min_zoom: f64,
    /// Upper zoom limit.
    pub max_zoom: f64,
    /// Whether a pan gesture is active.
    pub is_panning: bool,
    /// Running pan offset of the active gesture, if any.
    pub pan_offset: Option<Vec2>,
}
