// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Auto-fit policy re-applied whenever the viewport or content size changes.
///
/// The mode is consulted by [`crate::PanZoom::auto_fit`] on every layout
/// pass. It is set explicitly by [`crate::PanZoom::fit_extent`] /
/// [`crate::PanZoom::fit_fill`], cycled by
/// [`crate::PanZoom::toggle_auto_fit_mode`], and reset to [`None`](Self::None)
/// the moment the user performs a manual zoom or pan gesture, so manual
/// interaction always wins over automatic layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AutoFitMode {
    /// No automatic fitting; the transform is left as the user set it.
    ///
    /// Layout passes still re-run bounds clamping in this mode.
    #[default]
    None,
    /// Scale so the entire content fits inside the viewport, preserving
    /// aspect ratio. May letterbox on one axis.
    Extent,
    /// Scale so the content covers the entire viewport, preserving aspect
    /// ratio. Overflow on one axis is cropped.
    Fill,
}

impl AutoFitMode {
    /// Returns the next mode in the `None -> Extent -> Fill -> None` cycle.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Self::None => Self::Extent,
            Self::Extent => Self::Fill,
            Self::Fill => Self::None,
        }
    }
}
