//! Layout-side types: safe-area insets and panel placement.
//!
//! Insets affect where panel content is laid out, never the gesture math.

use edgeslide_foundation::PanelSide;

/// Fraction of the viewport the profile (left) panel covers when open.
const LEFT_PANEL_FRACTION: f32 = 0.82;

/// Fraction of the viewport the menu (right) panel covers when open.
const RIGHT_PANEL_FRACTION: f32 = 0.78;

/// Cap so wide viewports do not get wall-to-wall panels.
const MAX_PANEL_SPAN: f32 = 400.0;

/// Safe-area insets in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
}

impl SafeAreaInsets {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }
}

/// Where a panel's content box sits, derived from the live position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    /// Viewport-local x of the panel's left edge.
    pub x: f32,
    /// Panel width in px.
    pub width: f32,
    pub top_inset: f32,
    pub bottom_inset: f32,
}

/// On-screen width of a panel for the given viewport.
pub fn panel_span(side: PanelSide, viewport_width: f32) -> f32 {
    let fraction = match side {
        PanelSide::Left => LEFT_PANEL_FRACTION,
        PanelSide::Right => RIGHT_PANEL_FRACTION,
    };
    (viewport_width * fraction).min(MAX_PANEL_SPAN)
}
