//! Snapshot of one panel's externally visible state.

use edgeslide_foundation::PanelSide;

/// Point-in-time view of a panel, assembled by the host on demand.
///
/// `overlay_strength` is the monotonic image of `position` under the panel's
/// progress function. `is_mounted` holds whenever the panel is open or an
/// open/close animation is in flight and drops only once the panel settles
/// fully closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelState {
    pub side: PanelSide,
    pub position: f32,
    pub overlay_strength: f32,
    pub is_open: bool,
    pub is_mounted: bool,
}
