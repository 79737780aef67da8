//! Stateful composition of the edgeslide gesture engine.
//!
//! [`PanelHostScreen`] arbitrates the pointer stream between the two panels
//! and the underlying scrollable content; [`MotionChannel`]s carry the
//! animated position and overlay strength that [`PanelView`]s render from.

pub mod geometry;
pub mod host;
pub mod motion_channel;
pub mod panel_state;
pub mod panel_view;
pub mod panels;

pub use geometry::{panel_span, PanelPlacement, SafeAreaInsets};
pub use host::{HostCallbacks, PanelHostScreen};
pub use motion_channel::{DrivenMotionChannel, MotionChannel, MotionRequest, OwnedMotionChannel};
pub use panel_state::PanelState;
pub use panel_view::PanelView;
pub use panels::{MenuPanel, ProfilePanel};
