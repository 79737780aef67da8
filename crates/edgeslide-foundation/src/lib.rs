//! Gesture primitives for the edgeslide panel engine.
//!
//! Everything in this crate is a pure value type or a self-contained state
//! machine: no animation, no channels, no callbacks. The ui layer binds these
//! pieces to motion channels and the embedder's pointer stream.

pub mod config;
pub mod drag_session;
pub mod elastic;
pub mod sample;
pub mod side;
pub mod velocity_tracker;
pub mod zone;

pub use config::GestureConfig;
pub use drag_session::{DragFrame, DragResolution, DragSession, SessionArbiter, SessionPhase};
pub use elastic::ElasticRange;
pub use sample::{GestureSample, PointerEvent, PointerPhase};
pub use side::PanelSide;
pub use velocity_tracker::VelocityTracker1D;
pub use zone::{classify, Zone};
