//! Core runtime for the edgeslide panel engine.
//!
//! Everything here is single-threaded and cooperative: animations and drag
//! sessions advance one frame at a time through callbacks registered with the
//! [`Runtime`] and drained by the embedder's event loop. There is no
//! background work and nothing ever blocks waiting for a frame.

pub mod frame_clock;
pub mod runtime;
pub mod value;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, FrameScheduler, NoopScheduler, Runtime, RuntimeHandle};
pub use value::{MutableValue, Value};
