//! Panel presentation plus its internal drag-to-close session.
//!
//! A `PanelView` renders purely from its motion channel. Once the panel is
//! open it also runs its own [`DragSession`] so a drag that starts inside the
//! panel (or on the backdrop) can close it. It shares the injected
//! [`GestureConfig`] and the commit predicate with the host instead of
//! redefining them.

use crate::geometry::{panel_span, PanelPlacement, SafeAreaInsets};
use crate::motion_channel::MotionChannel;
use edgeslide_animation::AnimationSpec;
use edgeslide_foundation::{
    DragResolution, DragSession, GestureConfig, GestureSample, PanelSide, PointerEvent,
    PointerPhase, SessionArbiter, VelocityTracker1D,
};
use std::rc::Rc;

/// Velocity cap for gesture samples, px/ms. Matches the host's cap.
const MAX_TRACKED_VELOCITY: f32 = 8.0;

pub struct PanelView {
    side: PanelSide,
    channel: Rc<dyn MotionChannel>,
    arbiter: SessionArbiter,
    config: GestureConfig,
    viewport_width: f32,
    insets: SafeAreaInsets,
    session: Option<DragSession>,
    origin: Option<(f32, f32)>,
    tracker_x: VelocityTracker1D,
    tracker_y: VelocityTracker1D,
    on_close_requested: Option<Box<dyn Fn(PanelSide)>>,
}

impl PanelView {
    pub fn new(
        side: PanelSide,
        channel: Rc<dyn MotionChannel>,
        arbiter: SessionArbiter,
        viewport_width: f32,
        insets: SafeAreaInsets,
        config: GestureConfig,
    ) -> Self {
        Self {
            side,
            channel,
            arbiter,
            config,
            viewport_width,
            insets,
            session: None,
            origin: None,
            tracker_x: VelocityTracker1D::new(),
            tracker_y: VelocityTracker1D::new(),
            on_close_requested: None,
        }
    }

    /// Registers the close notification the host listens on.
    pub fn with_close_callback(mut self, callback: impl Fn(PanelSide) + 'static) -> Self {
        self.on_close_requested = Some(Box::new(callback));
        self
    }

    pub fn side(&self) -> PanelSide {
        self.side
    }

    /// On-screen width of the panel.
    pub fn span(&self) -> f32 {
        panel_span(self.side, self.viewport_width)
    }

    pub fn position(&self) -> f32 {
        self.channel.current_position()
    }

    /// Strength of the dimming backdrop behind the panel.
    pub fn overlay_strength(&self) -> f32 {
        self.channel.current_overlay()
    }

    /// Content box derived from the live position and the safe-area insets.
    /// Insets shape layout only; they never enter the gesture math.
    pub fn placement(&self) -> PanelPlacement {
        let span = self.span();
        let position = self.channel.current_position();
        let x = match self.side {
            PanelSide::Left => position,
            PanelSide::Right => self.viewport_width - span + position,
        };
        PanelPlacement {
            x,
            width: span,
            top_inset: self.insets.top,
            bottom_inset: self.insets.bottom,
        }
    }

    /// True when `x` falls on the dimmed backdrop rather than panel content,
    /// with the panel at its open position.
    pub fn hits_backdrop(&self, x: f32) -> bool {
        match self.side {
            PanelSide::Left => x > self.span(),
            PanelSide::Right => x < self.viewport_width - self.span(),
        }
    }

    /// Viewport-size change; ignored while this view's own session is live.
    pub fn set_viewport_width(&mut self, width: f32) {
        if self.session.is_some() {
            log::debug!("panel resize deferred: drag-to-close in progress");
            return;
        }
        self.viewport_width = width;
    }

    /// Feeds one raw pointer event into the internal drag-to-close session.
    /// The embedder routes events here while this panel is open.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        match event.phase {
            PointerPhase::Down => self.handle_down(event),
            PointerPhase::Move => self.handle_move(event),
            PointerPhase::Up | PointerPhase::Cancel => self.handle_release(event),
        }
    }

    fn handle_down(&mut self, event: &PointerEvent) {
        if self.session.is_some() || !self.arbiter.try_claim() {
            log::debug!("panel pointer-down ignored: a drag session is already active");
            return;
        }
        self.channel.stop_and_hold();
        self.session = Some(DragSession::grant_from_open(
            self.side,
            self.viewport_width,
            self.config,
        ));
        self.origin = Some((event.x, event.y));
        self.tracker_x.reset();
        self.tracker_y.reset();
        self.tracker_x.push(event.time_ms, event.x);
        self.tracker_y.push(event.time_ms, event.y);
    }

    fn handle_move(&mut self, event: &PointerEvent) {
        if self.session.is_none() {
            return;
        }
        self.tracker_x.push(event.time_ms, event.x);
        self.tracker_y.push(event.time_ms, event.y);
        let sample = self.sample_from(event);
        let frame = match self.session.as_mut() {
            Some(session) => session.on_move(&sample),
            None => return,
        };
        if let Some(frame) = frame {
            self.channel.jump_to(frame.position, frame.progress);
        }
    }

    fn handle_release(&mut self, event: &PointerEvent) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        self.tracker_x.push(event.time_ms, event.x);
        self.tracker_y.push(event.time_ms, event.y);
        let sample = self.sample_from(event);
        let resolution = session.on_release(&sample);
        let origin_x = sample.origin_x;
        self.origin = None;
        self.arbiter.release();

        match resolution {
            DragResolution::Tap { .. } => {
                if self.hits_backdrop(origin_x) {
                    self.request_close();
                } else {
                    // Tap on panel content: stays open, nothing moved.
                    self.settle(true);
                }
            }
            DragResolution::Commit { open: false, .. } => self.request_close(),
            // From-open sessions only ever commit closed; anything else
            // returns the panel to its open bound.
            _ => self.settle(true),
        }
    }

    fn sample_from(&self, event: &PointerEvent) -> GestureSample {
        let (origin_x, origin_y) = self.origin.unwrap_or((event.x, event.y));
        GestureSample::new(
            origin_x,
            event.x - origin_x,
            event.y - origin_y,
            self.tracker_x.velocity_clamped(MAX_TRACKED_VELOCITY),
            self.tracker_y.velocity_clamped(MAX_TRACKED_VELOCITY),
        )
    }

    fn request_close(&self) {
        if let Some(callback) = &self.on_close_requested {
            callback(self.side);
        }
        self.settle(false);
    }

    fn settle(&self, open: bool) {
        let target = if open {
            self.side.open_bound()
        } else {
            self.side.closed_bound(self.viewport_width)
        };
        let overlay = if open { 1.0 } else { 0.0 };
        self.channel
            .animate_to(target, overlay, AnimationSpec::default(), Box::new(|| {}));
    }
}

#[cfg(test)]
#[path = "tests/panel_view_tests.rs"]
mod tests;
