//! Host-side gesture arbitration.
//!
//! [`PanelHostScreen`] owns the two motion channels and the single active
//! [`DragSession`]. It decides which gestures the panel engine claims,
//! locks the content's own scrolling while a drag is live, and turns session
//! resolutions into settle animations and outbound callbacks.

use crate::geometry::{panel_span, SafeAreaInsets};
use crate::motion_channel::{MotionChannel, OwnedMotionChannel};
use crate::panel_state::PanelState;
use edgeslide_animation::AnimationSpec;
use edgeslide_core::RuntimeHandle;
use edgeslide_foundation::{
    classify, DragResolution, DragSession, GestureConfig, GestureSample, PanelSide, PointerEvent,
    PointerPhase, SessionArbiter, SessionPhase, VelocityTracker1D, Zone,
};
use std::cell::Cell;
use std::rc::Rc;

/// Velocity cap for gesture samples, px/ms. Spikes from coarse timestamps
/// above this are clipped rather than trusted.
const MAX_TRACKED_VELOCITY: f32 = 8.0;

/// Outbound notifications emitted on commit.
#[derive(Default)]
pub struct HostCallbacks {
    pub on_open_requested: Option<Box<dyn Fn(PanelSide)>>,
    pub on_close_requested: Option<Box<dyn Fn(PanelSide)>>,
}

/// State shared with settle completion callbacks.
struct HostShared {
    width: Cell<f32>,
    open_side: Cell<Option<PanelSide>>,
    mounted: [Cell<bool>; 2],
    phase: [Cell<SessionPhase>; 2],
}

fn side_index(side: PanelSide) -> usize {
    match side {
        PanelSide::Left => 0,
        PanelSide::Right => 1,
    }
}

/// Composes the zone classifier, the two motion channels, and the underlying
/// scrollable content.
pub struct PanelHostScreen {
    config: GestureConfig,
    insets: SafeAreaInsets,
    pending_width: Option<f32>,
    arbiter: SessionArbiter,
    left: Rc<OwnedMotionChannel>,
    right: Rc<OwnedMotionChannel>,
    shared: Rc<HostShared>,
    callbacks: HostCallbacks,
    session: Option<DragSession>,
    origin: Option<(f32, f32)>,
    tracker_x: VelocityTracker1D,
    tracker_y: VelocityTracker1D,
}

impl PanelHostScreen {
    pub fn new(
        runtime: RuntimeHandle,
        width: f32,
        insets: SafeAreaInsets,
        config: GestureConfig,
        callbacks: HostCallbacks,
    ) -> Self {
        let left = Rc::new(OwnedMotionChannel::new(
            runtime.clone(),
            PanelSide::Left.closed_bound(width),
        ));
        let right = Rc::new(OwnedMotionChannel::new(
            runtime,
            PanelSide::Right.closed_bound(width),
        ));
        Self {
            config,
            insets,
            pending_width: None,
            arbiter: SessionArbiter::new(),
            left,
            right,
            shared: Rc::new(HostShared {
                width: Cell::new(width),
                open_side: Cell::new(None),
                mounted: [Cell::new(false), Cell::new(false)],
                phase: [Cell::new(SessionPhase::Idle), Cell::new(SessionPhase::Idle)],
            }),
            callbacks,
            session: None,
            origin: None,
            tracker_x: VelocityTracker1D::new(),
            tracker_y: VelocityTracker1D::new(),
        }
    }

    /// The shared claim flag; hand clones to panel views so their internal
    /// drag-to-close sessions and the host's never overlap.
    pub fn arbiter(&self) -> SessionArbiter {
        self.arbiter.clone()
    }

    pub fn channel(&self, side: PanelSide) -> Rc<OwnedMotionChannel> {
        match side {
            PanelSide::Left => Rc::clone(&self.left),
            PanelSide::Right => Rc::clone(&self.right),
        }
    }

    fn channel_ref(&self, side: PanelSide) -> &OwnedMotionChannel {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
        }
    }

    pub fn viewport_width(&self) -> f32 {
        self.shared.width.get()
    }

    pub fn insets(&self) -> SafeAreaInsets {
        self.insets
    }

    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Zone a touch-down at `origin_x` would claim right now. Reports
    /// [`Zone::Ignored`] while a session is active: the claim surface is
    /// suppressed for the duration.
    pub fn zone_for(&self, origin_x: f32) -> Zone {
        if self.arbiter.is_active() {
            Zone::Ignored
        } else {
            classify(origin_x, self.shared.width.get(), self.config.edge_width)
        }
    }

    /// Feeds one raw pointer event through the engine.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        match event.phase {
            PointerPhase::Down => self.handle_down(event),
            PointerPhase::Move => self.handle_move(event),
            PointerPhase::Up | PointerPhase::Cancel => self.handle_release(event),
        }
    }

    fn handle_down(&mut self, event: &PointerEvent) {
        if self.session.is_some() || self.arbiter.is_active() {
            log::debug!("pointer-down ignored: a drag session is already active");
            return;
        }

        let session = if let Some(side) = self.shared.open_side.get() {
            // Anywhere on screen belongs to the open panel: panel content
            // drags it, the backdrop taps it closed.
            self.channel_ref(side).stop_and_hold();
            Some(DragSession::grant_from_open(
                side,
                self.shared.width.get(),
                self.config,
            ))
        } else {
            let zone = classify(event.x, self.shared.width.get(), self.config.edge_width);
            let granted = DragSession::grant(zone, self.shared.width.get(), self.config);
            if let Some(side) = granted.as_ref().and_then(|session| session.target()) {
                // A grant stops any in-flight settle before new motion starts.
                self.channel_ref(side).stop_and_hold();
            }
            granted
        };

        let Some(session) = session else { return };
        if !self.arbiter.try_claim() {
            return;
        }
        self.origin = Some((event.x, event.y));
        self.tracker_x.reset();
        self.tracker_y.reset();
        self.tracker_x.push(event.time_ms, event.x);
        self.tracker_y.push(event.time_ms, event.y);
        self.session = Some(session);
    }

    fn handle_move(&mut self, event: &PointerEvent) {
        if self.session.is_none() {
            return;
        }
        self.tracker_x.push(event.time_ms, event.x);
        self.tracker_y.push(event.time_ms, event.y);
        let sample = self.sample_from(event);

        let (frame, first_frame) = match self.session.as_mut() {
            Some(session) => {
                let published_before = session.has_published();
                (session.on_move(&sample), !published_before)
            }
            None => return,
        };

        if let Some(frame) = frame {
            if first_frame {
                // Center grants resolve their target here; freeze whatever
                // that channel was doing before live values take over.
                self.channel_ref(frame.side).stop_and_hold();
            }
            self.shared.mounted[side_index(frame.side)].set(true);
            self.channel_ref(frame.side).jump_to(frame.position, frame.progress);
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

        self.origin = None;
        self.arbiter.release();
        // A resize that arrived mid-drag applies now that the session ended.
        self.apply_pending_width();
        self.apply_resolution(resolution, sample.origin_x);
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

    fn apply_resolution(&mut self, resolution: DragResolution, origin_x: f32) {
        match resolution {
            DragResolution::Tap { side: None, .. } => {
                // Nothing moved and nothing was targeted.
            }
            DragResolution::Tap {
                side: Some(side),
                from_open,
            } => {
                if from_open && self.hits_backdrop(side, origin_x) {
                    self.commit(side, false);
                } else {
                    // A bare tap restores whatever held before the grant.
                    self.settle(side, from_open);
                }
            }
            DragResolution::Commit { side, open } => self.commit(side, open),
            DragResolution::Revert { side, open } => self.settle(side, open),
        }
    }

    fn hits_backdrop(&self, side: PanelSide, x: f32) -> bool {
        let width = self.shared.width.get();
        let span = panel_span(side, width);
        match side {
            PanelSide::Left => x > span,
            PanelSide::Right => x < width - span,
        }
    }

    fn commit(&mut self, side: PanelSide, open: bool) {
        if open {
            self.shared.open_side.set(Some(side));
            if let Some(callback) = &self.callbacks.on_open_requested {
                callback(side);
            }
        } else {
            if self.shared.open_side.get() == Some(side) {
                self.shared.open_side.set(None);
            }
            if let Some(callback) = &self.callbacks.on_close_requested {
                callback(side);
            }
        }
        self.settle(side, open);
    }

    fn settle(&self, side: PanelSide, open: bool) {
        let index = side_index(side);
        self.shared.mounted[index].set(true);
        self.shared.phase[index].set(if open {
            SessionPhase::CommittingOpen
        } else {
            SessionPhase::CommittingClose
        });

        let target = if open {
            side.open_bound()
        } else {
            side.closed_bound(self.shared.width.get())
        };
        let overlay = if open { 1.0 } else { 0.0 };

        let shared = Rc::clone(&self.shared);
        // Weak: the pending callback lives inside the channel's own
        // animatable and must not keep the channel alive.
        let channel = Rc::downgrade(&self.channel(side));
        self.channel_ref(side).animate_to(
            target,
            overlay,
            AnimationSpec::default(),
            Box::new(move || {
                shared.phase[index].set(SessionPhase::Settled);
                shared.mounted[index].set(open);
                if !open {
                    if let Some(channel) = channel.upgrade() {
                        // Rest exactly on the current closed bound; the
                        // viewport may have resized while the settle flew.
                        channel.jump_to(side.closed_bound(shared.width.get()), 0.0);
                    }
                }
            }),
        );
    }

    /// Programmatic open. A no-op when the panel is already open and settled;
    /// refused while a drag session is live.
    pub fn open(&mut self, side: PanelSide) {
        if self.session.is_some() {
            log::debug!("open({:?}) ignored during an active drag session", side);
            return;
        }
        if self.shared.open_side.get() == Some(side) && !self.channel_ref(side).is_animating() {
            return;
        }
        if let Some(other) = self.shared.open_side.get().filter(|open| *open != side) {
            self.close(other);
        }
        self.channel_ref(side).stop_and_hold();
        self.commit(side, true);
    }

    /// Programmatic close. A no-op when the panel is already settled closed;
    /// refused while a drag session is live.
    pub fn close(&mut self, side: PanelSide) {
        if self.session.is_some() {
            log::debug!("close({:?}) ignored during an active drag session", side);
            return;
        }
        let index = side_index(side);
        let was_open = self.shared.open_side.get() == Some(side);
        if !was_open && !self.shared.mounted[index].get() && !self.channel_ref(side).is_animating()
        {
            return;
        }
        self.channel_ref(side).stop_and_hold();
        self.commit(side, false);
    }

    pub fn toggle(&mut self, side: PanelSide) {
        if self.is_open(side) {
            self.close(side);
        } else {
            self.open(side);
        }
    }

    pub fn is_open(&self, side: PanelSide) -> bool {
        self.shared.open_side.get() == Some(side)
    }

    pub fn is_any_panel_open(&self) -> bool {
        self.shared.open_side.get().is_some()
    }

    pub fn phase(&self, side: PanelSide) -> SessionPhase {
        self.shared.phase[side_index(side)].get()
    }

    pub fn panel_state(&self, side: PanelSide) -> PanelState {
        let channel = self.channel_ref(side);
        PanelState {
            side,
            position: channel.current_position(),
            overlay_strength: channel.current_overlay(),
            is_open: self.is_open(side),
            is_mounted: self.shared.mounted[side_index(side)].get(),
        }
    }

    /// False while a qualified drag owns the touch; the content list must not
    /// contend with it. Vertical scrolling stays enabled for provisionally
    /// owned touches that have shown no horizontal intent yet.
    pub fn content_scroll_enabled(&self) -> bool {
        !self
            .session
            .as_ref()
            .map(DragSession::has_published)
            .unwrap_or(false)
    }

    /// Viewport-size change. Applied immediately while idle; deferred to the
    /// end of the session otherwise, since an in-flight drag is never
    /// renormalized.
    pub fn set_viewport_width(&mut self, width: f32) {
        if width == self.shared.width.get() && self.pending_width.is_none() {
            return;
        }
        self.pending_width = Some(width);
        if self.session.is_none() {
            self.apply_pending_width();
        }
    }

    fn apply_pending_width(&mut self) {
        let Some(width) = self.pending_width.take() else {
            return;
        };
        self.shared.width.set(width);
        for side in [PanelSide::Left, PanelSide::Right] {
            let index = side_index(side);
            let resting_closed = !self.is_open(side)
                && !self.shared.mounted[index].get()
                && !self.channel_ref(side).is_animating();
            if resting_closed {
                self.channel_ref(side).jump_to(side.closed_bound(width), 0.0);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
