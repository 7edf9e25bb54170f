#![forbid(unsafe_code)]

//! Orientation-locked drag tracking.
//!
//! [`DragTracker`] is a stateful processor that turns raw pointer samples
//! (down, move, up) into semantic [`DragEvent`]s along a single axis. The
//! caller feeds it positions plus the time elapsed since the previous
//! sample; the tracker owns slop detection, axis locking, direction
//! reversal, and velocity estimation.
//!
//! # State Machine
//!
//! Idle → Pending (pointer down) → Dragging (accumulated axis travel
//! exceeds the touch slop) → Idle (pointer up or cancel).
//! With [`DragConfig::start_immediately`] the Pending stage is skipped and
//! the drag starts on the down sample, which lets callers catch a widget
//! that is still settling from a previous fling.
//!
//! # Invariants
//!
//! 1. At most one [`DragEvent::Started`] per down/up cycle.
//! 2. [`DragEvent::Moved`] only occurs between `Started` and
//!    `Stopped`/`Cancelled`.
//! 3. A disabled tracker emits nothing and changes no state.
//! 4. `reset()` returns to Idle without emitting.
//!
//! # Failure Modes
//!
//! - A zero `dt` on a move sample skips the velocity update (the positional
//!   delta is still reported).
//! - `pointer_up` without a preceding drag start emits nothing; the sample
//!   sequence was a press, which is not this tracker's concern.

use std::time::Duration;

use tracing::trace;

use crate::geometry::Point;

/// Smoothing factor for the exponential velocity estimate.
const VELOCITY_SMOOTHING: f32 = 0.25;

/// The axis a [`DragTracker`] locks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[inline]
    fn component(self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }
}

/// Thresholds and switches for drag tracking.
#[derive(Debug, Clone)]
pub struct DragConfig {
    /// Whether the tracker reacts to input at all.
    pub enabled: bool,
    /// Reverse the sign of reported deltas and velocity.
    pub reverse_direction: bool,
    /// Start the drag on pointer down, bypassing the slop stage.
    pub start_immediately: bool,
    /// Axis travel (layout units) required before a drag starts (default: 8.0).
    pub touch_slop: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reverse_direction: false,
            start_immediately: false,
            touch_slop: 8.0,
        }
    }
}

/// A semantic drag event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The drag started; carries the pointer-down position.
    Started(Point),
    /// The pointer moved by this axis delta while dragging.
    Moved(f32),
    /// The pointer was released; carries the estimated axis velocity in
    /// units per second.
    Stopped { velocity: f32 },
    /// The drag was cancelled; no velocity is meaningful.
    Cancelled,
}

#[derive(Debug, Clone, Copy)]
enum TrackState {
    Idle,
    /// Pointer is down but slop has not been exceeded.
    Pending { down: Point },
    /// Drag in progress.
    Dragging { last: Point },
}

/// Stateful, tick-driven drag tracker for a single orientation.
///
/// Feed it pointer samples via [`pointer_down`](DragTracker::pointer_down),
/// [`pointer_move`](DragTracker::pointer_move), and
/// [`pointer_up`](DragTracker::pointer_up); each call returns the semantic
/// events it produced, in order.
#[derive(Debug)]
pub struct DragTracker {
    orientation: Orientation,
    config: DragConfig,
    state: TrackState,
    velocity: f32,
}

impl DragTracker {
    /// Create a tracker for the given orientation with the given config.
    #[must_use]
    pub fn new(orientation: Orientation, config: DragConfig) -> Self {
        Self {
            orientation,
            config,
            state: TrackState::Idle,
            velocity: 0.0,
        }
    }

    /// Create a tracker with the default config.
    #[must_use]
    pub fn with_defaults(orientation: Orientation) -> Self {
        Self::new(orientation, DragConfig::default())
    }

    /// The tracked orientation.
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether a drag is currently in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, TrackState::Dragging { .. })
    }

    /// Process a pointer-down sample.
    pub fn pointer_down(&mut self, pos: Point) -> Vec<DragEvent> {
        if !self.config.enabled {
            return Vec::new();
        }
        self.velocity = 0.0;
        if self.config.start_immediately {
            trace!(target: "weft::drag", ?pos, "drag started immediately");
            self.state = TrackState::Dragging { last: pos };
            vec![DragEvent::Started(pos)]
        } else {
            self.state = TrackState::Pending { down: pos };
            Vec::new()
        }
    }

    /// Process a pointer-move sample. `dt` is the time since the previous
    /// sample and is only used for velocity estimation.
    pub fn pointer_move(&mut self, pos: Point, dt: Duration) -> Vec<DragEvent> {
        if !self.config.enabled {
            return Vec::new();
        }
        match self.state {
            TrackState::Idle => Vec::new(),
            TrackState::Pending { down } => {
                let total = self.orientation.component(pos) - self.orientation.component(down);
                if total.abs() > self.config.touch_slop {
                    // Slop is consumed: only travel beyond it is reported.
                    let residual = total - self.config.touch_slop.copysign(total);
                    trace!(target: "weft::drag", ?down, total, "drag started past slop");
                    self.state = TrackState::Dragging { last: pos };
                    self.update_velocity(residual, dt);
                    let mut events = vec![DragEvent::Started(down)];
                    if residual != 0.0 {
                        events.push(DragEvent::Moved(self.signed(residual)));
                    }
                    events
                } else {
                    Vec::new()
                }
            }
            TrackState::Dragging { last } => {
                let delta = self.orientation.component(pos) - self.orientation.component(last);
                self.state = TrackState::Dragging { last: pos };
                if delta == 0.0 {
                    return Vec::new();
                }
                self.update_velocity(delta, dt);
                vec![DragEvent::Moved(self.signed(delta))]
            }
        }
    }

    /// Process a pointer-up sample.
    pub fn pointer_up(&mut self) -> Vec<DragEvent> {
        if !self.config.enabled {
            return Vec::new();
        }
        let events = if self.is_dragging() {
            let velocity = self.signed(self.velocity);
            trace!(target: "weft::drag", velocity, "drag stopped");
            vec![DragEvent::Stopped { velocity }]
        } else {
            Vec::new()
        };
        self.state = TrackState::Idle;
        self.velocity = 0.0;
        events
    }

    /// Cancel any drag in progress.
    pub fn cancel(&mut self) -> Vec<DragEvent> {
        let events = if self.is_dragging() {
            trace!(target: "weft::drag", "drag cancelled");
            vec![DragEvent::Cancelled]
        } else {
            Vec::new()
        };
        self.state = TrackState::Idle;
        self.velocity = 0.0;
        events
    }

    /// Return to Idle without emitting. For focus-loss handling, where the
    /// caller owns cancellation semantics.
    pub fn reset(&mut self) {
        self.state = TrackState::Idle;
        self.velocity = 0.0;
    }

    fn update_velocity(&mut self, delta: f32, dt: Duration) {
        let secs = dt.as_secs_f32();
        if secs <= 0.0 {
            return;
        }
        let instantaneous = delta / secs;
        self.velocity += (instantaneous - self.velocity) * VELOCITY_SMOOTHING;
    }

    #[inline]
    fn signed(&self, value: f32) -> f32 {
        if self.config.reverse_direction {
            -value
        } else {
            value
        }
    }
}
