#![forbid(unsafe_code)]

//! Input-field transition state machine.
//!
//! A text field's label and indicator animate between three phases derived
//! from focus and content state. [`FieldTransition`] is the driver: hand
//! it the current [`InputPhase`] whenever focus or emptiness changes, tick
//! it once per frame, and sample four output channels (label color, label
//! progress, indicator color, indicator width).
//!
//! # State Machine
//!
//! States: Focused, UnfocusedEmpty, UnfocusedNotEmpty. Every ordered pair
//! has an explicit transition entry naming which channels interpolate
//! (over [`ANIMATION_DURATION`], ease-in-out); channels not listed snap to
//! their target immediately:
//!
//! | from → to | label | indicator |
//! |-----------|-------|-----------|
//! | Focused → UnfocusedEmpty | animate | animate |
//! | Focused → UnfocusedNotEmpty | snap | animate |
//! | UnfocusedNotEmpty → Focused | snap | animate |
//! | UnfocusedEmpty → Focused | animate | animate |
//! | UnfocusedNotEmpty → UnfocusedEmpty | animate | snap |
//! | UnfocusedEmpty → UnfocusedNotEmpty | animate | snap |
//!
//! The last two rows leave the indicator snapping even though both states
//! share identical indicator targets (so the snap is unobservable). That
//! channel list is deliberate and must not be "completed".
//!
//! # Invariants
//!
//! 1. `label_progress` is always within [0.0, 1.0].
//! 2. Setting the phase it is already in is a no-op.
//! 3. After `ANIMATION_DURATION` of ticks, every channel equals its
//!    target for the current phase exactly.
//! 4. Changing the base colors rebuilds the definition and restarts every
//!    channel from its present interpolated value toward the current
//!    phase's new target.

use std::sync::Arc;
use std::time::Duration;

use ahash::AHashMap;
use tracing::{debug, trace};
use weft_style::{FieldTheme, Rgba};

use crate::Animation;
use crate::easing::ease_in_out;
use crate::lerp::Lerp;
use crate::tween::Tween;

/// Duration of every animated channel transition.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(150);

/// Indicator stroke width while focused, in width units.
pub const INDICATOR_FOCUSED_WIDTH: f32 = 2.0;

/// Indicator stroke width while unfocused, in width units.
pub const INDICATOR_UNFOCUSED_WIDTH: f32 = 1.0;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The discrete focus/content state driving the transition machine.
///
/// Derived fresh each evaluation from two inputs; never stored beyond the
/// latest derived value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPhase {
    /// The field has keyboard focus.
    Focused,
    /// Unfocused with no text content.
    UnfocusedEmpty,
    /// Unfocused with text content.
    UnfocusedNotEmpty,
}

impl InputPhase {
    /// Derive the phase from the current focus and emptiness inputs.
    #[must_use]
    pub fn derive(focused: bool, text_empty: bool) -> Self {
        if focused {
            InputPhase::Focused
        } else if text_empty {
            InputPhase::UnfocusedEmpty
        } else {
            InputPhase::UnfocusedNotEmpty
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            InputPhase::Focused => 0,
            InputPhase::UnfocusedEmpty => 1,
            InputPhase::UnfocusedNotEmpty => 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Definition
// ---------------------------------------------------------------------------

/// The base color triple a [`TransitionDefinition`] is generated from.
///
/// Value equality over this triple is the memoization key: two fields with
/// the same colors share one definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldColors {
    /// Label and indicator color while focused.
    pub active: Rgba,
    /// Label color while unfocused.
    pub label_inactive: Rgba,
    /// Indicator color while unfocused.
    pub indicator_inactive: Rgba,
}

impl FieldColors {
    /// Resolve the triple from a theme context.
    #[must_use]
    pub fn from_theme(theme: &FieldTheme) -> Self {
        Self {
            active: theme.active,
            label_inactive: theme.label_inactive(),
            indicator_inactive: theme.indicator_inactive(),
        }
    }
}

impl From<&FieldTheme> for FieldColors {
    fn from(theme: &FieldTheme) -> Self {
        Self::from_theme(theme)
    }
}

/// Terminal target values for one phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTargets {
    pub label_color: Rgba,
    pub indicator_color: Rgba,
    pub label_progress: f32,
    pub indicator_width: f32,
}

/// Which channels interpolate over a given (from, to) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TransitionSpec {
    label: bool,
    indicator: bool,
}

impl TransitionSpec {
    const SNAP_ALL: TransitionSpec = TransitionSpec {
        label: false,
        indicator: false,
    };
}

/// Immutable per-phase targets plus the per-ordered-pair animation table,
/// generated once per distinct [`FieldColors`] triple.
#[derive(Debug)]
pub struct TransitionDefinition {
    colors: FieldColors,
    targets: [PhaseTargets; 3],
    specs: [[Option<TransitionSpec>; 3]; 3],
}

impl TransitionDefinition {
    /// Generate the definition for the given color triple.
    #[must_use]
    pub fn generate(colors: FieldColors) -> Self {
        let targets = [
            // Focused
            PhaseTargets {
                label_color: colors.active,
                indicator_color: colors.active,
                label_progress: 1.0,
                indicator_width: INDICATOR_FOCUSED_WIDTH,
            },
            // UnfocusedEmpty
            PhaseTargets {
                label_color: colors.label_inactive,
                indicator_color: colors.indicator_inactive,
                label_progress: 0.0,
                indicator_width: INDICATOR_UNFOCUSED_WIDTH,
            },
            // UnfocusedNotEmpty
            PhaseTargets {
                label_color: colors.label_inactive,
                indicator_color: colors.indicator_inactive,
                label_progress: 1.0,
                indicator_width: INDICATOR_UNFOCUSED_WIDTH,
            },
        ];

        let mut specs: [[Option<TransitionSpec>; 3]; 3] = [[None; 3]; 3];
        let mut define = |from: InputPhase, to: InputPhase, label: bool, indicator: bool| {
            specs[from.index()][to.index()] = Some(TransitionSpec { label, indicator });
        };
        use InputPhase::{Focused, UnfocusedEmpty, UnfocusedNotEmpty};
        define(Focused, UnfocusedEmpty, true, true);
        define(Focused, UnfocusedNotEmpty, false, true);
        define(UnfocusedNotEmpty, Focused, false, true);
        define(UnfocusedEmpty, Focused, true, true);
        // These two animate the label only; the indicator targets happen to
        // be equal on both sides, so the snap is unobservable, but the
        // channel list is intentional and stays as-is.
        define(UnfocusedNotEmpty, UnfocusedEmpty, true, false);
        define(UnfocusedEmpty, UnfocusedNotEmpty, true, false);

        Self {
            colors,
            targets,
            specs,
        }
    }

    /// The color triple this definition was generated from.
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &FieldColors {
        &self.colors
    }

    /// Terminal target values for a phase.
    #[inline]
    #[must_use]
    pub fn targets(&self, phase: InputPhase) -> &PhaseTargets {
        &self.targets[phase.index()]
    }

    /// Animation spec for an ordered phase pair. Every reachable pair has
    /// an explicit entry; a missing one is a table bug and snaps all
    /// channels in release builds.
    fn spec(&self, from: InputPhase, to: InputPhase) -> TransitionSpec {
        match self.specs[from.index()][to.index()] {
            Some(spec) => spec,
            None => {
                debug_assert!(false, "no transition entry for {from:?} -> {to:?}");
                TransitionSpec::SNAP_ALL
            }
        }
    }
}

/// Shared definitions memoized by color triple.
///
/// Many fields on one screen typically share a theme; routing their
/// construction through a cache gives them one `Arc`'d definition.
#[derive(Debug, Default)]
pub struct DefinitionCache {
    map: AHashMap<FieldColors, Arc<TransitionDefinition>>,
}

impl DefinitionCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the definition for `colors`, generating it on first use.
    #[must_use]
    pub fn get_or_generate(&mut self, colors: FieldColors) -> Arc<TransitionDefinition> {
        Arc::clone(self.map.entry(colors).or_insert_with(|| {
            debug!(target: "weft::field", ?colors, "generating transition definition");
            Arc::new(TransitionDefinition::generate(colors))
        }))
    }

    /// Number of distinct color triples cached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// One animated output channel: either settled at `target` or tweening
/// from `from` toward it.
#[derive(Debug, Clone)]
struct Channel<T: Lerp + PartialEq> {
    from: T,
    target: T,
    tween: Option<Tween>,
}

impl<T: Lerp + PartialEq> Channel<T> {
    fn settled(target: T) -> Self {
        Self {
            from: target,
            target,
            tween: None,
        }
    }

    fn current(&self) -> T {
        match &self.tween {
            Some(tween) => self.from.lerp(self.target, tween.value()),
            None => self.target,
        }
    }

    fn snap_to(&mut self, target: T) {
        self.from = target;
        self.target = target;
        self.tween = None;
    }

    /// Start a tween from the present interpolated value toward `target`.
    /// Equal endpoints settle immediately.
    fn animate_to(&mut self, target: T) {
        let current = self.current();
        if current == target {
            self.snap_to(target);
            return;
        }
        self.from = current;
        self.target = target;
        self.tween = Some(Tween::new(ANIMATION_DURATION).easing(ease_in_out));
    }

    fn tick(&mut self, dt: Duration) {
        if let Some(tween) = &mut self.tween {
            tween.tick(dt);
            if tween.is_complete() {
                self.from = self.target;
                self.tween = None;
            }
        }
    }

    fn is_settled(&self) -> bool {
        self.tween.is_none()
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// The four sampled output values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Current label color.
    pub label_color: Rgba,
    /// Label position progress: 0.0 resting in the field, 1.0 floated.
    pub label_progress: f32,
    /// Current indicator stroke color.
    pub indicator_color: Rgba,
    /// Current indicator stroke width in width units.
    pub indicator_width: f32,
}

/// Frame-driven animation driver for one input field.
///
/// Single-threaded by design: phase changes, color changes, ticks, and
/// sampling all happen on the same logical thread. If the caller stops
/// ticking, values simply hold.
#[derive(Debug)]
pub struct FieldTransition {
    definition: Arc<TransitionDefinition>,
    phase: InputPhase,
    label_color: Channel<Rgba>,
    label_progress: Channel<f32>,
    indicator_color: Channel<Rgba>,
    indicator_width: Channel<f32>,
}

impl FieldTransition {
    /// Create a driver settled at [`InputPhase::UnfocusedEmpty`] with a
    /// freshly generated definition.
    #[must_use]
    pub fn new(colors: FieldColors) -> Self {
        Self::with_definition(Arc::new(TransitionDefinition::generate(colors)))
    }

    /// Create a driver settled at [`InputPhase::UnfocusedEmpty`] sharing
    /// an existing definition (see [`DefinitionCache`]).
    #[must_use]
    pub fn with_definition(definition: Arc<TransitionDefinition>) -> Self {
        let phase = InputPhase::UnfocusedEmpty;
        let targets = *definition.targets(phase);
        Self {
            definition,
            phase,
            label_color: Channel::settled(targets.label_color),
            label_progress: Channel::settled(targets.label_progress),
            indicator_color: Channel::settled(targets.indicator_color),
            indicator_width: Channel::settled(targets.indicator_width),
        }
    }

    /// Settle immediately at `phase` (builder pattern). No animation.
    #[must_use]
    pub fn with_initial_phase(mut self, phase: InputPhase) -> Self {
        let targets = *self.definition.targets(phase);
        self.phase = phase;
        self.label_color.snap_to(targets.label_color);
        self.label_progress.snap_to(targets.label_progress);
        self.indicator_color.snap_to(targets.indicator_color);
        self.indicator_width.snap_to(targets.indicator_width);
        self
    }

    /// The current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> InputPhase {
        self.phase
    }

    /// Whether no channel is mid-animation.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.label_color.is_settled()
            && self.label_progress.is_settled()
            && self.indicator_color.is_settled()
            && self.indicator_width.is_settled()
    }

    /// Derive the phase from raw focus/emptiness inputs and apply it.
    pub fn set_inputs(&mut self, focused: bool, text_empty: bool) {
        self.set_phase(InputPhase::derive(focused, text_empty));
    }

    /// Move to `phase`. Unchanged phase is a no-op; otherwise channels
    /// listed for the (from, to) pair animate from their present value and
    /// the rest snap to the new targets.
    pub fn set_phase(&mut self, phase: InputPhase) {
        if phase == self.phase {
            return;
        }
        let spec = self.definition.spec(self.phase, phase);
        let targets = *self.definition.targets(phase);
        trace!(target: "weft::field", from = ?self.phase, to = ?phase, "phase transition");

        if spec.label {
            self.label_color.animate_to(targets.label_color);
            self.label_progress.animate_to(targets.label_progress);
        } else {
            self.label_color.snap_to(targets.label_color);
            self.label_progress.snap_to(targets.label_progress);
        }
        if spec.indicator {
            self.indicator_color.animate_to(targets.indicator_color);
            self.indicator_width.animate_to(targets.indicator_width);
        } else {
            self.indicator_color.snap_to(targets.indicator_color);
            self.indicator_width.snap_to(targets.indicator_width);
        }
        self.phase = phase;
    }

    /// Swap the base colors. Equal colors are a no-op; otherwise the
    /// definition is rebuilt and every channel restarts from its present
    /// interpolated value toward the current phase's new target.
    pub fn set_colors(&mut self, colors: FieldColors) {
        if *self.definition.colors() == colors {
            return;
        }
        self.apply_definition(Arc::new(TransitionDefinition::generate(colors)));
    }

    /// Like [`set_colors`](FieldTransition::set_colors), sharing
    /// definitions through `cache`.
    pub fn set_colors_cached(&mut self, colors: FieldColors, cache: &mut DefinitionCache) {
        if *self.definition.colors() == colors {
            return;
        }
        self.apply_definition(cache.get_or_generate(colors));
    }

    fn apply_definition(&mut self, definition: Arc<TransitionDefinition>) {
        debug!(target: "weft::field", colors = ?definition.colors(), "rebinding definition");
        let targets = *definition.targets(self.phase);
        self.definition = definition;
        self.label_color.animate_to(targets.label_color);
        self.label_progress.animate_to(targets.label_progress);
        self.indicator_color.animate_to(targets.indicator_color);
        self.indicator_width.animate_to(targets.indicator_width);
    }

    /// Advance all in-flight channel animations by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.label_color.tick(dt);
        self.label_progress.tick(dt);
        self.indicator_color.tick(dt);
        self.indicator_width.tick(dt);
    }

    /// Sample the four output channels for the current frame.
    #[must_use]
    pub fn sample(&self) -> FieldSample {
        FieldSample {
            label_color: self.label_color.current(),
            label_progress: self.label_progress.current().clamp(0.0, 1.0),
            indicator_color: self.indicator_color.current(),
            indicator_width: self.indicator_width.current(),
        }
    }
}
