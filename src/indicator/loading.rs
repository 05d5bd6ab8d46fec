use std::time::{Duration, Instant};

use tracing::debug;

use super::binding::{Binding, Subscription};
use super::curve::Curve;
use super::style::Style;
use super::transition::{Progress, Transition};
use super::trim::{GROWN, SHRUNK, Trim};
use super::widget::ArcWidget;

pub const DEFAULT_CYCLE: Duration = Duration::from_secs(1);
pub const DEFAULT_FADE: Duration = Duration::from_millis(350);
pub const MIN_DURATION: Duration = Duration::from_millis(1);

const FULL_TURN: f64 = 360.0;

/// Durations of one grow/shrink cycle and of the opacity fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub cycle: Duration,
    pub fade: Duration,
}

impl Timing {
    /// Build from seconds. Values that are not positive and finite are
    /// clamped to [`MIN_DURATION`].
    pub fn new(cycle_secs: f64, fade_secs: f64) -> Self {
        Self {
            cycle: clamp_secs(cycle_secs),
            fade: clamp_secs(fade_secs),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            cycle: DEFAULT_CYCLE,
            fade: DEFAULT_FADE,
        }
    }
}

fn clamp_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs)
        .map(|duration| duration.max(MIN_DURATION))
        .unwrap_or(MIN_DURATION)
}

/// Which extent the next trim transition heads for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Growing,
    Shrinking,
}

impl Phase {
    pub fn target(self) -> Trim {
        match self {
            Phase::Growing => GROWN,
            Phase::Shrinking => SHRUNK,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Phase::Growing => Phase::Shrinking,
            Phase::Shrinking => Phase::Growing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorEvent {
    /// The observed binding value changed.
    BindingChanged(bool),
    CycleStarted(Phase),
    /// A trim transition reached its target. Carries the phase that finished.
    CycleCompleted(Phase),
    /// A cycle finished while the binding was false, so none was chained.
    Halted,
}

/// What to draw at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Clockwise rotation within the current turn, in `[0, 360)`.
    pub rotation: f64,
    pub trim: Trim,
    pub opacity: f64,
}

/// The loading indicator's animation state.
///
/// Driven by [`LoadingIndicator::tick`] from a single UI loop. While the bound
/// flag is true every cycle rotates the arc one full turn and moves the trim
/// towards the grown or shrunk extent, alternating between the two.
#[derive(Debug)]
pub struct LoadingIndicator {
    style: Style,
    timing: Timing,
    binding: Binding<bool>,
    changes: Subscription<bool>,
    running: bool,

    phase: Phase,
    trim: Trim,
    turns: u64,
    rotation: Option<Transition<f64>>,
    trim_transition: Option<Transition<Trim>>,
    opacity: Transition<f64>,
}

impl LoadingIndicator {
    pub fn new(style: Style, binding: Binding<bool>, now: Instant) -> Self {
        Self::with_timing(style, binding, Timing::default(), now)
    }

    pub fn with_timing(style: Style, binding: Binding<bool>, timing: Timing, now: Instant) -> Self {
        let changes = binding.subscribe();
        let running = binding.get();

        let mut indicator = Self {
            style,
            timing,
            binding,
            changes,
            running,
            phase: Phase::Growing,
            trim: SHRUNK,
            turns: 0,
            rotation: None,
            trim_transition: None,
            opacity: Transition::settled(opacity_for(running), now),
        };

        if running {
            indicator.step(now);
        }
        indicator
    }

    /// Advance to `now`, returning what changed.
    pub fn tick(&mut self, now: Instant) -> Vec<IndicatorEvent> {
        let mut events = Vec::new();

        if let Some(value) = self.changes.latest() {
            if value != self.running {
                self.running = value;
                self.fade_to(opacity_for(value), now);
                events.push(IndicatorEvent::BindingChanged(value));
                debug!(continue_animation = value, "indicator binding changed");

                // An in-flight cycle chains the next one when it completes.
                if value && self.trim_transition.is_none() {
                    self.step(now);
                    events.push(IndicatorEvent::CycleStarted(self.phase));
                }
            }
        }

        if let Some(rotation) = self.rotation.as_mut() {
            if let Progress::Completed(_) = rotation.poll(now) {
                self.turns += 1;
                self.rotation = None;
            }
        }

        let completed = match self.trim_transition.as_mut() {
            Some(transition) => match transition.poll(now) {
                Progress::Completed(trim) => Some((trim, transition.end())),
                _ => None,
            },
            None => None,
        };

        if let Some((trim, ended_at)) = completed {
            self.trim_transition = None;
            self.trim = trim;

            let finished = self.phase;
            self.phase = finished.flipped();
            events.push(IndicatorEvent::CycleCompleted(finished));
            debug!(phase = ?finished, turns = self.turns, "indicator cycle completed");

            if self.running {
                // Keep cycles back to back unless the driver fell a whole
                // cycle behind.
                let lag = now.saturating_duration_since(ended_at);
                let start = if lag < self.timing.cycle { ended_at } else { now };
                self.step(start);
                events.push(IndicatorEvent::CycleStarted(self.phase));
            } else {
                events.push(IndicatorEvent::Halted);
                debug!(trim = ?self.trim, "indicator halted");
            }
        }

        events
    }

    fn step(&mut self, start: Instant) {
        self.rotation = Some(Transition::new(
            0.0,
            FULL_TURN,
            start,
            self.timing.cycle,
            Curve::Linear,
        ));
        self.trim_transition = Some(Transition::new(
            self.trim,
            self.phase.target(),
            start,
            self.timing.cycle,
            Curve::EaseInOut,
        ));
        debug!(phase = ?self.phase, turn = self.turns, "indicator cycle started");
    }

    fn fade_to(&mut self, target: f64, now: Instant) {
        let current = self.opacity.value_at(now);
        self.opacity = Transition::new(current, target, now, self.timing.fade, Curve::default());
    }

    pub fn snapshot(&self, now: Instant) -> Snapshot {
        Snapshot {
            rotation: self.rotation_within_turn(now) % FULL_TURN,
            trim: self.trim_at(now),
            opacity: self.opacity(now),
        }
    }

    pub fn widget(&self, now: Instant) -> ArcWidget {
        ArcWidget::new(self.snapshot(now), self.style)
    }

    fn rotation_within_turn(&self, now: Instant) -> f64 {
        self.rotation
            .as_ref()
            .map_or(0.0, |rotation| rotation.value_at(now))
    }

    fn trim_at(&self, now: Instant) -> Trim {
        self.trim_transition
            .as_ref()
            .map_or(self.trim, |transition| transition.value_at(now))
    }

    /// Cumulative rotation in degrees, including the current partial turn.
    pub fn rotation_degrees(&self, now: Instant) -> f64 {
        self.turns as f64 * FULL_TURN + self.rotation_within_turn(now)
    }

    /// Completed full turns.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn should_grow(&self) -> bool {
        self.phase == Phase::Growing
    }

    /// The trim reached by the last completed cycle, or the initial trim.
    pub fn trim(&self) -> Trim {
        self.trim
    }

    pub fn opacity(&self, now: Instant) -> f64 {
        self.opacity.value_at(now)
    }

    pub fn opacity_curve(&self) -> Curve {
        self.opacity.curve()
    }

    pub fn is_animating(&self) -> bool {
        self.trim_transition.is_some()
    }

    /// The binding value as of the last `tick`.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn binding(&self) -> &Binding<bool> {
        &self.binding
    }
}

fn opacity_for(visible: bool) -> f64 {
    if visible { 1.0 } else { 0.0 }
}
