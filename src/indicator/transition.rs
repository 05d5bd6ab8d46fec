use std::time::{Duration, Instant};

use super::curve::Curve;

/// Values a [`Transition`] can interpolate.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress<T> {
    Running(T),
    /// Reported by exactly one `poll`, the first at or after the end instant.
    Completed(T),
    Done,
}

/// A single animated change from one value to another.
#[derive(Debug, Clone)]
pub struct Transition<T> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
    curve: Curve,
    completed: bool,
}

impl<T: Lerp> Transition<T> {
    pub fn new(from: T, to: T, start: Instant, duration: Duration, curve: Curve) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            curve,
            completed: false,
        }
    }

    /// A transition that is already at `value`.
    pub fn settled(value: T, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO, Curve::Linear)
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn end(&self) -> Instant {
        self.start + self.duration
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn fraction(&self, now: Instant) -> f64 {
        if self.is_finished(now) {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }

    pub fn value_at(&self, now: Instant) -> T {
        if self.is_finished(now) {
            return self.to;
        }
        self.from.lerp(self.to, self.curve.apply(self.fraction(now)))
    }

    pub fn poll(&mut self, now: Instant) -> Progress<T> {
        if self.completed {
            Progress::Done
        } else if self.is_finished(now) {
            self.completed = true;
            Progress::Completed(self.to)
        } else {
            Progress::Running(self.value_at(now))
        }
    }
}
