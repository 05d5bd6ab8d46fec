use super::transition::Lerp;

// Grown extent.
pub const BEGIN_MIN: f64 = 0.3;
pub const END_MAX: f64 = 1.0;

// Shrunk extent, a sliver in the middle of the grown one.
pub const BEGIN_MAX: f64 = BEGIN_MIN + (END_MAX - BEGIN_MIN) / 2.0;
pub const END_MIN: f64 = BEGIN_MAX + 0.01;

pub const GROWN: Trim = Trim::new(BEGIN_MIN, END_MAX);
pub const SHRUNK: Trim = Trim::new(BEGIN_MAX, END_MIN);

/// The visible part of the circle outline, as fractions of the circumference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trim {
    pub begin: f64,
    pub end: f64,
}

impl Trim {
    pub const fn new(begin: f64, end: f64) -> Self {
        Self { begin, end }
    }

    pub fn span(&self) -> f64 {
        (self.end - self.begin).max(0.0)
    }

    /// Whether `fraction` of the outline is inside the visible arc.
    pub fn contains(&self, fraction: f64) -> bool {
        (self.begin..=self.end).contains(&fraction)
    }
}

impl Default for Trim {
    fn default() -> Self {
        SHRUNK
    }
}

impl Lerp for Trim {
    fn lerp(self, to: Self, t: f64) -> Self {
        Trim {
            begin: self.begin.lerp(to.begin, t),
            end: self.end.lerp(to.end, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn threshold_values() {
        assert!(close(BEGIN_MIN, 0.3));
        assert!(close(BEGIN_MAX, 0.65));
        assert!(close(END_MIN, 0.66));
        assert!(close(END_MAX, 1.0));
    }

    #[test]
    fn thresholds_are_strictly_ordered() {
        assert!(0.0 <= BEGIN_MIN);
        assert!(BEGIN_MIN < BEGIN_MAX);
        assert!(BEGIN_MAX < END_MIN);
        assert!(END_MIN < END_MAX);
        assert!(END_MAX <= 1.0);
    }

    #[test]
    fn grown_is_wider_than_shrunk() {
        assert!(GROWN.span() > SHRUNK.span());
        assert!(GROWN.begin < SHRUNK.begin && SHRUNK.end < GROWN.end);
    }

    #[test]
    fn lerp_moves_both_ends() {
        let halfway = SHRUNK.lerp(GROWN, 0.5);
        assert!(close(halfway.begin, (BEGIN_MAX + BEGIN_MIN) / 2.0));
        assert!(close(halfway.end, (END_MIN + END_MAX) / 2.0));
        assert_eq!(SHRUNK.lerp(GROWN, 1.0), GROWN);
    }

    #[test]
    fn contains_checks_the_visible_range() {
        assert!(GROWN.contains(0.5));
        assert!(!SHRUNK.contains(0.5));
        assert!(SHRUNK.contains(BEGIN_MAX));
    }

    #[test]
    fn default_is_shrunk() {
        assert_eq!(Trim::default(), SHRUNK);
    }
}
