use interpolation::Ease;

/// Timing curve applied to a transition's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Curve {
    /// Map linear progress `t` to eased progress. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Curve::Linear => t,
            Curve::EaseIn => t.cubic_in(),
            Curve::EaseOut => t.cubic_out(),
            Curve::EaseInOut => t.cubic_in_out(),
        }
    }
}
