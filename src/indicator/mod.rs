mod binding;
mod curve;
mod loading;
mod style;
mod transition;
mod trim;
mod widget;

pub use binding::{Binding, Subscription};
pub use curve::Curve;
pub use loading::{
    DEFAULT_CYCLE, DEFAULT_FADE, IndicatorEvent, LoadingIndicator, MIN_DURATION, Phase, Snapshot,
    Timing,
};
pub use style::{ColorParseError, Style, format_color, parse_color};
pub use transition::{Lerp, Progress, Transition};
pub use trim::{BEGIN_MAX, BEGIN_MIN, END_MAX, END_MIN, GROWN, SHRUNK, Trim};
pub use widget::{ArcWidget, STROKE_WIDTH, VIEW_RADIUS};
