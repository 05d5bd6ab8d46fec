//! A circular loading indicator for ratatui.
//!
//! The arc grows, shrinks and rotates in a loop while a caller-owned
//! [`Binding<bool>`](indicator::Binding) is true, and fades out when it is
//! set to false.

pub mod indicator;

pub use indicator::{
    ArcWidget, Binding, Curve, IndicatorEvent, LoadingIndicator, Phase, Snapshot, Style, Timing,
    Trim,
};
