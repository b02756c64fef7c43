//! # rangekit
//!
//! Deterministic time-range resolution for dashboard pickers.
//!
//! Rangekit turns the three selection kinds a date-time picker offers
//! (quick-select presets, relative offsets from a named anchor day, and
//! explicit absolute bounds) into concrete UTC instants. Every
//! computation takes "now" as an argument and never reads the system
//! clock, so the same selection resolves identically in production,
//! tests, and replays.
//!
//! ## Modules
//!
//! - [`selection`] - Selection types, the kind-tagged union, raw field parsers
//! - [`resolve`] - Selection + now + zone to a pair of instants
//! - [`format`] - Display formatting and host-facing label tables
//! - [`picker`] - The picker widget's state machine and applied payload
//! - [`error`] - Error types

pub mod error;
pub mod format;
pub mod picker;
pub mod resolve;
pub mod selection;

pub use error::{RangeError, Result};
pub use format::{
    format_range, format_range_as, preset_summary, AnchorLabels, IntervalLabels, Labels,
};
pub use picker::{
    AppliedAbsolute, AppliedPreset, AppliedRange, AppliedRelative, PickerConfig, PickerSession,
};
pub use resolve::{parse_timezone, resolve, ResolvedRange};
pub use selection::{
    default_presets, parse_date, parse_hhmm, parse_last_number, AbsoluteSelection, IntervalUnit,
    PresetSelection, RangeBound, RangeSelection, RelativeAnchor, RelativeSelection, TimeRangeKind,
};
