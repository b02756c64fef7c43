//! Display formatting and the internationalized label set.
//!
//! The visible summary line is always `"<start> to <end>"` with both
//! endpoints rendered through [`DISPLAY_PATTERN`] (date plus 24-hour
//! hour:minute). Labels are looked up by stable enum identifiers through
//! [`Labels`], not by position, so a reordered or shortened translation
//! table cannot mislabel a menu entry.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};
use crate::resolve::ResolvedRange;
use crate::selection::{IntervalUnit, PresetSelection, RelativeAnchor};

/// The fixed display pattern: date plus hour:minute, 24-hour clock.
pub const DISPLAY_PATTERN: &str = "%Y-%m-%d %H:%M";

// ── Range rendering ─────────────────────────────────────────────────────────

/// Render a resolved range as the widget's summary line.
///
/// Purely presentational; never fails for a valid [`ResolvedRange`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_tz::Tz;
/// use rangekit::format::{format_range, Labels};
/// use rangekit::resolve::resolve;
/// use rangekit::selection::{AbsoluteSelection, RangeSelection};
///
/// let sel = RangeSelection::Absolute(
///     AbsoluteSelection::from_raw("2020-04-01", "13:34", "2020-04-06", "10:49").unwrap(),
/// );
/// let now = Utc.with_ymd_and_hms(2020, 4, 6, 12, 0, 0).unwrap();
/// let range = resolve(&sel, now, Tz::UTC).unwrap();
/// assert_eq!(
///     format_range(&range, &Labels::default()),
///     "2020-04-01 13:34 to 2020-04-06 10:49"
/// );
/// ```
pub fn format_range(range: &ResolvedRange, labels: &Labels) -> String {
    format!(
        "{} {} {}",
        range.start.format(DISPLAY_PATTERN),
        labels.to,
        range.end.format(DISPLAY_PATTERN)
    )
}

/// Render a resolved range with an explicit strftime pattern.
///
/// The pattern is checked before rendering: a specifier chrono does not
/// recognize yields [`RangeError::InvalidPattern`] instead of reaching
/// the formatter.
pub fn format_range_as(range: &ResolvedRange, pattern: &str, labels: &Labels) -> Result<String> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(RangeError::InvalidPattern(format!(
            "'{pattern}' is not a strftime pattern"
        )));
    }
    Ok(format!(
        "{} {} {}",
        range.start.format(pattern),
        labels.to,
        range.end.format(pattern)
    ))
}

/// The tooltip line for a preset, e.g. "Last 30 minutes to Now".
pub fn preset_summary(preset: &PresetSelection, labels: &Labels) -> String {
    format!("{} {}", preset.label, labels.to_now)
}

// ── Labels ──────────────────────────────────────────────────────────────────

/// Host-facing strings, keyed by field or by enum identifier.
///
/// `Default` supplies the English set. Hosts deserialize a partial JSON
/// object over it to translate; omitted keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Labels {
    pub to: String,
    pub to_now: String,
    pub last: String,
    pub custom_range: String,
    pub relative: String,
    pub absolute: String,
    pub relative_to: String,
    pub start_time: String,
    pub end_time: String,
    pub apply: String,
    pub cancel: String,
    pub back: String,
    pub invalid_number: String,
    pub invalid_time: String,
    pub invalid_date: String,
    pub invalid_range: String,
    pub intervals: IntervalLabels,
    pub anchors: AnchorLabels,
}

/// Interval unit names, one field per [`IntervalUnit`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntervalLabels {
    pub minutes: String,
    pub hours: String,
    pub days: String,
    pub weeks: String,
    pub months: String,
    pub years: String,
}

/// Anchor day names, one field per named [`RelativeAnchor`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnchorLabels {
    pub today: String,
    pub yesterday: String,
}

impl Labels {
    /// The menu label for an interval unit.
    pub fn interval(&self, unit: IntervalUnit) -> &str {
        match unit {
            IntervalUnit::Minutes => &self.intervals.minutes,
            IntervalUnit::Hours => &self.intervals.hours,
            IntervalUnit::Days => &self.intervals.days,
            IntervalUnit::Weeks => &self.intervals.weeks,
            IntervalUnit::Months => &self.intervals.months,
            IntervalUnit::Years => &self.intervals.years,
        }
    }

    /// The menu label for an anchor day. Explicit dates render as the date.
    pub fn anchor(&self, anchor: RelativeAnchor) -> String {
        match anchor {
            RelativeAnchor::Today => self.anchors.today.clone(),
            RelativeAnchor::Yesterday => self.anchors.yesterday.clone(),
            RelativeAnchor::OnDate(date) => date.format("%Y-%m-%d").to_string(),
        }
    }

    /// The field message for a validation error, if it is one the form
    /// shows inline. Config-level errors (timezone, calendar bounds,
    /// display patterns) return `None` and are the host's to report.
    pub fn for_error(&self, err: &RangeError) -> Option<&str> {
        match err {
            RangeError::InvalidNumber(_) => Some(&self.invalid_number),
            RangeError::InvalidTimeFormat(_) => Some(&self.invalid_time),
            RangeError::InvalidDateFormat(_) => Some(&self.invalid_date),
            RangeError::InvalidRange(_) => Some(&self.invalid_range),
            RangeError::InvalidTimezone(_)
            | RangeError::InvalidDatetime(_)
            | RangeError::InvalidPattern(_) => None,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            to: "to".to_string(),
            to_now: "to Now".to_string(),
            last: "Last".to_string(),
            custom_range: "Custom Range".to_string(),
            relative: "Relative".to_string(),
            absolute: "Absolute".to_string(),
            relative_to: "Relative to".to_string(),
            start_time: "Start time".to_string(),
            end_time: "End time".to_string(),
            apply: "Apply".to_string(),
            cancel: "Cancel".to_string(),
            back: "Back".to_string(),
            invalid_number: "Number is not valid".to_string(),
            invalid_time: "Time must be a 24-hour HH:MM value".to_string(),
            invalid_date: "Date must be a YYYY-MM-DD value".to_string(),
            invalid_range: "Start must come before end".to_string(),
            intervals: IntervalLabels::default(),
            anchors: AnchorLabels::default(),
        }
    }
}

impl Default for IntervalLabels {
    fn default() -> Self {
        Self {
            minutes: "minutes".to_string(),
            hours: "hours".to_string(),
            days: "days".to_string(),
            weeks: "weeks".to_string(),
            months: "months".to_string(),
            years: "years".to_string(),
        }
    }
}

impl Default for AnchorLabels {
    fn default() -> Self {
        Self {
            today: "Today".to_string(),
            yesterday: "Yesterday".to_string(),
        }
    }
}
