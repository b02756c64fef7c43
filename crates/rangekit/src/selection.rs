//! Selection types for the three range kinds.
//!
//! A range is chosen either as a [`PresetSelection`] (a fixed "last N
//! minutes" offset), a [`RelativeSelection`] (a count of interval units
//! before a named anchor day/time), or an [`AbsoluteSelection`] (two
//! explicit date+time endpoints). The [`RangeSelection`] sum type carries
//! the kind tag and the matching value together, so a mismatched
//! kind/value pair cannot be constructed.
//!
//! Raw user input (count fields, `HH:MM` fields, `YYYY-MM-DD` fields)
//! enters through [`parse_last_number`], [`parse_hhmm`], and
//! [`parse_date`]; each rejects malformed input with a typed error
//! instead of clamping or guessing.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};

// ── Kind and unit enumerations ──────────────────────────────────────────────

/// Discriminant for the three selection kinds.
///
/// The kind/value pairing itself lives in [`RangeSelection`]; this tag is
/// what hosts branch on and what the wire format names `timeRangeKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeRangeKind {
    Preset,
    Relative,
    Absolute,
}

/// Interval units for relative ranges.
///
/// Minutes and hours subtract exact durations; days, weeks, months, and
/// years subtract calendar units (wall clock preserved, month-end
/// clamped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl IntervalUnit {
    /// Every unit, in menu order.
    pub const ALL: [IntervalUnit; 6] = [
        IntervalUnit::Minutes,
        IntervalUnit::Hours,
        IntervalUnit::Days,
        IntervalUnit::Weeks,
        IntervalUnit::Months,
        IntervalUnit::Years,
    ];

    /// Parse a unit name (case-insensitive, full, singular, or abbreviated).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "minutes" | "minute" | "min" | "mins" => Some(Self::Minutes),
            "hours" | "hour" | "hr" | "hrs" | "h" => Some(Self::Hours),
            "days" | "day" | "d" => Some(Self::Days),
            "weeks" | "week" | "wk" | "w" => Some(Self::Weeks),
            "months" | "month" | "mo" => Some(Self::Months),
            "years" | "year" | "yr" | "yrs" | "y" => Some(Self::Years),
            _ => None,
        }
    }
}

/// The day a relative range is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelativeAnchor {
    /// The current calendar day in the configured zone.
    Today,
    /// The previous calendar day.
    Yesterday,
    /// An explicit calendar day.
    OnDate(NaiveDate),
}

impl RelativeAnchor {
    /// Parse a named anchor. Explicit dates go through [`parse_date`].
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "today" => Some(Self::Today),
            "yesterday" => Some(Self::Yesterday),
            _ => None,
        }
    }
}

/// Which endpoint of an absolute range an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Start,
    End,
}

// ── Raw input parsers ───────────────────────────────────────────────────────

/// Parse the relative count field.
///
/// Rejects non-numeric, negative, and zero input with
/// [`RangeError::InvalidNumber`]; the value is surfaced to the host, never
/// clamped.
pub fn parse_last_number(s: &str) -> Result<u32> {
    let t = s.trim();
    let n: u32 = t
        .parse()
        .map_err(|_| RangeError::InvalidNumber(format!("'{t}' is not a positive integer")))?;
    if n == 0 {
        return Err(RangeError::InvalidNumber(format!("'{t}' must be at least 1")));
    }
    Ok(n)
}

/// Parse a 24-hour `HH:MM` time field.
///
/// Both components must be two digits; seconds are not accepted.
pub fn parse_hhmm(s: &str) -> Result<NaiveTime> {
    let t = s.trim();
    if t.len() != 5 || t.as_bytes()[2] != b':' {
        return Err(RangeError::InvalidTimeFormat(format!(
            "'{t}' is not a 24-hour HH:MM time"
        )));
    }
    NaiveTime::parse_from_str(t, "%H:%M").map_err(|_| {
        RangeError::InvalidTimeFormat(format!("'{t}' is not a 24-hour HH:MM time"))
    })
}

/// Parse a `YYYY-MM-DD` date field.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let t = s.trim();
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .map_err(|_| RangeError::InvalidDateFormat(format!("'{t}' is not a YYYY-MM-DD date")))
}

// ── Preset ──────────────────────────────────────────────────────────────────

/// A fixed "last N minutes" quick-select range.
///
/// The offset counts minutes before "now": end = now, start = now − offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetSelection {
    /// Optional stable identifier for host catalogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Menu label (e.g. "Last 30 minutes").
    pub label: String,
    /// Minutes before now.
    #[serde(rename = "offset")]
    pub offset_minutes: u32,
}

impl PresetSelection {
    pub fn new(label: impl Into<String>, offset_minutes: u32) -> Self {
        Self {
            id: None,
            label: label.into(),
            offset_minutes,
        }
    }

    pub fn with_id(id: impl Into<String>, label: impl Into<String>, offset_minutes: u32) -> Self {
        Self {
            id: Some(id.into()),
            label: label.into(),
            offset_minutes,
        }
    }
}

/// The stock preset catalog: last 30 minutes through last 24 hours.
pub fn default_presets() -> Vec<PresetSelection> {
    vec![
        PresetSelection::new("Last 30 minutes", 30),
        PresetSelection::new("Last 1 hour", 60),
        PresetSelection::new("Last 6 hours", 360),
        PresetSelection::new("Last 12 hours", 720),
        PresetSelection::new("Last 24 hours", 1440),
    ]
}

// ── Relative ────────────────────────────────────────────────────────────────

/// A range of `last_number` interval units ending at an anchor instant.
///
/// The anchor instant is the anchor day at `relative_to_time` in the
/// configured zone; the range always ends there regardless of the count
/// and unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeSelection {
    /// How many units back the range reaches. Always at least 1.
    pub last_number: u32,
    /// The unit the count is measured in.
    pub last_interval: IntervalUnit,
    /// The day the range is anchored to.
    pub relative_to_when: RelativeAnchor,
    /// Time of day on the anchor day, entered as 24-hour `HH:MM`.
    #[serde(with = "hhmm")]
    pub relative_to_time: NaiveTime,
}

impl RelativeSelection {
    /// Build from raw field input, validating the count and time.
    pub fn from_raw(
        last_number: &str,
        last_interval: IntervalUnit,
        relative_to_when: RelativeAnchor,
        relative_to_time: &str,
    ) -> Result<Self> {
        Ok(Self {
            last_number: parse_last_number(last_number)?,
            last_interval,
            relative_to_when,
            relative_to_time: parse_hhmm(relative_to_time)?,
        })
    }

    /// Shift the anchor time of day by whole hours.
    ///
    /// Wraps around midnight without touching the anchor day, the hour
    /// spinner's behavior. Both endpoints of the resolved range move
    /// together since the end is derived from the anchor.
    pub fn shift_time(&mut self, hours: i64) {
        self.relative_to_time = self.relative_to_time + Duration::hours(hours);
    }
}

impl Default for RelativeSelection {
    /// The pristine widget state: 1 minute before today at 00:00.
    fn default() -> Self {
        Self {
            last_number: 1,
            last_interval: IntervalUnit::Minutes,
            relative_to_when: RelativeAnchor::Today,
            relative_to_time: NaiveTime::MIN,
        }
    }
}

// ── Absolute ────────────────────────────────────────────────────────────────

/// A range between two explicit local date+time endpoints.
///
/// Invariant: start ≤ end. Constructors and edits that would violate it
/// fail with [`RangeError::InvalidRange`]; the endpoints are never
/// silently swapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsoluteSelection {
    pub start_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl AbsoluteSelection {
    /// Build from raw field input, validating each field and the ordering.
    pub fn from_raw(
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> Result<Self> {
        let sel = Self {
            start_date: parse_date(start_date)?,
            start_time: parse_hhmm(start_time)?,
            end_date: parse_date(end_date)?,
            end_time: parse_hhmm(end_time)?,
        };
        sel.validate()?;
        Ok(sel)
    }

    /// Build from two local date-times, validating the ordering.
    pub fn from_naive(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        let sel = Self {
            start_date: start.date(),
            start_time: start.time(),
            end_date: end.date(),
            end_time: end.time(),
        };
        sel.validate()?;
        Ok(sel)
    }

    /// The combined start date-time.
    pub fn start_naive(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    /// The combined end date-time.
    pub fn end_naive(&self) -> NaiveDateTime {
        self.end_date.and_time(self.end_time)
    }

    /// Check the start ≤ end invariant.
    pub fn validate(&self) -> Result<()> {
        if self.start_naive() > self.end_naive() {
            return Err(RangeError::InvalidRange(format!(
                "start {} is after end {}",
                self.start_naive(),
                self.end_naive()
            )));
        }
        Ok(())
    }

    /// Shift one endpoint's time of day by whole hours.
    ///
    /// The hour wraps within the same calendar date. An edit that would
    /// put the start after the end is rejected with
    /// [`RangeError::InvalidRange`] and the selection is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rangekit::selection::{AbsoluteSelection, RangeBound};
    ///
    /// let mut sel =
    ///     AbsoluteSelection::from_raw("2020-04-01", "12:34", "2020-04-06", "10:49").unwrap();
    /// sel.shift_hours(RangeBound::Start, 1).unwrap();
    /// assert_eq!(sel.start_time.to_string(), "13:34:00");
    /// assert_eq!(sel.end_time.to_string(), "10:49:00");
    /// ```
    pub fn shift_hours(&mut self, bound: RangeBound, hours: i64) -> Result<()> {
        let mut candidate = self.clone();
        match bound {
            RangeBound::Start => {
                candidate.start_time = candidate.start_time + Duration::hours(hours);
            }
            RangeBound::End => {
                candidate.end_time = candidate.end_time + Duration::hours(hours);
            }
        }
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}

// ── Tagged union ────────────────────────────────────────────────────────────

/// A kind-tagged selection, the input to [`resolve`](crate::resolve::resolve).
///
/// Serializes with the widget's wire shape: an outer `timeRangeKind` tag
/// and a `timeRangeValue` payload.
///
/// # Examples
///
/// ```
/// use rangekit::{RangeSelection, TimeRangeKind};
///
/// let wire = r#"{
///   "timeRangeKind": "PRESET",
///   "timeRangeValue": { "label": "Last 30 minutes", "offset": 30 }
/// }"#;
/// let sel: RangeSelection = serde_json::from_str(wire).unwrap();
/// assert_eq!(sel.kind(), TimeRangeKind::Preset);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "timeRangeKind", content = "timeRangeValue")]
pub enum RangeSelection {
    #[serde(rename = "PRESET")]
    Preset(PresetSelection),
    #[serde(rename = "RELATIVE")]
    Relative(RelativeSelection),
    #[serde(rename = "ABSOLUTE")]
    Absolute(AbsoluteSelection),
}

impl RangeSelection {
    /// The kind tag of this selection.
    pub fn kind(&self) -> TimeRangeKind {
        match self {
            Self::Preset(_) => TimeRangeKind::Preset,
            Self::Relative(_) => TimeRangeKind::Relative,
            Self::Absolute(_) => TimeRangeKind::Absolute,
        }
    }
}

impl From<PresetSelection> for RangeSelection {
    fn from(p: PresetSelection) -> Self {
        Self::Preset(p)
    }
}

impl From<RelativeSelection> for RangeSelection {
    fn from(r: RelativeSelection) -> Self {
        Self::Relative(r)
    }
}

impl From<AbsoluteSelection> for RangeSelection {
    fn from(a: AbsoluteSelection) -> Self {
        Self::Absolute(a)
    }
}

// ── Serde helpers ───────────────────────────────────────────────────────────

/// Serialize a `NaiveTime` as the wire's `"HH:MM"` string.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(de)?;
        super::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}
