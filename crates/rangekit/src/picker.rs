//! The picker's non-visual state machine.
//!
//! [`PickerSession`] models what the date-time picker widget keeps between
//! a menu opening and an Apply or Cancel: one retained selection per kind,
//! the active kind tag, and the last committed range. Rendering, focus,
//! and menu navigation stay with the host; the session only guarantees the
//! state contract:
//!
//! - switching kinds keeps each kind's transient edits, so going
//!   Relative → Absolute → Relative restores the earlier relative values;
//! - [`PickerSession::apply`] resolves the active selection, commits it,
//!   and returns the wire payload exactly once per call;
//! - [`PickerSession::cancel`] discards every transient edit and rebuilds
//!   the fields from the last committed value (or the initial seed).
//!
//! Edit operations route raw field input through the `selection` parsers
//! and surface their typed errors without changing state on failure, so a
//! host can block Apply while an error is displayed.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{format_range, Labels};
use crate::resolve::{resolve, ResolvedRange};
use crate::selection::{
    default_presets, AbsoluteSelection, IntervalUnit, PresetSelection, RangeBound, RangeSelection,
    RelativeAnchor, RelativeSelection, TimeRangeKind,
};

// ── Configuration ───────────────────────────────────────────────────────────

/// Host configuration for a picker session.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// The zone every wall-clock field is interpreted in.
    pub timezone: Tz,
    /// The preset catalog shown on the quick-select view.
    pub presets: Vec<PresetSelection>,
    /// Host-facing strings.
    pub labels: Labels,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            presets: default_presets(),
            labels: Labels::default(),
        }
    }
}

impl PickerConfig {
    /// Default configuration with the zone given by IANA name.
    pub fn with_timezone(name: &str) -> Result<Self> {
        Ok(Self {
            timezone: crate::resolve::parse_timezone(name)?,
            ..Self::default()
        })
    }
}

// ── Session ─────────────────────────────────────────────────────────────────

/// Transient picker state plus the committed range.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rangekit::picker::{PickerConfig, PickerSession};
/// use rangekit::selection::{AbsoluteSelection, RangeSelection};
///
/// let mut session = PickerSession::new(PickerConfig::default());
/// session
///     .seed(RangeSelection::Absolute(
///         AbsoluteSelection::from_raw("2020-04-01", "12:34", "2020-04-06", "10:49").unwrap(),
///     ))
///     .unwrap();
///
/// let now = Utc.with_ymd_and_hms(2020, 4, 6, 12, 0, 0).unwrap();
/// assert_eq!(
///     session.summary(now).unwrap(),
///     "2020-04-01 12:34 to 2020-04-06 10:49"
/// );
///
/// let applied = session.apply(now).unwrap();
/// assert_eq!(applied.start(), "2020-04-01T12:34:00.000Z");
/// ```
#[derive(Debug, Clone)]
pub struct PickerSession {
    config: PickerConfig,
    active: TimeRangeKind,
    preset: PresetSelection,
    relative: RelativeSelection,
    absolute: AbsoluteSelection,
    /// Whether the absolute view has been entered or seeded. Until then
    /// the `absolute` slot holds a placeholder that the first entry
    /// replaces with the currently shown range.
    absolute_entered: bool,
    committed: Option<ResolvedRange>,
    initial: RangeSelection,
}

impl PickerSession {
    /// Start a session on the first catalog preset.
    pub fn new(config: PickerConfig) -> Self {
        let preset = first_preset(&config);
        let initial = RangeSelection::Preset(preset.clone());
        Self {
            config,
            active: TimeRangeKind::Preset,
            preset,
            relative: RelativeSelection::default(),
            absolute: placeholder_absolute(),
            absolute_entered: false,
            committed: None,
            initial,
        }
    }

    /// Install a host-provided default value, making it what [`cancel`]
    /// falls back to before anything is applied.
    ///
    /// [`cancel`]: PickerSession::cancel
    pub fn seed(&mut self, selection: RangeSelection) -> Result<()> {
        match &selection {
            RangeSelection::Absolute(abs) => abs.validate()?,
            RangeSelection::Relative(rel) if rel.last_number == 0 => {
                return Err(crate::RangeError::InvalidNumber(
                    "relative count must be at least 1".into(),
                ));
            }
            _ => {}
        }
        self.initial = selection.clone();
        self.load(&selection);
        Ok(())
    }

    // ── Kind switching ──────────────────────────────────────────────────

    /// The active kind.
    pub fn kind(&self) -> TimeRangeKind {
        self.active
    }

    /// Switch the active kind, keeping every kind's transient edits.
    ///
    /// The first switch into Absolute prefills its date and time fields
    /// from the range the picker currently shows, the way the widget
    /// copies the active range into the custom-range form; if the current
    /// selection does not resolve, the fields fall back to `now`'s local
    /// date at 00:00.
    pub fn switch_to(&mut self, kind: TimeRangeKind, now: DateTime<Utc>) {
        if kind == TimeRangeKind::Absolute && !self.absolute_entered {
            self.absolute = self.absolute_seed(now);
            self.absolute_entered = true;
        }
        self.active = kind;
    }

    // ── Edits ───────────────────────────────────────────────────────────

    /// Select a preset and make the preset view active.
    pub fn set_preset(&mut self, preset: PresetSelection) {
        self.preset = preset;
        self.active = TimeRangeKind::Preset;
    }

    /// Set the relative count from the raw number field.
    pub fn set_last_number(&mut self, raw: &str) -> Result<()> {
        self.relative.last_number = crate::selection::parse_last_number(raw)?;
        Ok(())
    }

    /// Set the relative interval unit.
    pub fn set_last_interval(&mut self, unit: IntervalUnit) {
        self.relative.last_interval = unit;
    }

    /// Set the relative anchor day.
    pub fn set_relative_to_when(&mut self, anchor: RelativeAnchor) {
        self.relative.relative_to_when = anchor;
    }

    /// Set the relative anchor time from the raw `HH:MM` field.
    pub fn set_relative_to_time(&mut self, raw: &str) -> Result<()> {
        self.relative.relative_to_time = crate::selection::parse_hhmm(raw)?;
        Ok(())
    }

    /// Replace the absolute selection, validating the ordering.
    pub fn set_absolute(&mut self, selection: AbsoluteSelection) -> Result<()> {
        selection.validate()?;
        self.absolute = selection;
        self.absolute_entered = true;
        Ok(())
    }

    /// Replace the absolute selection from raw date and time fields.
    pub fn set_absolute_range(
        &mut self,
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> Result<()> {
        self.set_absolute(AbsoluteSelection::from_raw(
            start_date, start_time, end_date, end_time,
        )?)
    }

    /// Shift the relative anchor time by whole hours (the hour spinner).
    pub fn shift_relative_time(&mut self, hours: i64) {
        self.relative.shift_time(hours);
    }

    /// Shift one absolute endpoint by whole hours.
    ///
    /// An edit that would put the start after the end is rejected with
    /// [`RangeError::InvalidRange`](crate::RangeError::InvalidRange) and
    /// the fields stay as they were.
    pub fn shift_absolute_hours(&mut self, bound: RangeBound, hours: i64) -> Result<()> {
        self.absolute.shift_hours(bound, hours)
    }

    // ── Reads ───────────────────────────────────────────────────────────

    /// The retained preset selection.
    pub fn preset(&self) -> &PresetSelection {
        &self.preset
    }

    /// The retained relative selection.
    pub fn relative(&self) -> &RelativeSelection {
        &self.relative
    }

    /// The retained absolute selection, once its view has been entered.
    pub fn absolute(&self) -> Option<&AbsoluteSelection> {
        self.absolute_entered.then_some(&self.absolute)
    }

    /// The preset catalog.
    pub fn presets(&self) -> &[PresetSelection] {
        &self.config.presets
    }

    /// The host-facing strings.
    pub fn labels(&self) -> &Labels {
        &self.config.labels
    }

    /// The configured zone.
    pub fn timezone(&self) -> Tz {
        self.config.timezone
    }

    /// The active selection as a kind-tagged value.
    pub fn current_selection(&self) -> RangeSelection {
        match self.active {
            TimeRangeKind::Preset => RangeSelection::Preset(self.preset.clone()),
            TimeRangeKind::Relative => RangeSelection::Relative(self.relative.clone()),
            TimeRangeKind::Absolute => RangeSelection::Absolute(self.absolute.clone()),
        }
    }

    /// Resolve the active selection against `now`.
    pub fn preview(&self, now: DateTime<Utc>) -> Result<ResolvedRange> {
        resolve(&self.current_selection(), now, self.config.timezone)
    }

    /// What the widget's field shows: the preset label on the preset
    /// view, the formatted range everywhere else.
    pub fn summary(&self, now: DateTime<Utc>) -> Result<String> {
        match self.active {
            TimeRangeKind::Preset => Ok(self.preset.label.clone()),
            TimeRangeKind::Relative | TimeRangeKind::Absolute => {
                Ok(format_range(&self.preview(now)?, &self.config.labels))
            }
        }
    }

    // ── Apply / cancel ──────────────────────────────────────────────────

    /// Resolve the active selection, commit it, and return the payload.
    ///
    /// One call produces one commit and one payload; a failing resolution
    /// commits nothing. Re-applying without intervening edits yields an
    /// equal payload rather than a second event.
    pub fn apply(&mut self, now: DateTime<Utc>) -> Result<AppliedRange> {
        let resolved = self.preview(now)?;
        let applied = AppliedRange::from_resolved(&resolved);
        self.committed = Some(resolved);
        Ok(applied)
    }

    /// Discard transient edits and rebuild the fields from the last
    /// committed value, or from the initial seed if nothing was applied.
    pub fn cancel(&mut self) {
        self.preset = first_preset(&self.config);
        self.relative = RelativeSelection::default();
        self.absolute = placeholder_absolute();
        self.absolute_entered = false;
        let baseline = match &self.committed {
            Some(range) => range.selection.clone(),
            None => self.initial.clone(),
        };
        self.load(&baseline);
    }

    /// The last applied range, if any.
    pub fn committed(&self) -> Option<&ResolvedRange> {
        self.committed.as_ref()
    }

    // ── Internals ───────────────────────────────────────────────────────

    /// Make `selection` the active value, filling its kind's slot.
    fn load(&mut self, selection: &RangeSelection) {
        self.active = selection.kind();
        match selection {
            RangeSelection::Preset(p) => self.preset = p.clone(),
            RangeSelection::Relative(r) => self.relative = r.clone(),
            RangeSelection::Absolute(a) => {
                self.absolute = a.clone();
                self.absolute_entered = true;
            }
        }
    }

    /// First-entry prefill for the absolute view.
    fn absolute_seed(&self, now: DateTime<Utc>) -> AbsoluteSelection {
        if let Ok(range) = self.preview(now) {
            if let Ok(sel) =
                AbsoluteSelection::from_naive(range.start.naive_local(), range.end.naive_local())
            {
                return sel;
            }
        }
        let today = now.with_timezone(&self.config.timezone).date_naive();
        AbsoluteSelection {
            start_date: today,
            start_time: NaiveTime::MIN,
            end_date: today,
            end_time: NaiveTime::MIN,
        }
    }
}

fn first_preset(config: &PickerConfig) -> PresetSelection {
    config
        .presets
        .first()
        .cloned()
        .unwrap_or_else(|| PresetSelection::new("Last 30 minutes", 30))
}

/// Epoch-day placeholder held until the absolute view is first entered.
fn placeholder_absolute() -> AbsoluteSelection {
    AbsoluteSelection {
        start_date: NaiveDate::default(),
        start_time: NaiveTime::MIN,
        end_date: NaiveDate::default(),
        end_time: NaiveTime::MIN,
    }
}

// ── Applied payload ─────────────────────────────────────────────────────────

/// The range payload handed to the host on Apply.
///
/// Serializes with the widget's wire shape, the selection fields plus the
/// computed `start`/`end` instants as RFC 3339 UTC strings with
/// millisecond precision:
///
/// ```json
/// {
///   "timeRangeKind": "RELATIVE",
///   "timeRangeValue": {
///     "lastNumber": 20,
///     "lastInterval": "DAYS",
///     "relativeToWhen": "YESTERDAY",
///     "relativeToTime": "15:30",
///     "start": "2018-08-31T20:30:34.000Z",
///     "end": "2018-09-20T20:30:34.000Z"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "timeRangeKind", content = "timeRangeValue")]
pub enum AppliedRange {
    #[serde(rename = "PRESET")]
    Preset(AppliedPreset),
    #[serde(rename = "RELATIVE")]
    Relative(AppliedRelative),
    #[serde(rename = "ABSOLUTE")]
    Absolute(AppliedAbsolute),
}

/// Applied preset fields plus the computed instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    #[serde(rename = "offset")]
    pub offset_minutes: u32,
    pub start: String,
    pub end: String,
}

/// Applied relative fields plus the computed instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedRelative {
    pub last_number: u32,
    pub last_interval: IntervalUnit,
    pub relative_to_when: RelativeAnchor,
    #[serde(with = "crate::selection::hhmm")]
    pub relative_to_time: NaiveTime,
    pub start: String,
    pub end: String,
}

/// Applied absolute fields plus the computed instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedAbsolute {
    pub start_date: NaiveDate,
    #[serde(with = "crate::selection::hhmm")]
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    #[serde(with = "crate::selection::hhmm")]
    pub end_time: NaiveTime,
    pub start: String,
    pub end: String,
}

impl AppliedRange {
    /// Build the payload from a resolved range.
    pub fn from_resolved(range: &ResolvedRange) -> Self {
        let start = utc_iso(&range.start);
        let end = utc_iso(&range.end);
        match &range.selection {
            RangeSelection::Preset(p) => Self::Preset(AppliedPreset {
                id: p.id.clone(),
                label: p.label.clone(),
                offset_minutes: p.offset_minutes,
                start,
                end,
            }),
            RangeSelection::Relative(r) => Self::Relative(AppliedRelative {
                last_number: r.last_number,
                last_interval: r.last_interval,
                relative_to_when: r.relative_to_when,
                relative_to_time: r.relative_to_time,
                start,
                end,
            }),
            RangeSelection::Absolute(a) => Self::Absolute(AppliedAbsolute {
                start_date: a.start_date,
                start_time: a.start_time,
                end_date: a.end_date,
                end_time: a.end_time,
                start,
                end,
            }),
        }
    }

    /// The kind tag of this payload.
    pub fn kind(&self) -> TimeRangeKind {
        match self {
            Self::Preset(_) => TimeRangeKind::Preset,
            Self::Relative(_) => TimeRangeKind::Relative,
            Self::Absolute(_) => TimeRangeKind::Absolute,
        }
    }

    /// The computed start instant, RFC 3339 UTC.
    pub fn start(&self) -> &str {
        match self {
            Self::Preset(p) => &p.start,
            Self::Relative(r) => &r.start,
            Self::Absolute(a) => &a.start,
        }
    }

    /// The computed end instant, RFC 3339 UTC.
    pub fn end(&self) -> &str {
        match self {
            Self::Preset(p) => &p.end,
            Self::Relative(r) => &r.end,
            Self::Absolute(a) => &a.end,
        }
    }
}

fn utc_iso(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
