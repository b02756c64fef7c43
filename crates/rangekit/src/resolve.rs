//! Deterministic range resolution.
//!
//! Converts a kind-tagged [`RangeSelection`] into a concrete
//! `{start, end}` instant pair. All functions take explicit inputs (no
//! system clock access): the caller provides the "now" anchor once per
//! call, so start and end are always derived from the same instant and a
//! resolution can be reproduced exactly in tests.
//!
//! # Zone handling
//!
//! Every resolution happens in one configured IANA zone; UTC and local
//! wall clocks are never mixed within a single call. Day-level interval
//! subtraction moves the calendar date and keeps the wall-clock time
//! (crossing a DST change does not shift the selected time of day);
//! minute- and hour-level subtraction is exact duration arithmetic. A
//! wall clock that is ambiguous or nonexistent in the zone is an error,
//! never a guess.

use chrono::{DateTime, Days, Duration, Months, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{RangeError, Result};
use crate::selection::{
    AbsoluteSelection, IntervalUnit, PresetSelection, RangeSelection, RelativeAnchor,
    RelativeSelection, TimeRangeKind,
};

// ── Resolved value ──────────────────────────────────────────────────────────

/// A concrete instant pair produced by [`resolve`].
///
/// Immutable: a new selection produces a new `ResolvedRange`, nothing is
/// ever adjusted in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRange {
    /// Start of the range in the resolution zone.
    pub start: DateTime<Tz>,
    /// End of the range in the resolution zone.
    pub end: DateTime<Tz>,
    /// The kind of selection this range came from.
    pub kind: TimeRangeKind,
    /// The selection the range was derived from.
    pub selection: RangeSelection,
}

impl ResolvedRange {
    /// The exact span between start and end.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

// ── resolve ─────────────────────────────────────────────────────────────────

/// Resolve a selection into a concrete instant pair.
///
/// # Arguments
///
/// * `selection` — The kind-tagged selection to resolve
/// * `now` — The reference "now" instant, captured once for the whole call
/// * `tz` — The zone every wall-clock field is interpreted in
///
/// # Errors
///
/// * [`RangeError::InvalidNumber`] — preset offset of zero, relative count
///   of zero, or a count whose subtraction cannot be represented
/// * [`RangeError::InvalidRange`] — absolute start after end
/// * [`RangeError::InvalidDatetime`] — a wall clock that is ambiguous or
///   nonexistent in `tz`, or arithmetic past the supported calendar
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_tz::Tz;
/// use rangekit::resolve::resolve;
/// use rangekit::selection::{
///     parse_hhmm, IntervalUnit, RangeSelection, RelativeAnchor, RelativeSelection,
/// };
///
/// // 20 days before yesterday at 13:30, with "today" being 2024-06-15.
/// let now = Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
/// let sel = RangeSelection::Relative(RelativeSelection {
///     last_number: 20,
///     last_interval: IntervalUnit::Days,
///     relative_to_when: RelativeAnchor::Yesterday,
///     relative_to_time: parse_hhmm("13:30").unwrap(),
/// });
///
/// let range = resolve(&sel, now, Tz::UTC).unwrap();
/// assert_eq!(range.end.format("%Y-%m-%d %H:%M").to_string(), "2024-06-14 13:30");
/// assert_eq!(range.start.format("%Y-%m-%d %H:%M").to_string(), "2024-05-25 13:30");
/// ```
pub fn resolve(selection: &RangeSelection, now: DateTime<Utc>, tz: Tz) -> Result<ResolvedRange> {
    let (start, end) = match selection {
        RangeSelection::Preset(p) => resolve_preset(p, now, tz)?,
        RangeSelection::Relative(r) => resolve_relative(r, now, tz)?,
        RangeSelection::Absolute(a) => resolve_absolute(a, tz)?,
    };
    Ok(ResolvedRange {
        start,
        end,
        kind: selection.kind(),
        selection: selection.clone(),
    })
}

/// Parse an IANA timezone name.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| RangeError::InvalidTimezone(format!("'{s}'")))
}

// ── Per-kind resolution ─────────────────────────────────────────────────────

/// Preset: end = now, start = now − offset minutes.
fn resolve_preset(
    preset: &PresetSelection,
    now: DateTime<Utc>,
    tz: Tz,
) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
    if preset.offset_minutes == 0 {
        return Err(RangeError::InvalidNumber(
            "preset offset must be at least 1 minute".to_string(),
        ));
    }
    let end = now.with_timezone(&tz);
    let start = end
        .checked_sub_signed(Duration::minutes(i64::from(preset.offset_minutes)))
        .ok_or_else(|| {
            RangeError::InvalidDatetime(format!(
                "offset of {} minutes reaches past the supported calendar",
                preset.offset_minutes
            ))
        })?;
    Ok((start, end))
}

/// Relative: end = anchor day at the anchor time, start = end − count units.
fn resolve_relative(
    rel: &RelativeSelection,
    now: DateTime<Utc>,
    tz: Tz,
) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
    if rel.last_number == 0 {
        return Err(RangeError::InvalidNumber(
            "relative count must be at least 1".to_string(),
        ));
    }

    let today = now.with_timezone(&tz).date_naive();
    let anchor_day = match rel.relative_to_when {
        RelativeAnchor::Today => today,
        RelativeAnchor::Yesterday => today.pred_opt().ok_or_else(|| {
            RangeError::InvalidDatetime("no day before the supported calendar".to_string())
        })?,
        RelativeAnchor::OnDate(date) => date,
    };

    let end = local_instant(anchor_day.and_time(rel.relative_to_time), tz)?;
    let start = subtract_interval(end, rel.last_number, rel.last_interval, tz)?;
    Ok((start, end))
}

/// Absolute: combine the date+time pairs and require start ≤ end.
fn resolve_absolute(abs: &AbsoluteSelection, tz: Tz) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
    abs.validate()?;
    let start = local_instant(abs.start_naive(), tz)?;
    let end = local_instant(abs.end_naive(), tz)?;
    // Ordering must hold for the instants, not just the wall clocks
    if start > end {
        return Err(RangeError::InvalidRange(format!(
            "start {start} is after end {end}"
        )));
    }
    Ok((start, end))
}

// ── Interval arithmetic ─────────────────────────────────────────────────────

/// Subtract `count` units from `end`.
///
/// Minutes and hours are exact durations; days and weeks move the
/// calendar date with the wall clock preserved; months and years use
/// calendar months with the day of month clamped (May 31 − 1 month is
/// April 30).
fn subtract_interval(
    end: DateTime<Tz>,
    count: u32,
    unit: IntervalUnit,
    tz: Tz,
) -> Result<DateTime<Tz>> {
    match unit {
        IntervalUnit::Minutes => end
            .checked_sub_signed(Duration::minutes(i64::from(count)))
            .ok_or_else(|| out_of_range(count, unit)),
        IntervalUnit::Hours => end
            .checked_sub_signed(Duration::hours(i64::from(count)))
            .ok_or_else(|| out_of_range(count, unit)),
        IntervalUnit::Days => shift_back_days(end, u64::from(count), tz)
            .ok_or_else(|| out_of_range(count, unit)),
        IntervalUnit::Weeks => shift_back_days(end, u64::from(count) * 7, tz)
            .ok_or_else(|| out_of_range(count, unit)),
        IntervalUnit::Months => shift_back_months(end, count, tz)
            .ok_or_else(|| out_of_range(count, unit)),
        IntervalUnit::Years => count
            .checked_mul(12)
            .and_then(|months| shift_back_months(end, months, tz))
            .ok_or_else(|| out_of_range(count, unit)),
    }
}

/// Move the calendar date back, keeping the wall-clock time.
fn shift_back_days(end: DateTime<Tz>, days: u64, tz: Tz) -> Option<DateTime<Tz>> {
    let date = end.date_naive().checked_sub_days(Days::new(days))?;
    tz.from_local_datetime(&date.and_time(end.time())).single()
}

/// Move back whole calendar months, keeping the wall-clock time.
fn shift_back_months(end: DateTime<Tz>, months: u32, tz: Tz) -> Option<DateTime<Tz>> {
    let date = end.date_naive().checked_sub_months(Months::new(months))?;
    tz.from_local_datetime(&date.and_time(end.time())).single()
}

fn out_of_range(count: u32, unit: IntervalUnit) -> RangeError {
    RangeError::InvalidDatetime(format!(
        "{count} {unit:?} reaches past the supported calendar"
    ))
}

/// Attach a zone to a local wall clock, erring on DST gaps and folds.
fn local_instant(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>> {
    tz.from_local_datetime(&naive).single().ok_or_else(|| {
        RangeError::InvalidDatetime(format!(
            "'{naive}' is ambiguous or nonexistent in {tz}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{
        parse_date, parse_hhmm, AbsoluteSelection, PresetSelection, RangeSelection,
        RelativeAnchor, RelativeSelection,
    };
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use proptest::prelude::*;

    fn at_utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn relative(
        count: u32,
        unit: IntervalUnit,
        when: RelativeAnchor,
        time: &str,
    ) -> RangeSelection {
        RangeSelection::Relative(RelativeSelection {
            last_number: count,
            last_interval: unit,
            relative_to_when: when,
            relative_to_time: parse_hhmm(time).unwrap(),
        })
    }

    fn fmt(dt: DateTime<Tz>) -> String {
        dt.format("%Y-%m-%d %H:%M").to_string()
    }

    // ── preset tests ────────────────────────────────────────────────────

    #[test]
    fn test_preset_ends_at_now() {
        let now = at_utc(2024, 6, 15, 9, 0, 0);
        let sel = RangeSelection::Preset(PresetSelection::new("Last 30 minutes", 30));
        let range = resolve(&sel, now, Tz::UTC).unwrap();
        assert_eq!(range.end.with_timezone(&Utc), now);
        assert_eq!(range.duration(), Duration::minutes(30));
        assert_eq!(range.kind, TimeRangeKind::Preset);
    }

    #[test]
    fn test_preset_offset_is_exact_across_dst() {
        // 24h before 14:00 UTC on the US spring-forward day is still
        // exactly 24h of elapsed time, not a wall-clock day
        let tz: Tz = "America/New_York".parse().unwrap();
        let now = at_utc(2024, 3, 10, 14, 0, 0);
        let sel = RangeSelection::Preset(PresetSelection::new("Last 24 hours", 1440));
        let range = resolve(&sel, now, tz).unwrap();
        assert_eq!(range.duration(), Duration::hours(24));
        assert_eq!(range.start.with_timezone(&Utc), at_utc(2024, 3, 9, 14, 0, 0));
    }

    #[test]
    fn test_preset_zero_offset_is_rejected() {
        let sel = RangeSelection::Preset(PresetSelection::new("Nothing", 0));
        let result = resolve(&sel, at_utc(2024, 6, 15, 9, 0, 0), Tz::UTC);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid number"), "got: {err}");
    }

    // ── relative tests ──────────────────────────────────────────────────

    #[test]
    fn test_twenty_days_before_yesterday() {
        let now = at_utc(2024, 6, 15, 9, 0, 0);
        let sel = relative(20, IntervalUnit::Days, RelativeAnchor::Yesterday, "13:30");
        let range = resolve(&sel, now, Tz::UTC).unwrap();
        assert_eq!(fmt(range.end), "2024-06-14 13:30");
        assert_eq!(fmt(range.start), "2024-05-25 13:30");
    }

    #[test]
    fn test_anchor_day_follows_the_zone_not_utc() {
        // 03:00 UTC on June 15 is still June 14 in Chicago, so
        // "yesterday" there is June 13
        let tz: Tz = "America/Chicago".parse().unwrap();
        let now = at_utc(2024, 6, 15, 3, 0, 0);
        let sel = relative(1, IntervalUnit::Days, RelativeAnchor::Yesterday, "08:00");
        let range = resolve(&sel, now, tz).unwrap();
        assert_eq!(fmt(range.end), "2024-06-13 08:00");
        assert_eq!(fmt(range.start), "2024-06-12 08:00");
    }

    #[test]
    fn test_anchor_time_may_lie_ahead_of_now() {
        // Today at 13:30 resolves even when now is 09:00; the range is
        // computed, not clamped to the present
        let now = at_utc(2024, 6, 15, 9, 0, 0);
        let sel = relative(2, IntervalUnit::Hours, RelativeAnchor::Today, "13:30");
        let range = resolve(&sel, now, Tz::UTC).unwrap();
        assert_eq!(fmt(range.end), "2024-06-15 13:30");
        assert_eq!(fmt(range.start), "2024-06-15 11:30");
    }

    #[test]
    fn test_on_date_anchor() {
        let now = at_utc(2024, 6, 15, 9, 0, 0);
        let sel = relative(
            3,
            IntervalUnit::Days,
            RelativeAnchor::OnDate(parse_date("2024-01-10").unwrap()),
            "06:15",
        );
        let range = resolve(&sel, now, Tz::UTC).unwrap();
        assert_eq!(fmt(range.end), "2024-01-10 06:15");
        assert_eq!(fmt(range.start), "2024-01-07 06:15");
    }

    #[test]
    fn test_weeks_are_seven_calendar_days() {
        let now = at_utc(2024, 6, 15, 9, 0, 0);
        let sel = relative(2, IntervalUnit::Weeks, RelativeAnchor::Today, "08:00");
        let range = resolve(&sel, now, Tz::UTC).unwrap();
        assert_eq!(fmt(range.start), "2024-06-01 08:00");
    }

    #[test]
    fn test_months_clamp_to_shorter_month_end() {
        // One month before March 31 lands on February 29 in a leap year
        let now = at_utc(2024, 6, 15, 9, 0, 0);
        let sel = relative(
            1,
            IntervalUnit::Months,
            RelativeAnchor::OnDate(parse_date("2024-03-31").unwrap()),
            "12:00",
        );
        let range = resolve(&sel, now, Tz::UTC).unwrap();
        assert_eq!(fmt(range.start), "2024-02-29 12:00");
    }

    #[test]
    fn test_years_clamp_leap_day() {
        let now = at_utc(2024, 6, 15, 9, 0, 0);
        let sel = relative(
            2,
            IntervalUnit::Years,
            RelativeAnchor::OnDate(parse_date("2024-02-29").unwrap()),
            "00:00",
        );
        let range = resolve(&sel, now, Tz::UTC).unwrap();
        assert_eq!(fmt(range.start), "2022-02-28 00:00");
    }

    #[test]
    fn test_calendar_days_preserve_wall_clock_across_dst() {
        // March 10 2024 is the US spring forward; five days back from
        // March 12 crosses it. The wall clock stays 09:00 on both ends,
        // and the skipped hour makes the elapsed time 119 hours, not 120
        let tz: Tz = "America/New_York".parse().unwrap();
        let now = at_utc(2024, 3, 12, 12, 0, 0);
        let sel = relative(5, IntervalUnit::Days, RelativeAnchor::Today, "09:00");
        let range = resolve(&sel, now, tz).unwrap();
        assert_eq!(fmt(range.start), "2024-03-07 09:00");
        assert_eq!(fmt(range.end), "2024-03-12 09:00");
        assert_eq!(range.start.with_timezone(&Utc), at_utc(2024, 3, 7, 14, 0, 0));
        assert_eq!(range.end.with_timezone(&Utc), at_utc(2024, 3, 12, 13, 0, 0));
        assert_eq!(range.duration(), Duration::hours(119));
    }

    #[test]
    fn test_duration_hours_stay_exact_across_dst() {
        // Six exact hours back from 01:00 EST on the spring-forward day
        // reaches 19:00 the previous evening; no wall-clock preservation
        let tz: Tz = "America/New_York".parse().unwrap();
        let now = at_utc(2024, 3, 10, 14, 0, 0);
        let sel = relative(6, IntervalUnit::Hours, RelativeAnchor::Today, "01:00");
        let range = resolve(&sel, now, tz).unwrap();
        assert_eq!(range.duration(), Duration::hours(6));
        assert_eq!(fmt(range.start), "2024-03-09 19:00");
    }

    #[test]
    fn test_anchor_in_dst_gap_is_rejected() {
        // 02:30 does not exist on March 10 2024 in New York
        let tz: Tz = "America/New_York".parse().unwrap();
        let now = at_utc(2024, 3, 10, 14, 0, 0);
        let sel = relative(1, IntervalUnit::Hours, RelativeAnchor::Today, "02:30");
        let result = resolve(&sel, now, tz);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid datetime"), "got: {err}");
    }

    #[test]
    fn test_anchor_in_dst_fold_is_rejected() {
        // 01:30 happens twice on November 3 2024 in New York
        let tz: Tz = "America/New_York".parse().unwrap();
        let now = at_utc(2024, 11, 3, 14, 0, 0);
        let sel = relative(1, IntervalUnit::Hours, RelativeAnchor::Today, "01:30");
        assert!(resolve(&sel, now, tz).is_err());
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let sel = relative(0, IntervalUnit::Days, RelativeAnchor::Today, "08:00");
        let result = resolve(&sel, at_utc(2024, 6, 15, 9, 0, 0), Tz::UTC);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid number"), "got: {err}");
    }

    #[test]
    fn test_reaching_past_the_calendar_is_rejected() {
        let sel = relative(300_000, IntervalUnit::Years, RelativeAnchor::Today, "00:00");
        let result = resolve(&sel, at_utc(2024, 6, 15, 9, 0, 0), Tz::UTC);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid datetime"), "got: {err}");
    }

    // ── absolute tests ──────────────────────────────────────────────────

    #[test]
    fn test_absolute_attaches_the_zone() {
        let tz: Tz = "America/New_York".parse().unwrap();
        let sel = RangeSelection::Absolute(
            AbsoluteSelection::from_raw("2020-04-01", "12:34", "2020-04-06", "10:49").unwrap(),
        );
        let range = resolve(&sel, at_utc(2020, 4, 6, 12, 0, 0), tz).unwrap();
        // April is EDT (UTC-4)
        assert_eq!(range.start.with_timezone(&Utc), at_utc(2020, 4, 1, 16, 34, 0));
        assert_eq!(range.end.with_timezone(&Utc), at_utc(2020, 4, 6, 14, 49, 0));
        assert_eq!(range.kind, TimeRangeKind::Absolute);
    }

    #[test]
    fn test_absolute_ignores_now() {
        let sel = RangeSelection::Absolute(
            AbsoluteSelection::from_raw("2020-04-01", "12:34", "2020-04-06", "10:49").unwrap(),
        );
        let a = resolve(&sel, at_utc(2020, 4, 6, 12, 0, 0), Tz::UTC).unwrap();
        let b = resolve(&sel, at_utc(2026, 1, 1, 0, 0, 0), Tz::UTC).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_absolute_endpoint_in_dst_gap_is_rejected() {
        let tz: Tz = "America/New_York".parse().unwrap();
        let sel = RangeSelection::Absolute(
            AbsoluteSelection::from_raw("2024-03-10", "02:30", "2024-03-11", "12:00").unwrap(),
        );
        let result = resolve(&sel, at_utc(2024, 3, 12, 0, 0, 0), tz);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid datetime"), "got: {err}");
    }

    // ── shared behavior ─────────────────────────────────────────────────

    #[test]
    fn test_same_now_resolves_identically() {
        let now = at_utc(2024, 6, 15, 9, 0, 0);
        let sel = relative(20, IntervalUnit::Days, RelativeAnchor::Yesterday, "13:30");
        let a = resolve(&sel, now, Tz::UTC).unwrap();
        let b = resolve(&sel, now, Tz::UTC).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolved_range_echoes_the_selection() {
        let sel = relative(20, IntervalUnit::Days, RelativeAnchor::Yesterday, "13:30");
        let range = resolve(&sel, at_utc(2024, 6, 15, 9, 0, 0), Tz::UTC).unwrap();
        assert_eq!(range.selection, sel);
        assert_eq!(range.kind, TimeRangeKind::Relative);
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("Europe/Berlin").is_ok());
        assert!(parse_timezone("UTC").is_ok());
        let err = parse_timezone("Mars/Olympus").unwrap_err().to_string();
        assert!(err.contains("Invalid timezone"), "got: {err}");
    }

    // ── property tests ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_preset_duration_matches_offset(offset in 1u32..=525_600) {
            let now = at_utc(2024, 6, 15, 9, 0, 0);
            let sel = RangeSelection::Preset(PresetSelection::new("p", offset));
            let range = resolve(&sel, now, Tz::UTC).unwrap();
            prop_assert_eq!(range.duration(), Duration::minutes(i64::from(offset)));
            prop_assert_eq!(range.end.with_timezone(&Utc), now);
        }

        #[test]
        fn prop_relative_end_is_the_anchor_instant(
            count in 1u32..=10_000,
            unit_idx in 0usize..6,
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let now = at_utc(2024, 6, 15, 9, 0, 0);
            let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
            let sel = RangeSelection::Relative(RelativeSelection {
                last_number: count,
                last_interval: IntervalUnit::ALL[unit_idx],
                relative_to_when: RelativeAnchor::Today,
                relative_to_time: time,
            });
            let range = resolve(&sel, now, Tz::UTC).unwrap();
            // The end never depends on the count or the unit; only the
            // start moves
            let anchor = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_time(time);
            prop_assert_eq!(range.end.naive_local(), anchor);
            prop_assert!(range.start < range.end);
        }

        #[test]
        fn prop_inverted_absolute_never_resolves(
            day in 1u32..=28,
            minute_of_day in 0u32..1_440,
            gap_minutes in 1i64..=500_000,
        ) {
            let time = NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0).unwrap();
            let end = NaiveDate::from_ymd_opt(2024, 6, day).unwrap().and_time(time);
            let start = end + Duration::minutes(gap_minutes);
            let sel = RangeSelection::Absolute(AbsoluteSelection {
                start_date: start.date(),
                start_time: start.time(),
                end_date: end.date(),
                end_time: end.time(),
            });
            let result = resolve(&sel, at_utc(2024, 6, 15, 9, 0, 0), Tz::UTC);
            prop_assert!(matches!(result, Err(RangeError::InvalidRange(_))));
        }

        #[test]
        fn prop_resolution_is_deterministic(
            count in 1u32..=1_000,
            unit_idx in 0usize..6,
            hour in 0u32..24,
        ) {
            let now = at_utc(2024, 6, 15, 9, 0, 0);
            let tz: Tz = "America/New_York".parse().unwrap();
            let time = NaiveTime::from_hms_opt(hour, 15, 0).unwrap();
            let sel = RangeSelection::Relative(RelativeSelection {
                last_number: count,
                last_interval: IntervalUnit::ALL[unit_idx],
                relative_to_when: RelativeAnchor::Yesterday,
                relative_to_time: time,
            });
            let a = resolve(&sel, now, tz);
            let b = resolve(&sel, now, tz);
            prop_assert_eq!(a, b);
        }
    }
}
