//! Command-line host for the rangekit resolver.
//!
//! Resolves one range per invocation and prints either the summary line
//! or the applied JSON payload. "Now" defaults to the system clock; pass
//! `--now` to pin it and make the invocation reproducible (the library
//! itself never reads the clock).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use rangekit::format::{format_range, preset_summary, Labels};
use rangekit::picker::AppliedRange;
use rangekit::resolve::{parse_timezone, resolve};
use rangekit::selection::{
    default_presets, parse_date, AbsoluteSelection, IntervalUnit, PresetSelection, RangeSelection,
    RelativeAnchor, RelativeSelection,
};

#[derive(Debug, Parser)]
#[command(name = "rangekit", version)]
#[command(about = "Resolve dashboard time ranges to concrete instants")]
struct Cli {
    /// IANA zone the wall-clock fields are interpreted in
    #[arg(long, global = true, default_value = "UTC")]
    timezone: String,

    /// Pin "now" to an RFC 3339 instant instead of the system clock
    #[arg(long, global = true)]
    now: Option<String>,

    /// Print the applied payload as JSON instead of the summary line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a "last N minutes" preset
    Preset {
        /// Minutes before now
        offset: u32,
        /// Menu label carried into the payload
        #[arg(long, default_value = "Custom preset")]
        label: String,
    },
    /// Resolve a count of units before an anchor day
    Relative {
        /// How many units back
        count: String,
        /// minutes, hours, days, weeks, months, or years
        unit: String,
        /// today, yesterday, or an explicit YYYY-MM-DD day
        #[arg(long, default_value = "today")]
        to: String,
        /// Time of day on the anchor day, 24-hour HH:MM
        #[arg(long, default_value = "00:00")]
        at: String,
    },
    /// Resolve an explicit start/end pair
    Absolute {
        start_date: String,
        start_time: String,
        end_date: String,
        end_time: String,
    },
    /// List the stock preset catalog
    Presets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let now = match &cli.now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("'{raw}' is not an RFC 3339 instant"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let tz = parse_timezone(&cli.timezone)?;
    let labels = Labels::default();

    let selection = match &cli.command {
        Commands::Preset { offset, label } => {
            RangeSelection::Preset(PresetSelection::new(label.clone(), *offset))
        }
        Commands::Relative { count, unit, to, at } => {
            let unit = IntervalUnit::from_name(unit)
                .with_context(|| format!("'{unit}' is not an interval unit"))?;
            let when = match RelativeAnchor::from_name(to) {
                Some(anchor) => anchor,
                None => RelativeAnchor::OnDate(parse_date(to)?),
            };
            RangeSelection::Relative(RelativeSelection::from_raw(count, unit, when, at)?)
        }
        Commands::Absolute {
            start_date,
            start_time,
            end_date,
            end_time,
        } => RangeSelection::Absolute(AbsoluteSelection::from_raw(
            start_date, start_time, end_date, end_time,
        )?),
        Commands::Presets => {
            for preset in default_presets() {
                println!(
                    "{:>6}  {}",
                    preset.offset_minutes,
                    preset_summary(&preset, &labels)
                );
            }
            return Ok(());
        }
    };

    let range = resolve(&selection, now, tz)?;
    if cli.json {
        let payload = AppliedRange::from_resolved(&range);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", format_range(&range, &labels));
    }
    Ok(())
}
