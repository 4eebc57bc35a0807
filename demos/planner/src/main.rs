//! planner — derive an infant day schedule from a wake-up time.
//!
//! ```text
//! planner HH:MM [options]
//! planner --batch FILE.csv [options]
//!
//! Options:
//!   --profile classic|long    constraint table preset (default: classic)
//!   --policy threshold|gap    third-nap decision override
//!   --offset N                feeding offset in minutes (30|45|60|75|90)
//!   --first-window N          min wake window before nap 1 (120..180 by 15)
//!   --json                    emit JSON instead of the text card
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use nap_core::{ClockTime, format_duration};
use nap_plan::{
    DaySchedule, FEEDING_OFFSET_CHOICES, FIRST_WAKE_WINDOW_CHOICES, SchedulePolicy,
    ThirdNapPolicy, derive_schedule, load_batch_csv,
};

// ── CLI options ───────────────────────────────────────────────────────────────

struct Options {
    wake: Option<ClockTime>,
    batch: Option<PathBuf>,
    policy: SchedulePolicy,
    json: bool,
}

fn parse_args() -> Result<Options> {
    let mut args = std::env::args().skip(1);

    let mut wake = None;
    let mut batch = None;
    let mut profile = "classic".to_string();
    let mut policy_name: Option<String> = None;
    let mut offset: Option<u32> = None;
    let mut first_window: Option<u32> = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--batch" => {
                let path = args.next().context("--batch requires a file path")?;
                batch = Some(PathBuf::from(path));
            }
            "--profile" => profile = args.next().context("--profile requires a value")?,
            "--policy" => policy_name = args.next().context("--policy requires a value")?.into(),
            "--offset" => {
                let v = args.next().context("--offset requires a value")?;
                offset = Some(v.parse().context("--offset must be a minute count")?);
            }
            "--first-window" => {
                let v = args.next().context("--first-window requires a value")?;
                first_window = Some(v.parse().context("--first-window must be a minute count")?);
            }
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if wake.is_none() && !other.starts_with('-') => {
                wake = Some(ClockTime::from_str(other)?);
            }
            other => bail!("unrecognized argument {other:?} (see --help)"),
        }
    }

    let mut policy = match profile.as_str() {
        "classic" => SchedulePolicy::classic(),
        "long" => SchedulePolicy::long_windows(),
        other => bail!("unknown profile {other:?}: expected \"classic\" or \"long\""),
    };

    if let Some(name) = policy_name {
        policy.third_nap_policy = match name.as_str() {
            // 14:30 is the cutoff the long-windows deployment uses.
            "threshold" => ThirdNapPolicy::Threshold(ClockTime::hm(14, 30)),
            "gap" => ThirdNapPolicy::BedtimeGap,
            other => bail!("unknown policy {other:?}: expected \"threshold\" or \"gap\""),
        };
    }

    if let Some(minutes) = offset {
        if !FEEDING_OFFSET_CHOICES.contains(&minutes) {
            bail!("--offset must be one of {FEEDING_OFFSET_CHOICES:?}");
        }
        policy = policy.with_feeding_offset(minutes);
    }

    if let Some(minutes) = first_window {
        if !FIRST_WAKE_WINDOW_CHOICES.contains(&minutes) {
            bail!("--first-window must be one of {FIRST_WAKE_WINDOW_CHOICES:?}");
        }
        policy = policy.with_first_wake_window_min(minutes);
    }

    if wake.is_none() && batch.is_none() {
        print_usage();
        bail!("a wake time (HH:MM) or --batch FILE is required");
    }

    Ok(Options { wake, batch, policy, json })
}

fn print_usage() {
    eprintln!(
        "usage: planner HH:MM [--profile classic|long] [--policy threshold|gap] \
         [--offset N] [--first-window N] [--json]\n       planner --batch FILE.csv [...]"
    );
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_card(day: &DaySchedule) {
    println!("Wake-up       {}", day.wake);
    for nap in day.naps() {
        let label = format!("{:?} nap", nap.kind);
        println!(
            "{label:<13} {} - {}  ({})",
            nap.start,
            nap.end,
            format_duration(nap.duration_minutes())
        );
    }
    if !day.needs_third_nap() {
        println!("Third nap     not needed");
    }
    println!("Last feeding  {}", day.last_feeding);
    println!("Bedtime       {}", day.bedtime);
    println!("Day length    {}", day.day_length_label());
}

fn emit(day: &DaySchedule, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(day)?);
    } else {
        print_card(day);
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let opts = parse_args()?;

    if let Some(path) = &opts.batch {
        let batch = load_batch_csv(path, &opts.policy)
            .with_context(|| format!("loading batch from {}", path.display()))?;
        for (i, (name, day)) in batch.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("── {name} ──");
            emit(day, opts.json)?;
        }
        return Ok(());
    }

    // parse_args guarantees one of wake/batch is present.
    let Some(wake) = opts.wake else {
        bail!("no wake time given");
    };
    let day = derive_schedule(wake, &opts.policy);
    emit(&day, opts.json)
}
