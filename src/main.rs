use std::{path::PathBuf, process::ExitCode, time::Duration};

use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use env_logger::Env;

mod clock;
mod error;
mod filter;
mod lesson;
mod timetable;
mod utils;
mod week;

use clock::Clock;
use error::Error;
use timetable::models::{GroupRef, ScheduleData};
use week::WeekLabel;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// JSON file holding the schedule of every group
    #[clap(value_parser, env = "ULSU_SCHEDULE")]
    data: PathBuf,

    /// Category of the group, asked if missing
    #[clap(long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Course of the group, asked if missing
    #[clap(long, value_name = "COURSE")]
    course: Option<String>,

    /// Group name, default to the first group of the course
    #[clap(short, long, value_name = "GROUP")]
    group: Option<String>,

    /// Week to show (1 or 2), default to the current week
    #[clap(short, long, value_name = "WEEK NUMBER")]
    week: Option<WeekLabel>,

    /// Show the week after the current one
    #[clap(short, long, conflicts_with = "week")]
    other: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[clap(short, long, value_name = "DATE")]
    date: Option<NaiveDate>,

    /// Pretend it is this time of the day (HH:MM)
    #[clap(short, long, value_parser = parse_time, value_name = "TIME")]
    time: Option<NaiveTime>,

    /// Keep refreshing the timetable until Ctrl-C
    #[clap(long)]
    watch: bool,

    /// Seconds between two refreshes with --watch
    #[clap(long, default_value_t = 30, value_name = "SECONDS")]
    interval: u64,

    /// List the available groups and exit
    #[clap(short, long)]
    list: bool,
}

fn parse_time(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
}

impl Args {
    /// Clock following the date and time overrides
    fn clock(&self) -> Clock {
        match (self.date, self.time) {
            (None, None) => Clock::System,
            (Some(date), None) => Clock::Dated(date),
            (date, Some(time)) => {
                let date = date.unwrap_or_else(|| Clock::System.today());
                Clock::Fixed(date.and_time(time))
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let data = timetable::load(&args.data)?;

    if args.list {
        list(&data);
        return Ok(());
    }

    let clock = args.clock();
    let group = filter::group(
        &data,
        filter::Wanted {
            category: args.category,
            course: args.course,
            group: args.group,
        },
    )?;

    let shown = if args.other {
        Shown::Other
    } else {
        args.week.map_or(Shown::Current, Shown::Forced)
    };

    if !args.watch {
        print!("{}", refresh(&data, &group, shown, &clock));
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval.max(1)));
    let stop = tokio::signal::ctrl_c();
    tokio::pin!(stop);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                println!("{}", refresh(&data, &group, shown, &clock));
            }
            _ = &mut stop => {
                log::info!("refresh stopped");
                break;
            }
        }
    }

    Ok(())
}

/// Which week the user wants to see
#[derive(Clone, Copy)]
enum Shown {
    Current,
    Other,
    Forced(WeekLabel),
}

/// Read the clock and render the timetable of `group`
fn refresh(data: &ScheduleData, group: &GroupRef, shown: Shown, clock: &Clock) -> String {
    let today = clock.today();
    let current = week::resolve_week_label(today);
    let shown = match shown {
        Shown::Current => current,
        Shown::Other => current.toggle(),
        Shown::Forced(week) => week,
    };
    log::debug!("{today}: current week {}, showing week {}", current.key(), shown.key());

    let days = timetable::project(data, group, shown);

    timetable::render(&timetable::View {
        group,
        shown,
        current,
        today: week::resolve_day_ordinal(today),
        now: clock.minutes(),
        days: &days,
    })
}

/// Print every group available in the data
fn list(data: &ScheduleData) {
    for (category, courses) in data {
        println!("{category}");
        for (course, groups) in courses {
            println!("  {}", utils::course_label(course));
            for group in groups.keys() {
                println!("    {group}");
            }
        }
    }
}
