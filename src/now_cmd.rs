//! Now command: today's date in the Jalali calendar.

use anyhow::Result;
use chrono::{Local, NaiveDateTime, Utc};
use tracing::{debug, info_span};

use jalali_calendar::JalaliDateTime;

use crate::cli::NowArgs;
use crate::config::JalaliConfig;

/// Print the current date, and optionally time, in the Jalali calendar.
pub fn run(args: NowArgs, config: &JalaliConfig) -> Result<()> {
    let _cmd = info_span!("now").entered();

    let now = if args.utc {
        Utc::now().naive_utc()
    } else {
        Local::now().naive_local()
    };
    debug!(gregorian = %now, utc = args.utc, "current time");

    let with_time = args.time || config.output.time;
    let separator = config.output.separator(args.separator.as_deref());
    println!("{}", render(now, with_time, separator));
    Ok(())
}

fn render(now: NaiveDateTime, with_time: bool, separator: &str) -> String {
    let jalali = JalaliDateTime::from(now);
    if with_time {
        jalali.format_with(separator)
    } else {
        jalali.date().format_with(separator)
    }
}
