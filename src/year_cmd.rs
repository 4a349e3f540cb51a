//! Year command: a full Gregorian year beside its Jalali dates.

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use jalali_calendar::gregorian_year;

use crate::cli::YearArgs;
use crate::config::JalaliConfig;

/// Print one `gregorian<TAB>jalali` line per day of the year.
pub fn run(args: YearArgs, config: &JalaliConfig) -> Result<()> {
    let _cmd = info_span!("year", year = args.year).entered();

    let separator = config.output.separator(args.separator.as_deref());
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let n_days = write_year(&mut out, args.year, separator)?;
    out.flush().context("failed to flush output")?;

    info!(n_days, "year written");
    Ok(())
}

fn write_year<W: Write>(out: &mut W, year: i32, separator: &str) -> Result<usize> {
    let dates = gregorian_year(year);
    for date in &dates {
        writeln!(out, "{date}\t{}", date.to_jalali().format_with(separator))
            .context("failed to write output")?;
    }
    Ok(dates.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rows() {
        let mut buf = Vec::new();
        let n = write_year(&mut buf, 2024, "-").unwrap();
        assert_eq!(n, 366);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 366);
        assert_eq!(lines[0], "2024-01-01\t1402-10-11");
        assert!(lines.contains(&"2024-03-20\t1403-01-01"));
        assert_eq!(lines[365], "2024-12-31\t1403-10-11");
    }

    #[test]
    fn custom_separator() {
        let mut buf = Vec::new();
        write_year(&mut buf, 1979, "/").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1979-03-21\t1358/01/01\n"));
    }
}
