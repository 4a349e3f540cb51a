//! Convert command: a single Gregorian date to the Jalali calendar.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use jalali_calendar::{JalaliDate, gregorian_to_jalali, try_gregorian_to_jalali};

use crate::cli::ConvertArgs;
use crate::config::JalaliConfig;

/// Convert one date and print it.
pub fn run(args: ConvertArgs, config: &JalaliConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    let strict = config.strict && !args.lenient;
    let jalali = convert(&args.date, strict)?;
    info!(gregorian = %args.date, jalali = %jalali, strict, "converted");

    println!(
        "{}",
        jalali.format_with(config.output.separator(args.separator.as_deref()))
    );
    Ok(())
}

/// Parses `input` and converts it, validating the date when `strict` is set.
fn convert(input: &str, strict: bool) -> Result<JalaliDate> {
    let (year, month, day) = parse_ymd(input)?;
    if strict {
        return try_gregorian_to_jalali(year, month, day)
            .with_context(|| format!("invalid Gregorian date: {input}"));
    }
    if let Err(e) = try_gregorian_to_jalali(year, month, day) {
        warn!(date = input, error = %e, "converting invalid date leniently");
    }
    Ok(gregorian_to_jalali(year, month, day))
}

/// Splits `YYYY-MM-DD` (or `YYYY/MM/DD`) into integers without range checks.
///
/// A leading `-` marks a year before year 0. Every part must otherwise be
/// plain ASCII digits.
fn parse_ymd(input: &str) -> Result<(i32, i32, i32)> {
    let trimmed = input.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let parts: Vec<&str> = rest.split(['-', '/']).collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("expected a date as YYYY-MM-DD, got {input:?}");
    };
    let year: i32 = format!("{sign}{}", digits(year, "year", input)?)
        .parse()
        .with_context(|| format!("invalid year in {input:?}"))?;
    let month: i32 = digits(month, "month", input)?
        .parse()
        .with_context(|| format!("invalid month in {input:?}"))?;
    let day: i32 = digits(day, "day", input)?
        .parse()
        .with_context(|| format!("invalid day in {input:?}"))?;
    Ok((year, month, day))
}

/// Returns `part` if it is a non-empty run of ASCII digits.
fn digits<'a>(part: &'a str, what: &str, input: &str) -> Result<&'a str> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        bail!("invalid {what} in {input:?}: expected digits, got {part:?}");
    }
    Ok(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dash_and_slash() {
        assert_eq!(parse_ymd("2024-03-20").unwrap(), (2024, 3, 20));
        assert_eq!(parse_ymd("2024/3/20").unwrap(), (2024, 3, 20));
        assert_eq!(parse_ymd(" 1979-03-21 ").unwrap(), (1979, 3, 21));
    }

    #[test]
    fn parse_negative_year() {
        assert_eq!(parse_ymd("-0044-03-15").unwrap(), (-44, 3, 15));
    }

    #[test]
    fn parse_full_i32_year_range() {
        assert_eq!(parse_ymd("-2147483648-01-01").unwrap(), (i32::MIN, 1, 1));
        assert_eq!(parse_ymd("2147483647-12-31").unwrap(), (i32::MAX, 12, 31));
        assert!(parse_ymd("2147483648-01-01").is_err());
        assert!(parse_ymd("-2147483649-01-01").is_err());
    }

    #[test]
    fn parse_rejects_signs_inside_parts() {
        assert!(parse_ymd("+2024-+3-+20").is_err());
        assert!(parse_ymd("2024-+3-20").is_err());
        assert!(parse_ymd("2024-03-+20").is_err());
        assert!(parse_ymd("--2024-03-20").is_err());
        assert!(parse_ymd("2024--03-20").is_err());
    }

    #[test]
    fn year_table_dates_parse_back() {
        let date = jalali_calendar::GregorianDate::new(-44, 3, 15).unwrap();
        assert_eq!(parse_ymd(&date.to_string()).unwrap(), (-44, 3, 15));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(parse_ymd("2024-03").is_err());
        assert!(parse_ymd("2024-03-20-01").is_err());
        assert!(parse_ymd("twenty-03-20").is_err());
        assert!(parse_ymd("").is_err());
    }

    #[test]
    fn strict_conversion() {
        assert_eq!(convert("2024-03-20", true).unwrap().ymd(), (1403, 1, 1));
        let err = convert("2023-02-29", true).unwrap_err();
        assert!(format!("{err:#}").contains("invalid day: 29 for 2023-02"));
    }

    #[test]
    fn lenient_conversion() {
        assert_eq!(
            convert("2024-13-01", false).unwrap(),
            gregorian_to_jalali(2025, 1, 1)
        );
        assert_eq!(convert("2023-02-29", false).unwrap().ymd(), (1401, 12, 10));
    }
}
