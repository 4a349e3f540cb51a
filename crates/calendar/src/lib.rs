//! # jalali-calendar
//!
//! Pure Gregorian to Jalali (Solar Hijri) date conversion.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(gy, gm, gd) integers"] -->|"gregorian_to_jalali()"| C["JalaliDate"]
//!     A -->|"try_gregorian_to_jalali()"| B["GregorianDate"]
//!     B -->|".to_jalali()"| C
//!     B -->|"gregorian_sequence()"| D["Vec of GregorianDate"]
//!     E["chrono::NaiveDateTime"] -->|"JalaliDateTime::from()"| F["JalaliDateTime"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use jalali_calendar::{GregorianDate, gregorian_to_jalali, try_gregorian_to_jalali};
//!
//! // Permissive: never fails, never validates.
//! let nowruz = gregorian_to_jalali(1979, 3, 21);
//! assert_eq!(nowruz.to_string(), "1358-01-01");
//!
//! // Strict: rejects dates that do not exist.
//! assert!(try_gregorian_to_jalali(2023, 2, 29).is_err());
//!
//! let date = GregorianDate::new(2024, 3, 20).unwrap();
//! assert_eq!(date.to_jalali().ymd(), (1403, 1, 1));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `convert` | The conversion arithmetic and its validating wrapper |
//! | `gregorian` | Validated Gregorian dates |
//! | `jalali` | Jalali date result type |
//! | `datetime` | Jalali date with time of day |
//! | `sequence` | Gregorian date sequences |
//! | `error` | Error types |

mod convert;
mod datetime;
mod error;
mod gregorian;
mod jalali;
mod sequence;

pub use convert::{gregorian_to_jalali, try_gregorian_to_jalali};
pub use datetime::{JalaliDateTime, format_jalali_datetime};
pub use error::CalendarError;
pub use gregorian::GregorianDate;
pub use jalali::JalaliDate;
pub use sequence::{gregorian_sequence, gregorian_year};
