//! # astrocalc-era
//!
//! Named epochs that number years from their first day, such as regnal
//! eras.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Era (template)"] -->|".derive_for_date()"| B["EraYear"]
//!     A -->|".derive_for_year()"| B
//!     B -->|".to_date()"| C["CalendarDate"]
//!     D["EraTable"] -->|".resolve()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use astrocalc_era::{Era, EraTable};
//! use astrocalc_mjdn::{CalendarDate, DayNumber};
//!
//! let heisei = Era::new("Heisei", "平成", DayNumber::new(47534));
//! let year = heisei.derive_for_year(27);
//! assert_eq!(year.to_date(), CalendarDate::new(2015, 1, 1).unwrap());
//!
//! let date = CalendarDate::new(1926, 12, 25).unwrap();
//! let year = EraTable::japanese().resolve(&date).unwrap();
//! assert_eq!(year.to_string(), "昭和 (Showa) 1");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `era` | `Era` template |
//! | `year` | `EraYear` derived value |
//! | `table` | `EraTable` of consecutive eras |
//! | `error` | Error types |

mod era;
mod error;
mod table;
mod year;

pub use era::Era;
pub use error::EraError;
pub use table::EraTable;
pub use year::EraYear;
