//! Time precision levels and the shared precision-correction arithmetic.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const OWL_TIME_NS: &str = "http://www.w3.org/2006/time#";
const OWL_TIME_PREFIX: &str = "time:";

/// Granularity at which a time stamp is known, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    Day,
    Month,
    Year,
    Decade,
    Century,
    Millennium,
}

impl Precision {
    /// Map a precision code to a level.
    ///
    /// Accepts OWL-Time unit URIs (full or `time:` prefixed, including the
    /// historical `unitMillenium` spelling), bare unit names and Wikidata
    /// numeric precisions. Sub-day units collapse to [`Precision::Day`].
    /// Anything else yields `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let local = code
            .strip_prefix(OWL_TIME_NS)
            .or_else(|| code.strip_prefix(OWL_TIME_PREFIX))
            .unwrap_or(code)
            .to_ascii_lowercase();
        let unit = local.strip_prefix("unit").unwrap_or(local.as_str());

        match unit {
            "day" | "days" | "11" => Some(Precision::Day),
            "hour" | "hours" | "minute" | "minutes" | "second" | "seconds" | "milliseconds"
            | "12" | "13" | "14" => Some(Precision::Day),
            "month" | "months" | "10" => Some(Precision::Month),
            "year" | "years" | "9" => Some(Precision::Year),
            "decade" | "decades" | "8" => Some(Precision::Decade),
            "century" | "centuries" | "7" => Some(Precision::Century),
            "millennium" | "millenium" | "millennia" | "6" => Some(Precision::Millennium),
            _ => None,
        }
    }

    /// OWL-Time unit URI for this level.
    pub fn owl_time_uri(&self) -> String {
        let unit = match self {
            Precision::Day => "unitDay",
            Precision::Month => "unitMonth",
            Precision::Year => "unitYear",
            Precision::Decade => "unitDecade",
            Precision::Century => "unitCentury",
            Precision::Millennium => "unitMillennium",
        };
        format!("{OWL_TIME_NS}{unit}")
    }

    /// Whether the month field is meaningful at this precision.
    pub fn keeps_month(&self) -> bool {
        *self <= Precision::Month
    }

    /// Whether the day field is meaningful at this precision.
    pub fn keeps_day(&self) -> bool {
        *self == Precision::Day
    }

    /// Drop every calendar field finer than this precision.
    ///
    /// Decades, centuries and millennia snap to their first year (centuries
    /// and millennia are 1-based: 1850 belongs to the century starting 1801).
    /// Instants whose truncation falls outside chrono's range are returned as is.
    pub fn truncate(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let year = instant.year();
        let (y, m, d) = match self {
            Precision::Day => (year, instant.month(), instant.day()),
            Precision::Month => (year, instant.month(), 1),
            Precision::Year => (year, 1, 1),
            Precision::Decade => (decade_of(year), 1, 1),
            Precision::Century => ((century_of(year) - 1) * 100 + 1, 1, 1),
            Precision::Millennium => ((millennium_of(year) - 1) * 1000 + 1, 1, 1),
        };
        start_of_day(y, m, d).unwrap_or(instant)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Precision::Day => "day",
            Precision::Month => "month",
            Precision::Year => "year",
            Precision::Decade => "decade",
            Precision::Century => "century",
            Precision::Millennium => "millennium",
        };
        f.write_str(name)
    }
}

/// First year of the decade containing `year` (`floor(year / 10) * 10`).
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// 1-based century ordinal (`ceil(year / 100)`): 1850 → 19, 1900 → 19, 1901 → 20.
pub fn century_of(year: i32) -> i32 {
    (year - 1).div_euclid(100) + 1
}

/// 1-based millennium ordinal (`ceil(year / 1000)`).
pub fn millennium_of(year: i32) -> i32 {
    (year - 1).div_euclid(1000) + 1
}

/// Midnight UTC on the given calendar day.
pub fn start_of_day(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
