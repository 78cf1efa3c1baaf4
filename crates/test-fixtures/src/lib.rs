//! Builders for time signals, evidence and rows used across gazetteer tests.

use chrono::{DateTime, NaiveDate, Utc};

use gazetteer_core::config::temporal_config::GREGORIAN_CALENDAR;
use gazetteer_core::models::{
    AttributeVersionRow, BoundaryEvidence, LandmarkRow, RawTimeSignal, TimeEvidence,
};

pub const UNIT_DAY: &str = "http://www.w3.org/2006/time#unitDay";
pub const UNIT_MONTH: &str = "http://www.w3.org/2006/time#unitMonth";
pub const UNIT_YEAR: &str = "http://www.w3.org/2006/time#unitYear";
pub const UNIT_DECADE: &str = "http://www.w3.org/2006/time#unitDecade";
pub const UNIT_CENTURY: &str = "http://www.w3.org/2006/time#unitCentury";
pub const UNIT_MILLENNIUM: &str = "http://www.w3.org/2006/time#unitMillenium";

pub const LANDMARK_NS: &str = "http://rdf.geohistoricaldata.org/id/address/facts/";
pub const ATTRIBUTE_TYPE_NS: &str =
    "http://rdf.geohistoricaldata.org/id/codes/address/attributeType/";

/// Midnight UTC on the given day.
pub fn instant(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
        .expect("valid fixture date")
}

/// January 1st of `year`.
pub fn at_year(year: i32) -> DateTime<Utc> {
    instant(year, 1, 1)
}

/// A Gregorian signal with an explicit precision code.
pub fn signal(stamp: &str, precision: &str) -> RawTimeSignal {
    RawTimeSignal {
        stamp: stamp.to_string(),
        precision: precision.to_string(),
        calendar: Some(GREGORIAN_CALENDAR.to_string()),
    }
}

/// Year-precision signal on January 1st.
pub fn year(year: i32) -> RawTimeSignal {
    signal(&format!("{year:04}-01-01T00:00:00Z"), UNIT_YEAR)
}

/// Day-precision signal from a `YYYY-MM-DD` date.
pub fn day(date: &str) -> RawTimeSignal {
    signal(&format!("{date}T00:00:00Z"), UNIT_DAY)
}

pub fn exact(signal: RawTimeSignal) -> BoundaryEvidence {
    BoundaryEvidence {
        exact: Some(signal),
        ..BoundaryEvidence::default()
    }
}

pub fn bracket(before: RawTimeSignal, after: RawTimeSignal) -> BoundaryEvidence {
    BoundaryEvidence {
        exact: None,
        before: Some(before),
        after: Some(after),
    }
}

pub fn before_only(before: RawTimeSignal) -> BoundaryEvidence {
    BoundaryEvidence {
        before: Some(before),
        ..BoundaryEvidence::default()
    }
}

pub fn after_only(after: RawTimeSignal) -> BoundaryEvidence {
    BoundaryEvidence {
        after: Some(after),
        ..BoundaryEvidence::default()
    }
}

pub fn unknown() -> BoundaryEvidence {
    BoundaryEvidence::default()
}

pub fn evidence(start: BoundaryEvidence, end: BoundaryEvidence) -> TimeEvidence {
    TimeEvidence { start, end }
}

/// Landmark row; `id` is prefixed with the landmark namespace.
pub fn landmark(id: &str, evidence: TimeEvidence) -> LandmarkRow {
    LandmarkRow {
        landmark_id: format!("{LANDMARK_NS}{id}"),
        label: id.to_string(),
        relatum_label: None,
        evidence,
    }
}

/// Attribute-version row; ids are prefixed with the landmark namespace and
/// `attribute` with the attribute type namespace.
pub fn version(
    id: &str,
    landmark: &str,
    attribute: &str,
    value: Option<&str>,
    evidence: TimeEvidence,
) -> AttributeVersionRow {
    AttributeVersionRow {
        version_id: format!("{LANDMARK_NS}{id}"),
        landmark_id: format!("{LANDMARK_NS}{landmark}"),
        attribute_type: format!("{ATTRIBUTE_TYPE_NS}{attribute}"),
        value: value.map(str::to_string),
        evidence,
    }
}

/// Full landmark id for a short fixture id.
pub fn landmark_id(id: &str) -> String {
    format!("{LANDMARK_NS}{id}")
}

/// A deterministic event log of `n` landmarks, each with a name and a
/// geometry version, cycling through every boundary shape.
pub fn generated_log(n: usize) -> (Vec<LandmarkRow>, Vec<AttributeVersionRow>) {
    let mut landmarks = Vec::with_capacity(n);
    let mut versions = Vec::with_capacity(n * 2);

    for i in 0..n {
        let base = 1790 + (i % 200) as i32;
        let start = match i % 4 {
            0 => exact(year(base)),
            1 => bracket(year(base + 10), year(base)),
            2 => before_only(year(base + 5)),
            _ => after_only(year(base)),
        };
        let end = match i % 5 {
            0 => unknown(),
            1 => exact(year(base + 60)),
            2 => bracket(year(base + 70), year(base + 50)),
            3 => before_only(year(base + 80)),
            _ => after_only(year(base + 40)),
        };
        let id = format!("landmark-{i}");
        landmarks.push(landmark(&id, evidence(start.clone(), end.clone())));
        versions.push(version(
            &format!("name-{i}"),
            &id,
            "Name",
            Some(&format!("Rue {i}")),
            evidence(start.clone(), end.clone()),
        ));
        versions.push(version(
            &format!("geom-{i}"),
            &id,
            "Geometry",
            Some(&format!("POINT({} 48.85)", 2.0 + i as f64 / 1000.0)),
            evidence(start, end),
        ));
    }

    (landmarks, versions)
}
