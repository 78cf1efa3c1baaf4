//! Human-readable descriptions of boundaries and landmark lifetimes.

use gazetteer_core::models::{Boundary, LandmarkLifetime, Locale, TimeSignal};

use crate::inference::representative_point;
use crate::time_point::{format_instant, format_point};

/// Describe what is known about a boundary, or `None` when nothing is.
///
/// Brackets read earliest bound first.
pub fn describe_boundary(boundary: &Boundary, locale: Locale) -> Option<String> {
    let text = match (boundary, locale) {
        (Boundary::Exact(exact), _) => signal_label(exact, locale),
        (Boundary::Bracket { before, after }, Locale::French) => format!(
            "entre {} et {}",
            signal_label(after, locale),
            signal_label(before, locale)
        ),
        (Boundary::Bracket { before, after }, Locale::English) => format!(
            "between {} and {}",
            signal_label(after, locale),
            signal_label(before, locale)
        ),
        (Boundary::UpperOnly { before }, Locale::French) => {
            format!("avant {}", signal_label(before, locale))
        }
        (Boundary::UpperOnly { before }, Locale::English) => {
            format!("before {}", signal_label(before, locale))
        }
        (Boundary::LowerOnly { after }, Locale::French) => {
            format!("après {}", signal_label(after, locale))
        }
        (Boundary::LowerOnly { after }, Locale::English) => {
            format!("after {}", signal_label(after, locale))
        }
        (Boundary::Unknown, _) => return None,
    };
    Some(text)
}

/// One line for the creation and one for the disappearance, when known.
pub fn describe_lifetime(lifetime: &LandmarkLifetime, locale: Locale) -> Vec<String> {
    let (created, disappeared) = match locale {
        Locale::French => ("Date de création : ", "Date de disparition : "),
        Locale::English => ("Created: ", "Disappeared: "),
    };

    [(created, &lifetime.start), (disappeared, &lifetime.end)]
        .into_iter()
        .filter_map(|(heading, boundary)| {
            describe_boundary(boundary, locale).map(|text| format!("{heading}{text}"))
        })
        .collect()
}

/// Label of the boundary's representative point; bracket midpoints are marked approximate.
pub fn circa_label(boundary: &Boundary, locale: Locale) -> Option<String> {
    representative_point(boundary).map(|point| format_point(&point, locale))
}

fn signal_label(signal: &TimeSignal, locale: Locale) -> String {
    format_instant(signal.instant, signal.precision, locale)
}
