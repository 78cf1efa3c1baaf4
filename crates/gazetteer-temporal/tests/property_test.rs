//! Property tests: monotonicity, window independence of certain verdicts,
//! midpoint idempotence and snapshot/lifetime agreement.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use proptest::prelude::*;

use gazetteer_core::config::TemporalConfig;
use gazetteer_core::models::{Boundary, BoundaryEvidence, Precision};
use gazetteer_temporal::inference::{midpoint, representative_point, resolve_evidence};
use gazetteer_temporal::lifetime::{assemble_lifetime, interval_contains};
use gazetteer_temporal::snapshot::assemble_snapshot;
use gazetteer_temporal::time_point::resolve_signal;
use gazetteer_temporal::validity::ValidityEvaluator;
use test_fixtures::*;

fn any_year() -> impl Strategy<Value = i32> {
    1700i32..2000
}

fn any_instant() -> impl Strategy<Value = DateTime<Utc>> {
    // 1700-01-01 .. 2000-01-01 in seconds.
    (-8_520_336_000i64..946_684_800).prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap())
}

fn any_boundary_evidence() -> impl Strategy<Value = BoundaryEvidence> {
    prop_oneof![
        Just(unknown()),
        any_year().prop_map(|y| exact(year(y))),
        (any_year(), any_year()).prop_map(|(a, b)| bracket(year(a.max(b)), year(a.min(b)))),
        any_year().prop_map(|y| before_only(year(y))),
        any_year().prop_map(|y| after_only(year(y))),
    ]
}

fn resolved(start: &BoundaryEvidence, end: &BoundaryEvidence) -> (Boundary, Boundary) {
    let r = resolve_evidence(&evidence(start.clone(), end.clone()), None);
    (r.start, r.end)
}

proptest! {
    // ═══════════════════════════════════════════════════════════════════════
    // Monotonicity of after-only starts
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn after_only_start_never_flips_back(
        after in any_year(),
        t1 in any_instant(),
        t2 in any_instant(),
        window in proptest::option::of(0u32..50),
    ) {
        let (earlier, later) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let (start, end) = resolved(&after_only(year(after)), &unknown());
        let evaluator = ValidityEvaluator::new(window);
        if evaluator.evaluate(&start, &end, earlier).valid {
            prop_assert!(evaluator.evaluate(&start, &end, later).valid);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Certain verdicts do not depend on the window
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn certain_verdicts_are_window_independent(
        start in any_boundary_evidence(),
        end in any_boundary_evidence(),
        at in any_instant(),
        years in 0u32..100,
    ) {
        let (start, end) = resolved(&start, &end);
        let windowed = ValidityEvaluator::new(Some(years)).evaluate(&start, &end, at);
        let zero = ValidityEvaluator::new(Some(0)).evaluate(&start, &end, at);
        let strict = ValidityEvaluator::new(None).evaluate(&start, &end, at);

        prop_assert_eq!(windowed.certain, strict.certain);
        if windowed.certain {
            prop_assert_eq!(windowed, zero);
            prop_assert_eq!(windowed, strict);
        }
    }

    #[test]
    fn exact_signal_ignores_loose_bounds(
        e in any_year(),
        b in any_year(),
        a in any_year(),
        at in any_instant(),
    ) {
        let full = BoundaryEvidence {
            exact: Some(year(e)),
            before: Some(year(b)),
            after: Some(year(a)),
        };
        let (with_loose, _) = resolved(&full, &unknown());
        let (alone, _) = resolved(&exact(year(e)), &unknown());
        prop_assert_eq!(&with_loose, &alone);

        let evaluator = ValidityEvaluator::new(Some(20));
        prop_assert_eq!(
            evaluator.evaluate_start(&with_loose, at),
            evaluator.evaluate_start(&alone, at)
        );
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Midpoint idempotence
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn equal_bounds_midpoint_is_the_day(x in any_instant()) {
        prop_assert_eq!(midpoint(x, x), Precision::Day.truncate(x));
    }

    #[test]
    fn equal_bracket_point_is_the_day(y in any_year()) {
        let signal = resolve_signal(&year(y), None).unwrap();
        let boundary = Boundary::Bracket { before: signal.clone(), after: signal.clone() };
        let point = representative_point(&boundary).unwrap();
        prop_assert_eq!(point.instant, Precision::Day.truncate(signal.instant));
        prop_assert!(point.approximate);
    }

    #[test]
    fn midpoint_lies_between_bounds(a in any_instant(), b in any_instant()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mid = midpoint(lo, hi);
        prop_assert!(mid >= Precision::Day.truncate(lo));
        prop_assert!(mid <= hi);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Snapshot / lifetime agreement
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn snapshot_and_lifetime_agree(
        bounds in proptest::collection::vec((any_boundary_evidence(), any_boundary_evidence()), 0..40),
        at in any_instant(),
    ) {
        let landmarks = vec![landmark("rue-a", evidence(unknown(), unknown()))];
        let versions: Vec<_> = bounds
            .into_iter()
            .enumerate()
            .map(|(i, (start, end))| {
                version(&format!("v{i}"), "rue-a", "Name", Some("Rue A"), evidence(start, end))
            })
            .collect();

        let config = TemporalConfig::default();
        let snapshot = assemble_snapshot(&landmarks, &versions, at, &config);
        let containing: BTreeSet<String> = assemble_lifetime(&versions, &config)
            .into_iter()
            .filter(|interval| interval_contains(interval, at))
            .map(|interval| interval.version_id)
            .collect();

        prop_assert_eq!(&snapshot.valid_versions, &containing);
        prop_assert_eq!(
            snapshot.get(&landmark_id("rue-a")).map(|lm| lm.properties.get("Name").map_or(0, Vec::len)),
            Some(containing.len())
        );
    }

    #[test]
    fn lifetime_is_sorted_by_start(
        bounds in proptest::collection::vec(any_boundary_evidence(), 0..40),
    ) {
        let versions: Vec<_> = bounds
            .into_iter()
            .enumerate()
            .map(|(i, start)| {
                version(&format!("v{i:02}"), "rue-a", "Name", None, evidence(start, unknown()))
            })
            .collect();
        let intervals = assemble_lifetime(&versions, &TemporalConfig::default());
        prop_assert_eq!(intervals.len(), versions.len());
        for pair in intervals.windows(2) {
            let a = pair[0].start_point.map(|p| p.instant);
            let b = pair[1].start_point.map(|p| p.instant);
            prop_assert!(a <= b);
        }
    }
}
