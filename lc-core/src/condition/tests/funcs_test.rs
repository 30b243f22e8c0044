use std::cmp::Ordering;

use super::*;

#[rstest]
fn test_constructors_fix_status_and_severity() {
    let t = true_condition(DB_READY_CONDITION, DB_READY_MESSAGE);
    assert_eq!((Status::True, Severity::None, READY_REASON), (t.status, t.severity, t.reason));

    let f = false_condition(DB_READY_CONDITION, ERROR_REASON, Severity::Warning, "nope");
    assert_eq!((Status::False, Severity::Warning, ERROR_REASON), (f.status, f.severity, f.reason));

    let u = unknown_condition(DB_READY_CONDITION, REQUESTED_REASON, DB_READY_INIT_MESSAGE);
    assert_eq!((Status::Unknown, Severity::None, REQUESTED_REASON), (u.status, u.severity, u.reason));

    assert_none!(t.last_transition_time);
    assert_none!(f.last_transition_time);
    assert_none!(u.last_transition_time);
}

#[rstest]
fn test_constructors_do_not_reinterpret_message() {
    let c = true_condition("a", "100% done {0}");
    assert_eq!("100% done {0}", c.message);

    let err = "connection refused";
    let c = false_condition("a", ERROR_REASON, Severity::Error, format_args!("{DB_READY_ERROR_MESSAGE}: {err}"));
    assert_eq!("DB error occurred: connection refused", c.message);
}

#[rstest]
fn test_has_same_state_ignores_time() {
    let a = stamped(false_condition("a", "r", Severity::Info, "m"), NOW);
    let b = stamped(false_condition("a", "r", Severity::Info, "m"), NOW + 100);
    assert!(a.has_same_state(&b));
}

#[rstest]
#[case::type_(false_condition("b", "r", Severity::Info, "m"))]
#[case::status(unknown_condition("a", "r", "m"))]
#[case::reason(false_condition("a", "q", Severity::Info, "m"))]
#[case::severity(false_condition("a", "r", Severity::Error, "m"))]
#[case::message(false_condition("a", "r", Severity::Info, "n"))]
fn test_has_same_state_differs(#[case] other: Condition) {
    let c = false_condition("a", "r", Severity::Info, "m");
    assert!(!c.has_same_state(&other));
}

#[rstest]
#[case::ready_first("Ready", "A", Ordering::Less)]
#[case::ready_never_after("A", "Ready", Ordering::Greater)]
#[case::ready_ready("Ready", "Ready", Ordering::Equal)]
#[case::lexical("DBReady", "DBSyncReady", Ordering::Less)]
#[case::lexical_reverse("b", "a", Ordering::Greater)]
fn test_compare_by_type(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
    assert_eq!(expected, compare_by_type(&true_condition(a, ""), &true_condition(b, "")));
}

#[rstest]
fn test_compare_by_last_transition_time_newest_first() {
    let old = stamped(true_condition("a", ""), NOW);
    let new = stamped(true_condition("b", ""), NOW + 1);
    let unstamped = true_condition("c", "");

    assert_eq!(Ordering::Greater, compare_by_last_transition_time(&old, &new));
    assert_eq!(Ordering::Less, compare_by_last_transition_time(&new, &old));
    assert_eq!(Ordering::Equal, compare_by_last_transition_time(&old, &old));
    assert_eq!(Ordering::Less, compare_by_last_transition_time(&old, &unstamped));
}

#[rstest]
#[case::false_error(false_condition("a", "r", Severity::Error, ""), Group::FalseError, 0)]
#[case::false_warning(false_condition("a", "r", Severity::Warning, ""), Group::FalseWarning, 1)]
#[case::false_info(false_condition("a", "r", Severity::Info, ""), Group::FalseInfo, 2)]
#[case::unknown(unknown_condition("a", "r", ""), Group::Unknown, 3)]
#[case::true_(true_condition("a", ""), Group::True, 4)]
#[case::false_none(false_condition("a", "r", Severity::None, ""), Group::Other, 5)]
fn test_group_of(#[case] c: Condition, #[case] expected: Group, #[case] order: usize) {
    assert_eq!(expected, Group::of(&c));
    assert_eq!(order, Group::of(&c).order());
}

#[rstest]
fn test_get_higher_prio_condition_none() {
    let c = true_condition("a", "");
    assert_none!(get_higher_prio_condition(None, None));
    assert_eq!(Some(&c), get_higher_prio_condition(Some(&c), None));
    assert_eq!(Some(&c), get_higher_prio_condition(None, Some(&c)));
}

#[rstest]
#[case::error_beats_warning(
    false_condition("a", "r", Severity::Error, ""),
    false_condition("b", "r", Severity::Warning, "")
)]
#[case::warning_beats_info(
    false_condition("a", "r", Severity::Warning, ""),
    false_condition("b", "r", Severity::Info, "")
)]
#[case::info_beats_unknown(false_condition("a", "r", Severity::Info, ""), unknown_condition("b", "r", ""))]
#[case::unknown_beats_true(unknown_condition("a", "r", ""), true_condition("b", ""))]
#[case::true_beats_severityless_false(true_condition("a", ""), false_condition("b", "r", Severity::None, ""))]
fn test_get_higher_prio_condition_by_group(#[case] higher: Condition, #[case] lower: Condition) {
    // group wins regardless of age or argument order
    let higher = stamped(higher, NOW);
    let lower = stamped(lower, NOW + 1000);
    assert_eq!(Some(&higher), get_higher_prio_condition(Some(&higher), Some(&lower)));
    assert_eq!(Some(&higher), get_higher_prio_condition(Some(&lower), Some(&higher)));
}

#[rstest]
fn test_get_higher_prio_condition_same_group_newer_wins() {
    let older = stamped(false_condition("a", "r", Severity::Warning, "old"), NOW);
    let newer = stamped(false_condition("b", "r", Severity::Warning, "new"), NOW + 1);
    assert_eq!(Some(&newer), get_higher_prio_condition(Some(&older), Some(&newer)));
    assert_eq!(Some(&newer), get_higher_prio_condition(Some(&newer), Some(&older)));
}

#[rstest]
fn test_get_higher_prio_condition_exact_tie_first_wins() {
    let c1 = stamped(unknown_condition("a", "r", ""), NOW);
    let c2 = stamped(unknown_condition("b", "r", ""), NOW);
    assert_eq!(Some(&c1), get_higher_prio_condition(Some(&c1), Some(&c2)));
    assert_eq!(Some(&c2), get_higher_prio_condition(Some(&c2), Some(&c1)));
}

#[rstest]
#[case::error_reason(false_condition("a", ERROR_REASON, Severity::Error, ""), true)]
#[case::backoff(false_condition("a", JOB_BACKOFF_LIMIT_EXCEEDED_REASON, Severity::Warning, ""), true)]
#[case::other_reason(false_condition("a", CREATION_FAILED_REASON, Severity::Error, ""), false)]
#[case::not_false(unknown_condition("a", ERROR_REASON, ""), false)]
fn test_is_error(#[case] c: Condition, #[case] expected: bool) {
    assert_eq!(expected, c.is_error());
    assert_eq!(expected, is_error(Some(&c)));
}

#[rstest]
fn test_is_error_none() {
    assert!(!is_error(None));
}

#[rstest]
fn test_restore_last_transition_times(clock: Box<MockUtcClock>) {
    let saved: ConditionSet = [
        stamped(true_condition(READY_CONDITION, READY_MESSAGE), NOW - 300),
        stamped(true_condition(DB_READY_CONDITION, DB_READY_MESSAGE), NOW - 200),
        stamped(unknown_condition(DEPLOYMENT_READY_CONDITION, REQUESTED_REASON, ""), NOW - 100),
    ]
    .into_iter()
    .collect();

    let mut conditions = ConditionSet::new();
    conditions.set_with_clock(true_condition(READY_CONDITION, READY_MESSAGE), &*clock);
    conditions.set_with_clock(true_condition(DB_READY_CONDITION, DB_READY_MESSAGE), &*clock);
    conditions.set_with_clock(true_condition(DEPLOYMENT_READY_CONDITION, DEPLOYMENT_READY_MESSAGE), &*clock);
    conditions.set_with_clock(true_condition(INPUT_READY_CONDITION, INPUT_READY_MESSAGE), &*clock);

    restore_last_transition_times(&mut conditions, &saved);

    assert_eq!(ts(NOW - 300), conditions.get(READY_CONDITION).unwrap().last_transition_time);
    assert_eq!(ts(NOW - 200), conditions.get(DB_READY_CONDITION).unwrap().last_transition_time);
    assert_eq!(ts(NOW), conditions.get(DEPLOYMENT_READY_CONDITION).unwrap().last_transition_time);
    assert_eq!(ts(NOW), conditions.get(INPUT_READY_CONDITION).unwrap().last_transition_time);
}
