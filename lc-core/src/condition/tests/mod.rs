mod funcs_test;

use assertables::*;
use clockabilly::mock::MockUtcClock;
use clockabilly::{
    DateTime,
    Utc,
};
use rstest::*;
use tracing_test::traced_test;

use super::*;
use crate::prelude::metav1;

const NOW: i64 = 1_700_000_000;

fn ts(secs: i64) -> Option<metav1::Time> {
    DateTime::<Utc>::from_timestamp(secs, 0).map(metav1::Time)
}

fn stamped(c: Condition, secs: i64) -> Condition {
    Condition { last_transition_time: ts(secs), ..c }
}

fn types_of(conditions: &ConditionSet) -> Vec<&str> {
    conditions.iter().map(|c| c.type_.as_str()).collect()
}

#[fixture]
fn clock() -> Box<MockUtcClock> {
    MockUtcClock::boxed(NOW)
}

#[fixture]
fn initialized(clock: Box<MockUtcClock>) -> ConditionSet {
    let mut conditions = ConditionSet::new();
    conditions.init_with_clock([], &*clock);
    conditions
}
