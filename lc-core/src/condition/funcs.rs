use std::cmp::Ordering;
use std::fmt;

use super::*;

pub fn true_condition(t: impl Into<ConditionType>, message: impl fmt::Display) -> Condition {
    Condition {
        type_: t.into(),
        status: Status::True,
        severity: Severity::None,
        reason: READY_REASON,
        message: message.to_string(),
        last_transition_time: None,
    }
}

// A False condition with Severity::None is representable but meaningless; it lands in the
// lowest-priority group when ranked.
pub fn false_condition(
    t: impl Into<ConditionType>,
    reason: impl Into<Reason>,
    severity: Severity,
    message: impl fmt::Display,
) -> Condition {
    Condition {
        type_: t.into(),
        status: Status::False,
        severity,
        reason: reason.into(),
        message: message.to_string(),
        last_transition_time: None,
    }
}

pub fn unknown_condition(
    t: impl Into<ConditionType>,
    reason: impl Into<Reason>,
    message: impl fmt::Display,
) -> Condition {
    Condition {
        type_: t.into(),
        status: Status::Unknown,
        severity: Severity::None,
        reason: reason.into(),
        message: message.to_string(),
        last_transition_time: None,
    }
}

impl Condition {
    /// True when both conditions describe the same state, ignoring `last_transition_time`.
    pub fn has_same_state(&self, other: &Condition) -> bool {
        self.type_ == other.type_
            && self.status == other.status
            && self.reason == other.reason
            && self.severity == other.severity
            && self.message == other.message
    }

    pub fn is_ready(&self) -> bool {
        self.type_ == READY_CONDITION
    }

    /// True for a `False` condition whose reason marks a failure that retrying won't fix.
    pub fn is_error(&self) -> bool {
        self.status == Status::False && HARD_ERROR_REASONS.contains(&self.reason)
    }
}

pub fn is_error(c: Option<&Condition>) -> bool {
    c.is_some_and(Condition::is_error)
}

// Sort order for a ConditionSet: Ready first, everything else lexically by type
pub fn compare_by_type(a: &Condition, b: &Condition) -> Ordering {
    match (a.is_ready(), b.is_ready()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.type_.cmp(&b.type_),
    }
}

// Newest first.  An unstamped condition is older than any stamped one.
pub fn compare_by_last_transition_time(a: &Condition, b: &Condition) -> Ordering {
    let a_ts = a.last_transition_time.as_ref().map(|t| t.0);
    let b_ts = b.last_transition_time.as_ref().map(|t| t.0);
    b_ts.cmp(&a_ts)
}

/// Priority bucket of a condition; lower buckets are more important.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Group {
    FalseError,
    FalseWarning,
    FalseInfo,
    Unknown,
    True,

    // False without a severity; nothing well-formed ends up here
    Other,
}

impl Group {
    pub const ALL: [Group; 6] =
        [Group::FalseError, Group::FalseWarning, Group::FalseInfo, Group::Unknown, Group::True, Group::Other];

    pub fn of(c: &Condition) -> Group {
        match (c.status, c.severity) {
            (Status::False, Severity::Error) => Group::FalseError,
            (Status::False, Severity::Warning) => Group::FalseWarning,
            (Status::False, Severity::Info) => Group::FalseInfo,
            (Status::False, Severity::None) => Group::Other,
            (Status::Unknown, _) => Group::Unknown,
            (Status::True, _) => Group::True,
        }
    }

    pub fn order(&self) -> usize {
        *self as usize
    }
}

/// Returns whichever condition should be surfaced first.  A more severe group always wins;
/// within a group the more recently transitioned condition wins, and `c1` wins exact ties.
pub fn get_higher_prio_condition<'a>(c1: Option<&'a Condition>, c2: Option<&'a Condition>) -> Option<&'a Condition> {
    match (c1, c2) {
        (None, None) => None,
        (Some(c), None) | (None, Some(c)) => Some(c),
        (Some(c1), Some(c2)) => match Group::of(c1).cmp(&Group::of(c2)) {
            Ordering::Less => Some(c1),
            Ordering::Greater => Some(c2),
            Ordering::Equal => match compare_by_last_transition_time(c1, c2) {
                Ordering::Greater => Some(c2),
                _ => Some(c1),
            },
        },
    }
}

/// Carries the saved `last_transition_time` over to every condition in `conditions` whose
/// state is unchanged from its counterpart in `saved`, so that rebuilding a set from scratch
/// on each pass doesn't make every condition look freshly transitioned.
pub fn restore_last_transition_times(conditions: &mut ConditionSet, saved: &ConditionSet) {
    for c in conditions.iter_mut() {
        if let Some(s) = saved.get(&c.type_) {
            if c.has_same_state(s) {
                c.last_transition_time = s.last_transition_time.clone();
            }
        }
    }
}
