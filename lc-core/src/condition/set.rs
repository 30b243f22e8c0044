use std::collections::BTreeMap;

use clockabilly::{
    Clockable,
    SubsecRound,
    UtcClock,
};
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};
use tracing::*;

use super::*;
use crate::prelude::metav1;

/// The conditions of one resource, unique by type, `Ready` first and the rest sorted by type.
///
/// Deserializing goes through [`From<Vec<Condition>>`], so a stored list that is unsorted or
/// repeats a type still comes back as a well-formed set.
#[derive(Clone, Debug, Default, JsonSchema, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConditionSet(Vec<Condition>);

impl ConditionSet {
    pub fn new() -> ConditionSet {
        ConditionSet(vec![])
    }

    /// Resets the set to a single `Ready=Unknown` condition, then applies each of the `seed`
    /// conditions in order.  Anything the set held before is dropped.  Seed conditions without a
    /// transition time are stamped with the same clock as `Ready`.
    pub fn init(&mut self, seed: impl IntoIterator<Item = Condition>) {
        self.init_with_clock(seed, &UtcClock)
    }

    pub fn init_with_clock(&mut self, seed: impl IntoIterator<Item = Condition>, clock: &dyn Clockable) {
        self.reset();
        self.set_with_clock(unknown_condition(READY_CONDITION, REQUESTED_REASON, READY_INIT_MESSAGE), clock);
        for c in seed {
            self.set_with_clock(c, clock);
        }
    }

    /// Stores `c`, replacing any condition of the same type.  If the stored condition already
    /// has the same state it is left alone, original transition time included.  Passing `None`
    /// does nothing.
    pub fn set(&mut self, c: impl Into<Option<Condition>>) {
        self.set_with_clock(c, &UtcClock)
    }

    pub fn set_with_clock(&mut self, c: impl Into<Option<Condition>>, clock: &dyn Clockable) {
        let Some(mut c) = c.into() else {
            return;
        };

        if c.last_transition_time.is_none() {
            c.last_transition_time = Some(metav1::Time(clock.now().trunc_subsecs(0)));
        }

        match self.0.iter().position(|existing| existing.type_ == c.type_) {
            Some(i) if self.0[i].has_same_state(&c) => {
                trace!("condition {} unchanged", c.type_);
            },
            Some(i) => {
                debug!("condition transitioned: {} -> {c}", self.0[i]);
                self.0[i] = c;
            },
            None => {
                debug!("condition added: {c}");
                self.0.push(c);
            },
        }
        self.sort();
    }

    pub fn remove(&mut self, t: impl AsRef<str>) {
        self.0.retain(|c| c.type_ != *t.as_ref());
    }

    /// Empties the set completely; unlike `init`, not even `Ready` is kept.
    pub fn reset(&mut self) {
        self.0.clear();
    }

    pub fn mark_true(&mut self, t: impl Into<ConditionType>, message: impl std::fmt::Display) {
        self.set(true_condition(t, message));
    }

    pub fn mark_false(
        &mut self,
        t: impl Into<ConditionType>,
        reason: impl Into<Reason>,
        severity: Severity,
        message: impl std::fmt::Display,
    ) {
        self.set(false_condition(t, reason, severity, message));
    }

    pub fn mark_unknown(&mut self, t: impl Into<ConditionType>, reason: impl Into<Reason>, message: impl std::fmt::Display) {
        self.set(unknown_condition(t, reason, message));
    }

    pub fn get(&self, t: impl AsRef<str>) -> Option<&Condition> {
        self.0.iter().find(|c| c.type_ == *t.as_ref())
    }

    pub fn has(&self, t: impl AsRef<str>) -> bool {
        self.get(t).is_some()
    }

    pub fn is_true(&self, t: impl AsRef<str>) -> bool {
        self.get(t).is_some_and(|c| c.status == Status::True)
    }

    pub fn is_false(&self, t: impl AsRef<str>) -> bool {
        self.get(t).is_some_and(|c| c.status == Status::False)
    }

    // A missing condition counts as unknown, which is not symmetric with is_true/is_false
    pub fn is_unknown(&self, t: impl AsRef<str>) -> bool {
        self.get(t).is_none_or(|c| c.status == Status::Unknown)
    }

    /// True if every condition other than `Ready` is `True` (vacuously so when `Ready` is the
    /// only one).
    pub fn all_sub_conditions_true(&self) -> bool {
        self.0.iter().filter(|c| !c.is_ready()).all(|c| c.status == Status::True)
    }

    pub fn sort(&mut self) {
        self.0.sort_by(compare_by_type);
    }

    pub fn sort_by_last_transition_time(&mut self) {
        self.0.sort_by(compare_by_last_transition_time);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.0.iter()
    }

    // Not public: callers could otherwise rename a condition and break uniqueness or ordering
    pub(super) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Condition> {
        self.0.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collapses the set into a single condition of type `t` that a dependent resource can
    /// store in its own status.
    ///
    /// If `Ready` is `True` the result is `True` with Ready's message, since every other
    /// condition is then assumed to be `True` as well.  Otherwise the result copies the most
    /// recently transitioned condition out of the most severe non-empty priority [`Group`].
    /// The transition time is carried over in both cases.  An empty set mirrors to `None`.
    pub fn mirror(&self, t: impl Into<ConditionType>) -> Option<Condition> {
        if self.0.is_empty() {
            return None;
        }

        let groups = self.groups();
        let ready = groups
            .get(&Group::True)
            .and_then(|members| members.iter().find(|c| c.is_ready()));
        if let Some(ready) = ready {
            trace!("mirroring {ready}");
            return Some(Condition {
                last_transition_time: ready.last_transition_time.clone(),
                ..true_condition(t, &ready.message)
            });
        }

        let (_, mut members) = groups.into_iter().find(|(_, members)| !members.is_empty())?;
        members.sort_by(|a, b| compare_by_last_transition_time(a, b));
        let source = members.first()?;
        trace!("mirroring {source}");

        let mirrored = match source.status {
            Status::True => true_condition(t, &source.message),
            Status::False => false_condition(t, source.reason.clone(), source.severity, &source.message),
            Status::Unknown => unknown_condition(t, source.reason.clone(), &source.message),
        };
        Some(Condition { last_transition_time: source.last_transition_time.clone(), ..mirrored })
    }

    /// Partitions the set into its priority groups, keeping set order within each group.
    /// Every group is present in the result, possibly empty.
    pub fn groups(&self) -> BTreeMap<Group, Vec<&Condition>> {
        let mut groups: BTreeMap<Group, Vec<&Condition>> = Group::ALL.into_iter().map(|g| (g, vec![])).collect();
        for c in &self.0 {
            groups.entry(Group::of(c)).or_default().push(c);
        }
        groups
    }
}

impl FromIterator<Condition> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        let mut conditions = ConditionSet::new();
        for c in iter {
            conditions.set(c);
        }
        conditions
    }
}

/// Builds a set from a raw list without touching transition times.  When a type appears more
/// than once the last entry wins.
impl From<Vec<Condition>> for ConditionSet {
    fn from(list: Vec<Condition>) -> Self {
        let mut conditions = ConditionSet(Vec::with_capacity(list.len()));
        for c in list {
            match conditions.0.iter().position(|existing| existing.type_ == c.type_) {
                Some(i) => conditions.0[i] = c,
                None => conditions.0.push(c),
            }
        }
        conditions.sort();
        conditions
    }
}

impl<'de> Deserialize<'de> for ConditionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Condition>::deserialize(deserializer).map(ConditionSet::from)
    }
}

impl IntoIterator for ConditionSet {
    type Item = Condition;
    type IntoIter = std::vec::IntoIter<Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConditionSet {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
