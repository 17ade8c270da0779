//! Requirement filtering by declared activity.
//!
//! A requirement is kept iff no activity is declared or the declared
//! activity is in its `applicable_to` set. The filter is a pure
//! set-membership test, so applying it twice with the same activity
//! returns the same list.

use spacereg_core::ActivityType;
use spacereg_pack::Requirement;

/// Keep the requirements relevant to `activity`, preserving order.
pub fn filter_requirements<'a, I>(requirements: I, activity: Option<ActivityType>) -> Vec<&'a Requirement>
where
    I: IntoIterator<Item = &'a Requirement>,
{
    requirements
        .into_iter()
        .filter(|r| activity.map_or(true, |a| r.applicable_to.contains(&a)))
        .collect()
}

/// Number of binding requirements in `requirements`.
pub fn mandatory_count(requirements: &[&Requirement]) -> usize {
    requirements.iter().filter(|r| r.mandatory).count()
}
