use std::collections::HashSet;

use chrono::NaiveDate;

use crate::events::RatingChangeEvent;
use crate::types::{Agency, ChangeType, Sector};

/// User-selected predicates, applied conjunctively: an event survives only if
/// it passes the inclusive date range AND all three set-membership tests.
/// Empty sets are legal and simply match nothing.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub agencies: HashSet<Agency>,
    pub change_types: HashSet<ChangeType>,
    pub sectors: HashSet<Sector>,
}

impl FilterSpec {
    /// The identity filter over `[date_from, date_to]`: every agency, change
    /// type, and sector selected.
    pub fn select_all(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        FilterSpec {
            date_from,
            date_to,
            agencies: Agency::ALL.into_iter().collect(),
            change_types: ChangeType::ALL.into_iter().collect(),
            sectors: Sector::ALL.into_iter().collect(),
        }
    }

    pub fn matches(&self, event: &RatingChangeEvent) -> bool {
        event.date >= self.date_from
            && event.date <= self.date_to
            && self.agencies.contains(&event.agency)
            && self.change_types.contains(&event.change_type)
            && self.sectors.contains(&event.sector)
    }

    /// The subsequence of `events` matching every predicate, in input order.
    /// A degenerate range (`date_from > date_to`) yields an empty result
    /// rather than an error.
    pub fn apply(&self, events: &[RatingChangeEvent]) -> Vec<RatingChangeEvent> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
