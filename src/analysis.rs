use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::events::RatingChangeEvent;
use crate::types::{Agency, ChangeType};

/// Scalar metrics for the dashboard's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub upgrades: usize,
    pub downgrades: usize,
    pub stable: usize,
}

impl Summary {
    fn zero() -> Self {
        Summary { total: 0, upgrades: 0, downgrades: 0, stable: 0 }
    }

    /// The explicit "no data" signal for the presentation layer.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgencyCount {
    pub agency: Agency,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeTypeCount {
    pub change_type: ChangeType,
    pub count: usize,
}

/// One timeline row per distinct (date, change type) combination present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub change_type: ChangeType,
    pub count: usize,
}

pub fn summarize(events: &[RatingChangeEvent]) -> Summary {
    let mut summary = Summary::zero();
    for event in events {
        summary.total += 1;
        match event.change_type {
            ChangeType::Upgrade => summary.upgrades += 1,
            ChangeType::Downgrade => summary.downgrades += 1,
            ChangeType::Stable => summary.stable += 1,
        }
    }
    summary
}

/// Per-agency counts, descending by count (bar-chart order), ties broken by
/// agency declaration order. Agencies with no events are omitted.
pub fn count_by_agency(events: &[RatingChangeEvent]) -> Vec<AgencyCount> {
    let mut counts: BTreeMap<Agency, usize> = BTreeMap::new();
    for event in events {
        *counts.entry(event.agency).or_insert(0) += 1;
    }
    let mut out: Vec<AgencyCount> =
        counts.into_iter().map(|(agency, count)| AgencyCount { agency, count }).collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then(a.agency.cmp(&b.agency)));
    out
}

/// Per-change-type counts, descending by count (distribution-chart order).
pub fn count_by_change_type(events: &[RatingChangeEvent]) -> Vec<ChangeTypeCount> {
    let mut counts: BTreeMap<ChangeType, usize> = BTreeMap::new();
    for event in events {
        *counts.entry(event.change_type).or_insert(0) += 1;
    }
    let mut out: Vec<ChangeTypeCount> = counts
        .into_iter()
        .map(|(change_type, count)| ChangeTypeCount { change_type, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then(a.change_type.cmp(&b.change_type)));
    out
}

/// Timeline counts grouped by (date, change type), ascending by date then
/// change type.
pub fn timeline(events: &[RatingChangeEvent]) -> Vec<TimelinePoint> {
    let mut counts: BTreeMap<(NaiveDate, ChangeType), usize> = BTreeMap::new();
    for event in events {
        *counts.entry((event.date, event.change_type)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((date, change_type), count)| TimelinePoint { date, change_type, count })
        .collect()
}

/// How many filtered events move a company across the investment-grade
/// boundary.
pub fn count_grade_crossings(events: &[RatingChangeEvent]) -> usize {
    events.iter().filter(|e| e.crosses_investment_grade()).count()
}

/// Everything the presentation layer renders for one filter pass: the
/// filtered events plus every derived aggregate. Recomputed from scratch on
/// each pass — the dataset is at most a few hundred records.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub events: Vec<RatingChangeEvent>,
    pub summary: Summary,
    pub by_agency: Vec<AgencyCount>,
    pub by_change_type: Vec<ChangeTypeCount>,
    pub timeline: Vec<TimelinePoint>,
    pub grade_crossings: usize,
}

impl DashboardData {
    pub fn from_events(events: Vec<RatingChangeEvent>) -> Self {
        DashboardData {
            summary: summarize(&events),
            by_agency: count_by_agency(&events),
            by_change_type: count_by_change_type(&events),
            timeline: timeline(&events),
            grade_crossings: count_grade_crossings(&events),
            events,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
