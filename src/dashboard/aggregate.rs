//! Report aggregation.
//!
//! Turns the full record sequence into the summary statistics both
//! dashboards render: totals, the per-category histogram, the status
//! split, the trailing N-day trend and the top-K location/category
//! rankings. One pass over the records builds every counter; the rankings
//! are then derived from the counters.
//!
//! The reference date is an explicit parameter. The pipeline never reads
//! the wall clock, so identical inputs always produce identical output.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::model::{Category, ReportRecord, Status};

/// Count of reports in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Count of reports submitted on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Count of reports at one distinct location string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

/// Resolved/pending breakdown for the status pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSplit {
    pub resolved: usize,
    pub pending: usize,
}

/// Everything the dashboards need, computed in one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub resolved_count: usize,
    pub pending_count: usize,
    /// Reports whose submission date equals the reference date.
    pub today_count: usize,
    /// All 7 categories in enumeration order, zero counts included.
    pub category_histogram: Vec<CategoryCount>,
    pub status_split: StatusSplit,
    /// Exactly `lookback_days` entries, chronologically ascending, ending
    /// at the reference date. Days with no reports appear with count 0.
    pub trend: Vec<DayCount>,
    /// Distinct locations by descending count, ties in first-encountered
    /// order, at most `top_k` entries.
    pub top_locations: Vec<LocationCount>,
    /// Categories with at least one report, ranked the same way.
    pub top_categories: Vec<CategoryCount>,
}

/// Aggregate `records` into a [`DashboardSummary`].
///
/// Records submitted before the lookback window simply do not contribute
/// to the trend; they still count toward every other statistic.
pub fn summarize(
    records: &[ReportRecord],
    reference_date: NaiveDate,
    lookback_days: usize,
    top_k: usize,
) -> DashboardSummary {
    let window_start = reference_date - Duration::days(lookback_days.saturating_sub(1) as i64);

    let mut resolved_count = 0;
    let mut pending_count = 0;
    let mut today_count = 0;
    let mut category_counts = [0usize; Category::ALL.len()];
    let mut trend_counts = vec![0usize; lookback_days];
    // Insertion-ordered so that ranking ties keep first-encountered order.
    let mut location_counts: Vec<(String, usize)> = Vec::new();

    for record in records {
        match record.status {
            Status::Resolved => resolved_count += 1,
            Status::Pending => pending_count += 1,
        }

        let day = record.submitted_at.date_naive();
        if day == reference_date {
            today_count += 1;
        }
        if lookback_days > 0 && day >= window_start && day <= reference_date {
            let offset = (day - window_start).num_days() as usize;
            trend_counts[offset] += 1;
        }

        category_counts[category_index(record.category)] += 1;

        match location_counts
            .iter_mut()
            .find(|(loc, _)| *loc == record.location)
        {
            Some((_, count)) => *count += 1,
            None => location_counts.push((record.location.clone(), 1)),
        }
    }

    let category_histogram: Vec<CategoryCount> = Category::ALL
        .into_iter()
        .enumerate()
        .map(|(i, category)| CategoryCount {
            category,
            count: category_counts[i],
        })
        .collect();

    let trend: Vec<DayCount> = trend_counts
        .into_iter()
        .enumerate()
        .map(|(offset, count)| DayCount {
            date: window_start + Duration::days(offset as i64),
            count,
        })
        .collect();

    let top_locations = rank(
        location_counts
            .into_iter()
            .map(|(location, count)| LocationCount { location, count })
            .collect(),
        |entry| entry.count,
        top_k,
    );

    // Categories that never appear in the data carry no ranking signal, so
    // an empty store yields an empty top list rather than a zero-count one.
    let top_categories = rank(
        category_histogram
            .iter()
            .filter(|c| c.count > 0)
            .cloned()
            .collect(),
        |entry| entry.count,
        top_k,
    );

    log::debug!(
        "DASHBOARD_SUMMARY total={} resolved={} pending={} today={}",
        records.len(),
        resolved_count,
        pending_count,
        today_count
    );

    DashboardSummary {
        total: records.len(),
        resolved_count,
        pending_count,
        today_count,
        category_histogram,
        status_split: StatusSplit {
            resolved: resolved_count,
            pending: pending_count,
        },
        trend,
        top_locations,
        top_categories,
    }
}

fn category_index(category: Category) -> usize {
    // ALL is the canonical enumeration order, so the position is the index.
    Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or(Category::ALL.len() - 1)
}

/// Sort descending by count and truncate. The sort is stable, so equal
/// counts keep their first-encountered order.
fn rank<T>(mut entries: Vec<T>, count: impl Fn(&T) -> usize, top_k: usize) -> Vec<T> {
    entries.sort_by(|a, b| count(b).cmp(&count(a)));
    entries.truncate(top_k);
    entries
}
