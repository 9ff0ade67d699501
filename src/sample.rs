//! Seeded sample-report generator.
//!
//! The analytics dashboard can render from generated data when no real
//! reports exist yet. The generator is deterministic: same seed, count,
//! spread and reference date always produce the same records, so the
//! charts (and their tests) are reproducible. Nothing here touches a
//! global random source.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Category, ReportRecord, Status};

const LOCATIONS: [&str; 8] = [
    "MG Road",
    "Nehru Nagar",
    "Station Road",
    "Gandhi Chowk",
    "Lake View Colony",
    "Sector 12 Market",
    "Old Bus Stand",
    "Riverside Park",
];

const TITLES: [&str; 8] = [
    "Pothole near junction",
    "Streetlight not working",
    "Garbage not collected",
    "Water pipeline leakage",
    "Open drain cover",
    "Illegal dumping",
    "Broken footpath",
    "Stray construction debris",
];

/// Generate `count` deterministic sample reports, with submission dates
/// spread uniformly over the `spread_days` calendar days ending at
/// `reference_date` and roughly 60% of reports resolved.
pub fn sample_reports(
    seed: u64,
    count: usize,
    spread_days: u32,
    reference_date: NaiveDate,
) -> Vec<ReportRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let spread = spread_days.max(1);

    (0..count)
        .map(|i| {
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            let status = if rng.gen_bool(0.6) {
                Status::Resolved
            } else {
                Status::Pending
            };
            let days_ago = rng.gen_range(0..spread) as i64;
            let date = reference_date - Duration::days(days_ago);
            let submitted_at = date
                .and_hms_opt(rng.gen_range(0..24), rng.gen_range(0..60), 0)
                .expect("in-range time of day")
                .and_utc();

            ReportRecord {
                id: (i + 1) as i64,
                title: TITLES[rng.gen_range(0..TITLES.len())].to_string(),
                description: format!("Sample report #{}", i + 1),
                category,
                location: LOCATIONS[rng.gen_range(0..LOCATIONS.len())].to_string(),
                image: None,
                status,
                submitted_at,
            }
        })
        .collect()
}
