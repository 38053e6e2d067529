use std::cmp::Ordering;

use rusqlite::Connection;

use crate::errors::AppError;
use crate::models::{default_workers, Booking, SortKey, Worker};
use crate::services::selection::Selection;
use crate::store::{StoreAdapter, BOOKINGS_KEY, WORKERS_KEY};

#[derive(Debug, Clone)]
pub struct CatalogQuery {
    pub search: String,
    pub skill: String,
    pub sort: SortKey,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            skill: "all".to_string(),
            sort: SortKey::None,
        }
    }
}

/// Returns the stored catalog, seeding the default set on first run. A stored
/// catalog that fails to parse or validate is replaced by the defaults.
pub fn load_or_seed(conn: &Connection) -> Result<Vec<Worker>, AppError> {
    let store = StoreAdapter::new(conn);

    if !store.contains(WORKERS_KEY)? {
        let defaults = default_workers();
        store.save(WORKERS_KEY, &defaults)?;
        tracing::info!("seeded default worker catalog ({} workers)", defaults.len());
        return Ok(defaults);
    }

    let workers: Vec<Worker> = store.load_or_else(WORKERS_KEY, default_workers)?;

    if workers.iter().any(|w| w.validate().is_err()) {
        tracing::warn!("stored catalog failed validation, restoring defaults");
        let defaults = default_workers();
        store.save(WORKERS_KEY, &defaults)?;
        return Ok(defaults);
    }

    Ok(workers)
}

/// Filter options for the skill dropdown: "all" first, then each skill once,
/// in first-occurrence order.
pub fn distinct_skills(workers: &[Worker]) -> Vec<String> {
    let mut skills = vec!["all".to_string()];
    for w in workers {
        if !skills.iter().any(|s| s == &w.skill) {
            skills.push(w.skill.clone());
        }
    }
    skills
}

/// Applies the name/skill filters and the sort key to a copy of the catalog.
/// The input is never mutated; ties keep their catalog-relative order.
pub fn filter_and_sort(workers: &[Worker], query: &CatalogQuery) -> Vec<Worker> {
    let needle = query.search.trim().to_lowercase();

    let mut list: Vec<Worker> = workers
        .iter()
        .filter(|w| needle.is_empty() || w.name.to_lowercase().contains(&needle))
        .filter(|w| query.skill == "all" || w.skill == query.skill)
        .cloned()
        .collect();

    match query.sort {
        SortKey::None => {}
        SortKey::RateLow => list.sort_by(|a, b| cmp_f64(a.rate, b.rate)),
        SortKey::RateHigh => list.sort_by(|a, b| cmp_f64(b.rate, a.rate)),
        SortKey::RatingHigh => list.sort_by(|a, b| cmp_f64(b.rating, a.rating)),
    }

    list
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Restores the default catalog, clears the booking ledger, and drops the
/// current selection. Destructive: prior bookings are lost.
pub fn reset_to_defaults(
    conn: &Connection,
    selection: &mut Selection,
) -> Result<Vec<Worker>, AppError> {
    let store = StoreAdapter::new(conn);

    let defaults = default_workers();
    store.save(WORKERS_KEY, &defaults)?;
    store.save::<Booking>(BOOKINGS_KEY, &[])?;
    selection.clear();

    tracing::info!("demo data reset to defaults");
    Ok(defaults)
}
