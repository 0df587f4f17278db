use std::collections::HashMap;

use crate::config::GeneratorConfig;
use crate::events::RatingChangeEvent;
use crate::generator;

/// Session-scoped memoization of generated datasets, keyed by the full
/// generator config. The base dataset is generated once per distinct config
/// and reused across filter passes; entries are never invalidated — the
/// cache's lifetime is the session's.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<GeneratorConfig, Vec<RatingChangeEvent>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dataset for `config`, generating it on first request.
    pub fn events(&mut self, config: &GeneratorConfig) -> &[RatingChangeEvent] {
        self.entries.entry(config.clone()).or_insert_with(|| generator::generate(config))
    }

    /// Number of distinct configs generated so far this session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn config(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            count: 40,
            seed,
            anchor: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        }
    }

    #[test]
    fn repeat_lookups_hit_the_same_entry() {
        let mut cache = DatasetCache::new();
        let first = cache.events(&config(42)).to_vec();
        let second = cache.events(&config(42)).to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1, "identical params must not regenerate");
    }

    #[test]
    fn distinct_params_get_distinct_entries() {
        let mut cache = DatasetCache::new();
        cache.events(&config(1));
        cache.events(&config(2));
        cache.events(&GeneratorConfig { count: 10, ..config(1) });
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn cached_dataset_matches_direct_generation() {
        let mut cache = DatasetCache::new();
        let config = config(7);
        assert_eq!(cache.events(&config), generator::generate(&config).as_slice());
    }
}
