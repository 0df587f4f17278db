use chrono::NaiveDate;

/// Length of the generation window: events land on the 30 days leading up to
/// the anchor date.
pub const WINDOW_DAYS: i64 = 30;

/// Parameters that fully determine a generated dataset. Also serves as the
/// memoization key in `cache`, so every field that feeds the generator is
/// part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    /// End of the generation window — the session's "today".
    pub anchor: NaiveDate,
}

impl GeneratorConfig {
    /// Demo-dashboard preset: 150 records over the 30 days ending at `anchor`.
    pub fn canonical(anchor: NaiveDate) -> Self {
        GeneratorConfig { count: 150, seed: 42, anchor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_matches_dashboard_preset() {
        let anchor = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let config = GeneratorConfig::canonical(anchor);
        assert_eq!(config.count, 150);
        assert_eq!(config.seed, 42);
        assert_eq!(config.anchor, anchor);
    }

    #[test]
    fn config_is_a_usable_map_key() {
        use std::collections::HashMap;

        let anchor = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let mut map: HashMap<GeneratorConfig, u32> = HashMap::new();
        map.insert(GeneratorConfig::canonical(anchor), 1);
        map.insert(GeneratorConfig { seed: 7, ..GeneratorConfig::canonical(anchor) }, 2);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&GeneratorConfig::canonical(anchor)], 1);
    }
}
