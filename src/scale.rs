use crate::types::Agency;

/// Every agency scale has exactly 20 notches, ordered weakest ("D") to
/// strongest ("AAA"). Index position is the sole ordering signal.
pub const SCALE_LEN: usize = 20;

/// Sampled old-rating band: B- through BBB+ (inclusive), the notches around
/// the investment-grade boundary where transitions matter most.
pub const BAND_LO: usize = 4;
pub const BAND_HI: usize = 12;

/// Index of the "BBB-" tier. Ratings at or above it are investment grade by
/// domain convention.
pub const INVESTMENT_GRADE_FLOOR: usize = 10;

const GENERIC: [&str; SCALE_LEN] = [
    "D", "C", "CC", "CCC", "B-", "B", "B+", "BB-", "BB", "BB+", "BBB-", "BBB", "BBB+", "A-", "A",
    "A+", "AA-", "AA", "AA+", "AAA",
];

// ICRA prefixes only the B-and-above tiers; the default tiers stay plain.
const ICRA: [&str; SCALE_LEN] = [
    "D",
    "C",
    "CC",
    "CCC",
    "[ICRA]B-",
    "[ICRA]B",
    "[ICRA]B+",
    "[ICRA]BB-",
    "[ICRA]BB",
    "[ICRA]BB+",
    "[ICRA]BBB-",
    "[ICRA]BBB",
    "[ICRA]BBB+",
    "[ICRA]A-",
    "[ICRA]A",
    "[ICRA]A+",
    "[ICRA]AA-",
    "[ICRA]AA",
    "[ICRA]AA+",
    "[ICRA]AAA",
];

const BRICKWORK: [&str; SCALE_LEN] = [
    "BWR D", "BWR C", "BWR CC", "BWR CCC", "BWR B-", "BWR B", "BWR B+", "BWR BB-", "BWR BB",
    "BWR BB+", "BWR BBB-", "BWR BBB", "BWR BBB+", "BWR A-", "BWR A", "BWR A+", "BWR AA-",
    "BWR AA", "BWR AA+", "BWR AAA",
];

impl Agency {
    /// The agency's ordered rating vocabulary. Pure lookup; the agency set is
    /// closed so there is no unknown-agency case.
    pub fn scale(self) -> &'static [&'static str; SCALE_LEN] {
        match self {
            Agency::Crisil | Agency::Care | Agency::IndiaRatings => &GENERIC,
            Agency::Icra => &ICRA,
            Agency::Brickwork => &BRICKWORK,
        }
    }

    /// Position of `label` on this agency's scale, if it is a valid member.
    pub fn rating_index(self, label: &str) -> Option<usize> {
        self.scale().iter().position(|&r| r == label)
    }
}

/// Ratings at or above the "BBB-" tier are investment grade.
pub fn is_investment_grade(index: usize) -> bool {
    index >= INVESTMENT_GRADE_FLOOR
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_scale_has_twenty_unique_labels() {
        for agency in Agency::ALL {
            let scale = agency.scale();
            assert_eq!(scale.len(), SCALE_LEN);
            let unique: HashSet<&str> = scale.iter().copied().collect();
            assert_eq!(unique.len(), SCALE_LEN, "{agency}: duplicate labels");
        }
    }

    #[test]
    fn scales_run_from_default_to_aaa() {
        assert_eq!(Agency::Crisil.scale()[0], "D");
        assert_eq!(Agency::Crisil.scale()[19], "AAA");
        assert_eq!(Agency::Icra.scale()[0], "D");
        assert_eq!(Agency::Icra.scale()[19], "[ICRA]AAA");
        assert_eq!(Agency::Brickwork.scale()[0], "BWR D");
        assert_eq!(Agency::Brickwork.scale()[19], "BWR AAA");
    }

    #[test]
    fn agency_specific_formatting() {
        // ICRA brackets the B-and-above tiers only.
        assert_eq!(Agency::Icra.scale()[3], "CCC");
        assert_eq!(Agency::Icra.scale()[4], "[ICRA]B-");
        // Brickwork space-prefixes every tier.
        assert!(Agency::Brickwork.scale().iter().all(|r| r.starts_with("BWR ")));
    }

    #[test]
    fn rating_index_finds_members_and_rejects_foreign_labels() {
        assert_eq!(Agency::Crisil.rating_index("BB"), Some(8));
        assert_eq!(Agency::Icra.rating_index("[ICRA]BB"), Some(8));
        // A plain label is not a member of ICRA's prefixed band.
        assert_eq!(Agency::Icra.rating_index("BB"), None);
        assert_eq!(Agency::Crisil.rating_index("BWR BB"), None);
    }

    #[test]
    fn sampled_band_covers_b_through_bbb_plus() {
        assert_eq!(Agency::Crisil.scale()[BAND_LO], "B-");
        assert_eq!(Agency::Crisil.scale()[BAND_HI], "BBB+");
    }

    #[test]
    fn investment_grade_boundary_sits_at_bbb_minus() {
        assert_eq!(Agency::Crisil.scale()[INVESTMENT_GRADE_FLOOR], "BBB-");
        assert!(!is_investment_grade(9)); // BB+
        assert!(is_investment_grade(10)); // BBB-
        assert!(is_investment_grade(19)); // AAA
    }
}
