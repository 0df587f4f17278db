use chrono::Duration;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::config::{GeneratorConfig, WINDOW_DAYS};
use crate::events::RatingChangeEvent;
use crate::scale::{BAND_HI, BAND_LO, SCALE_LEN};
use crate::types::{Agency, ChangeType, Outlook, Sector};

/// Fixed roster of rated entities.
pub const COMPANIES: [&str; 24] = [
    "Tata Steel Ltd",
    "Adani Ports & SEZ",
    "JSW Steel Ltd",
    "Vedanta Ltd",
    "Hindalco Industries",
    "UltraTech Cement",
    "Godrej Properties",
    "L&T Finance Holdings",
    "Shriram Transport",
    "Mahindra Finance",
    "NBCC India Ltd",
    "Jaiprakash Associates",
    "Reliance Industries",
    "ONGC Ltd",
    "Coal India Ltd",
    "Power Finance Corp",
    "REC Ltd",
    "Indian Railway Finance",
    "HUDCO Ltd",
    "LIC Housing Finance",
    "Bajaj Finance Ltd",
    "HDFC Ltd",
    "ICICI Bank Ltd",
    "Axis Bank Ltd",
];

const CHANGE_WEIGHTS: [(ChangeType, f64); 3] = [
    (ChangeType::Upgrade, 0.4),
    (ChangeType::Downgrade, 0.4),
    (ChangeType::Stable, 0.2),
];

const OUTLOOK_WEIGHTS: [(Outlook, f64); 4] = [
    (Outlook::Stable, 0.5),
    (Outlook::Positive, 0.2),
    (Outlook::Negative, 0.2),
    (Outlook::Watch, 0.1),
];

/// Cumulative-probability draw over an explicit weight table. Weights need
/// not sum to one; the draw is uniform over the total mass.
fn weighted_pick<T: Copy>(table: &[(T, f64)], rng: &mut impl Rng) -> T {
    let total: f64 = table.iter().map(|(_, w)| w).sum();
    let mut draw = rng.random_range(0.0..total);
    for &(value, weight) in table {
        if draw < weight {
            return value;
        }
        draw -= weight;
    }
    // draw can only fall through on floating-point rounding at the top edge.
    table.last().expect("weight table must be non-empty").0
}

/// Resolve a requested change against the scale bounds.
///
/// A move blocked at the scale's edge (Upgrade from the top notch, Downgrade
/// from the bottom) is forced to Stable. A move that merely clamps — e.g.
/// index 18 shifted up by 2 lands on 19 — keeps its requested type. The
/// sampled band makes the Downgrade guard unreachable, but the rule is kept
/// for both directions.
fn apply_change(old_idx: usize, requested: ChangeType, shift: usize) -> (usize, ChangeType) {
    match requested {
        ChangeType::Upgrade if old_idx < SCALE_LEN - 1 => {
            ((old_idx + shift).min(SCALE_LEN - 1), ChangeType::Upgrade)
        }
        ChangeType::Downgrade if old_idx > 0 => {
            (old_idx.saturating_sub(shift), ChangeType::Downgrade)
        }
        _ => (old_idx, ChangeType::Stable),
    }
}

/// Generate `config.count` synthetic rating actions, deterministically for a
/// given config. Old ratings are drawn from the B-/BBB+ band around the
/// investment-grade boundary; dates land on the 30 days ending at the anchor.
pub fn generate(config: &GeneratorConfig) -> Vec<RatingChangeEvent> {
    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
    let base = config.anchor - Duration::days(WINDOW_DAYS);

    (0..config.count)
        .map(|_| {
            let company = COMPANIES[rng.random_range(0..COMPANIES.len())];
            let agency = Agency::ALL[rng.random_range(0..Agency::ALL.len())];
            let scale = agency.scale();

            let old_idx = rng.random_range(BAND_LO..=BAND_HI);
            let requested = weighted_pick(&CHANGE_WEIGHTS, &mut rng);
            let shift = match requested {
                ChangeType::Stable => 0,
                _ => rng.random_range(1..=2),
            };
            let (new_idx, change_type) = apply_change(old_idx, requested, shift);

            let date = base + Duration::days(rng.random_range(0..WINDOW_DAYS));
            let outlook = weighted_pick(&OUTLOOK_WEIGHTS, &mut rng);
            let sector = Sector::ALL[rng.random_range(0..Sector::ALL.len())];

            RatingChangeEvent {
                date,
                company: company.to_string(),
                agency,
                old_rating: scale[old_idx].to_string(),
                new_rating: scale[new_idx].to_string(),
                change_type,
                outlook,
                sector,
                notch_delta: new_idx as i32 - old_idx as i32,
            }
        })
        .collect()
}
