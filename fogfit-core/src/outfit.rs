//! Threshold rules turning conditions into an ordered list of clothing.

use rand::{Rng, seq::IndexedRandom};

use crate::units::mps_to_mph;

/// Temperature bands, coldest first. A reading belongs to the first band whose
/// upper bound it is below; the last band catches everything else.
const TEMPERATURE_BANDS: [(f64, &[&str]); 4] = [
    (10.0, &["puffer jacket", "thermal base layer", "beanie"]),
    (14.0, &["hoodie or fleece", "light scarf"]),
    (18.0, &["denim jacket", "long-sleeve tee"]),
    (22.0, &["t-shirt", "light overshirt or flannel"]),
];
const WARM_BAND: &[&str] = &["tank top", "shorts"];

const STRONG_WIND_MPH: f64 = 25.0;
const BREEZY_WIND_MPH: f64 = 15.0;
pub const STRONG_WIND_ITEM: &str = "hooded shell jacket";
pub const BREEZY_WIND_ITEM: &str = "windbreaker";

pub const FOG_SETS: [&[&str]; 3] = [
    &["water-resistant layer", "beanie"],
    &["light rain jacket", "scarf"],
    &["fog-proof windbreaker"],
];

pub const CLOSING_ITEMS: [&str; 2] = ["comfortable sneakers", "reusable tote bag"];

pub fn base_layers(temp_c: f64) -> &'static [&'static str] {
    TEMPERATURE_BANDS
        .iter()
        .find(|(upper, _)| temp_c < *upper)
        .map(|(_, items)| *items)
        .unwrap_or(WARM_BAND)
}

/// Thresholds are compared in mph rounded to six decimals, so a reported
/// "15 mph" that went through m/s still counts as exactly 15.
pub fn wind_layer(wind_mps: f64) -> Option<&'static str> {
    let mph = (mps_to_mph(wind_mps) * 1e6).round() / 1e6;
    if mph > STRONG_WIND_MPH {
        Some(STRONG_WIND_ITEM)
    } else if mph > BREEZY_WIND_MPH {
        Some(BREEZY_WIND_ITEM)
    } else {
        None
    }
}

/// Base layers, then at most one wind layer, then one whole fog set when
/// foggy, then shoes and a bag.
pub fn recommend_outfit<R: Rng + ?Sized>(
    temp_c: f64,
    wind_mps: f64,
    foggy: bool,
    rng: &mut R,
) -> Vec<&'static str> {
    let mut items: Vec<&'static str> = base_layers(temp_c).to_vec();

    items.extend(wind_layer(wind_mps));

    if foggy {
        if let Some(set) = FOG_SETS.choose(rng) {
            items.extend_from_slice(set);
        }
    }

    items.extend_from_slice(&CLOSING_ITEMS);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::wind_speed_to_mps;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn mph(v: f64) -> f64 {
        v / 2.237
    }

    #[test]
    fn bands_are_half_open() {
        assert_eq!(base_layers(-5.0), &["puffer jacket", "thermal base layer", "beanie"]);
        assert_eq!(base_layers(9.99), base_layers(-5.0));
        assert_eq!(base_layers(10.0), &["hoodie or fleece", "light scarf"]);
        assert_eq!(base_layers(14.0), &["denim jacket", "long-sleeve tee"]);
        assert_eq!(base_layers(18.0), &["t-shirt", "light overshirt or flannel"]);
        assert_eq!(base_layers(22.0), &["tank top", "shorts"]);
        assert_eq!(base_layers(35.0), &["tank top", "shorts"]);
    }

    #[test]
    fn cold_band_carries_more_insulation() {
        assert!(base_layers(5.0).len() > base_layers(25.0).len());
        assert!(base_layers(5.0).contains(&"puffer jacket"));
        assert!(!base_layers(25.0).contains(&"puffer jacket"));
    }

    #[test]
    fn wind_penalty_is_exclusive() {
        assert_eq!(wind_layer(mph(10.0)), None);
        assert_eq!(wind_layer(mph(14.9)), None);
        assert_eq!(wind_layer(mph(15.5)), Some(BREEZY_WIND_ITEM));
        assert_eq!(wind_layer(mph(24.9)), Some(BREEZY_WIND_ITEM));
        assert_eq!(wind_layer(mph(25.5)), Some(STRONG_WIND_ITEM));

        let items = recommend_outfit(15.0, mph(30.0), false, &mut rng());
        let wind_items = items
            .iter()
            .filter(|i| **i == STRONG_WIND_ITEM || **i == BREEZY_WIND_ITEM)
            .count();
        assert_eq!(wind_items, 1);
    }

    #[test]
    fn wind_boundaries_belong_to_the_calmer_band() {
        assert_eq!(wind_layer(15.0 / 2.237), None);
        assert_eq!(wind_layer(25.0 / 2.237), Some(BREEZY_WIND_ITEM));
        assert_eq!(wind_layer(wind_speed_to_mps("15 mph")), None);
        assert_eq!(wind_layer(wind_speed_to_mps("25 mph")), Some(BREEZY_WIND_ITEM));
        assert_eq!(wind_layer(wind_speed_to_mps("26 mph")), Some(STRONG_WIND_ITEM));
    }

    #[test]
    fn whole_mph_readings_match_their_band() {
        for whole in 0..=40 {
            let expected = match whole {
                0..=15 => None,
                16..=25 => Some(BREEZY_WIND_ITEM),
                _ => Some(STRONG_WIND_ITEM),
            };
            let got = wind_layer(wind_speed_to_mps(&format!("{whole} mph")));
            assert_eq!(got, expected, "{whole} mph");
        }
    }

    #[test]
    fn clear_calm_outfit_is_base_plus_closing() {
        let items = recommend_outfit(16.0, 2.0, false, &mut rng());
        assert_eq!(
            items,
            vec!["denim jacket", "long-sleeve tee", "comfortable sneakers", "reusable tote bag"]
        );
    }

    #[test]
    fn always_ends_with_closing_pair() {
        let mut rng = rng();
        for temp in [-3.0, 12.0, 16.0, 20.0, 28.0] {
            for wind in [0.0, 8.0, 15.0] {
                for foggy in [false, true] {
                    let items = recommend_outfit(temp, wind, foggy, &mut rng);
                    assert_eq!(&items[items.len() - 2..], &CLOSING_ITEMS);
                }
            }
        }
    }

    #[test]
    fn fog_adds_exactly_one_whole_set() {
        let mut rng = rng();
        let mut seen = HashSet::new();

        for _ in 0..300 {
            let items = recommend_outfit(16.0, 2.0, true, &mut rng);
            let fog_part = &items[2..items.len() - 2];
            let idx = FOG_SETS
                .iter()
                .position(|set| *set == fog_part)
                .expect("fog items must match one set exactly");
            seen.insert(idx);
        }

        assert_eq!(seen.len(), FOG_SETS.len());
    }
}
