//! San Francisco neighborhoods and their approximate centers.

use crate::Coordinate;

pub const NEIGHBORHOODS: &[(&str, Coordinate)] = &[
    // Waterfront / Downtown
    ("Embarcadero", Coordinate::new(37.7950, -122.3960)),
    ("Financial District", Coordinate::new(37.7945, -122.3999)),
    ("Union Square", Coordinate::new(37.7880, -122.4075)),
    ("Civic Center", Coordinate::new(37.7790, -122.4160)),
    ("Tenderloin", Coordinate::new(37.7830, -122.4140)),
    ("SoMa", Coordinate::new(37.7810, -122.4039)),
    ("South Beach", Coordinate::new(37.7837, -122.3880)),
    ("Rincon Hill", Coordinate::new(37.7890, -122.3920)),
    ("Yerba Buena", Coordinate::new(37.7857, -122.4020)),
    ("North Waterfront", Coordinate::new(37.8050, -122.4030)),

    // Northeast / Hills
    ("Chinatown", Coordinate::new(37.7941, -122.4078)),
    ("North Beach", Coordinate::new(37.8061, -122.4100)),
    ("Telegraph Hill", Coordinate::new(37.8024, -122.4058)),
    ("Russian Hill", Coordinate::new(37.8019, -122.4190)),
    ("Nob Hill", Coordinate::new(37.7930, -122.4160)),

    // Western Addition / Center
    ("Hayes Valley", Coordinate::new(37.7763, -122.4240)),
    ("Lower Haight", Coordinate::new(37.7718, -122.4310)),
    ("Alamo Square", Coordinate::new(37.7777, -122.4340)),
    ("Western Addition", Coordinate::new(37.7817, -122.4310)),
    ("Fillmore", Coordinate::new(37.7830, -122.4330)),
    ("Japantown", Coordinate::new(37.7850, -122.4300)),

    // Heights / Park-adjacent
    ("Haight-Ashbury", Coordinate::new(37.7690, -122.4460)),
    ("Castro / Eureka Valley", Coordinate::new(37.7609, -122.4350)),
    ("Duboce Triangle", Coordinate::new(37.7698, -122.4330)),
    ("Noe Valley", Coordinate::new(37.7502, -122.4337)),
    ("Twin Peaks", Coordinate::new(37.7540, -122.4470)),
    ("Glen Park", Coordinate::new(37.7330, -122.4330)),
    ("Midtown Terrace", Coordinate::new(37.7480, -122.4520)),

    // Mission & SE
    ("Mission", Coordinate::new(37.7599, -122.4148)),
    ("Mission Bay", Coordinate::new(37.7718, -122.3910)),
    ("Potrero Hill", Coordinate::new(37.7605, -122.4010)),
    ("Dogpatch", Coordinate::new(37.7573, -122.3880)),
    ("Bernal Heights", Coordinate::new(37.7415, -122.4149)),
    ("Bayview–Hunters Point", Coordinate::new(37.7290, -122.3820)),
    ("Silver Terrace", Coordinate::new(37.7390, -122.3960)),
    ("Little Hollywood", Coordinate::new(37.7130, -122.3950)),
    ("Visitacion Valley", Coordinate::new(37.7150, -122.4000)),
    ("Portola", Coordinate::new(37.7280, -122.4090)),

    // Marina / Presidio / Pac Heights
    ("Marina", Coordinate::new(37.8037, -122.4368)),
    ("Cow Hollow", Coordinate::new(37.7976, -122.4300)),
    ("Pacific Heights", Coordinate::new(37.7924, -122.4380)),
    ("Lower Pacific Heights", Coordinate::new(37.7860, -122.4360)),
    ("Presidio Heights", Coordinate::new(37.7886, -122.4530)),
    ("The Presidio", Coordinate::new(37.7989, -122.4660)),
    ("Sea Cliff", Coordinate::new(37.7880, -122.4940)),
    ("Lake Street / Lake District", Coordinate::new(37.7849, -122.4737)),

    // Richmond
    ("Inner Richmond", Coordinate::new(37.7787, -122.4620)),
    ("Central Richmond", Coordinate::new(37.7800, -122.4720)),
    ("Outer Richmond", Coordinate::new(37.7780, -122.4950)),

    // Sunset & Golden Gate Park
    ("Inner Sunset", Coordinate::new(37.7630, -122.4660)),
    ("Golden Gate Heights", Coordinate::new(37.7530, -122.4700)),
    ("Central Sunset", Coordinate::new(37.7489, -122.4941)),
    ("Outer Sunset", Coordinate::new(37.7530, -122.4940)),
    ("Parkside", Coordinate::new(37.7390, -122.4840)),
    ("Ocean Beach", Coordinate::new(37.7596, -122.5107)),

    // Southwest / Lakes / West Portal
    ("West Portal", Coordinate::new(37.7410, -122.4690)),
    ("Forest Hill", Coordinate::new(37.7470, -122.4630)),
    ("Saint Francis Wood", Coordinate::new(37.7361, -122.4664)),
    ("Sunnyside", Coordinate::new(37.7320, -122.4460)),
    ("Westwood Park", Coordinate::new(37.7268, -122.4531)),
    ("Westwood Highlands", Coordinate::new(37.7342, -122.4516)),
    ("Stonestown", Coordinate::new(37.7310, -122.4760)),
    ("Merced Manor", Coordinate::new(37.7330, -122.4760)),
    ("Lakeshore", Coordinate::new(37.7240, -122.4930)),
    ("Lake Merced", Coordinate::new(37.7140, -122.4930)),
    ("Ingleside", Coordinate::new(37.7200, -122.4540)),
    ("Ingleside Terraces", Coordinate::new(37.7200, -122.4680)),
    ("Oceanview", Coordinate::new(37.7140, -122.4540)),

    // Islands
    ("Treasure Island", Coordinate::new(37.8250, -122.3710)),
    ("Yerba Buena Island", Coordinate::new(37.8170, -122.3660)),
];

/// Exact name first, then a case-insensitive match.
pub fn lookup(name: &str) -> Option<Coordinate> {
    let name = name.trim();
    NEIGHBORHOODS
        .iter()
        .find(|(n, _)| *n == name)
        .or_else(|| NEIGHBORHOODS.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)))
        .map(|(_, coord)| *coord)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    NEIGHBORHOODS.iter().map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mission_resolves() {
        assert_eq!(lookup("Mission"), Some(Coordinate::new(37.7599, -122.4148)));
        assert_eq!(lookup("  outer sunset "), Some(Coordinate::new(37.7530, -122.4940)));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(lookup("Atlantis"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn names_are_unique_and_ordered() {
        let all: Vec<_> = names().collect();
        assert_eq!(all.len(), NEIGHBORHOODS.len());
        assert_eq!(all.first(), Some(&"Embarcadero"));
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), all.len());
    }

    #[test]
    fn coordinates_are_in_san_francisco() {
        for (name, c) in NEIGHBORHOODS {
            assert!((37.70..37.83).contains(&c.latitude), "{name}");
            assert!((-122.52..-122.36).contains(&c.longitude), "{name}");
        }
    }
}
