//! This module contains presets for the planets of the Solar System.

use super::{record, stars::SUN};
use crate::BodyRecord;

/// The name of the [`earth`] record, used as the parent of the Moon.
pub const EARTH: &str = "Earth";

/// Returns Mercury, orbiting the Sun.
pub fn mercury() -> BodyRecord {
    record(
        "Mercury",
        SUN,
        [57.909, 0.20563, 7.00497, 252.25032, 77.45780, 4.0923344],
        2439.7,
        "darkgray",
    )
}

/// Returns Venus, orbiting the Sun.
pub fn venus() -> BodyRecord {
    record(
        "Venus",
        SUN,
        [108.209, 0.00678, 3.39468, 181.97910, 131.60247, 1.6021302],
        6051.8,
        "khaki",
    )
}

/// Returns the Earth, orbiting the Sun.
pub fn earth() -> BodyRecord {
    record(
        EARTH,
        SUN,
        [149.598, 0.01671, 0.00005, 100.46457, 102.93768, 0.9856091],
        6371.0,
        "royalblue",
    )
}

/// Returns Mars, orbiting the Sun.
pub fn mars() -> BodyRecord {
    record(
        "Mars",
        SUN,
        [227.956, 0.09340, 1.84969, 355.44657, 336.05637, 0.5240207],
        3389.5,
        "orangered",
    )
}

/// Returns Jupiter, orbiting the Sun.
pub fn jupiter() -> BodyRecord {
    record(
        "Jupiter",
        SUN,
        [778.479, 0.04839, 1.30440, 34.39644, 14.72848, 0.0830853],
        69911.0,
        "burlywood",
    )
}

/// Returns Saturn, orbiting the Sun.
pub fn saturn() -> BodyRecord {
    record(
        "Saturn",
        SUN,
        [1432.041, 0.05386, 2.48599, 49.95424, 92.59888, 0.0334442],
        58232.0,
        "goldenrod",
    )
}

/// Returns Uranus, orbiting the Sun.
pub fn uranus() -> BodyRecord {
    record(
        "Uranus",
        SUN,
        [2867.043, 0.04726, 0.77264, 313.23810, 170.95428, 0.0117252],
        25362.0,
        "lightblue",
    )
}

/// Returns Neptune, orbiting the Sun.
pub fn neptune() -> BodyRecord {
    record(
        "Neptune",
        SUN,
        [4514.953, 0.00859, 1.77004, 304.87997, 44.96476, 0.0059811],
        24622.0,
        "mediumblue",
    )
}
