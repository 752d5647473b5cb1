//! This module contains presets for natural satellites.

use super::{planets::EARTH, record};
use crate::BodyRecord;

/// Returns the Moon, orbiting the Earth.
///
/// The elements are mean values. The real lunar orbit precesses quickly
/// and is strongly perturbed by the Sun, so positions are only rough.
pub fn the_moon() -> BodyRecord {
    record(
        "Moon",
        EARTH,
        [0.3844, 0.0549, 5.145, 218.316, 83.353, 13.176358],
        1737.4,
        "lightgray",
    )
}
