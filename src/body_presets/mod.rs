//! Preset records for the bodies of the Solar System.
//!
//! Distances are in millions of kilometers, angles in degrees, and mean
//! motions in degrees per day. Planetary elements are the J2000 mean
//! elements from E. M. Standish, "Keplerian Elements for Approximate
//! Positions of the Major Planets" (JPL).
//!
//! Radii are mean radii in kilometers and only serve for display.

mod moons;
mod planets;
mod stars;

pub use moons::*;
pub use planets::*;
pub use stars::*;

use crate::BodyRecord;

/// Builds a record from the six elements `[a, e, i, L0, p, n]`.
fn record(name: &str, parent: &str, elements: [f64; 6], radius: f64, color: &str) -> BodyRecord {
    let [a, e, i, l, p, n] = elements;

    BodyRecord {
        name: name.to_string(),
        parent: Some(parent.to_string()),
        semi_major_axis: Some(a),
        eccentricity: Some(e),
        inclination: Some(i),
        mean_longitude: Some(l),
        periapsis: Some(p),
        mean_motion: Some(n),
        radius: Some(radius),
        color: Some(color.to_string()),
    }
}

/// Returns the Sun, the eight planets and the Moon, parents first.
pub fn solar_system() -> Vec<BodyRecord> {
    vec![
        the_sun(),
        mercury(),
        venus(),
        earth(),
        the_moon(),
        mars(),
        jupiter(),
        saturn(),
        uranus(),
        neptune(),
    ]
}
