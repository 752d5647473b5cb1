//! This module contains presets for stars.
//!
//! "A star is a luminous spheroid of plasma held together by self-gravity."  
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Star)

use crate::BodyRecord;

/// The name of the [`the_sun`] record, used as the parent of the planets.
pub const SUN: &str = "Sun";

/// Returns the Sun.
///
/// It has no orbit, and sits at the origin of the table.
pub fn the_sun() -> BodyRecord {
    BodyRecord::root(SUN)
        .with_radius(6.9634e5)
        .with_color("yellow")
}
