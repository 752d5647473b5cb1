//! # Keplerian Orrery
//! This library crate computes where celestial bodies are on a given date,
//! assuming each one follows a fixed Keplerian ellipse around its primary,
//! and traces the curves of those ellipses for drawing.
//!
//! Keplerian orbits don't use time steps. The position of a body at any date
//! comes straight from its six orbital elements, so a year of animation frames
//! costs the same whether you compute them in order or not.
//!
//! This is a two-body approximation. It doesn't account for perturbations
//! from other bodies, so the positions drift away from real ephemerides over
//! decades. It is good enough for an orrery.
//!
//! ## Getting started
//! This crate provides a few main types:
//! - [`OrbitalElements`]: The six classical elements of an elliptic orbit,
//!   with angles in degrees and mean motion in degrees per day.
//! - [`Date`] and [`JulianDay`]: The time coordinate of every query.
//! - [`BodyRecord`]: A body as described in configuration, with an optional
//!   parent and optional orbital elements.
//! - [`BodyTable`]: A validated set of bodies. Bodies may orbit other
//!   bodies (moons orbit planets), and the table answers position and
//!   orbit path queries by resolving those parents.
//!
//! The free functions in [`solvers`] and [`resolver`] work on a single set of
//! orbital elements, without a table.
//!
//! We also provide a [`body_presets`] module with records for the Sun, the
//! planets and the Moon.
//!
//! ## Conventions
//! The longitude of periapsis is used both to get the mean anomaly
//! (`M = L0 - p + n (JD - J2000)`) and to orient the ellipse. A point in the
//! orbital plane is first rotated by the longitude of periapsis, then tilted
//! by the inclination about the x-axis. Positions are in the frame of the
//! root ancestor, in the length unit of the semi-major axes.
//!
//! ## Example
//!
//! ```rust
//! use orrery::{body_presets, BodyTable, Date};
//!
//! # fn main() {
//! let table = BodyTable::from_records(body_presets::solar_system()).unwrap();
//! let date = Date::new(2024, 6, 21).unwrap();
//!
//! let earth = table.position("Earth", date).unwrap();
//! let moon = table.position("Moon", date).unwrap();
//!
//! // The Moon is about 0.38 million km away from the Earth
//! assert!((earth.distance(moon) - 0.38).abs() < 0.03);
//! # }
//! ```

#![warn(missing_docs)]

mod body;
pub mod body_presets;
mod date;
mod elements;
mod error;
pub mod resolver;
pub mod solvers;
mod table;

pub use body::{Body, BodyRecord};
pub use date::{Date, JulianDay};
pub use elements::OrbitalElements;
pub use error::{
    ConfigurationError, ConvergenceError, DateError, ElementsError, LookupError, QueryError,
};
pub use resolver::OrbitPath;
pub use solvers::{solve_eccentric_anomaly, solve_true_anomaly, solve_true_anomaly_with, SolverOptions};
pub use table::{BodyId, BodyTable};

use glam::{DVec2, DVec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default convergence threshold for Kepler's equation, in radians.
///
/// Newton-Raphson stops once `|E - e sin(E) - M|` is smaller than this.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// The default maximum number of Newton-Raphson iterations.
///
/// This is used to prevent infinite loops in case the method fails to converge.
/// For eccentricities below 0.9, about six iterations are enough.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// A struct representing a 3x2 matrix.
///
/// This struct is used to store the transformation matrix
/// for transforming a 2D vector into a 3D vector.
///
/// Namely, it is used to take a point in the orbital plane into the
/// reference frame of the primary, see
/// [`OrbitalElements::transformation_matrix`].
///
/// Each element is named `eXY`, where `X` is the row and `Y` is the column.
///
/// # Example
/// ```
/// use glam::{DVec2, DVec3};
///
/// use orrery::Matrix3x2;
///
/// let matrix = Matrix3x2 {
///    e11: 1.0, e12: 0.0,
///    e21: 0.0, e22: 1.0,
///    e31: 0.0, e32: 0.0,
/// };
///
/// let vec = DVec2::new(1.0, 2.0);
///
/// let result = matrix.dot_vec(vec);
///
/// assert_eq!(result, DVec3::new(1.0, 2.0, 0.0));
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix3x2 {
    // Element XY
    pub e11: f64,
    pub e12: f64,
    pub e21: f64,
    pub e22: f64,
    pub e31: f64,
    pub e32: f64,
}

impl Matrix3x2 {
    /// Computes a dot product between this matrix and a 2D vector.
    ///
    /// # Example
    /// ```
    /// use glam::{DVec2, DVec3};
    ///
    /// use orrery::Matrix3x2;
    ///
    /// let matrix = Matrix3x2 {
    ///     e11: 1.0, e12: 0.0,
    ///     e21: 0.0, e22: 1.0,
    ///     e31: 1.0, e32: 1.0,
    /// };
    ///
    /// let vec = DVec2::new(1.0, 2.0);
    ///
    /// let result = matrix.dot_vec(vec);
    ///
    /// assert_eq!(result, DVec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn dot_vec(&self, vec: DVec2) -> DVec3 {
        DVec3::new(
            vec.x * self.e11 + vec.y * self.e12,
            vec.x * self.e21 + vec.y * self.e22,
            vec.x * self.e31 + vec.y * self.e32,
        )
    }
}

#[cfg(test)]
mod tests;

#[inline]
fn keplers_equation(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - (eccentricity * eccentric_anomaly.sin()) - mean_anomaly
}
#[inline]
fn keplers_equation_derivative(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    1.0 - (eccentricity * eccentric_anomaly.cos())
}
