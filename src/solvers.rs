//! The Kepler solver: from a date and a set of orbital elements to the
//! true anomaly of the body.

use core::f64::consts::TAU;

use crate::{
    error::ConvergenceError, keplers_equation, keplers_equation_derivative, JulianDay,
    OrbitalElements, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};

/// Tunables for the Newton-Raphson iteration on Kepler's equation.
///
/// # Example
/// ```
/// use orrery::SolverOptions;
///
/// let strict = SolverOptions::default();
/// let relaxed = strict.with_tolerance(1e-3).with_max_iterations(1000);
///
/// assert_eq!(strict.tolerance, 1e-6);
/// assert_eq!(relaxed.max_iterations, 1000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverOptions {
    /// The iteration stops once `|E - e sin(E) - M|` is below this, in radians.
    pub tolerance: f64,

    /// The maximum number of Newton steps before giving up with a
    /// [`ConvergenceError`].
    pub max_iterations: u32,
}

impl SolverOptions {
    /// Returns a copy of these options with a different tolerance.
    #[must_use]
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Returns a copy of these options with a different iteration cap.
    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Gets the mean anomaly of a body at a given time, in radians, in `[0, 2π)`.
///
/// `M = L0 - p + n (JD - J2000)`, with the angle wrapped in degrees
/// before being converted.
pub fn mean_anomaly(elements: &OrbitalElements, time: impl Into<JulianDay>) -> f64 {
    let days = time.into().days_since_j2000();

    let degrees = (elements.mean_longitude() - elements.periapsis()
        + elements.mean_motion() * days)
        .rem_euclid(360.0);

    // rem_euclid may round up to exactly 360 for tiny negative inputs
    let radians = degrees.to_radians();
    if radians >= TAU {
        0.0
    } else {
        radians
    }
}

/// Solves Kepler's equation `E - e sin(E) = M` for the eccentric anomaly `E`.
///
/// Uses Newton-Raphson iteration starting from `E = M`, and stops as soon as
/// the residual `|E - e sin(E) - M|` drops below
/// [`options.tolerance`][SolverOptions::tolerance].
///
/// # Unchecked Operation
/// The eccentricity is expected to be in `[0, 1)`. Other values are not
/// rejected, but are likely to end in a [`ConvergenceError`].
///
/// # Errors
/// Returns a [`ConvergenceError`] if the tolerance is not reached within
/// [`options.max_iterations`][SolverOptions::max_iterations] steps, or if the
/// iteration produces a non-finite value.
/// This happens in practice for eccentricities very close to 1, where
/// Newton's method started from `E = M` can oscillate for a long time.
///
/// # Example
/// ```
/// use orrery::{solve_eccentric_anomaly, SolverOptions};
///
/// let (e, m) = (0.5, 1.0);
/// let ecc_anom = solve_eccentric_anomaly(e, m, &SolverOptions::default()).unwrap();
///
/// assert!((ecc_anom - e * ecc_anom.sin() - m).abs() < 1e-6);
/// ```
pub fn solve_eccentric_anomaly(
    eccentricity: f64,
    mean_anomaly: f64,
    options: &SolverOptions,
) -> Result<f64, ConvergenceError> {
    let mut eccentric_anomaly = mean_anomaly;
    let mut residual = keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity);
    let mut iterations = 0;

    // Written so that a NaN residual never counts as converged
    while !(residual.abs() < options.tolerance) {
        if iterations >= options.max_iterations || !residual.is_finite() {
            let error = ConvergenceError {
                eccentricity,
                mean_anomaly,
                iterations,
                residual,
            };
            log::debug!("{error}");
            return Err(error);
        }

        eccentric_anomaly -=
            residual / keplers_equation_derivative(eccentric_anomaly, eccentricity);
        residual = keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity);
        iterations += 1;
    }

    log::trace!(
        "Kepler's equation converged in {iterations} iterations (e = {eccentricity}, M = {mean_anomaly})"
    );

    Ok(eccentric_anomaly)
}

/// Converts an eccentric anomaly into a true anomaly, both in radians.
///
/// `v = 2 atan2(sqrt(1 + e) sin(E / 2), sqrt(1 - e) cos(E / 2))`
///
/// The result is in `(-π, π]`.
pub fn true_anomaly_at_eccentric_anomaly(eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    let (sin_half, cos_half) = (eccentric_anomaly * 0.5).sin_cos();

    2.0 * ((1.0 + eccentricity).sqrt() * sin_half).atan2((1.0 - eccentricity).sqrt() * cos_half)
}

/// Gets the true anomaly of a body at a given time, in radians, in `(-π, π]`.
///
/// Equivalent to [`solve_true_anomaly_with`] using the default
/// [`SolverOptions`].
///
/// # Example
/// ```
/// use orrery::{solve_true_anomaly, JulianDay, OrbitalElements};
///
/// let circular = OrbitalElements::new(1.0, 0.0, 0.0, 90.0, 0.0, 1.0).unwrap();
/// let true_anomaly = solve_true_anomaly(&circular, JulianDay::J2000).unwrap();
///
/// assert!((true_anomaly - 90f64.to_radians()).abs() < 1e-12);
/// ```
pub fn solve_true_anomaly(
    elements: &OrbitalElements,
    time: impl Into<JulianDay>,
) -> Result<f64, ConvergenceError> {
    solve_true_anomaly_with(elements, time, &SolverOptions::default())
}

/// Gets the true anomaly of a body at a given time, in radians, in `(-π, π]`,
/// with custom solver settings.
pub fn solve_true_anomaly_with(
    elements: &OrbitalElements,
    time: impl Into<JulianDay>,
    options: &SolverOptions,
) -> Result<f64, ConvergenceError> {
    let eccentricity = elements.eccentricity();
    let mean_anomaly = mean_anomaly(elements, time);
    let eccentric_anomaly = solve_eccentric_anomaly(eccentricity, mean_anomaly, options)?;

    Ok(true_anomaly_at_eccentric_anomaly(
        eccentricity,
        eccentric_anomaly,
    ))
}
