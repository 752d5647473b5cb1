//! The position resolver: turns true anomalies into positions, composes
//! them along parent chains, and traces orbit paths.

use core::{f64::consts::TAU, iter::FusedIterator};

use glam::{DVec2, DVec3};

use crate::{
    error::{ConvergenceError, LookupError, QueryError},
    solvers::{solve_true_anomaly_with, SolverOptions},
    BodyId, BodyTable, JulianDay, Matrix3x2, OrbitalElements,
};

/// Gets the position of a body relative to its primary at a given true
/// anomaly, in radians.
///
/// The point `(r cos(v), r sin(v))` in the orbital plane is rotated by the
/// longitude of periapsis, then tilted by the inclination about the x-axis.
pub fn position_at_true_anomaly(elements: &OrbitalElements, true_anomaly: f64) -> DVec3 {
    let radius = elements.radius_at_true_anomaly(true_anomaly);
    let (sin, cos) = true_anomaly.sin_cos();

    elements
        .transformation_matrix()
        .dot_vec(DVec2::new(radius * cos, radius * sin))
}

/// Gets the position of a body relative to its primary at a given
/// eccentric anomaly, in radians.
///
/// This parametrizes the same ellipse as [`position_at_true_anomaly`], with
/// the primary at a focus: `(a cos(E) - ae, b sin(E))` before rotation.
pub fn position_at_eccentric_anomaly(elements: &OrbitalElements, eccentric_anomaly: f64) -> DVec3 {
    ellipse_point(
        &elements.transformation_matrix(),
        elements.semi_major_axis(),
        elements.semi_minor_axis(),
        elements.eccentricity(),
        eccentric_anomaly,
    )
}

#[inline]
fn ellipse_point(matrix: &Matrix3x2, a: f64, b: f64, e: f64, eccentric_anomaly: f64) -> DVec3 {
    let (sin, cos) = eccentric_anomaly.sin_cos();
    matrix.dot_vec(DVec2::new(a * cos - a * e, b * sin))
}

/// Gets the position of a body relative to its primary at a given time.
///
/// # Errors
/// Returns a [`ConvergenceError`] if Kepler's equation could not be solved
/// with the given options.
pub fn local_position(
    elements: &OrbitalElements,
    time: impl Into<JulianDay>,
    options: &SolverOptions,
) -> Result<DVec3, ConvergenceError> {
    let true_anomaly = solve_true_anomaly_with(elements, time, options)?;
    Ok(position_at_true_anomaly(elements, true_anomaly))
}

impl BodyTable {
    /// Gets the position of the named body at a given time, in the frame of
    /// its root ancestor.
    ///
    /// Bodies without orbital elements sit at the origin. Every other body
    /// is offset from its parent's position at the same time.
    ///
    /// # Errors
    /// Returns [`QueryError::Lookup`] for an unknown name, and
    /// [`QueryError::Convergence`] if Kepler's equation cannot be solved for
    /// the body or any of its ancestors.
    ///
    /// # Example
    /// ```
    /// use orrery::{BodyRecord, BodyTable, JulianDay, OrbitalElements};
    ///
    /// let circular = OrbitalElements::new(2.0, 0.0, 0.0, 0.0, 0.0, 1.0).unwrap();
    /// let table = BodyTable::from_records([
    ///     BodyRecord::root("Sun"),
    ///     BodyRecord::orbiting("Planet", Some("Sun"), circular),
    /// ])
    /// .unwrap();
    ///
    /// let position = table.position("Planet", JulianDay::J2000).unwrap();
    /// assert!((position.length() - 2.0).abs() < 1e-12);
    /// assert_eq!(table.position("Sun", JulianDay::J2000).unwrap().length(), 0.0);
    /// ```
    pub fn position(&self, name: &str, time: impl Into<JulianDay>) -> Result<DVec3, QueryError> {
        self.position_with(name, time, &SolverOptions::default())
    }

    /// Like [`position`][Self::position], with custom solver settings.
    pub fn position_with(
        &self,
        name: &str,
        time: impl Into<JulianDay>,
        options: &SolverOptions,
    ) -> Result<DVec3, QueryError> {
        let id = self.id_of(name)?;
        self.position_of(id, time, options)
    }

    /// Like [`position_with`][Self::position_with], addressing the body by id.
    pub fn position_of(
        &self,
        id: BodyId,
        time: impl Into<JulianDay>,
        options: &SolverOptions,
    ) -> Result<DVec3, QueryError> {
        let time = time.into();
        let mut position = DVec3::ZERO;
        let mut current = Some(id);

        while let Some(id) = current {
            let body = self.get(id).ok_or_else(|| LookupError {
                name: id.to_string(),
            })?;

            if let Some(elements) = body.elements() {
                position += local_position(elements, time, options)?;
            }

            current = body.parent();
        }

        Ok(position)
    }

    /// Gets the position of every body at a given time, in record order.
    ///
    /// Kepler's equation is solved once per body, however many satellites
    /// it has.
    ///
    /// # Errors
    /// Fails on the first body for which Kepler's equation cannot be solved.
    pub fn positions_at(
        &self,
        time: impl Into<JulianDay>,
    ) -> Result<Vec<(BodyId, DVec3)>, QueryError> {
        self.positions_at_with(time, &SolverOptions::default())
    }

    /// Like [`positions_at`][Self::positions_at], with custom solver settings.
    pub fn positions_at_with(
        &self,
        time: impl Into<JulianDay>,
        options: &SolverOptions,
    ) -> Result<Vec<(BodyId, DVec3)>, QueryError> {
        let time = time.into();

        let locals = self
            .iter()
            .map(|(_, body)| match body.elements() {
                Some(elements) => local_position(elements, time, options),
                None => Ok(DVec3::ZERO),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let positions = self
            .iter()
            .map(|(id, _)| {
                let mut position = DVec3::ZERO;
                let mut current = Some(id);
                while let Some(id) = current {
                    position += locals[id.index()];
                    current = self.parent_of(id);
                }
                (id, position)
            })
            .collect();

        Ok(positions)
    }

    /// Traces the orbit of the named body as `resolution` points, anchored
    /// to its parent's position at the given time.
    ///
    /// The points go once around the ellipse, from periapsis back to
    /// periapsis, so the first and last points coincide.
    /// See [`OrbitPath`] for details.
    ///
    /// # Errors
    /// Returns [`QueryError::NoOrbit`] for a body without orbital elements,
    /// [`QueryError::Lookup`] for an unknown name, and
    /// [`QueryError::Convergence`] if a parent's position cannot be found.
    ///
    /// # Example
    /// ```
    /// use orrery::{BodyRecord, BodyTable, Date, OrbitalElements};
    ///
    /// let elements = OrbitalElements::new(1.0, 0.5, 10.0, 0.0, 0.0, 1.0).unwrap();
    /// let table = BodyTable::from_records([
    ///     BodyRecord::root("Sun"),
    ///     BodyRecord::orbiting("Comet", Some("Sun"), elements),
    /// ])
    /// .unwrap();
    ///
    /// let date = Date::new(2024, 1, 1).unwrap();
    /// let path: Vec<_> = table.orbit_path("Comet", date, 100).unwrap().collect();
    ///
    /// assert_eq!(path.len(), 100);
    /// assert!(path[0].distance(path[99]) < 1e-9);
    /// ```
    pub fn orbit_path(
        &self,
        name: &str,
        time: impl Into<JulianDay>,
        resolution: usize,
    ) -> Result<OrbitPath, QueryError> {
        self.orbit_path_with(name, time, resolution, &SolverOptions::default())
    }

    /// Like [`orbit_path`][Self::orbit_path], with custom solver settings
    /// for the parent chain.
    pub fn orbit_path_with(
        &self,
        name: &str,
        time: impl Into<JulianDay>,
        resolution: usize,
        options: &SolverOptions,
    ) -> Result<OrbitPath, QueryError> {
        let id = self.id_of(name)?;
        self.orbit_path_of(id, time, resolution, options)
    }

    /// Like [`orbit_path_with`][Self::orbit_path_with], addressing the body
    /// by id.
    pub fn orbit_path_of(
        &self,
        id: BodyId,
        time: impl Into<JulianDay>,
        resolution: usize,
        options: &SolverOptions,
    ) -> Result<OrbitPath, QueryError> {
        let body = self.get(id).ok_or_else(|| LookupError {
            name: id.to_string(),
        })?;
        let elements = body
            .elements()
            .ok_or_else(|| QueryError::NoOrbit(body.name().to_string()))?;

        let anchor = match body.parent() {
            Some(parent) => self.position_of(parent, time, options)?,
            None => DVec3::ZERO,
        };

        Ok(OrbitPath::new(elements, anchor, resolution))
    }
}

/// The closed curve of an orbit, as a lazy sequence of points.
///
/// Point `k` of `n` is at eccentric anomaly `t = 2πk / (n - 1)`, so the
/// sequence starts and ends at periapsis and traces the ellipse in the
/// direction of motion. A single-point path holds just the periapsis, and a
/// zero-point path is empty.
///
/// Every point is offset by the same anchor: the path is the rigid shape of
/// the orbit, placed around the parent's position at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    matrix: Matrix3x2,
    semi_major_axis: f64,
    semi_minor_axis: f64,
    eccentricity: f64,
    anchor: DVec3,
    step: f64,
    front: usize,
    back: usize,
}

impl OrbitPath {
    /// Creates the path of an orbit with the given elements around `anchor`.
    pub fn new(elements: &OrbitalElements, anchor: DVec3, resolution: usize) -> Self {
        let step = if resolution > 1 {
            TAU / (resolution - 1) as f64
        } else {
            0.0
        };

        Self {
            matrix: elements.transformation_matrix(),
            semi_major_axis: elements.semi_major_axis(),
            semi_minor_axis: elements.semi_minor_axis(),
            eccentricity: elements.eccentricity(),
            anchor,
            step,
            front: 0,
            back: resolution,
        }
    }

    /// The point every position in the path is offset by.
    pub fn anchor(&self) -> DVec3 {
        self.anchor
    }

    fn point(&self, index: usize) -> DVec3 {
        self.anchor
            + ellipse_point(
                &self.matrix,
                self.semi_major_axis,
                self.semi_minor_axis,
                self.eccentricity,
                index as f64 * self.step,
            )
    }
}

impl Iterator for OrbitPath {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        if self.front >= self.back {
            return None;
        }
        let point = self.point(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for OrbitPath {
    fn next_back(&mut self) -> Option<DVec3> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point(self.back))
    }
}

impl ExactSizeIterator for OrbitPath {}

impl FusedIterator for OrbitPath {}
