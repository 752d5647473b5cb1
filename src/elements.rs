#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::ElementsError, Matrix3x2};

/// The six classical elements of an elliptic orbit around a primary.
///
/// Angles are in degrees and the mean motion is in degrees per day, which is
/// how published tables of planetary elements are usually given.
/// The length unit of the semi-major axis is up to the user; positions
/// come out in the same unit.
///
/// # Example
/// ```
/// use orrery::OrbitalElements;
///
/// let earth = OrbitalElements::new(
///     // Semi-major axis, in million km
///     149.6,
///     // Eccentricity
///     0.0167,
///     // Inclination
///     0.0,
///     // Mean longitude at J2000
///     100.46646,
///     // Longitude of periapsis
///     102.9,
///     // Mean motion, in degrees per day
///     0.9856,
/// )
/// .unwrap();
///
/// assert!((earth.periapsis_distance() - 147.10).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawElements", into = "RawElements")
)]
pub struct OrbitalElements {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    mean_longitude: f64,
    periapsis: f64,
    mean_motion: f64,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawElements {
    semimajor_axis: f64,
    eccentricity: f64,
    inclination: f64,
    mean_longitude: f64,
    periapsis: f64,
    mean_motion: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawElements> for OrbitalElements {
    type Error = ElementsError;

    fn try_from(raw: RawElements) -> Result<Self, Self::Error> {
        OrbitalElements::new(
            raw.semimajor_axis,
            raw.eccentricity,
            raw.inclination,
            raw.mean_longitude,
            raw.periapsis,
            raw.mean_motion,
        )
    }
}

#[cfg(feature = "serde")]
impl From<OrbitalElements> for RawElements {
    fn from(elements: OrbitalElements) -> Self {
        RawElements {
            semimajor_axis: elements.semi_major_axis,
            eccentricity: elements.eccentricity,
            inclination: elements.inclination,
            mean_longitude: elements.mean_longitude,
            periapsis: elements.periapsis,
            mean_motion: elements.mean_motion,
        }
    }
}

impl OrbitalElements {
    /// Creates a set of orbital elements.
    ///
    /// # Arguments
    ///
    /// * `semi_major_axis` - Half the longest diameter of the ellipse. Must be positive.
    /// * `eccentricity` - Must be in `[0, 1)`.
    /// * `inclination` - Tilt of the orbital plane, in degrees.
    /// * `mean_longitude` - Mean longitude at the J2000 epoch, in degrees.
    /// * `periapsis` - Longitude of periapsis, in degrees.
    /// * `mean_motion` - Average angular speed, in degrees per day.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementsError`] if any element is not finite, if the
    /// eccentricity is not elliptic, or if the semi-major axis is not positive.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        mean_longitude: f64,
        periapsis: f64,
        mean_motion: f64,
    ) -> Result<Self, ElementsError> {
        let fields = [
            ("semimajor_axis", semi_major_axis),
            ("eccentricity", eccentricity),
            ("inclination", inclination),
            ("mean_longitude", mean_longitude),
            ("periapsis", periapsis),
            ("mean_motion", mean_motion),
        ];

        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ElementsError::NonFinite { field: *field });
        }

        if !(0.0..1.0).contains(&eccentricity) {
            return Err(ElementsError::EccentricityOutOfRange(eccentricity));
        }

        if semi_major_axis <= 0.0 {
            return Err(ElementsError::NonPositiveSemiMajorAxis(semi_major_axis));
        }

        Ok(Self {
            semi_major_axis,
            eccentricity,
            inclination,
            mean_longitude,
            periapsis,
            mean_motion,
        })
    }

    /// Gets the semi-major axis of the orbit.
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Gets the eccentricity of the orbit, in `[0, 1)`.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Gets the inclination of the orbit, in degrees.
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Gets the mean longitude at the J2000 epoch, in degrees.
    pub fn mean_longitude(&self) -> f64 {
        self.mean_longitude
    }

    /// Gets the longitude of periapsis, in degrees.
    pub fn periapsis(&self) -> f64 {
        self.periapsis
    }

    /// Gets the mean motion, in degrees per day.
    pub fn mean_motion(&self) -> f64 {
        self.mean_motion
    }

    /// Gets the semi-minor axis, `a sqrt(1 - e^2)`.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Gets the semi-latus rectum, `a (1 - e^2)`.
    ///
    /// This is the distance from the primary when the body is 90 degrees
    /// away from periapsis.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Gets the distance from the primary at periapsis, `a (1 - e)`.
    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Gets the distance from the primary at apoapsis, `a (1 + e)`.
    pub fn apoapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Gets the distance from the primary at a given true anomaly, in radians.
    ///
    /// Uses the polar form of the conic with the primary at a focus:
    /// `r = a (1 - e^2) / (1 + e cos(v))`.
    pub fn radius_at_true_anomaly(&self, true_anomaly: f64) -> f64 {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * true_anomaly.cos())
    }

    /// Gets the time taken for one revolution, in days.
    pub fn orbital_period(&self) -> f64 {
        360.0 / self.mean_motion
    }

    /// Gets the matrix that takes a point in the orbital plane into the
    /// reference frame of the primary.
    ///
    /// The point is first rotated by the longitude of periapsis about the
    /// plane normal, then tilted by the inclination about the x-axis.
    pub fn transformation_matrix(&self) -> Matrix3x2 {
        let (sin_p, cos_p) = self.periapsis.to_radians().sin_cos();
        let (sin_i, cos_i) = self.inclination.to_radians().sin_cos();

        Matrix3x2 {
            e11: cos_p,
            e12: -sin_p,
            e21: sin_p * cos_i,
            e22: cos_p * cos_i,
            e31: sin_p * sin_i,
            e32: cos_p * sin_i,
        }
    }
}
