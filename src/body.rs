#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::ConfigurationError, BodyId, OrbitalElements};

/// One entry of a body table, as read from configuration.
///
/// The orbital element fields are either all present, for a body that
/// orbits its parent (or the origin), or all absent, for a root body such
/// as a central star.
/// A record is only checked when it is turned into a [`BodyTable`][crate::BodyTable].
///
/// With the `serde` feature, the JSON shape is:
/// ```json
/// {
///     "name": "Moon",
///     "parent": "Earth",
///     "semimajor_axis": 0.3844,
///     "eccentricity": 0.0549,
///     "inclination": 5.145,
///     "mean_longitude": 218.316,
///     "periapsis": 83.353,
///     "mean_motion": 13.176358,
///     "radius": 1.7374,
///     "color": "grey"
/// }
/// ```
/// `parent_body` is accepted as an alias of `parent`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyRecord {
    /// The unique name of the body.
    pub name: String,

    /// The name of the body this one orbits.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "parent_body", skip_serializing_if = "Option::is_none")
    )]
    pub parent: Option<String>,

    /// The semi-major axis.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            rename = "semimajor_axis",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub semi_major_axis: Option<f64>,

    /// The eccentricity.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub eccentricity: Option<f64>,

    /// The inclination, in degrees.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub inclination: Option<f64>,

    /// The mean longitude at J2000, in degrees.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub mean_longitude: Option<f64>,

    /// The longitude of periapsis, in degrees.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub periapsis: Option<f64>,

    /// The mean motion, in degrees per day.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub mean_motion: Option<f64>,

    /// The display radius of the body. Not used in any computation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub radius: Option<f64>,

    /// The display color of the body. Not used in any computation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<String>,
}

impl BodyRecord {
    /// Creates a record for a root body, which sits at the origin.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a record for a body orbiting `parent`, or the origin if
    /// there is no parent.
    pub fn orbiting(
        name: impl Into<String>,
        parent: Option<&str>,
        elements: OrbitalElements,
    ) -> Self {
        Self {
            name: name.into(),
            parent: parent.map(str::to_string),
            semi_major_axis: Some(elements.semi_major_axis()),
            eccentricity: Some(elements.eccentricity()),
            inclination: Some(elements.inclination()),
            mean_longitude: Some(elements.mean_longitude()),
            periapsis: Some(elements.periapsis()),
            mean_motion: Some(elements.mean_motion()),
            radius: None,
            color: None,
        }
    }

    /// Sets the display radius.
    #[must_use]
    pub fn with_radius(self, radius: f64) -> Self {
        Self {
            radius: Some(radius),
            ..self
        }
    }

    /// Sets the display color.
    #[must_use]
    pub fn with_color(self, color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..self
        }
    }

    /// Collects the orbital elements of this record.
    ///
    /// Returns `Ok(None)` when all six are absent.
    ///
    /// # Errors
    /// Fails with [`ConfigurationError::PartialElements`] when only some are
    /// given, and with [`ConfigurationError::InvalidElements`] when they are
    /// all given but do not describe an elliptic orbit.
    pub fn elements(&self) -> Result<Option<OrbitalElements>, ConfigurationError> {
        let fields = [
            ("semimajor_axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("mean_longitude", self.mean_longitude),
            ("periapsis", self.periapsis),
            ("mean_motion", self.mean_motion),
        ];

        if fields.iter().all(|(_, value)| value.is_none()) {
            return Ok(None);
        }

        let mut values = [0.0; 6];
        for (slot, (field, value)) in values.iter_mut().zip(fields) {
            *slot = value.ok_or_else(|| ConfigurationError::PartialElements {
                body: self.name.clone(),
                missing: field,
            })?;
        }

        let [a, e, i, l, p, n] = values;
        OrbitalElements::new(a, e, i, l, p, n)
            .map(Some)
            .map_err(|source| ConfigurationError::InvalidElements {
                body: self.name.clone(),
                source,
            })
    }
}

/// A validated celestial body, owned by a [`BodyTable`][crate::BodyTable].
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub(crate) name: String,
    pub(crate) parent: Option<BodyId>,
    pub(crate) elements: Option<OrbitalElements>,
    pub(crate) radius: Option<f64>,
    pub(crate) color: Option<String>,
}

impl Body {
    /// The unique name of the body.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The body this one orbits, if any.
    pub fn parent(&self) -> Option<BodyId> {
        self.parent
    }

    /// The orbit of the body around its parent.
    ///
    /// `None` for root bodies, which sit at the origin.
    pub fn elements(&self) -> Option<&OrbitalElements> {
        self.elements.as_ref()
    }

    /// Whether this is a root of the body forest, i.e. it has no parent.
    ///
    /// A root body may still orbit the origin if it has elements.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The display radius of the body.
    pub fn radius(&self) -> Option<f64> {
        self.radius
    }

    /// The display color of the body.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}
