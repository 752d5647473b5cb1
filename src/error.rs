//! Error types for loading body tables and querying positions.

/// Errors raised while validating a set of [`OrbitalElements`][crate::OrbitalElements].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ElementsError {
    /// The eccentricity is outside of `[0, 1)`.
    ///
    /// Only elliptic orbits are supported.
    #[error("eccentricity {0} is outside of [0, 1)")]
    EccentricityOutOfRange(f64),

    /// The semi-major axis is zero or negative.
    #[error("semi-major axis {0} must be positive")]
    NonPositiveSemiMajorAxis(f64),

    /// One of the elements is NaN or infinite.
    #[error("orbital element `{field}` is not finite")]
    NonFinite {
        /// The name of the offending element.
        field: &'static str,
    },
}

/// A malformed body table.
///
/// These are detected once, when the table is built, and are fatal:
/// no position query can be answered from an invalid table.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Two records share the same name.
    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    /// A record names a parent that is not in the table.
    #[error("body `{body}` names unknown parent `{parent}`")]
    DanglingParent {
        /// The body holding the reference.
        body: String,
        /// The parent name that could not be found.
        parent: String,
    },

    /// Following the parent references from this body leads back to it.
    #[error("body `{body}` is part of a cyclic parent chain")]
    CyclicParent {
        /// A body on the cycle.
        body: String,
    },

    /// Some, but not all, of the six orbital elements were given.
    #[error("body `{body}` has a partial orbital element record (missing `{missing}`)")]
    PartialElements {
        /// The body with the partial record.
        body: String,
        /// The first missing element.
        missing: &'static str,
    },

    /// The orbital elements were all present but invalid.
    #[error("body `{body}` has invalid orbital elements: {source}")]
    InvalidElements {
        /// The body with the invalid elements.
        body: String,
        /// What was wrong with them.
        #[source]
        source: ElementsError,
    },

    /// A body has a parent but no orbit around it.
    ///
    /// Bodies without orbital elements are roots of the forest.
    #[error("body `{body}` has parent `{parent}` but no orbital elements")]
    ParentWithoutElements {
        /// The body.
        body: String,
        /// Its declared parent.
        parent: String,
    },

    /// The JSON body table could not be parsed.
    #[cfg(feature = "serde")]
    #[error("failed to parse body table: {0}")]
    Json(#[from] serde_json::Error),
}

/// The Newton-Raphson iteration for Kepler's equation did not reach its
/// tolerance within the iteration cap.
///
/// This is recoverable: the caller may skip the body, or retry with
/// looser [`SolverOptions`][crate::SolverOptions].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error(
    "Kepler's equation did not converge after {iterations} iterations \
     (e = {eccentricity}, M = {mean_anomaly} rad, residual = {residual})"
)]
pub struct ConvergenceError {
    /// The eccentricity of the orbit.
    pub eccentricity: f64,
    /// The mean anomaly being solved for, in radians.
    pub mean_anomaly: f64,
    /// How many iterations were performed.
    pub iterations: u32,
    /// The last value of `E - e sin(E) - M`.
    pub residual: f64,
}

/// A query named a body that is not in the table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no body named `{name}`")]
pub struct LookupError {
    /// The name that was looked up.
    pub name: String,
}

/// An invalid calendar date.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The month is not in `1..=12`.
    #[error("month {0} is out of range")]
    InvalidMonth(u8),

    /// The year is outside [`Date::MIN_YEAR`]`..=`[`Date::MAX_YEAR`].
    ///
    /// [`Date::MIN_YEAR`]: crate::Date::MIN_YEAR
    /// [`Date::MAX_YEAR`]: crate::Date::MAX_YEAR
    #[error("year {0} is out of range")]
    YearOutOfRange(i32),

    /// The day does not exist in the given month.
    #[error("day {day} does not exist in {year}-{month:02}")]
    InvalidDay {
        /// The year.
        year: i32,
        /// The month.
        month: u8,
        /// The day.
        day: u8,
    },
}

/// Any failure of a position or orbit path query.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// The body (or one of its ancestors) is not in the table.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Kepler's equation failed to converge for the body or an ancestor.
    #[error(transparent)]
    Convergence(#[from] ConvergenceError),

    /// The body is a root and has no orbit to trace.
    #[error("body `{0}` does not orbit anything")]
    NoOrbit(String),
}
