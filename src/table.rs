use core::fmt;
use std::collections::HashMap;

use crate::{
    error::{ConfigurationError, LookupError},
    Body, BodyRecord,
};

/// A stable handle to a body within one [`BodyTable`].
///
/// Ids are indices into the table they came from, in record order.
/// Using an id with a different table gives meaningless results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(usize);

impl BodyId {
    /// The position of the body in the records the table was built from.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct BodyWrapper {
    body: Body,
    satellites: Vec<BodyId>,
    depth: usize,
}

/// A validated, read-only set of bodies and their parent relations.
///
/// Building a table checks every record once: names are unique, every
/// parent exists, the parent graph has no cycles and every orbit is an
/// ellipse. After that, position queries only walk parent indices and
/// never search by name more than once.
///
/// # Example
/// ```
/// use orrery::{BodyRecord, BodyTable, OrbitalElements};
///
/// let elements = OrbitalElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0).unwrap();
/// let table = BodyTable::from_records([
///     BodyRecord::root("Sun"),
///     BodyRecord::orbiting("Planet", Some("Sun"), elements),
/// ])
/// .unwrap();
///
/// let planet = table.id_of("Planet").unwrap();
/// assert_eq!(table.parent_of(planet), table.id_of("Sun").ok());
/// assert_eq!(table.depth_of(planet), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BodyTable {
    bodies: Vec<BodyWrapper>,
    names: HashMap<String, BodyId>,
}

impl BodyTable {
    /// Builds a table from configuration records.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] for duplicate names, dangling or
    /// cyclic parent references, partial or invalid orbital elements, and
    /// bodies that have a parent but no orbit.
    pub fn from_records(
        records: impl IntoIterator<Item = BodyRecord>,
    ) -> Result<BodyTable, ConfigurationError> {
        let records: Vec<BodyRecord> = records.into_iter().collect();

        let mut names = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if names.insert(record.name.clone(), BodyId(index)).is_some() {
                return Err(ConfigurationError::DuplicateName(record.name.clone()));
            }
        }

        let mut bodies = Vec::with_capacity(records.len());
        for record in records {
            let elements = record.elements()?;

            let parent = match &record.parent {
                Some(parent) => {
                    let Some(&id) = names.get(parent) else {
                        return Err(ConfigurationError::DanglingParent {
                            body: record.name,
                            parent: parent.clone(),
                        });
                    };
                    if elements.is_none() {
                        return Err(ConfigurationError::ParentWithoutElements {
                            body: record.name,
                            parent: parent.clone(),
                        });
                    }
                    Some(id)
                }
                None => None,
            };

            bodies.push(BodyWrapper {
                body: Body {
                    name: record.name,
                    parent,
                    elements,
                    radius: record.radius,
                    color: record.color,
                },
                satellites: Vec::new(),
                depth: 0,
            });
        }

        let depths = compute_depths(&bodies)?;
        for (wrapper, depth) in bodies.iter_mut().zip(&depths) {
            wrapper.depth = *depth;
        }

        for index in 0..bodies.len() {
            if let Some(parent) = bodies[index].body.parent {
                bodies[parent.0].satellites.push(BodyId(index));
            }
        }

        let table = BodyTable { bodies, names };
        log::debug!(
            "Built body table with {} bodies, maximum depth {}",
            table.len(),
            table.max_depth()
        );

        Ok(table)
    }

    /// Parses a JSON array of [`BodyRecord`]s and builds a table from it.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::Json`] if the text is not a valid list of
    /// records, or any other [`ConfigurationError`] that
    /// [`from_records`][Self::from_records] may return.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<BodyTable, ConfigurationError> {
        let records: Vec<BodyRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// The number of bodies in the table.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the table has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Gets a body by id.
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0).map(|wrapper| &wrapper.body)
    }

    /// Gets the id of the body with the given name.
    pub fn id_of(&self, name: &str) -> Result<BodyId, LookupError> {
        self.names.get(name).copied().ok_or_else(|| LookupError {
            name: name.to_string(),
        })
    }

    /// Gets the body with the given name.
    pub fn body(&self, name: &str) -> Result<&Body, LookupError> {
        let id = self.id_of(name)?;
        Ok(&self.bodies[id.0].body)
    }

    /// Gets the body that the given body orbits.
    pub fn parent_of(&self, id: BodyId) -> Option<BodyId> {
        self.get(id)?.parent
    }

    /// Gets the bodies directly orbiting the given body, in record order.
    ///
    /// Returns an empty slice for unknown ids.
    pub fn satellites_of(&self, id: BodyId) -> &[BodyId] {
        self.bodies
            .get(id.0)
            .map(|wrapper| wrapper.satellites.as_slice())
            .unwrap_or(&[])
    }

    /// Gets the number of ancestors of a body. Roots have depth 0.
    pub fn depth_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.get(id.0).map(|wrapper| wrapper.depth)
    }

    /// The largest depth of any body, or 0 for an empty table.
    pub fn max_depth(&self) -> usize {
        self.bodies
            .iter()
            .map(|wrapper| wrapper.depth)
            .max()
            .unwrap_or(0)
    }

    /// Iterates over the bodies without a parent.
    pub fn roots(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.iter()
            .filter(|(_, body)| body.is_root())
            .map(|(id, _)| id)
    }

    /// Iterates over all bodies in record order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, wrapper)| (BodyId(index), &wrapper.body))
    }
}

impl fmt::Display for BodyTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Body table with {} bodies, max depth {}",
            self.len(),
            self.max_depth()
        )
    }
}

/// Counts the ancestors of every body, rejecting cycles.
///
/// Each parent chain is walked until it reaches a body whose depth is
/// already known, so every body is visited a bounded number of times.
fn compute_depths(bodies: &[BodyWrapper]) -> Result<Vec<usize>, ConfigurationError> {
    const UNKNOWN: usize = usize::MAX;

    let mut depths = vec![UNKNOWN; bodies.len()];
    // The chain walk that last visited each body, to spot a walk meeting itself
    let mut visited_by = vec![usize::MAX; bodies.len()];
    let mut chain = Vec::new();

    for start in 0..bodies.len() {
        chain.clear();
        let mut current = Some(start);
        let mut base = 0;

        while let Some(index) = current {
            if depths[index] != UNKNOWN {
                base = depths[index] + 1;
                break;
            }
            if visited_by[index] == start {
                return Err(ConfigurationError::CyclicParent {
                    body: bodies[index].body.name.clone(),
                });
            }
            visited_by[index] = start;
            chain.push(index);
            current = bodies[index].body.parent.map(BodyId::index);
        }

        for (offset, &index) in chain.iter().rev().enumerate() {
            depths[index] = base + offset;
        }
    }

    Ok(depths)
}
