//! Plane records and the in-memory record store.
//!
//! A [`PlaneList`] is an ordered sequence of [`Plane`] records. Order is the
//! order of insertion and is shown to the user as the 1-based "No" column.
//! Records are only ever appended, never edited or removed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::info;

/// A flight number as found in a data file.
///
/// Records written by this tool always hold an integer. Hand-edited files may
/// hold anything else (`"202"`, `202.0`); such values are kept as-is so that
/// saving the list writes them back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlightNumber {
    /// An integer flight number.
    Number(i64),
    /// Any other JSON value.
    Other(Value),
}

impl std::fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Other(Value::String(s)) => f.write_str(s),
            Self::Other(Value::Null) => Ok(()),
            Self::Other(other) => write!(f, "{other}"),
        }
    }
}

/// A single flight entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane {
    /// Where the flight is going.
    #[serde(default, deserialize_with = "lenient_text")]
    pub destination: String,

    /// The flight number.
    ///
    /// `None` only for hand-edited files that omit the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<FlightNumber>,

    /// The aircraft type designator, e.g. `Boeing 737`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub typ: String,

    /// Keys this tool does not know about, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accept any JSON value where text is expected.
///
/// `null` reads as empty text and other non-string values as their JSON text.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl Plane {
    /// Create a new plane record.
    #[must_use]
    pub fn new(destination: impl Into<String>, num: i64, typ: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            num: Some(FlightNumber::Number(num)),
            typ: typ.into(),
            extra: Map::new(),
        }
    }

    /// The flight number if it is an integer.
    #[must_use]
    pub fn number(&self) -> Option<i64> {
        match self.num {
            Some(FlightNumber::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// The flight number as display text (empty when absent).
    #[must_use]
    pub fn num_text(&self) -> String {
        self.num.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

/// Ordered collection of plane records for one data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaneList {
    planes: Vec<Plane>,
}

impl PlaneList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record to the end of the list and return the list.
    pub fn add(
        &mut self,
        destination: impl Into<String>,
        num: i64,
        typ: impl Into<String>,
    ) -> &Self {
        let plane = Plane::new(destination, num, typ);
        info!(
            "Added plane: destination {}, number {}, type {}",
            plane.destination, num, plane.typ
        );
        self.planes.push(plane);
        self
    }

    /// Select every record whose type equals `typ` exactly.
    ///
    /// Relative order is preserved. Matching is case-sensitive.
    #[must_use]
    pub fn filter_by_type(&self, typ: &str) -> Self {
        let selected: Self = self.planes.iter().filter(|p| p.typ == typ).cloned().collect();
        if selected.is_empty() {
            info!("No planes of type {} found", typ);
        }
        selected
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Whether the list has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Plane> {
        self.planes.iter()
    }

    /// The records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Plane] {
        &self.planes
    }
}

impl FromIterator<Plane> for PlaneList {
    fn from_iter<I: IntoIterator<Item = Plane>>(iter: I) -> Self {
        Self {
            planes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PlaneList {
    type Item = Plane;
    type IntoIter = std::vec::IntoIter<Plane>;

    fn into_iter(self) -> Self::IntoIter {
        self.planes.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlaneList {
    type Item = &'a Plane;
    type IntoIter = std::slice::Iter<'a, Plane>;

    fn into_iter(self) -> Self::IntoIter {
        self.planes.iter()
    }
}
