use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

use crate::catalog::ValidationError;

/// Reference list of school affiliations accepted by the student
/// discount. The selection UI narrows it with [`search_schools`]; the
/// committed value must be an exact member.
pub const SCHOOLS: &[&str] = &[
    "University of Toronto",
    "Toronto Metropolitan University",
    "York University",
    "OCAD University",
    "Seneca Polytechnic",
    "George Brown College",
    "Humber College",
    "Centennial College",
];

/// Case-insensitive substring search over the reference list, for the
/// selection UI. An empty or blank query matches nothing.
#[must_use]
pub fn search_schools(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    SCHOOLS
        .iter()
        .copied()
        .filter(|school| school.to_ascii_lowercase().contains(&needle))
        .collect()
}

/// A committed school affiliation: always an exact member of
/// [`SCHOOLS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School(&'static str);

impl School {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        SCHOOLS
            .iter()
            .copied()
            .find(|school| *school == input)
            .map(Self)
            .ok_or_else(|| {
                ValidationError(format!("`{input}` is not a recognized school"))
            })
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for School {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl From<School> for String {
    fn from(value: School) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for School {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, ValidationError> {
        Self::parse(&value)
    }
}

// Hand-rolled rather than `#[serde(try_from = "String", into = "String")]`:
// with this toolchain's serde_derive, that attribute combination on a
// tuple struct wrapping `&'static str` spuriously requires `'de: 'static`
// on every containing type's derived `Deserialize` impl.
impl Serialize for School {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for School {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::try_from(value).map_err(D::Error::custom)
    }
}
