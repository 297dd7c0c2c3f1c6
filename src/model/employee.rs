use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for EmployeeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents an employee.
///
/// Older clients only know a single `name` field. The JSON form therefore
/// carries `firstName`/`lastName` plus a derived `name`, and [`EmployeeInput`]
/// accepts either shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
        }
    }

    /// The legacy single-field name, "first last".
    pub fn name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

impl Serialize for Employee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a> {
            id: EmployeeId,
            first_name: &'a str,
            last_name: &'a str,
            role: &'a str,
            name: String,
        }

        Wire {
            id: self.id,
            first_name: &self.first_name,
            last_name: &self.last_name,
            role: &self.role,
            name: self.name(),
        }
        .serialize(serializer)
    }
}

/// Payload for creating or replacing an employee.
///
/// Either `name` ("Bilbo Baggins") or `firstName`/`lastName` may be given;
/// explicit `firstName` wins when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: String,
}

pub type EmployeeCreate = EmployeeInput;
pub type EmployeeUpdate = EmployeeInput;

impl EmployeeInput {
    /// Builds an input from the legacy single `name` field.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            role: role.into(),
            ..Self::default()
        }
    }

    /// Resolves `(first_name, last_name)`, or `None` when no usable name was sent.
    pub fn split_name(&self) -> Option<(String, String)> {
        let (first, last) = match (&self.first_name, &self.name) {
            (Some(first), _) => (
                first.trim().to_string(),
                self.last_name.as_deref().unwrap_or("").trim().to_string(),
            ),
            (None, Some(name)) => {
                let name = name.trim();
                match name.split_once(' ') {
                    Some((first, last)) => (first.to_string(), last.trim().to_string()),
                    None => (name.to_string(), String::new()),
                }
            }
            (None, None) => return None,
        };
        (!first.is_empty()).then_some((first, last))
    }
}
