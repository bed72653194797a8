use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant distinguishing the two record shapes in a roster.
///
/// Serialized as the lowercase tag strings used on the wire (`"user"`,
/// `"admin"`), and accepted in the same form by the CLI via `ValueEnum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    User,
    Admin,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::User => f.write_str("user"),
            Tag::Admin => f.write_str("admin"),
        }
    }
}

/// A tagged roster record.
///
/// The `type` field on the wire selects the variant, so exactly one
/// variant's fields are present per record. An unknown tag value fails
/// deserialization outright rather than producing a catch-all record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Person {
    User { id: u64, name: String, age: u32 },
    Admin { id: u64, name: String, role: String },
}

impl Person {
    /// The discriminant of this record.
    #[must_use]
    pub fn tag(&self) -> Tag {
        match self {
            Person::User { .. } => Tag::User,
            Person::Admin { .. } => Tag::Admin,
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        match self {
            Person::User { id, .. } | Person::Admin { id, .. } => *id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Person::User { name, .. } | Person::Admin { name, .. } => name,
        }
    }

    /// Age, present on user records only.
    #[must_use]
    pub fn age(&self) -> Option<u32> {
        match self {
            Person::User { age, .. } => Some(*age),
            Person::Admin { .. } => None,
        }
    }

    /// Role, present on admin records only.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        match self {
            Person::User { .. } => None,
            Person::Admin { role, .. } => Some(role),
        }
    }
}

/// The canonical four-record roster used in docs, tests, and benchmarks.
#[must_use]
pub fn sample_roster() -> Vec<Person> {
    vec![
        Person::User {
            id: 1,
            name: "Alice".to_string(),
            age: 25,
        },
        Person::Admin {
            id: 2,
            name: "Bob".to_string(),
            role: "Manager".to_string(),
        },
        Person::User {
            id: 3,
            name: "Charlie".to_string(),
            age: 30,
        },
        Person::Admin {
            id: 4,
            name: "Dave".to_string(),
            role: "Supervisor".to_string(),
        },
    ]
}
