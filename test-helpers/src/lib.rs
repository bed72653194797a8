//! Common record constructors for tests and benchmarks.

use roster_filter::person::Person;

pub use roster_filter::person::sample_roster;

/// Creates a user record.
pub fn user(id: u64, name: &str, age: u32) -> Person {
    Person::User {
        id,
        name: name.to_string(),
        age,
    }
}

/// Creates an admin record.
pub fn admin(id: u64, name: &str, role: &str) -> Person {
    Person::Admin {
        id,
        name: name.to_string(),
        role: role.to_string(),
    }
}

/// Serializes records as JSON Lines, the binary's wire format.
pub fn jsonl(persons: &[Person]) -> String {
    let mut out = String::new();
    for person in persons {
        out.push_str(&serde_json::to_string(person).expect("serialize person"));
        out.push('\n');
    }
    out
}
