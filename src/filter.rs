// This module defines the criteria types and the core tag-plus-criteria
// filter. The filter is a pure function over its inputs; match accounting
// is delegated to the `stats` module.

pub mod stats;

use crate::person::{Person, Tag};
use serde::{Deserialize, Serialize};

/// Partial equality constraints over the non-tag fields of a user record.
///
/// `None` fields are unconstrained. Deserialization rejects unknown keys,
/// so a criteria object naming a field outside the user field set is a loud
/// error rather than a silent zero-match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserCriteria {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub age: Option<u32>,
}

/// Partial equality constraints over the non-tag fields of an admin record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminCriteria {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Criteria bound to the variant whose fields they constrain.
///
/// Construction fixes the variant, so criteria keys cannot name fields of
/// the wrong variant. A criteria whose variant differs from the target tag
/// matches nothing; callers that want that case rejected up front should
/// compare [`Criteria::tag`] against the target before filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criteria {
    User(UserCriteria),
    Admin(AdminCriteria),
}

impl From<UserCriteria> for Criteria {
    fn from(c: UserCriteria) -> Self {
        Criteria::User(c)
    }
}

impl From<AdminCriteria> for Criteria {
    fn from(c: AdminCriteria) -> Self {
        Criteria::Admin(c)
    }
}

impl Criteria {
    /// An unconstrained criteria for the given tag. Filtering with it keeps
    /// every record of that tag.
    #[must_use]
    pub fn empty(tag: Tag) -> Self {
        match tag {
            Tag::User => Criteria::User(UserCriteria::default()),
            Tag::Admin => Criteria::Admin(AdminCriteria::default()),
        }
    }

    /// The variant whose fields this criteria constrains.
    #[must_use]
    pub fn tag(&self) -> Tag {
        match self {
            Criteria::User(_) => Tag::User,
            Criteria::Admin(_) => Tag::Admin,
        }
    }

    /// True when no field is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Criteria::User(c) => c.id.is_none() && c.name.is_none() && c.age.is_none(),
            Criteria::Admin(c) => c.id.is_none() && c.name.is_none() && c.role.is_none(),
        }
    }

    /// Checks a record against this criteria.
    ///
    /// True iff the record is of the criteria's variant and every `Some`
    /// field equals the record's field. Cross-variant checks are always
    /// false.
    #[must_use]
    pub fn matches(&self, person: &Person) -> bool {
        match (self, person) {
            (Criteria::User(c), Person::User { id, name, age }) => {
                c.id.is_none_or(|want| want == *id)
                    && c.name.as_deref().is_none_or(|want| want == name.as_str())
                    && c.age.is_none_or(|want| want == *age)
            }
            (Criteria::Admin(c), Person::Admin { id, name, role }) => {
                c.id.is_none_or(|want| want == *id)
                    && c.name.as_deref().is_none_or(|want| want == name.as_str())
                    && c.role.as_deref().is_none_or(|want| want == role.as_str())
            }
            _ => false,
        }
    }
}

/// Single-record form of [`filter_persons`].
///
/// True iff the record's tag equals `tag` and the criteria match. Used by
/// the binary where per-record decisions feed the stats collector.
#[must_use]
pub fn matches_query(person: &Person, tag: Tag, criteria: &Criteria) -> bool {
    person.tag() == tag && criteria.matches(person)
}

/// Filters a roster down to the records matching `tag` and `criteria`.
///
/// Returns a freshly allocated vector; input order among matches is
/// preserved. If `criteria.tag() != tag` the result is empty, since no
/// record can carry both tags.
#[must_use]
pub fn filter_persons(persons: &[Person], tag: Tag, criteria: &Criteria) -> Vec<Person> {
    persons
        .iter()
        .filter(|p| matches_query(p, tag, criteria))
        .cloned()
        .collect()
}
