//! Query-string filters for list mode.
//!
//! Each filterable field is one entry in [`FILTER_FIELDS`]; a filter is the
//! conjunction of case-insensitive substring matches over the fields that
//! were supplied.

use std::collections::HashMap;

use crate::models::Location;

/// A field that can be filtered on from the query string
#[derive(Debug)]
pub struct FilterField {
    /// Query-string key
    pub key: &'static str,
    accessor: fn(&Location) -> &str,
}

impl FilterField {
    /// Value of this field on `location`
    pub fn value<'a>(&self, location: &'a Location) -> &'a str {
        (self.accessor)(location)
    }
}

fn name(location: &Location) -> &str {
    &location.name
}

fn location_type(location: &Location) -> &str {
    &location.location_type
}

fn dimension(location: &Location) -> &str {
    &location.dimension
}

/// Filterable fields, in the order they appear in page links
pub const FILTER_FIELDS: &[FilterField] = &[
    FilterField {
        key: "name",
        accessor: name,
    },
    FilterField {
        key: "type",
        accessor: location_type,
    },
    FilterField {
        key: "dimension",
        accessor: dimension,
    },
];

#[derive(Debug, Clone)]
struct Term {
    field: &'static FilterField,
    value: String,
    needle: String,
}

/// Conjunction of substring matches over [`FILTER_FIELDS`]
#[derive(Debug, Clone, Default)]
pub struct LocationFilter {
    terms: Vec<Term>,
}

impl LocationFilter {
    /// Filter that matches every location
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from query parameters.
    ///
    /// Unrecognized keys (including `page`) and empty values are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        FILTER_FIELDS
            .iter()
            .fold(Self::new(), |filter, field| match params.get(field.key) {
                Some(value) => filter.with(field.key, value),
                None => filter,
            })
    }

    /// Add a term for `key`, replacing any earlier term for the same key.
    /// Unknown keys and empty values leave the filter unchanged.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let Some(field) = FILTER_FIELDS.iter().find(|f| f.key == key) else {
            return self;
        };
        if value.is_empty() {
            return self;
        }

        self.terms.retain(|t| t.field.key != key);
        self.terms.push(Term {
            field,
            needle: value.to_lowercase(),
            value,
        });
        self.terms
            .sort_by_key(|t| FILTER_FIELDS.iter().position(|f| f.key == t.field.key));
        self
    }

    /// True when no terms are active
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether `location` satisfies every term
    pub fn matches(&self, location: &Location) -> bool {
        self.terms.iter().all(|term| {
            term.field
                .value(location)
                .to_lowercase()
                .contains(&term.needle)
        })
    }

    /// Active terms as `(key, value)` in [`FILTER_FIELDS`] order, with the
    /// value as supplied
    pub fn params(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.terms.iter().map(|t| (t.field.key, t.value.as_str()))
    }
}
