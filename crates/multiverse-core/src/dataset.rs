//! The immutable location dataset and the lookups served from it

use std::collections::HashSet;
use std::path::Path;

use chrono::DateTime;

use crate::error::{DatasetError, LocationError, LocationResult};
use crate::models::{page_count, Location, Page, PageInfo, PAGE_SIZE};
use crate::query::{ListQuery, PageLinks};
use crate::selector::IdSelector;

const BUNDLED: &str = include_str!("../data/locations.json");

/// Result of an id lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Answer to a single id
    One(&'a Location),
    /// Answer to an id list
    Many(Vec<&'a Location>),
}

/// Ordered, read-only collection of locations with ids `1..=N`
#[derive(Debug, Clone)]
pub struct Dataset {
    locations: Vec<Location>,
}

impl Dataset {
    /// Build a dataset, sorting by id and validating that ids run `1..=N`
    /// and timestamps parse as RFC 3339
    pub fn from_locations(mut locations: Vec<Location>) -> Result<Self, DatasetError> {
        locations.sort_by_key(|l| l.id);

        for (index, location) in locations.iter().enumerate() {
            let expected = index as u32 + 1;
            if location.id != expected {
                if index > 0 && locations[index - 1].id == location.id {
                    return Err(DatasetError::DuplicateId(location.id));
                }
                return Err(DatasetError::NonContiguous {
                    expected,
                    found: location.id,
                });
            }
            if DateTime::parse_from_rfc3339(&location.created).is_err() {
                return Err(DatasetError::InvalidTimestamp {
                    id: location.id,
                    value: location.created.clone(),
                });
            }
        }

        Ok(Self { locations })
    }

    /// Parse a JSON array of locations
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let locations: Vec<Location> = serde_json::from_str(json)?;
        Self::from_locations(locations)
    }

    /// Load a JSON array of locations from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), count = dataset.len(), "Loaded location dataset");
        Ok(dataset)
    }

    /// The seed dataset compiled into this crate
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json_str(BUNDLED)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All locations in id order
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Location with the given id
    pub fn get(&self, id: u64) -> Option<&Location> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.locations.get(index)
    }

    /// Locations for `ids` in requested order. Unknown ids are skipped and
    /// repeated ids are returned once.
    pub fn get_many(&self, ids: &[u64]) -> Vec<&Location> {
        let mut seen = HashSet::new();
        ids.iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Answer an id selector
    pub fn lookup(&self, selector: &IdSelector) -> LocationResult<Lookup<'_>> {
        match selector {
            IdSelector::Single(id) => self
                .get(*id)
                .map(Lookup::One)
                .ok_or(LocationError::NotFound(*id)),
            IdSelector::List(ids) => Ok(Lookup::Many(self.get_many(ids))),
        }
    }

    /// Filter, then return the requested page with links to its neighbours
    pub fn list(&self, query: &ListQuery, links: &PageLinks) -> LocationResult<Page<&Location>> {
        let matching: Vec<&Location> = self
            .locations
            .iter()
            .filter(|l| query.filter.matches(l))
            .collect();

        let count = matching.len();
        let pages = page_count(count);
        let page = query.page;

        if page == 0 || page > pages {
            return Err(LocationError::NoPage(page.to_string()));
        }

        let next = if page < pages {
            links.page(page + 1, &query.filter)
        } else {
            String::new()
        };
        let prev = if page > 1 {
            links.page(page - 1, &query.filter)
        } else {
            String::new()
        };

        let results = matching
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();

        Ok(Page {
            info: PageInfo {
                count,
                pages,
                next,
                prev,
            },
            results,
        })
    }
}
