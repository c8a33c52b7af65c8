//! Shared data models for the location API

mod location;
mod page;

pub use location::*;
pub use page::*;
