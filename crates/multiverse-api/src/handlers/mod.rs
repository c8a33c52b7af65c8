//! HTTP request handlers for the location API

pub mod locations;
pub mod root;
