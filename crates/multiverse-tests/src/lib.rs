//! Integration tests for the location API server
//!
//! This crate contains end-to-end tests that exercise the full stack over
//! real TCP: dataset loading, the HTTP API layer and the client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p multiverse-tests
//! ```
//!
//! # Test Structure
//!
//! - `location_e2e_test.rs` - `/api/location` behaviour over raw HTTP
//! - `dataset_e2e_test.rs` - serving a dataset loaded from a file

// This crate only contains tests, no library code
