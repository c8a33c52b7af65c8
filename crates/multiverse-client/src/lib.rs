//! Multiverse Client Library
//!
//! Provides a typed HTTP client for the multiverse location API.
//!
//! # Example
//!
//! ```rust,no_run
//! use multiverse_client::{LocationQuery, MultiverseClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = MultiverseClient::new("http://localhost:8080")?;
//!
//!     // First page of planets
//!     let page = client
//!         .list_locations(&LocationQuery::new().location_type("planet"))
//!         .await?;
//!
//!     // A single location, then several at once
//!     let earth = client.get_location(1).await?;
//!     let some = client.get_locations(&[1, 2, 3]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module provides utilities for integration testing:
//!
//! ```rust,ignore
//! use multiverse_client::testing::TestServer;
//! use multiverse_api::{create_router, AppState};
//!
//! let server = TestServer::start(create_router(state)).await?;
//! let page = server.client.list_locations(&LocationQuery::new()).await?;
//! ```

mod client;
mod error;
pub mod testing;
mod types;

pub use client::MultiverseClient;
pub use error::{MultiverseClientError, Result};
pub use types::*;

// Re-export core types for convenience
pub use multiverse_core::models::{Location, Page, PageInfo};
