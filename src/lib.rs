//! # Europeana Client
//!
//! An async Rust client library for the Europeana Search API.
//!
//! ## Features
//!
//! - Offset-based and cursor-based pagination for search requests
//! - Client-side validation of every request parameter
//! - Strong typing for the full rich-profile result metadata
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use europeana_api_client::{OffsetSearchRequest, SearchClient, SearchRequestExt};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SearchClient::new("XXXX", "");
//!     // Open license, standard profile, 12 rows per page, first result.
//!     let request = OffsetSearchRequest::new(&client, "open", "standard", "12", "1")?;
//!     let response = request.get("mona lisa").await?;
//!     println!("{} of {} results", response.items_count, response.total_results);
//!     Ok(())
//! }
//! ```
//!
//! Europeana Search API documentation:
//! <https://pro.europeana.eu/resources/apis/search>

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod validate;

// Re-export commonly used types at crate root
pub use client::{SearchClient, SearchClientBuilder};
pub use error::{EuropeanaError, ValidationError};
pub use request::{CursorSearchRequest, OffsetSearchRequest, SearchRequest, SearchRequestExt};
pub use response::{Item, SearchResponse};

/// Result type alias using EuropeanaError
pub type Result<T> = std::result::Result<T, EuropeanaError>;
