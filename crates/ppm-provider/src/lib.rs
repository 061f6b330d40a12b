//! PPM Provider - mock project-portfolio data source
//!
//! Serves a fixed, validated project catalog and two derived aggregates
//! (summary, health) over a small REST API, and exposes the same data
//! in-process through [`ppm_model::PortfolioSource`].
//!
//! # Example
//!
//! ```rust,ignore
//! use ppm_provider::{serve, ProjectCatalog, ProviderConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = ProjectCatalog::sample()?;
//! serve(&ProviderConfig::new().with_port(5000), catalog).await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod aggregate;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod server;

// Re-exports for convenience
pub use aggregate::{health_metrics, summarize};
pub use catalog::ProjectCatalog;
pub use config::ProviderConfig;
pub use error::ProviderError;
pub use server::{serve, spawn_local};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
