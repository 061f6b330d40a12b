//! PPM Report - executive portfolio report assembler
//!
//! Fetches project data from a provider, runs the health engine and
//! persists a dashboard-ready JSON report.
//!
//! # Example
//!
//! ```rust,ignore
//! use ppm_report::{ProviderClient, ReportAssembler, ReportConfig, ReportWriter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReportConfig::new();
//! let assembler = ReportAssembler::new(ProviderClient::new(&config)?);
//! let report = assembler.generate().await?;
//! ReportWriter::new(&config.output_dir).write(&report).await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod assembler;
pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod writer;

// Re-exports for convenience
pub use assembler::{assemble, ExecutiveReport, PortfolioSnapshot, ReportAssembler, ReportMetadata};
pub use client::ProviderClient;
pub use config::ReportConfig;
pub use console::render_summary;
pub use error::ReportError;
pub use writer::{ReportWriter, WrittenReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
