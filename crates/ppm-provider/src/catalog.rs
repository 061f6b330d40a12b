//! Project catalog
//!
//! The in-memory record set served by the mock API. Every record is
//! validated on load and identifiers are unique, so consumers can rely on
//! the invariants the assessment engine assumes.

use crate::aggregate;
use crate::error::ProviderError;
use async_trait::async_trait;
use ppm_model::{PortfolioHealth, PortfolioSource, PortfolioSummary, ProjectRecord, SourceError};
use std::collections::HashSet;
use std::path::Path;

/// Canonical five-project sample portfolio (PRJ001..PRJ005)
const SAMPLE_PROJECTS: &str = include_str!("../data/projects.json");

/// Ordered, validated project collection
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// Create catalog from records, validating each
    ///
    /// # Errors
    /// Returns [`ProviderError::InvalidRecord`] or [`ProviderError::DuplicateId`].
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, ProviderError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            project
                .validate()
                .map_err(|source| ProviderError::InvalidRecord {
                    id: project.id.clone(),
                    source,
                })?;
            if !seen.insert(project.id.as_str()) {
                return Err(ProviderError::DuplicateId(project.id.clone()));
            }
        }
        Ok(Self { projects })
    }

    /// The built-in sample portfolio
    ///
    /// # Errors
    /// Fails only if the embedded sample is corrupt.
    pub fn sample() -> Result<Self, ProviderError> {
        Self::from_json_str(SAMPLE_PROJECTS)
    }

    /// Parse a JSON array of records
    ///
    /// # Errors
    /// Returns a parse or validation error.
    pub fn from_json_str(json: &str) -> Result<Self, ProviderError> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// Load a JSON array of records from disk
    ///
    /// # Errors
    /// Returns a read, parse or validation error.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ProviderError::CatalogRead {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), projects = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// All records, in catalog order
    #[inline]
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Record by identifier
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Summary aggregate over the catalog
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        aggregate::summarize(&self.projects)
    }

    /// Health aggregate over the catalog
    #[must_use]
    pub fn health(&self) -> PortfolioHealth {
        aggregate::health_metrics(&self.projects)
    }
}

#[async_trait]
impl PortfolioSource for ProjectCatalog {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, SourceError> {
        Ok(self.projects.clone())
    }

    async fn get_project(&self, id: &str) -> Result<ProjectRecord, SourceError> {
        self.get(id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }

    async fn portfolio_summary(&self) -> Result<PortfolioSummary, SourceError> {
        Ok(self.summary())
    }

    async fn portfolio_health(&self) -> Result<PortfolioHealth, SourceError> {
        Ok(self.health())
    }
}
