use super::Project;
use serde::{Deserialize, Serialize};

/// The portfolio's project list as shipped with the site.
pub static PROJECTS_JSON: &str = include_str!("../../data/projects.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project `{id}` has an empty slug")]
    EmptySlug { id: String },
    #[error("slug `{0}` is used by more than one project")]
    DuplicateSlug(String),
    #[error("slug `{0}` may only contain a-z, 0-9 and '-'")]
    InvalidSlug(String),
}

/// Raw, ordered project records. Order matters: it drives previous/next
/// navigation and the order of every listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The catalog embedded at build time.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(PROJECTS_JSON)
    }
}
