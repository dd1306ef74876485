use super::{Catalog, CatalogError, OpenSourceProject, Project, ProjectCategory, WorkProject};
use fnv::{FnvHashMap, FnvHashSet};
use serde::Serialize;
use smallvec::SmallVec;

/// Number of related entries shown on a project page.
pub const NAVIGATION_RELATED_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub slug: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelatedLink {
    pub slug: String,
    pub title: String,
    pub category: ProjectCategory,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectNavigation {
    pub previous: Option<NavLink>,
    pub next: Option<NavLink>,
    pub related: SmallVec<[RelatedLink; NAVIGATION_RELATED_LIMIT]>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaticParam {
    pub slug: String,
}

/// Read-only project catalog with slug lookup.
///
/// Built once and handed to whoever needs it; tests build one from a fixture
/// [`Catalog`].
#[derive(Clone, Debug)]
pub struct ContentStore {
    projects: Vec<Project>,
    by_slug: FnvHashMap<String, usize>,
}

impl ContentStore {
    /// Validates slugs and orders work projects ahead of open-source ones,
    /// keeping catalog order within each kind.
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        let (mut projects, open_source): (Vec<Project>, Vec<Project>) = catalog
            .projects
            .into_iter()
            .partition(|p| matches!(p, Project::Work(_)));
        projects.extend(open_source);

        let mut by_slug = FnvHashMap::default();
        for (i, p) in projects.iter().enumerate() {
            let base = p.base();
            if base.slug.trim().is_empty() {
                return Err(CatalogError::EmptySlug {
                    id: base.id.clone(),
                });
            }
            if !is_valid_slug(&base.slug) {
                return Err(CatalogError::InvalidSlug(base.slug.clone()));
            }
            if by_slug.insert(base.slug.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSlug(base.slug.clone()));
            }
        }
        for p in &projects {
            for id in &p.base().related_projects {
                if !by_slug.contains_key(id) {
                    log::debug!("[content] {} lists unknown related project {}", p.slug(), id);
                }
            }
        }
        log::debug!("[content] loaded {} projects", projects.len());
        Ok(Self { projects, by_slug })
    }

    /// Store over the catalog embedded in the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::new(Catalog::embedded()?)
    }

    pub fn all_projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.by_slug.get(slug).map(|&i| &self.projects[i])
    }

    pub fn work_projects(&self) -> impl Iterator<Item = &WorkProject> {
        self.projects.iter().filter_map(|p| match p {
            Project::Work(w) => Some(w),
            Project::OpenSource(_) => None,
        })
    }

    pub fn open_source_projects(&self) -> impl Iterator<Item = &OpenSourceProject> {
        self.projects.iter().filter_map(|p| match p {
            Project::OpenSource(o) => Some(o),
            Project::Work(_) => None,
        })
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.is_featured()).collect()
    }

    pub fn projects_by_category(&self, category: ProjectCategory) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    /// Explicitly related projects first, topped up with same-category
    /// siblings in catalog order, at most `limit` in total. Never contains
    /// the project itself; unknown slugs yield nothing.
    pub fn related_projects(&self, slug: &str, limit: usize) -> Vec<&Project> {
        let Some(current) = self.project_by_slug(slug) else {
            return Vec::new();
        };
        let mut seen: FnvHashSet<&str> = FnvHashSet::default();
        seen.insert(current.slug());
        let mut related: Vec<&Project> = Vec::with_capacity(limit);

        for id in &current.base().related_projects {
            if related.len() == limit {
                break;
            }
            if let Some(p) = self.project_by_slug(id) {
                if seen.insert(p.slug()) {
                    related.push(p);
                }
            }
        }

        if related.len() < limit {
            let category = current.category();
            for p in &self.projects {
                if related.len() == limit {
                    break;
                }
                if p.category() == category && seen.insert(p.slug()) {
                    related.push(p);
                }
            }
        }
        related
    }

    /// Previous/next in catalog order plus up to three related links.
    /// `None` when the slug is not in the catalog.
    pub fn project_navigation(&self, slug: &str) -> Option<ProjectNavigation> {
        let &index = self.by_slug.get(slug)?;
        let link = |p: &Project| NavLink {
            slug: p.slug().to_string(),
            title: p.title().to_string(),
        };
        let previous = index
            .checked_sub(1)
            .and_then(|i| self.projects.get(i))
            .map(link);
        let next = self.projects.get(index + 1).map(link);
        let related = self
            .related_projects(slug, NAVIGATION_RELATED_LIMIT)
            .into_iter()
            .map(|p| RelatedLink {
                slug: p.slug().to_string(),
                title: p.title().to_string(),
                category: p.category(),
            })
            .collect();
        Some(ProjectNavigation {
            previous,
            next,
            related,
        })
    }

    /// One entry per project page to pre-render.
    pub fn static_params(&self) -> Vec<StaticParam> {
        self.projects
            .iter()
            .map(|p| StaticParam {
                slug: p.slug().to_string(),
            })
            .collect()
    }
}

/// Slugs double as URL path segments and output file names.
#[inline]
fn is_valid_slug(slug: &str) -> bool {
    slug.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
