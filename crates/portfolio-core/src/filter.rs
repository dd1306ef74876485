//! Multi-facet project filter used by the projects index page.

use crate::content::{Project, ProjectCategory};
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};

/// How many technology chips the filter bar offers.
pub const TECHNOLOGY_OPTION_LIMIT: usize = 12;

/// Selected values per facet. An empty facet places no constraint; a
/// non-empty one needs at least one value to match (AND across facets, OR
/// within a facet).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilter {
    #[serde(default)]
    pub categories: Vec<ProjectCategory>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

impl ProjectFilter {
    pub fn toggle_category(&mut self, category: ProjectCategory) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_technology(&mut self, technology: &str) {
        toggle(&mut self.technologies, technology.to_string());
    }

    pub fn toggle_company(&mut self, company: &str) {
        toggle(&mut self.companies, company.to_string());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.technologies.is_empty()
            && self.companies.is_empty()
            && self.featured.is_none()
    }

    pub fn matches(&self, project: &Project) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&project.category());
        let technology_ok = self.technologies.is_empty()
            || project
                .technologies()
                .iter()
                .any(|t| self.technologies.contains(t));
        let company_ok = self.companies.is_empty()
            || project
                .company()
                .is_some_and(|c| self.companies.iter().any(|s| s == c));
        let featured_ok = self.featured.map_or(true, |f| project.is_featured() == f);
        category_ok && technology_ok && company_ok && featured_ok
    }

    /// Matching projects, in input order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Values offered by the filter bar, each list in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<ProjectCategory>,
    pub technologies: Vec<String>,
    pub companies: Vec<String>,
}

impl FilterOptions {
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut opts = FilterOptions::default();
        let mut seen_categories = FnvHashSet::default();
        let mut seen_tech: FnvHashSet<&str> = FnvHashSet::default();
        let mut seen_companies: FnvHashSet<&str> = FnvHashSet::default();

        for p in projects {
            if seen_categories.insert(p.category()) {
                opts.categories.push(p.category());
            }
            for t in p.technologies() {
                if opts.technologies.len() < TECHNOLOGY_OPTION_LIMIT && seen_tech.insert(t) {
                    opts.technologies.push(t.clone());
                }
            }
            if let Some(c) = p.company() {
                if seen_companies.insert(c) {
                    opts.companies.push(c.to_string());
                }
            }
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut f = ProjectFilter::default();
        f.toggle_technology("Rust");
        f.toggle_technology("Go");
        assert_eq!(f.technologies, vec!["Rust", "Go"]);
        f.toggle_technology("Rust");
        assert_eq!(f.technologies, vec!["Go"]);
        assert!(!f.is_empty());
        f.clear();
        assert!(f.is_empty());
    }
}
