use portfolio_core::{
    group_technologies, metric_entries, project_metadata, ContentStore, FilterOptions, Profile,
    ProjectCategory, ProjectFilter, SiteIdentity,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    serde_json::to_string(value)
        .map_err(|e| log::error!("[portfolio] serialize failed: {}", e))
        .ok()
}

/// Site content for the page scripts. Every query answers with a JSON
/// string, or `undefined` when there is nothing to return.
#[wasm_bindgen]
pub struct Portfolio {
    store: ContentStore,
    profile: Profile,
    site: SiteIdentity,
}

#[wasm_bindgen]
impl Portfolio {
    /// Load the embedded catalog and profile. `undefined` if either fails
    /// to parse; the reason is logged.
    pub fn load() -> Option<Portfolio> {
        let store = ContentStore::embedded()
            .map_err(|e| log::error!("[portfolio] catalog: {}", e))
            .ok()?;
        let profile = Profile::embedded()
            .map_err(|e| log::error!("[portfolio] profile: {}", e))
            .ok()?;
        log::info!(
            "[portfolio] {} projects, {} sections",
            store.all_projects().len(),
            profile.sections.len()
        );
        Some(Portfolio {
            store,
            profile,
            site: SiteIdentity::default(),
        })
    }

    pub fn projects_json(&self) -> Option<String> {
        to_json(self.store.all_projects())
    }

    pub fn featured_projects_json(&self) -> Option<String> {
        to_json(&self.store.featured_projects())
    }

    pub fn projects_by_category_json(&self, category: &str) -> Option<String> {
        let category: ProjectCategory = category
            .parse()
            .map_err(|e| log::warn!("[portfolio] {}", e))
            .ok()?;
        to_json(&self.store.projects_by_category(category))
    }

    pub fn project_json(&self, slug: &str) -> Option<String> {
        to_json(self.store.project_by_slug(slug)?)
    }

    pub fn related_projects_json(&self, slug: &str, limit: usize) -> Option<String> {
        to_json(&self.store.related_projects(slug, limit))
    }

    pub fn project_navigation_json(&self, slug: &str) -> Option<String> {
        to_json(&self.store.project_navigation(slug)?)
    }

    /// Head metadata for `/projects/{slug}`; the not-found variant for
    /// unknown slugs.
    pub fn project_metadata_json(&self, slug: &str) -> Option<String> {
        to_json(&project_metadata(&self.site, &self.store, slug))
    }

    /// Grouped technologies and labelled metrics for a project's specs panel.
    pub fn technical_specs_json(&self, slug: &str) -> Option<String> {
        #[derive(Serialize)]
        struct Specs<'a> {
            technologies: Vec<(&'static str, Vec<String>)>,
            metrics: Vec<(&'static str, &'a str)>,
        }
        let base = self.store.project_by_slug(slug)?.base();
        let specs = Specs {
            technologies: group_technologies(&base.technologies)
                .into_iter()
                .map(|(group, techs)| (group.label(), techs))
                .collect(),
            metrics: base.metrics.as_ref().map(metric_entries).unwrap_or_default(),
        };
        to_json(&specs)
    }

    /// `filter` is a JSON object with optional `categories`, `technologies`,
    /// `companies` and `featured` keys.
    pub fn filter_projects_json(&self, filter: &str) -> Option<String> {
        let filter: ProjectFilter = serde_json::from_str(filter)
            .map_err(|e| log::warn!("[portfolio] bad filter: {}", e))
            .ok()?;
        to_json(&filter.apply(self.store.all_projects()))
    }

    pub fn filter_options_json(&self) -> Option<String> {
        to_json(&FilterOptions::from_projects(self.store.all_projects()))
    }

    pub fn category_info_json(&self, category: &str) -> Option<String> {
        let category: ProjectCategory = category.parse().ok()?;
        to_json(&category.info())
    }

    pub fn static_params_json(&self) -> Option<String> {
        to_json(&self.store.static_params())
    }

    pub fn profile_json(&self) -> Option<String> {
        to_json(&self.profile)
    }
}
