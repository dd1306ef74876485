//! Pre-renders the data behind every `/projects/{slug}` page.
//!
//! Output layout under the target directory:
//!
//! ```text
//! static-params.json
//! metadata/{slug}.json
//! navigation/{slug}.json
//! ```

use anyhow::Context;
use portfolio_core::{Catalog, ContentStore, PageMetadata, SiteIdentity};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const STATIC_PARAMS_FILE: &str = "static-params.json";
pub const METADATA_DIR: &str = "metadata";
pub const NAVIGATION_DIR: &str = "navigation";

/// Files written by one [`generate`] run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub pages: usize,
    pub files: Vec<PathBuf>,
}

/// Embedded catalog, or the one at `path` when given.
pub fn load_store(path: Option<&Path>) -> anyhow::Result<ContentStore> {
    let catalog = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            Catalog::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Catalog::embedded().context("parsing embedded catalog")?,
    };
    Ok(ContentStore::new(catalog)?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

pub fn generate(
    store: &ContentStore,
    site: &SiteIdentity,
    out_dir: &Path,
) -> anyhow::Result<GenerateReport> {
    let metadata_dir = out_dir.join(METADATA_DIR);
    let navigation_dir = out_dir.join(NAVIGATION_DIR);
    for dir in [&metadata_dir, &navigation_dir] {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut report = GenerateReport::default();
    let params_path = out_dir.join(STATIC_PARAMS_FILE);
    write_json(&params_path, &store.static_params())?;
    report.files.push(params_path);

    for project in store.all_projects() {
        let slug = project.slug();
        let file = format!("{slug}.json");

        let meta_path = metadata_dir.join(&file);
        write_json(&meta_path, &PageMetadata::for_project(site, project))?;
        report.files.push(meta_path);

        // every catalog slug has navigation
        if let Some(nav) = store.project_navigation(slug) {
            let nav_path = navigation_dir.join(&file);
            write_json(&nav_path, &nav)?;
            report.files.push(nav_path);
        }
        report.pages += 1;
    }
    Ok(report)
}
