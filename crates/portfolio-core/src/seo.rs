//! Search-engine and social-card metadata for statically generated pages.

use crate::content::{ContentStore, Project};
use serde::Serialize;

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Who the site belongs to; stamped into every page's metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteIdentity {
    pub site_name: String,
    pub author: String,
    pub twitter_handle: String,
    pub keywords: Vec<String>,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            site_name: "Allan Rojas Portfolio".to_string(),
            author: "Allan Rojas D.".to_string(),
            twitter_handle: "@allanrojasd".to_string(),
            keywords: vec![
                "Allan Rojas".to_string(),
                "Software Engineer".to_string(),
                "Portfolio".to_string(),
            ],
        }
    }
}

impl SiteIdentity {
    pub fn page_title(&self, title: &str) -> String {
        format!("{} - {}", title, self.site_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub images: Vec<OgImage>,
    pub site_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    #[serde(rename = "max-video-preview")]
    pub max_video_preview: i32,
    #[serde(rename = "max-image-preview")]
    pub max_image_preview: String,
    #[serde(rename = "max-snippet")]
    pub max_snippet: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBot,
}

impl Default for Robots {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            google_bot: GoogleBot {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: "large".to_string(),
                max_snippet: -1,
            },
        }
    }
}

/// Page `<head>` metadata. Optional parts are omitted for the not-found page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
}

impl PageMetadata {
    pub fn not_found(site: &SiteIdentity) -> Self {
        Self {
            title: site.page_title("Project Not Found"),
            description: "The requested project could not be found.".to_string(),
            keywords: Vec::new(),
            authors: Vec::new(),
            creator: None,
            open_graph: None,
            twitter: None,
            robots: None,
        }
    }

    pub fn for_project(site: &SiteIdentity, project: &Project) -> Self {
        let base = project.base();
        let category = project.category();
        let title = site.page_title(&base.title);
        let cover = base.gallery.as_ref().and_then(|g| g.cover_image());

        let mut keywords = base.technologies.clone();
        keywords.push(category.as_str().to_string());
        keywords.push(category.info().label.to_string());
        keywords.extend(site.keywords.iter().cloned());

        let og_images = cover
            .map(|img| OgImage {
                url: img.src.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: base.title.clone(),
            })
            .into_iter()
            .collect();

        Self {
            title: title.clone(),
            description: base.description.clone(),
            keywords,
            authors: vec![Author {
                name: site.author.clone(),
            }],
            creator: Some(site.author.clone()),
            open_graph: Some(OpenGraph {
                title: title.clone(),
                description: base.description.clone(),
                kind: "article".to_string(),
                url: format!("/projects/{}", base.slug),
                images: og_images,
                site_name: site.site_name.clone(),
            }),
            twitter: Some(TwitterCard {
                card: "summary_large_image".to_string(),
                title,
                description: base.description.clone(),
                images: cover.map(|img| img.src.clone()).into_iter().collect(),
                creator: site.twitter_handle.clone(),
            }),
            robots: Some(Robots::default()),
        }
    }
}

/// Metadata for `/projects/{slug}`; the not-found variant for unknown slugs.
pub fn project_metadata(site: &SiteIdentity, store: &ContentStore, slug: &str) -> PageMetadata {
    match store.project_by_slug(slug) {
        Some(project) => PageMetadata::for_project(site, project),
        None => PageMetadata::not_found(site),
    }
}
