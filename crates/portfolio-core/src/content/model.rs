//! Project records.
//!
//! A project is either professional work done for a company or an open-source
//! repository. The two kinds share [`ProjectBase`] and are told apart by the
//! [`Project`] variant, never by which optional fields happen to be present.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Enterprise,
    CloudInfrastructure,
    ApiDevelopment,
    FullStack,
    Devops,
    OpenSource,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 6] = [
        ProjectCategory::Enterprise,
        ProjectCategory::CloudInfrastructure,
        ProjectCategory::ApiDevelopment,
        ProjectCategory::FullStack,
        ProjectCategory::Devops,
        ProjectCategory::OpenSource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Enterprise => "enterprise",
            ProjectCategory::CloudInfrastructure => "cloud-infrastructure",
            ProjectCategory::ApiDevelopment => "api-development",
            ProjectCategory::FullStack => "full-stack",
            ProjectCategory::Devops => "devops",
            ProjectCategory::OpenSource => "open-source",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown project category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ProjectCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Categories a work project may carry: everything except `open-source`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkCategory {
    Enterprise,
    CloudInfrastructure,
    ApiDevelopment,
    FullStack,
    Devops,
}

impl From<WorkCategory> for ProjectCategory {
    fn from(c: WorkCategory) -> Self {
        match c {
            WorkCategory::Enterprise => ProjectCategory::Enterprise,
            WorkCategory::CloudInfrastructure => ProjectCategory::CloudInfrastructure,
            WorkCategory::ApiDevelopment => ProjectCategory::ApiDevelopment,
            WorkCategory::FullStack => ProjectCategory::FullStack,
            WorkCategory::Devops => ProjectCategory::Devops,
        }
    }
}

/// Single-valued tag carried by open-source records so the serialized form
/// still reads `"category": "open-source"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpenSourceCategory {
    #[default]
    #[serde(rename = "open-source")]
    OpenSource,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Completed,
    Ongoing,
    Maintained,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adoption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Screenshot,
    Diagram,
    Mockup,
    Chart,
    Hero,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub category: ImageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Youtube,
    Local,
    Embed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectVideo {
    #[serde(rename = "type")]
    pub source: VideoSource,
    pub src: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaGallery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<ProjectImage>,
    #[serde(default)]
    pub screenshots: Vec<ProjectImage>,
    #[serde(default)]
    pub diagrams: Vec<ProjectImage>,
    #[serde(default)]
    pub videos: Vec<ProjectVideo>,
}

impl MediaGallery {
    /// Image used for social cards: the hero, else the first screenshot.
    pub fn cover_image(&self) -> Option<&ProjectImage> {
        self.hero.as_ref().or_else(|| self.screenshots.first())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Service,
    Database,
    Api,
    Frontend,
    Infrastructure,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemComponent {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataFlowStep {
    pub step: u32,
    pub description: String,
    pub component: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureData {
    pub overview: String,
    #[serde(default)]
    pub diagrams: Vec<ProjectImage>,
    #[serde(default)]
    pub components: Vec<SystemComponent>,
    #[serde(default)]
    pub data_flow: Vec<DataFlowStep>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub phase: String,
    pub duration: String,
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub role: String,
    pub company: String,
}

/// Fields shared by every project kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBase {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub timeframe: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ProjectMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<MediaGallery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<ArchitectureData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<TimelinePhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
    /// Slugs of explicitly related projects, in preference order.
    #[serde(default)]
    pub related_projects: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkProject {
    #[serde(flatten)]
    pub base: ProjectBase,
    pub category: WorkCategory,
    pub company: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSourceProject {
    #[serde(flatten)]
    pub base: ProjectBase,
    pub category: OpenSourceCategory,
    pub language: String,
    pub stars: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    pub github_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Project {
    Work(WorkProject),
    OpenSource(OpenSourceProject),
}

impl Project {
    pub fn base(&self) -> &ProjectBase {
        match self {
            Project::Work(p) => &p.base,
            Project::OpenSource(p) => &p.base,
        }
    }

    pub fn slug(&self) -> &str {
        &self.base().slug
    }

    pub fn title(&self) -> &str {
        &self.base().title
    }

    pub fn category(&self) -> ProjectCategory {
        match self {
            Project::Work(p) => p.category.into(),
            Project::OpenSource(_) => ProjectCategory::OpenSource,
        }
    }

    /// Employer for work projects; open-source projects have none.
    pub fn company(&self) -> Option<&str> {
        match self {
            Project::Work(p) => Some(&p.company),
            Project::OpenSource(_) => None,
        }
    }

    pub fn technologies(&self) -> &[String] {
        &self.base().technologies
    }

    pub fn is_featured(&self) -> bool {
        self.base().featured
    }
}
