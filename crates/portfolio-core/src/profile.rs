//! Biography content for the landing page: work history, skills and sections.

use serde::{Deserialize, Serialize};

pub static PROFILE_JSON: &str = include_str!("../data/profile.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub icon: String,
    pub label: String,
    pub color: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TechStack {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub cloud: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub tech_stack: TechStack,
    pub sections: Vec<Section>,
}

impl Profile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(PROFILE_JSON)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// One intersection report for a page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionVisibility<'a> {
    pub id: &'a str,
    pub intersecting: bool,
    pub ratio: f64,
}

/// Section to highlight in the nav: the intersecting one with the largest
/// visible ratio. Ties go to the earlier report.
pub fn most_visible_section<'a>(reports: &[SectionVisibility<'a>]) -> Option<&'a str> {
    reports
        .iter()
        .filter(|r| r.intersecting)
        .fold(None::<&SectionVisibility<'a>>, |best, r| match best {
            Some(b) if b.ratio >= r.ratio => Some(b),
            _ => Some(r),
        })
        .map(|r| r.id)
}
