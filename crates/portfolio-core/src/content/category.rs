use super::ProjectCategory;
use serde::Serialize;

/// Display data for a category badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub icon: &'static str,
    /// Tailwind gradient classes.
    pub color: &'static str,
    pub description: &'static str,
}

impl ProjectCategory {
    pub fn info(&self) -> CategoryInfo {
        match self {
            ProjectCategory::Enterprise => CategoryInfo {
                label: "Enterprise",
                icon: "🏢",
                color: "from-blue-500 to-cyan-500",
                description: "Large-scale enterprise solutions and platforms",
            },
            ProjectCategory::CloudInfrastructure => CategoryInfo {
                label: "Cloud Infrastructure",
                icon: "☁️",
                color: "from-purple-500 to-pink-500",
                description: "Cloud architecture and infrastructure automation",
            },
            ProjectCategory::ApiDevelopment => CategoryInfo {
                label: "API Development",
                icon: "🔌",
                color: "from-green-500 to-emerald-500",
                description: "API design, development, and integration",
            },
            ProjectCategory::FullStack => CategoryInfo {
                label: "Full Stack",
                icon: "💻",
                color: "from-orange-500 to-red-500",
                description: "End-to-end application development",
            },
            ProjectCategory::Devops => CategoryInfo {
                label: "DevOps",
                icon: "🔧",
                color: "from-yellow-500 to-orange-500",
                description: "Development operations and automation",
            },
            ProjectCategory::OpenSource => CategoryInfo {
                label: "Open Source",
                icon: "🚀",
                color: "from-indigo-500 to-purple-500",
                description: "Community-driven open source projects",
            },
        }
    }
}

#[inline]
pub fn category_info(category: ProjectCategory) -> CategoryInfo {
    category.info()
}
