//! Helpers behind the "technical specs" panel of a project page.

use crate::content::ProjectMetrics;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TechGroup {
    Frontend,
    Backend,
    Database,
    #[serde(rename = "Cloud & Infrastructure")]
    CloudInfrastructure,
    #[serde(rename = "Data & Analytics")]
    DataAnalytics,
    Other,
}

impl TechGroup {
    pub fn label(&self) -> &'static str {
        match self {
            TechGroup::Frontend => "Frontend",
            TechGroup::Backend => "Backend",
            TechGroup::Database => "Database",
            TechGroup::CloudInfrastructure => "Cloud & Infrastructure",
            TechGroup::DataAnalytics => "Data & Analytics",
            TechGroup::Other => "Other",
        }
    }
}

// Checked in order; the first group with a matching needle wins.
const GROUP_NEEDLES: [(TechGroup, &[&str]); 5] = [
    (
        TechGroup::Frontend,
        &[
            "React",
            "Next.js",
            "Vue.js",
            "Angular",
            "TypeScript",
            "JavaScript",
            "Tailwind CSS",
            "CSS",
            "HTML",
        ],
    ),
    (
        TechGroup::Backend,
        &[
            "Node.js",
            "Python",
            "Java",
            "Spring Boot",
            ".NET",
            "Express",
            "FastAPI",
            "Django",
        ],
    ),
    (
        TechGroup::Database,
        &["PostgreSQL", "MongoDB", "Redis", "MySQL", "InfluxDB", "SQL Server"],
    ),
    (
        TechGroup::CloudInfrastructure,
        &["AWS", "GCP", "Azure", "Docker", "Kubernetes", "Terraform", "Ansible"],
    ),
    (
        TechGroup::DataAnalytics,
        &[
            "Kafka",
            "Apache Spark",
            "GraphQL",
            "REST",
            "WebSocket",
            "Prometheus",
            "Grafana",
        ],
    ),
];

/// Substring match, so "React Native" lands in Frontend.
pub fn classify_technology(tech: &str) -> TechGroup {
    GROUP_NEEDLES
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| tech.contains(n)))
        .map(|(group, _)| *group)
        .unwrap_or(TechGroup::Other)
}

/// Technologies bucketed by group; groups appear in first-seen order.
pub fn group_technologies<S: AsRef<str>>(technologies: &[S]) -> Vec<(TechGroup, Vec<String>)> {
    let mut groups: Vec<(TechGroup, Vec<String>)> = Vec::new();
    for tech in technologies {
        let tech = tech.as_ref();
        let group = classify_technology(tech);
        match groups.iter_mut().find(|(g, _)| *g == group) {
            Some((_, list)) => list.push(tech.to_string()),
            None => groups.push((group, vec![tech.to_string()])),
        }
    }
    groups
}

/// Present metrics as `(label, value)`, in declaration order.
pub fn metric_entries(metrics: &ProjectMetrics) -> Vec<(&'static str, &str)> {
    [
        ("Performance", &metrics.performance),
        ("Scale", &metrics.scale),
        ("Uptime", &metrics.uptime),
        ("Adoption", &metrics.adoption),
        ("Latency", &metrics.latency),
        ("Reliability", &metrics.reliability),
        ("Efficiency", &metrics.efficiency),
        ("Compliance", &metrics.compliance),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
    .collect()
}
