// Page-level helpers: head metadata, profile content, spec panels.

use portfolio_core::*;

fn store() -> ContentStore {
    ContentStore::embedded().expect("embedded catalog")
}

#[test]
fn project_metadata_uses_cover_image_and_site_identity() {
    let site = SiteIdentity::default();
    let meta = project_metadata(&site, &store(), "enterprise-event-hub");
    assert_eq!(meta.title, "Microservices Event Hub - Allan Rojas Portfolio");

    let og = meta.open_graph.as_ref().expect("open graph");
    assert_eq!(og.kind, "article");
    assert_eq!(og.url, "/projects/enterprise-event-hub");
    assert_eq!(og.site_name, "Allan Rojas Portfolio");
    assert_eq!(og.images.len(), 1);
    assert_eq!(og.images[0].url, "/images/projects/event-hub/dashboard.jpg");
    assert_eq!((og.images[0].width, og.images[0].height), (1200, 630));

    let twitter = meta.twitter.as_ref().expect("twitter card");
    assert_eq!(twitter.card, "summary_large_image");
    assert_eq!(twitter.creator, "@allanrojasd");
    assert_eq!(twitter.images, vec![og.images[0].url.clone()]);

    assert_eq!(&meta.keywords[..2], &["Kafka".to_string(), "Node.js".to_string()]);
    assert!(meta.keywords.iter().any(|k| k == "enterprise"));
    assert!(meta.keywords.iter().any(|k| k == "Software Engineer"));
    assert_eq!(meta.creator.as_deref(), Some("Allan Rojas D."));
}

#[test]
fn project_without_gallery_has_no_social_images() {
    let meta = project_metadata(
        &SiteIdentity::default(),
        &store(),
        "kafka-event-processor",
    );
    assert!(meta.open_graph.expect("open graph").images.is_empty());
    assert!(meta.twitter.expect("twitter card").images.is_empty());
}

#[test]
fn unknown_project_gets_not_found_metadata() {
    let site = SiteIdentity {
        site_name: "Example".to_string(),
        ..Default::default()
    };
    let meta = project_metadata(&site, &store(), "missing");
    assert_eq!(meta.title, "Project Not Found - Example");
    assert_eq!(meta.description, "The requested project could not be found.");
    assert!(meta.open_graph.is_none());

    let json = serde_json::to_value(&meta).expect("serialize");
    let obj = json.as_object().expect("object");
    assert_eq!(obj.len(), 2);
}

#[test]
fn metadata_serializes_with_head_field_names() {
    let meta = project_metadata(&SiteIdentity::default(), &store(), "graphql-api-gateway");
    let json = serde_json::to_value(&meta).expect("serialize");
    assert_eq!(json["openGraph"]["type"], "article");
    assert_eq!(json["openGraph"]["siteName"], "Allan Rojas Portfolio");
    assert_eq!(json["robots"]["googleBot"]["max-image-preview"], "large");
    assert_eq!(json["robots"]["googleBot"]["max-snippet"], -1);
}

#[test]
fn embedded_profile_loads() {
    let profile = Profile::embedded().expect("embedded profile");
    assert_eq!(profile.experience.len(), 3);
    assert_eq!(profile.experience[0].company, "Wind River (Kaptyn)");
    assert_eq!(profile.skills.len(), 4);
    assert!(!profile.tech_stack.cloud.is_empty());
    let ids: Vec<&str> = profile.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["about", "experience", "projects", "skills", "contact"]);
    assert!(profile.section("contact").is_some());
    assert!(profile.section("blog").is_none());
}

#[test]
fn most_visible_section_picks_largest_intersecting_ratio() {
    let reports = [
        SectionVisibility {
            id: "about",
            intersecting: true,
            ratio: 0.2,
        },
        SectionVisibility {
            id: "experience",
            intersecting: false,
            ratio: 0.9,
        },
        SectionVisibility {
            id: "projects",
            intersecting: true,
            ratio: 0.6,
        },
        SectionVisibility {
            id: "skills",
            intersecting: true,
            ratio: 0.6,
        },
    ];
    assert_eq!(most_visible_section(&reports), Some("projects"));
    assert_eq!(most_visible_section(&reports[1..2]), None);
    assert_eq!(most_visible_section(&[]), None);
}

#[test]
fn metric_entries_keep_declaration_order() {
    let store = store();
    let hub = store.project_by_slug("enterprise-event-hub").expect("hub");
    let metrics = hub.base().metrics.as_ref().expect("metrics");
    let labels: Vec<&str> = metric_entries(metrics).into_iter().map(|(l, _)| l).collect();
    assert_eq!(labels, vec!["Performance", "Scale", "Latency", "Reliability"]);
    assert!(metric_entries(&ProjectMetrics::default()).is_empty());
}

#[test]
fn technologies_group_in_first_seen_order() {
    let groups = group_technologies(&["Kafka", "React", "PostgreSQL", "Redux", "Terraform"]);
    let summary: Vec<(&str, usize)> = groups
        .iter()
        .map(|(g, list)| (g.label(), list.len()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Data & Analytics", 1),
            ("Frontend", 1),
            ("Database", 1),
            ("Other", 1),
            ("Cloud & Infrastructure", 1),
        ]
    );
    assert!(group_technologies::<&str>(&[]).is_empty());
}
