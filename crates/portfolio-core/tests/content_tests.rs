// Content store and filter tests against the embedded catalog and small
// fixture catalogs.

use portfolio_core::*;
use serde_json::json;

fn work(slug: &str, category: &str, company: &str, tech: &[&str], related: &[&str]) -> serde_json::Value {
    json!({
        "id": slug,
        "slug": slug,
        "title": format!("Title {slug}"),
        "category": category,
        "description": format!("About {slug}"),
        "longDescription": "Longer text",
        "technologies": tech,
        "timeframe": "2020-2021",
        "status": "completed",
        "company": company,
        "relatedProjects": related,
    })
}

fn oss(slug: &str, tech: &[&str], related: &[&str]) -> serde_json::Value {
    json!({
        "id": slug,
        "slug": slug,
        "title": format!("Title {slug}"),
        "category": "open-source",
        "description": format!("About {slug}"),
        "longDescription": "Longer text",
        "technologies": tech,
        "timeframe": "2022-Present",
        "status": "maintained",
        "language": "Rust",
        "stars": 7,
        "githubUrl": format!("https://example.com/{slug}"),
        "relatedProjects": related,
    })
}

fn store_from(projects: Vec<serde_json::Value>) -> ContentStore {
    let catalog: Catalog =
        serde_json::from_value(json!({ "projects": projects })).expect("fixture catalog");
    ContentStore::new(catalog).expect("fixture store")
}

/// `hub` has one valid explicit relation (`api`), one dangling one, and four
/// other enterprise siblings.
fn fixture() -> ContentStore {
    store_from(vec![
        work("hub", "enterprise", "Acme", &["Kafka"], &["api", "ghost"]),
        work("e1", "enterprise", "Acme", &["Java"], &[]),
        work("api", "api-development", "Beta", &["GraphQL"], &[]),
        work("e2", "enterprise", "Beta", &["Kafka", "Redis"], &[]),
        work("cloud", "cloud-infrastructure", "Acme", &["Terraform"], &[]),
        work("e3", "enterprise", "Gamma", &["Python"], &[]),
        work("e4", "enterprise", "Gamma", &["Go"], &[]),
        oss("lib", &["Terraform", "Kafka"], &["lib", "cloud", "cloud"]),
    ])
}

#[test]
fn embedded_catalog_loads_work_before_open_source() {
    let store = ContentStore::embedded().expect("embedded catalog");
    let all = store.all_projects();
    assert_eq!(all.len(), 9);
    assert_eq!(store.work_projects().count(), 5);
    assert_eq!(store.open_source_projects().count(), 4);
    let first_oss = all
        .iter()
        .position(|p| matches!(p, Project::OpenSource(_)))
        .expect("open-source entries");
    assert!(all[first_oss..]
        .iter()
        .all(|p| matches!(p, Project::OpenSource(_))));
    assert_eq!(all[0].slug(), "enterprise-event-hub");
    assert_eq!(all[0].company(), Some("Wind River (Kaptyn)"));
}

#[test]
fn embedded_catalog_round_trips_categories() {
    let store = ContentStore::embedded().expect("embedded catalog");
    let hub = store.project_by_slug("enterprise-event-hub").expect("hub");
    assert_eq!(hub.category(), ProjectCategory::Enterprise);
    assert!(hub.is_featured());
    let oss = store
        .project_by_slug("kafka-event-processor")
        .expect("oss project");
    match oss {
        Project::OpenSource(p) => {
            assert_eq!(p.language, "Python");
            assert_eq!(p.stars, 31);
        }
        Project::Work(_) => panic!("expected open-source variant"),
    }
    assert_eq!(oss.category(), ProjectCategory::OpenSource);
    assert_eq!(oss.company(), None);

    let featured: Vec<&str> = store.featured_projects().iter().map(|p| p.slug()).collect();
    assert_eq!(
        featured,
        vec!["enterprise-event-hub", "cloud-infrastructure-terraform"]
    );
}

#[test]
fn work_projects_are_ordered_before_open_source() {
    let store = store_from(vec![
        oss("lib-a", &[], &[]),
        work("w1", "devops", "X", &[], &[]),
        oss("lib-b", &[], &[]),
        work("w2", "full-stack", "Y", &[], &[]),
    ]);
    let order: Vec<&str> = store.all_projects().iter().map(|p| p.slug()).collect();
    assert_eq!(order, vec!["w1", "w2", "lib-a", "lib-b"]);
    let nav = store.project_navigation("lib-a").expect("lib-a");
    assert_eq!(nav.previous.map(|n| n.slug), Some("w2".to_string()));
}

#[test]
fn unknown_slug_is_not_found() {
    let store = fixture();
    assert!(store.project_by_slug("nope").is_none());
    assert!(store.related_projects("nope", 3).is_empty());
    assert!(store.project_navigation("nope").is_none());
}

#[test]
fn related_prefers_explicit_then_same_category() {
    let store = fixture();
    let related: Vec<&str> = store
        .related_projects("hub", 3)
        .iter()
        .map(|p| p.slug())
        .collect();
    assert_eq!(related, vec!["api", "e1", "e2"]);
}

#[test]
fn related_never_contains_self_or_duplicates() {
    let store = fixture();
    for p in store.all_projects() {
        for limit in 0..6 {
            let related = store.related_projects(p.slug(), limit);
            assert!(related.len() <= limit);
            assert!(related.iter().all(|r| r.slug() != p.slug()));
            let mut slugs: Vec<&str> = related.iter().map(|r| r.slug()).collect();
            slugs.sort_unstable();
            slugs.dedup();
            assert_eq!(slugs.len(), related.len());
        }
    }
    // lists itself and a duplicate; only `cloud` survives, then no oss siblings
    let lib: Vec<&str> = store
        .related_projects("lib", 3)
        .iter()
        .map(|p| p.slug())
        .collect();
    assert_eq!(lib, vec!["cloud"]);
}

#[test]
fn related_truncates_explicit_list() {
    let store = store_from(vec![
        work("a", "devops", "X", &[], &["b", "c", "d"]),
        work("b", "devops", "X", &[], &[]),
        work("c", "devops", "X", &[], &[]),
        work("d", "devops", "X", &[], &[]),
    ]);
    let related: Vec<&str> = store
        .related_projects("a", 2)
        .iter()
        .map(|p| p.slug())
        .collect();
    assert_eq!(related, vec!["b", "c"]);
}

#[test]
fn navigation_edges_have_no_neighbour() {
    let store = fixture();
    let first = store.project_navigation("hub").expect("first");
    assert!(first.previous.is_none());
    assert_eq!(first.next.as_ref().map(|n| n.slug.as_str()), Some("e1"));

    let last = store.project_navigation("lib").expect("last");
    assert!(last.next.is_none());
    assert_eq!(last.previous.as_ref().map(|n| n.slug.as_str()), Some("e4"));

    let middle = store.project_navigation("api").expect("middle");
    assert_eq!(middle.previous.map(|n| n.slug), Some("e1".to_string()));
    assert_eq!(middle.next.map(|n| n.title), Some("Title e2".to_string()));
}

#[test]
fn navigation_related_carries_category() {
    let store = fixture();
    let nav = store.project_navigation("hub").expect("hub");
    assert_eq!(nav.related.len(), 3);
    assert_eq!(nav.related[0].slug, "api");
    assert_eq!(nav.related[0].category, ProjectCategory::ApiDevelopment);
    assert_eq!(nav.related[1].category, ProjectCategory::Enterprise);
}

#[test]
fn embedded_navigation_edges() {
    let store = ContentStore::embedded().expect("embedded catalog");
    let all = store.all_projects();
    let first = store.project_navigation(all[0].slug()).expect("first");
    assert!(first.previous.is_none());
    let last = store
        .project_navigation(all[all.len() - 1].slug())
        .expect("last");
    assert!(last.next.is_none());
}

#[test]
fn projects_by_category_matches_exactly() {
    let store = fixture();
    let enterprise = store.projects_by_category(ProjectCategory::Enterprise);
    assert_eq!(enterprise.len(), 5);
    assert!(store
        .projects_by_category(ProjectCategory::FullStack)
        .is_empty());
}

#[test]
fn duplicate_slug_is_rejected() {
    let catalog: Catalog = serde_json::from_value(json!({
        "projects": [
            work("dup", "devops", "X", &[], &[]),
            oss("dup", &[], &[]),
        ]
    }))
    .expect("parse");
    match ContentStore::new(catalog) {
        Err(CatalogError::DuplicateSlug(slug)) => assert_eq!(slug, "dup"),
        other => panic!("expected duplicate slug error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn empty_slug_is_rejected() {
    let catalog: Catalog = serde_json::from_value(json!({
        "projects": [work("", "devops", "X", &[], &[])]
    }))
    .expect("parse");
    assert!(matches!(
        ContentStore::new(catalog),
        Err(CatalogError::EmptySlug { .. })
    ));
}

#[test]
fn slug_outside_url_safe_charset_is_rejected() {
    for slug in ["../../escaped", "a/b", "Upper", "with space", "dot.json"] {
        let catalog: Catalog = serde_json::from_value(json!({
            "projects": [
                work("fine-1", "devops", "X", &[], &[]),
                work(slug, "devops", "X", &[], &[]),
            ]
        }))
        .expect("parse");
        match ContentStore::new(catalog) {
            Err(CatalogError::InvalidSlug(bad)) => assert_eq!(bad, slug),
            other => panic!("{slug}: expected invalid slug error, got {:?}", other.map(|_| ())),
        }
    }
}

#[test]
fn work_project_cannot_claim_open_source_without_repo_fields() {
    // work categories exclude open-source, and the repo fields are missing
    let bad = json!({
        "projects": [{
            "id": "x", "slug": "x", "title": "X", "category": "open-source",
            "description": "d", "longDescription": "l", "technologies": [],
            "timeframe": "t", "status": "completed", "company": "Acme"
        }]
    });
    assert!(Catalog::from_json(&bad.to_string()).is_err());
}

#[test]
fn category_filter_selects_exactly_that_category() {
    let store = ContentStore::embedded().expect("embedded catalog");
    let filter = ProjectFilter {
        categories: vec![ProjectCategory::CloudInfrastructure],
        ..Default::default()
    };
    let hits: Vec<&str> = filter
        .apply(store.all_projects())
        .iter()
        .map(|p| p.slug())
        .collect();
    let expected: Vec<&str> = store
        .projects_by_category(ProjectCategory::CloudInfrastructure)
        .iter()
        .map(|p| p.slug())
        .collect();
    assert_eq!(hits, expected);
    assert_eq!(hits, vec!["multi-cloud-infrastructure"]);
}

#[test]
fn facets_and_together_and_or_within() {
    let store = fixture();
    let mut filter = ProjectFilter::default();
    assert_eq!(filter.apply(store.all_projects()).len(), 8);

    filter.toggle_technology("Kafka");
    filter.toggle_technology("Terraform");
    let slugs = |f: &ProjectFilter| -> Vec<String> {
        f.apply(store.all_projects())
            .iter()
            .map(|p| p.slug().to_string())
            .collect()
    };
    assert_eq!(slugs(&filter), vec!["hub", "e2", "cloud", "lib"]);

    filter.toggle_company("Acme");
    // open-source projects have no company, so `lib` drops out
    assert_eq!(slugs(&filter), vec!["hub", "cloud"]);

    filter.toggle_category(ProjectCategory::Enterprise);
    assert_eq!(slugs(&filter), vec!["hub"]);

    filter.toggle_company("Acme");
    filter.featured = Some(true);
    assert!(slugs(&filter).is_empty());
}

#[test]
fn filter_options_are_distinct_and_limited() {
    let store = ContentStore::embedded().expect("embedded catalog");
    let opts = FilterOptions::from_projects(store.all_projects());
    assert_eq!(opts.technologies.len(), TECHNOLOGY_OPTION_LIMIT);
    assert_eq!(opts.technologies[0], "Kafka");
    assert_eq!(
        opts.companies,
        vec![
            "Wind River (Kaptyn)",
            "Costa Rica Software Services",
            "MicroVention-Terumo"
        ]
    );
    assert_eq!(opts.categories.len(), 6);
    assert_eq!(opts.categories[0], ProjectCategory::Enterprise);
}

#[test]
fn category_info_and_parsing() {
    for c in ProjectCategory::ALL {
        assert_eq!(c.as_str().parse::<ProjectCategory>(), Ok(c));
        assert!(!c.info().label.is_empty());
        assert_eq!(category_info(c), c.info());
    }
    assert_eq!(ProjectCategory::Devops.info().label, "DevOps");
    assert!("quantum".parse::<ProjectCategory>().is_err());
}

#[test]
fn static_params_cover_every_project() {
    let store = fixture();
    let params = store.static_params();
    assert_eq!(params.len(), store.all_projects().len());
    assert_eq!(params[0].slug, "hub");
}
