use std::fs;

use folio_registry::{Portfolio, RegistryError, SectionRegistry};

fn load_fixture() -> Portfolio {
    let data = include_str!("data/portfolio_fixture.json");
    Portfolio::parse(data, folio_registry::ContentFormat::Json).expect("load portfolio from fixture")
}

#[test]
fn fixture_sections_replace_defaults() {
    let portfolio = load_fixture();
    let ids: Vec<_> = portfolio.registry.ids().map(|id| id.as_str()).collect();
    assert_eq!(ids, ["intro", "work", "reach"]);
    assert_eq!(portfolio.registry.get("reach").map(|s| s.label.as_str()), Some("Reach Out"));
}

#[test]
fn fixture_content_is_populated() {
    let portfolio = load_fixture();
    assert_eq!(portfolio.content.profile.monogram(), "GF");
    assert_eq!(portfolio.content.experience[0].highlights[0].items, ["things"]);
    assert!(portfolio.content.education.is_empty(), "missing lists default to empty");
    assert_eq!(portfolio.content.contact.mailto_url(), "mailto:grace@example.com");
}

#[test]
fn loads_yaml_and_json_files_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json_path = dir.path().join("portfolio.json");
    fs::write(&json_path, include_str!("data/portfolio_fixture.json")).expect("write json");
    let from_json = Portfolio::from_path(&json_path).expect("json loads");
    assert_eq!(from_json.registry.len(), 3);

    let yaml_path = dir.path().join("portfolio.yml");
    fs::write(
        &yaml_path,
        "meta: { title: t }\nprofile: { name: Y, headline: h }\ncontact: { email: y@example.com }\n",
    )
    .expect("write yaml");
    let from_yaml = Portfolio::from_path(&yaml_path).expect("yaml loads");
    assert_eq!(from_yaml.registry, SectionRegistry::default_sections());
}

#[test]
fn missing_file_reports_path() {
    let error = Portfolio::from_path("/definitely/not/here.json").expect_err("missing file");
    match error {
        RegistryError::Io { path, .. } => assert!(path.ends_with("here.json")),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn load_without_path_uses_embedded_sample() {
    let portfolio = Portfolio::load(None).expect("embedded sample");
    assert_eq!(portfolio.registry.first().map(|s| s.id.as_str()), Some("home"));
}
