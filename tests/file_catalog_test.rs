use phone_compare::core::sitemap::render_xml;
use phone_compare::core::Storage;
use phone_compare::{
    CompareError, ComparisonEngine, LocalStorage, SelectionInput, TomlConfig,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const CATALOG: &str = r#"[
  {"id": 1, "name": "iphone14", "summary": "Last year", "storage": "128GB", "chip": "A15",
   "phone_colors": [{"id": 10, "name": "black", "phone_id": 1}, {"id": 11, "name": "blue", "phone_id": 1}]},
  {"id": 2, "name": "iphone15", "summary": "This year", "storage": "256GB", "chip": "A16",
   "phone_colors": [{"id": 20, "name": "pink", "phone_id": 2}, {"id": 21, "name": "green", "phone_id": 2}]}
]"#;

fn catalog_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn file_config(path: &str) -> TomlConfig {
    TomlConfig::from_toml_str(&format!(
        r#"
[site]
base_url = "https://compare.example.com"

[source]
type = "file"
path = "{}"
"#,
        path.replace('\\', "/")
    ))
    .unwrap()
}

async fn compare(content: &str, input: SelectionInput) -> phone_compare::Result<(String, String, String, String)> {
    let file = catalog_file(content);
    let config = file_config(file.path().to_str().unwrap());
    let engine = ComparisonEngine::new(config.build_source()?, config);

    let page = engine.compare(&input).await?;
    Ok((
        page.primary.selected_phone,
        page.primary.selected_color,
        page.secondary.selected_phone,
        page.secondary.selected_color,
    ))
}

fn tuple(a: &str, b: &str, c: &str, d: &str) -> (String, String, String, String) {
    (a.to_string(), b.to_string(), c.to_string(), d.to_string())
}

#[tokio::test]
async fn test_no_selection_compares_first_phone_with_itself() {
    let result = compare(CATALOG, SelectionInput::default()).await.unwrap();

    assert_eq!(result, tuple("iphone14", "black", "iphone14", "black"));
}

#[tokio::test]
async fn test_explicit_selection() {
    let input = SelectionInput {
        primary: Some("iphone15".to_string()),
        secondary: Some("iphone14".to_string()),
        secondary_color: Some("blue".to_string()),
        ..Default::default()
    };

    let result = compare(CATALOG, input).await.unwrap();

    assert_eq!(result, tuple("iphone15", "pink", "iphone14", "blue"));
}

#[tokio::test]
async fn test_unknown_phone_falls_back() {
    let input = SelectionInput::from_query("primary=doesnotexist");

    let result = compare(CATALOG, input).await.unwrap();

    assert_eq!(result.0, "iphone14");
    assert_eq!(result.1, "black");
}

#[tokio::test]
async fn test_empty_catalog_file() {
    let result = compare("[]", SelectionInput::default()).await;

    assert!(matches!(result, Err(CompareError::EmptyCatalog)));
}

#[tokio::test]
async fn test_phone_without_colors() {
    let result = compare(r#"[{"id": 1, "name": "iphone14", "phone_colors": []}]"#, SelectionInput::default()).await;

    assert!(matches!(
        result,
        Err(CompareError::PhoneWithoutColors { .. })
    ));
}

#[tokio::test]
async fn test_share_link_round_trip() {
    let file = catalog_file(CATALOG);
    let config = file_config(file.path().to_str().unwrap());
    let engine = ComparisonEngine::new(config.build_source().unwrap(), config);

    let input = SelectionInput::from_query("secondary=iphone15&secondaryColor=green");
    let page = engine.compare(&input).await.unwrap();
    let link = page.share_link.clone().unwrap();
    let query = link.split_once('?').unwrap().1;

    let again = engine.compare(&SelectionInput::from_query(query)).await.unwrap();

    assert_eq!(page, again);
}

#[tokio::test]
async fn test_sitemap_written_to_storage() {
    let file = catalog_file(CATALOG);
    let config = file_config(file.path().to_str().unwrap());
    let engine = ComparisonEngine::new(config.build_source().unwrap(), config);
    let output = TempDir::new().unwrap();

    let entries = engine.sitemap().await.unwrap();
    let storage = LocalStorage::new(output.path().to_str().unwrap().to_string());
    storage
        .write_file("nested/sitemap.xml", render_xml(&entries).as_bytes())
        .await
        .unwrap();

    let written = std::fs::read_to_string(output.path().join("nested/sitemap.xml")).unwrap();
    assert_eq!(written.matches("<url>").count(), 5);
    assert!(written.contains("?primary=iphone15&amp;secondary=iphone14"));
}
