use pizzeria_types::{Error, load_catalog};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_menu(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_catalog_from_file() {
    let menu = write_menu(r#"[{"name": "Margherita", "price": 8.99}, {"name": "Pepperoni", "price": 10.5}]"#);

    let pizzas = load_catalog(menu.path()).unwrap();
    assert_eq!(pizzas.len(), 2);
    assert_eq!(pizzas[0].name, "Margherita");
    assert_eq!(pizzas[1].name, "Pepperoni");
}

#[test]
fn test_load_catalog_missing_file_is_a_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_catalog(&dir.path().join("no-such-menu.json"));
    assert!(matches!(result, Err(Error::Resource(_))));
}

#[test]
fn test_load_catalog_malformed_file_is_a_parse_error() {
    let menu = write_menu("not json at all");
    let result = load_catalog(menu.path());
    assert!(matches!(result, Err(Error::Parse(_))));
}
