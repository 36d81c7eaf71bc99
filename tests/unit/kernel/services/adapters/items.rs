use super::*;
use crate::models::ItemId;

#[test]
fn loads_items_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 2, "url": "b.jpg", "category": "Desk", "title": "B", "description": "second"},
            {"id": 1, "title": "A"},
            {"id": 1, "title": "A again"}
        ]"#,
    )
    .unwrap();

    let items = load_items(&path).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, ItemId::Number(2));
    assert_eq!(items[0].category, "Desk");
    assert_eq!(items[1].title, "A");
    assert!(items[1].url.is_empty());
    assert_eq!(items[2].title, "A again");
}

#[test]
fn parse_errors_are_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(&path, r#"{"id": 1}"#).unwrap();

    let err = load_items(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);

    let missing = load_items(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(missing.kind(), std::io::ErrorKind::NotFound);
}
