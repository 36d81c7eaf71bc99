use super::*;

#[test]
fn missing_fields_deserialize_to_empty_values() {
    let item: CarouselItem = serde_json::from_str(r#"{"id": 3, "title": "Chair"}"#).unwrap();
    assert_eq!(item.id, ItemId::Number(3));
    assert_eq!(item.title, "Chair");
    assert!(item.url.is_empty());
    assert!(item.category.is_empty());
    assert!(item.description.is_empty());
}

#[test]
fn ids_may_be_numbers_or_strings() {
    let items: Vec<CarouselItem> =
        serde_json::from_str(r#"[{"id": 7}, {"id": "rec-7"}, {}]"#).unwrap();
    assert_eq!(items[0].id.to_string(), "7");
    assert_eq!(items[1].id, ItemId::Text("rec-7".into()));
    assert_eq!(items[2].id, ItemId::default());
}
