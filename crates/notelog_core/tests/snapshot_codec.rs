use notelog_core::snapshot::{decode, encode_entries, encode_error, SCHEMA_VERSION};
use notelog_core::Entry;

fn sample_entry(id: i64, text: &str) -> Entry {
    Entry {
        id,
        text: text.to_string(),
        color: 2,
        created: 1_700_000_000,
        modified: 1_700_000_100,
    }
}

#[test]
fn encoded_snapshot_carries_schema_version_and_entries() {
    let bytes = encode_entries(&[sample_entry(1, "Buy milk")]).unwrap();
    let snapshot = decode(&bytes).unwrap();

    assert_eq!(snapshot.schema, SCHEMA_VERSION);
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(snapshot.entries[0].id, 1);
    assert_eq!(snapshot.entries[0].text, "Buy milk");
    assert_eq!(snapshot.entries[0].color, 2);
    assert_eq!(snapshot.entries[0].created, 1_700_000_000);
    assert_eq!(snapshot.entries[0].modified, 1_700_000_100);
}

#[test]
fn empty_store_encodes_empty_list_not_null() {
    let bytes = encode_entries(&[]).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(value["entries"].is_array());
    assert_eq!(value["entries"].as_array().unwrap().len(), 0);
    assert!(value["error"].is_null());
}

#[test]
fn encoding_derives_tags_and_strips_them_from_display_text() {
    let bytes =
        encode_entries(&[sample_entry(1, "finish essay #course:eng=lit tonight #urgent")]).unwrap();
    let snapshot = decode(&bytes).unwrap();

    let view = &snapshot.entries[0];
    assert_eq!(view.text, "finish essay tonight");
    assert_eq!(view.tags.len(), 2);

    assert_eq!(view.tags[0].id, "course:eng=lit");
    assert_eq!(view.tags[0].namespace, "course");
    assert_eq!(view.tags[0].key, "eng");
    assert_eq!(view.tags[0].value, "lit");

    assert_eq!(view.tags[1].id, "urgent");
    assert_eq!(view.tags[1].namespace, "");
    assert_eq!(view.tags[1].key, "");
    assert_eq!(view.tags[1].value, "urgent");
}

#[test]
fn tag_free_text_encodes_empty_tag_list() {
    let bytes = encode_entries(&[sample_entry(1, "no tags at all")]).unwrap();
    let snapshot = decode(&bytes).unwrap();

    assert_eq!(snapshot.entries[0].text, "no tags at all");
    assert!(snapshot.entries[0].tags.is_empty());
}

#[test]
fn error_snapshot_carries_code_and_empty_entries() {
    let bytes = encode_error("NotFound", "entry not found: 7").unwrap();
    let snapshot = decode(&bytes).unwrap();

    assert!(snapshot.entries.is_empty());
    let error = snapshot.error.unwrap();
    assert_eq!(error.code, "NotFound");
    assert!(error.message.contains('7'));
}

#[test]
fn payload_field_names_are_stable() {
    let bytes = encode_entries(&[sample_entry(1, "wire check #a:b=c")]).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let entry = &value["entries"][0];
    for field in ["id", "text", "color", "tags", "created", "modified"] {
        assert!(!entry[field].is_null(), "missing field `{field}`");
    }
    let tag = &entry["tags"][0];
    for field in ["id", "namespace", "key", "value"] {
        assert!(tag[field].is_string(), "missing tag field `{field}`");
    }
}
