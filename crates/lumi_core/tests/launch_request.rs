use lumi_core::{split_list, parse_media_count, FormSnapshot, LaunchRequest, DEFAULT_MEDIA_COUNT};
use pretty_assertions::assert_eq;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn list_fields_are_trimmed_and_drop_empties() {
    let form = FormSnapshot::new().with_field("tag", "a, b ,,c");
    let request = LaunchRequest::from_form(&form);

    assert_eq!(request.tag, Some(strings(&["a", "b", "c"])));
    assert_eq!(request.and, None);
    assert_eq!(request.ignore, None);
}

#[test]
fn list_splitting_preserves_order_without_empties() {
    let inputs = [
        "",
        ",",
        " , ,, ",
        "z,y,x",
        "  one  ,two,,  three,",
        ",lead,trail,",
    ];
    for input in inputs {
        let items = split_list(input);
        assert!(items.iter().all(|item| !item.is_empty()), "{input:?}");
        let expected: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        assert_eq!(items, expected, "{input:?}");
    }
}

#[test]
fn media_count_defaults_when_unparsable() {
    assert_eq!(parse_media_count("abc"), DEFAULT_MEDIA_COUNT);
    assert_eq!(parse_media_count("7"), 7);
    assert_eq!(parse_media_count(""), DEFAULT_MEDIA_COUNT);
}

#[test]
fn other_fields_pass_through_verbatim() {
    let form: FormSnapshot = [
        ("project", " my project "),
        ("database", "on"),
        ("and", "solo"),
        ("ignore", "x, y"),
        ("mediaCount", "abc"),
    ]
    .into_iter()
    .collect();
    let request = LaunchRequest::from_form(&form);

    assert_eq!(
        request.extra.get("project").map(String::as_str),
        Some(" my project ")
    );
    assert_eq!(request.extra.get("database").map(String::as_str), Some("on"));
    assert_eq!(request.and, Some(strings(&["solo"])));
    assert_eq!(request.ignore, Some(strings(&["x", "y"])));
    assert_eq!(request.media_count, Some(20));
}

#[test]
fn json_body_only_carries_submitted_fields() {
    let form = FormSnapshot::new()
        .with_field("project", "cats")
        .with_field("tag", "cat, ,kitten")
        .with_field("mediaCount", "7");
    let request = LaunchRequest::from_form(&form);

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "project": "cats",
            "tag": ["cat", "kitten"],
            "mediaCount": 7
        })
    );
}
