use lumi_core::{ProgressSnapshot, StatusResponse};

#[test]
fn decodes_full_backend_payload() {
    let raw = r#"{
        "status": "Running",
        "progress": {
            "totalMedia": 20,
            "requestedMedia": 20,
            "downloadedImages": 5,
            "skippedImages": 1,
            "currentFileNumber": 6,
            "terminated": false
        }
    }"#;
    let response: StatusResponse = serde_json::from_str(raw).unwrap();
    let progress = response.progress.unwrap();

    assert_eq!(response.status, "Running");
    assert_eq!(progress.requested_media, 20);
    assert_eq!(progress.downloaded_images, 5);
    assert_eq!(progress.skipped_images, 1);
    assert_eq!(progress.total_media, Some(20));
    assert_eq!(progress.current_file_number, Some(6));
    assert_eq!(progress.percentage(), 25.0);
}

#[test]
fn accepts_total_images_alias_and_missing_fields() {
    let raw = r#"{"status":"Running","progress":{"totalImages":8,"downloadedImages":2}}"#;
    let response: StatusResponse = serde_json::from_str(raw).unwrap();
    let progress = response.progress.unwrap();

    assert_eq!(progress.requested_media, 8);
    assert_eq!(progress.skipped_images, 0);
    assert!(!progress.terminated);
    assert!(!response.is_terminal());
}

#[test]
fn percentage_is_zero_without_requested_media() {
    let progress = ProgressSnapshot {
        downloaded_images: 3,
        ..ProgressSnapshot::default()
    };
    let percent = progress.percentage();

    assert_eq!(percent, 0.0);
    assert!(percent.is_finite());
}

#[test]
fn terminal_by_status_or_flag() {
    let completed: StatusResponse = serde_json::from_str(r#"{"status":"Completed"}"#).unwrap();
    assert!(completed.is_terminal());

    let flagged: StatusResponse =
        serde_json::from_str(r#"{"status":"Running","progress":{"terminated":true}}"#).unwrap();
    assert!(flagged.is_terminal());

    let running: StatusResponse = serde_json::from_str(r#"{"status":"Running"}"#).unwrap();
    assert!(!running.is_terminal());
}
