use super::payload::{parse_directories, parse_files};
use super::*;
use crate::library::Track;

fn local() -> Endpoints {
    Endpoints::new("http://localhost:8000", "").unwrap()
}

#[test]
fn endpoints_without_mount_path() {
    let e = local();
    assert_eq!(e.directories().as_str(), "http://localhost:8000/directories");
    assert_eq!(e.files("Lung").as_str(), "http://localhost:8000/files/Lung");
    assert_eq!(
        e.audio("Lung", "s1.mp3").as_str(),
        "http://localhost:8000/audio/Lung/s1.mp3"
    );
}

#[test]
fn endpoints_with_mount_path_and_trailing_slashes() {
    let e = Endpoints::new("https://example.org/", "/cceraudio/").unwrap();
    assert_eq!(e.directories().as_str(), "https://example.org/cceraudio/directories");

    let nested = Endpoints::new("https://example.org/apps/", "cceraudio").unwrap();
    assert_eq!(
        nested.files("Heart").as_str(),
        "https://example.org/apps/cceraudio/files/Heart"
    );
}

#[test]
fn endpoints_encode_each_segment_independently() {
    let e = local();
    assert_eq!(
        e.files("Heart Sounds").as_str(),
        "http://localhost:8000/files/Heart%20Sounds"
    );
    assert_eq!(
        e.audio("a/b", "50% #1?.wav").as_str(),
        "http://localhost:8000/audio/a%2Fb/50%25%20%231%3F.wav"
    );
}

#[test]
fn endpoints_reject_unusable_server_urls() {
    assert!(matches!(
        Endpoints::new("not a url", ""),
        Err(ApiError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
        Endpoints::new("mailto:someone@example.org", ""),
        Err(ApiError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn parse_directories_accepts_string_array() {
    let dirs = parse_directories(200, r#"["Heart","Lung"]"#).unwrap();
    assert_eq!(dirs, vec!["Heart".to_string(), "Lung".to_string()]);
}

#[test]
fn parse_files_accepts_pairs_and_empty_arrays() {
    let files = parse_files(200, r#"[["s1.mp3",12.3],["s2.mp3",45.0]]"#).unwrap();
    assert_eq!(files, vec![Track::new("s1.mp3", 12.3), Track::new("s2.mp3", 45.0)]);

    assert!(parse_files(200, "[]").unwrap().is_empty());
}

#[test]
fn parse_files_rejects_object_payload_with_server_error() {
    let err = parse_files(200, r#"{"error":"not found"}"#).unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedShape { .. }));
    assert_eq!(err.server_message(), Some("not found"));
    assert!(err.is_payload_error());
}

#[test]
fn parse_files_treats_error_status_as_failure() {
    let err = parse_files(404, r#"{"error":"Directory not found"}"#).unwrap_err();
    match &err {
        ApiError::Status { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message.as_deref(), Some("Directory not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "server answered 404: Directory not found");

    // An error status with an array body is still a failure.
    assert!(parse_files(500, "[]").is_err());
}

#[test]
fn parse_files_rejects_non_json_and_wrong_elements() {
    assert!(matches!(
        parse_files(200, "<html>oops</html>"),
        Err(ApiError::Decode(_))
    ));
    assert!(matches!(parse_files(200, r#"[1, 2]"#), Err(ApiError::Decode(_))));
}
