use assert_json_diff::assert_json_eq;
use globus_client::model::requests::MkdirRequest;
use serde_json::json;

#[test]
fn mkdir_request_normalizes_path() {
    let req = MkdirRequest::new("submissions/PRJ1");
    assert_eq!(req.data_type, "mkdir");
    assert_eq!(req.path, "/submissions/PRJ1");

    let req = MkdirRequest::new("/submissions/PRJ1/");
    assert_eq!(req.path, "/submissions/PRJ1");
}

#[test]
fn mkdir_request_wire_format() {
    let req = MkdirRequest::new("submissions/PRJ1");

    assert_json_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({
            "DATA_TYPE": "mkdir",
            "path": "/submissions/PRJ1"
        })
    );
}
