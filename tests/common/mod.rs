//! Common test utilities

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use std::fs;
use tempfile::TempDir;

pub const REPORTING: &str = "/api/profiler/1.0/reporting";

/// `Basic` credentials for alice/secret
pub const ALICE_AUTH: &str = "Basic YWxpY2U6c2VjcmV0";

pub const COLUMNS_JSON: &str = r#"[
  {"id": 52, "strid": "ID_APP_INFO", "label": "Application", "category": "key", "type": "string"},
  {"id": 17, "strid": "ID_APP_NAME", "label": "Application", "category": "key", "type": "app"},
  {"id": 13, "strid": "ID_CLI_HOST_IP", "label": "Client IP", "category": "key", "type": "ipaddr"},
  {"id": 14, "strid": "ID_CLI_HOST_DNS", "label": "Client", "category": "key", "type": "host_parts"},
  {"id": 33, "strid": "ID_AVG_BYTES", "label": "Avg Bytes/s", "category": "value", "type": "int",
   "unit": "bytes", "rate": "persec"}
]"#;

pub const GROUP_BYS_JSON: &str = r#"[
  {"id": "hos", "name": "host"},
  {"id": "app", "name": "application"},
  {"id": "ifc", "name": "interface"}
]"#;

pub const REALMS_JSON: &str = r#"[
  {"id": "traffic_summary", "name": "Traffic Summary"},
  {"id": "traffic_flow_list"}
]"#;

pub const CENTRICITIES_JSON: &str = r#"[
  {"id": "hos", "name": "host"},
  {"id": "int", "name": "interface"}
]"#;

/// Mock a reporting resource that answers alice/secret with `body`
pub fn mock_resource(server: &mut ServerGuard, resource: &str, body: &str) -> Mock {
    server
        .mock("GET", format!("{}/{}", REPORTING, resource).as_str())
        .match_query(Matcher::Any)
        .match_header("authorization", ALICE_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

/// Mock the whole catalog; the columns mock only answers the default selection
pub fn mock_catalog(server: &mut ServerGuard) -> Vec<Mock> {
    let columns = server
        .mock("GET", format!("{}/columns.json", REPORTING).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("realm".into(), "traffic_summary".into()),
            Matcher::UrlEncoded("centricity".into(), "hos".into()),
            Matcher::UrlEncoded("group_by".into(), "hos".into()),
        ]))
        .match_header("authorization", ALICE_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COLUMNS_JSON)
        .create();

    vec![
        columns,
        mock_resource(server, "group_bys.json", GROUP_BYS_JSON),
        mock_resource(server, "realms.json", REALMS_JSON),
        mock_resource(server, "centricities.json", CENTRICITIES_JSON),
    ]
}

/// Create a temporary directory with an npcolumns.yml file
pub fn create_test_settings(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("npcolumns.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}
