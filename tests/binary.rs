//! End-to-end tests running the get_np_columns binary against a mock appliance

mod common;

use assert_cmd::Command;
use common::*;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary, isolated from any settings file on the machine
fn get_np_columns(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("get_np_columns").unwrap();
    cmd.current_dir(work_dir.path())
        .env("HOME", work_dir.path())
        .env("XDG_CONFIG_HOME", work_dir.path().join(".config"))
        .env_remove("NPCOLUMNS_CONFIG")
        .env_remove("NPCOLUMNS_LOG");
    cmd
}

#[test]
fn test_lists_columns() {
    let mut server = Server::new();
    let _mocks = mock_catalog(&mut server);
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .args([server.url().as_str(), "-u", "alice", "-p", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Key Columns"))
        .stdout(predicate::str::contains("cli_host_ip"))
        .stdout(predicate::str::contains("Value Columns"))
        .stdout(predicate::str::contains("avg_bytes"));
}

#[test]
fn test_list_groupbys_replaces_columns() {
    let mut server = Server::new();
    let _mocks = mock_catalog(&mut server);
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .args([server.url().as_str(), "-u", "alice", "-p", "secret", "--list-groupbys"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("GroupBy"))
        .stdout(predicate::str::contains("application"))
        .stdout(predicate::str::contains("Key Columns").not());
}

#[test]
fn test_ids_and_filter() {
    let mut server = Server::new();
    let _mocks = mock_catalog(&mut server);
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .args([server.url().as_str(), "-u", "alice", "-p", "secret", "--ids", "13,14,17", "--filter", "host"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cli_host_ip"))
        .stdout(predicate::str::contains("cli_host_dns"))
        .stdout(predicate::str::contains("app_name").not());
}

#[test]
fn test_settings_file_supplies_selection() {
    let mut server = Server::new();
    let _catalog = mock_catalog(&mut server);
    let flow_list = server
        .mock("GET", "/api/profiler/1.0/reporting/columns.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("realm".into(), "traffic_flow_list".into()),
            Matcher::UrlEncoded("group_by".into(), "app".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();

    let (work_dir, _settings) = create_test_settings(
        "defaults:\n  realm: traffic_flow_list\n  groupby: application\n",
    );

    get_np_columns(&work_dir)
        .args([server.url().as_str(), "-u", "alice", "-p", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Key Columns"));

    flow_list.assert();
}

#[test]
fn test_config_env_var_names_settings_file() {
    let mut server = Server::new();
    let _catalog = mock_catalog(&mut server);
    let flow_list = server
        .mock("GET", "/api/profiler/1.0/reporting/columns.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("realm".into(), "traffic_flow_list".into()),
            Matcher::UrlEncoded("group_by".into(), "app".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();

    let (settings_dir, settings) = create_test_settings(
        "defaults:\n  realm: traffic_flow_list\n  groupby: app\n",
    );
    let renamed = settings_dir.path().join("site.yml");
    std::fs::rename(&settings, &renamed).unwrap();
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .env("NPCOLUMNS_CONFIG", &renamed)
        .args([server.url().as_str(), "-u", "alice", "-p", "secret"])
        .assert()
        .success();

    flow_list.assert();
}

#[test]
fn test_config_env_var_missing_file_exits_1() {
    let work_dir = TempDir::new().unwrap();
    let missing = work_dir.path().join("absent.yml");

    get_np_columns(&work_dir)
        .env("NPCOLUMNS_CONFIG", &missing)
        .args(["host.example.com", "-u", "alice", "-p", "secret"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.yml"));
}

#[test]
fn test_settings_file_connection_options() {
    let mut server = Server::new();
    let _mocks = mock_catalog(&mut server);
    let (work_dir, _settings) = create_test_settings("timeout: 7\ninsecure: true\n");

    get_np_columns(&work_dir)
        .args([server.url().as_str(), "-u", "alice", "-p", "secret", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("(timeout 7s, insecure true)"));
}

#[test]
fn test_command_line_timeout_beats_settings_file() {
    let mut server = Server::new();
    let _mocks = mock_catalog(&mut server);
    let (work_dir, _settings) = create_test_settings("timeout: 7\n");

    get_np_columns(&work_dir)
        .args([server.url().as_str(), "-u", "alice", "-p", "secret", "-v", "--timeout", "12"])
        .assert()
        .success()
        .stderr(predicate::str::contains("(timeout 12s, insecure false)"));
}

#[test]
fn test_log_env_var_overrides_quiet() {
    let mut server = Server::new();
    let _mocks = mock_catalog(&mut server);
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .env("NPCOLUMNS_LOG", "npcolumns=debug")
        .args([server.url().as_str(), "-u", "alice", "-p", "secret", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::contains("GET "));
}

#[test]
fn test_log_env_var_overrides_verbose() {
    let mut server = Server::new();
    let _mocks = mock_catalog(&mut server);
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .env("NPCOLUMNS_LOG", "error")
        .args([server.url().as_str(), "-u", "alice", "-p", "secret", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("GET ").not());
}

#[test]
fn test_oversized_timeout_is_usage_error() {
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .args(["host.example.com", "-u", "alice", "-p", "secret", "--timeout", "18446744073709551615"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--timeout"));
}

#[test]
fn test_oversized_settings_timeout_exits_1() {
    let (work_dir, _settings) = create_test_settings("timeout: 18446744073709551615\n");

    get_np_columns(&work_dir)
        .args(["host.example.com", "-u", "alice", "-p", "secret"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timeout must be at most 86400 seconds"));
}

#[test]
fn test_authentication_failure_exits_1() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", Matcher::Any)
        .with_status(401)
        .create();
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .args([server.url().as_str(), "-u", "alice", "-p", "wrong"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn test_unknown_column_id_exits_1() {
    let mut server = Server::new();
    let _mocks = mock_catalog(&mut server);
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .args([server.url().as_str(), "-u", "alice", "-p", "secret", "--ids", "999"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No columns match id(s): 999"));
}

#[test]
fn test_invalid_filter_exits_1() {
    let work_dir = TempDir::new().unwrap();

    // the filter is rejected before any connection is attempted
    get_np_columns(&work_dir)
        .args(["http://127.0.0.1:9", "-u", "alice", "-p", "secret", "--filter", "cli_(host"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid column filter"));
}

#[test]
fn test_missing_credentials_is_usage_error() {
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .arg("host.example.com")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--user"));
}

#[test]
fn test_missing_explicit_settings_file() {
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .args(["host.example.com", "-u", "alice", "-p", "secret", "-c", "nope.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.yml"));
}

#[test]
fn test_help() {
    let work_dir = TempDir::new().unwrap();

    get_np_columns(&work_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--list-groupbys"))
        .stdout(predicate::str::contains("--centricity"));
}
