//! Changelog client against a local HTTP server

mod common;

use cmlog::changelog::{ChangelogClient, ChangelogError, ChangelogSource};

use common::http::OneShotServer;

#[test]
fn test_fetch_decodes_feed() {
    let server = OneShotServer::json(
        r#"[
            {"subject": "Fix camera crash", "project": "CyanogenMod/android_packages_apps_Snap",
             "last_updated": "2016-01-29 15:30:12.000000000", "_number": 128734},
            {"subject": "Update translations", "project": "CyanogenMod/android_packages_apps_Trebuchet",
             "last_updated": "2016-01-28 09:05", "branch": "cm-13.0"}
        ]"#,
    );
    let client = ChangelogClient::new(&server.base_url).unwrap();

    let changes = client.fetch("13.0", "hammerhead").unwrap();

    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].subject, "Fix camera crash");
    assert_eq!(changes[0].change_id.as_deref(), Some("128734"));
    assert_eq!(changes[1].change_id, None);
    assert_eq!(
        server.request_line(),
        "GET /changes/13.0/hammerhead HTTP/1.1"
    );
}

#[test]
fn test_fetch_empty_feed() {
    let server = OneShotServer::json("[]");
    let client = ChangelogClient::new(&server.base_url).unwrap();

    assert!(client.fetch("13.0", "bacon").unwrap().is_empty());
}

#[test]
fn test_fetch_server_error() {
    let server = OneShotServer::respond("500 Internal Server Error", "text/plain", "oops");
    let client = ChangelogClient::new(&server.base_url).unwrap();

    let err = client.fetch("13.0", "hammerhead").unwrap_err();
    assert!(
        matches!(err, ChangelogError::Status { status: 500, .. }),
        "{err:?}"
    );
}

#[test]
fn test_fetch_malformed_body() {
    let server = OneShotServer::respond("200 OK", "text/html", "<html>maintenance</html>");
    let client = ChangelogClient::new(&server.base_url).unwrap();

    let err = client.fetch("13.0", "hammerhead").unwrap_err();
    assert!(matches!(err, ChangelogError::Parse(_)), "{err:?}");
}

#[test]
fn test_fetch_connection_refused() {
    // Bind then drop to get a port nobody listens on
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = ChangelogClient::new(&format!("http://{}", addr)).unwrap();

    let err = client.fetch("13.0", "hammerhead").unwrap_err();
    assert!(matches!(err, ChangelogError::Http(_)), "{err:?}");
}
