//! Cookie store summary against SQLite files shaped like the engine's.

use office_shell::services::cookie_store::{CookieStore, CookieSummary};
use rusqlite::{params, Connection};
use tempfile::TempDir;

fn write_cookies(dir: &TempDir, hosts: &[&str]) {
    let conn = Connection::open(dir.path().join("cookies.sqlite")).unwrap();
    conn.execute_batch(
        "CREATE TABLE moz_cookies (
            id INTEGER PRIMARY KEY,
            name TEXT,
            value TEXT,
            host TEXT,
            path TEXT,
            expiry INTEGER,
            lastAccessed INTEGER,
            isSecure INTEGER,
            isHttpOnly INTEGER,
            sameSite INTEGER
        );",
    )
    .unwrap();
    for (i, host) in hosts.iter().enumerate() {
        conn.execute(
            "INSERT INTO moz_cookies (name, value, host, path) VALUES (?1, 'v', ?2, '/')",
            params![format!("c{}", i), host],
        )
        .unwrap();
    }
}

#[test]
fn test_missing_database_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = CookieStore::in_dir(dir.path());

    assert_eq!(store.summary().unwrap(), CookieSummary::default());
    assert!(!store.path().exists(), "summary must not create the database");
}

#[test]
fn test_database_without_cookie_table_is_empty() {
    let dir = TempDir::new().unwrap();
    let conn = Connection::open(dir.path().join("cookies.sqlite")).unwrap();
    conn.execute_batch("CREATE TABLE other (x INTEGER);").unwrap();
    drop(conn);

    let summary = CookieStore::in_dir(dir.path()).summary().unwrap();
    assert_eq!(summary.total, 0);
    assert!(!summary.has_sign_in_session());
}

#[test]
fn test_summary_counts_sign_in_hosts() {
    let dir = TempDir::new().unwrap();
    write_cookies(
        &dir,
        &[
            ".login.microsoftonline.com",
            ".login.microsoftonline.com",
            "www.office.com",
            "example.org",
        ],
    );

    let summary = CookieStore::in_dir(dir.path()).summary().unwrap();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.hosts, 3);
    assert_eq!(summary.sign_in, 3);
    assert!(summary.has_sign_in_session());
}

#[test]
fn test_unrelated_cookies_are_not_a_session() {
    let dir = TempDir::new().unwrap();
    write_cookies(&dir, &["example.org", "notoffice.com"]);

    let summary = CookieStore::in_dir(dir.path()).summary().unwrap();
    assert_eq!(summary.total, 2);
    assert!(!summary.has_sign_in_session());
}

#[test]
fn test_corrupt_database_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cookies.sqlite"), b"this is not sqlite at all").unwrap();

    assert!(CookieStore::in_dir(dir.path()).summary().is_err());
}
