//! Read-only view of the browser engine's persistent cookie database.
//!
//! The engine writes cookies to `cookies.sqlite` in the per-user data
//! directory using the Mozilla `moz_cookies` schema. The shell only reads it
//! to report whether a Microsoft sign-in survived from an earlier run.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use crate::types::errors::CookieStoreError;

pub const COOKIE_DB_NAME: &str = "cookies.sqlite";

/// Domains whose cookies carry an Office / Microsoft account session.
const SIGN_IN_DOMAINS: &[&str] = &[
    "office.com",
    "office365.com",
    "microsoft.com",
    "microsoftonline.com",
    "live.com",
    "sharepoint.com",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieSummary {
    pub total: usize,
    pub hosts: usize,
    pub sign_in: usize,
}

impl CookieSummary {
    pub fn has_sign_in_session(&self) -> bool {
        self.sign_in > 0
    }
}

pub struct CookieStore {
    path: PathBuf,
}

impl CookieStore {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(COOKIE_DB_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Counts persisted cookies. A database the engine has not created yet,
    /// or one without the cookie table, reads as empty.
    pub fn summary(&self) -> Result<CookieSummary, CookieStoreError> {
        if !self.path.exists() {
            return Ok(CookieSummary::default());
        }

        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        let has_table: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'moz_cookies')",
            [],
            |row| row.get(0),
        )?;
        if !has_table {
            return Ok(CookieSummary::default());
        }

        let mut stmt = conn.prepare("SELECT host, COUNT(*) FROM moz_cookies GROUP BY host")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;

        let mut summary = CookieSummary::default();
        for row in rows {
            let (host, count) = row?;
            let count = count.max(0) as usize;
            summary.total += count;
            summary.hosts += 1;
            if is_sign_in_host(&host) {
                summary.sign_in += count;
            }
        }
        Ok(summary)
    }
}

/// `host` as stored by the engine, possibly with a leading dot for domain cookies.
fn is_sign_in_host(host: &str) -> bool {
    let host = host.trim_start_matches('.').to_ascii_lowercase();
    SIGN_IN_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
}
