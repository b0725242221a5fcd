use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use super::QueryStore;
use crate::error::{RecentQueriesError, Result};

pub const COOKIE_NAME: &str = "recent_queries";
pub const COOKIE_PATH: &str = "/";
const EXPIRY_MONTHS: u32 = 1;

/// One cookie as kept by the jar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

fn default_path() -> String {
    COOKIE_PATH.to_string()
}

impl StoredCookie {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|exp| exp <= now)
    }

    /// `Set-Cookie` form: `name=value; expires=<RFC 1123>; path=/[; domain=..]`
    pub fn set_cookie_string(&self) -> String {
        let mut out = format!("{}={}", self.name, self.value);
        if let Some(expires) = self.expires {
            out.push_str("; expires=");
            out.push_str(&format_expires(expires));
        }
        out.push_str("; path=");
        out.push_str(&self.path);
        if let Some(domain) = &self.domain {
            out.push_str("; domain=");
            out.push_str(domain);
        }
        out
    }
}

/// One calendar month after `now`.
pub fn expiry_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_add_months(Months::new(EXPIRY_MONTHS))
        .unwrap_or_else(|| now + Duration::days(30))
}

/// HTTP date as produced by `Date.toUTCString()`, e.g. `Tue, 15 Nov 1994 08:12:31 GMT`.
pub fn format_expires(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// File-backed cookie jar, the process-local stand-in for a browser's cookie store.
#[derive(Debug, Clone)]
pub struct CookieJar {
    path: Option<PathBuf>,
}

impl CookieJar {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    fn read_cookies(&self) -> Result<Vec<StoredCookie>> {
        let Some(path) = &self.path else {
            return Ok(Vec::new());
        };

        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    /// Request header form: unexpired cookies as `name=value` joined by `; `.
    pub fn header(&self, now: DateTime<Utc>) -> Result<String> {
        let cookies = self.read_cookies()?;
        Ok(cookies
            .iter()
            .filter(|c| !c.is_expired(now))
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; "))
    }

    /// Stores `cookie`, replacing any cookie with the same name and path.
    /// Expired cookies are dropped from the jar on every write.
    pub fn set(&mut self, cookie: StoredCookie, now: DateTime<Utc>) -> Result<()> {
        let Some(path) = &self.path else {
            return Err(RecentQueriesError::NoDataDir);
        };

        // A corrupt jar is replaced rather than blocking every future write
        let mut cookies = self.read_cookies().unwrap_or_default();
        cookies.retain(|c| !c.is_expired(now) && !(c.name == cookie.name && c.path == cookie.path));
        cookies.push(cookie);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&cookies)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }
}

/// Finds the `recent_queries` cookie in a raw cookie header and decodes it.
///
/// Only the first JSON value after `recent_queries=` is read, so a `;` inside a
/// stored query does not cut the value short.
pub fn parse_recent_queries_cookie(header: &str) -> Option<Vec<String>> {
    let prefix = format!("{}=", COOKIE_NAME);
    let mut rest = header;

    loop {
        let pair = rest.trim_start();
        if let Some(value) = pair.strip_prefix(&prefix) {
            return serde_json::Deserializer::from_str(value)
                .into_iter::<Vec<String>>()
                .next()
                .and_then(|parsed| parsed.ok());
        }

        let next = pair.find(';')?;
        rest = &pair[next + 1..];
    }
}

/// Cookie strategy of the persistence adapter.
#[derive(Debug, Clone)]
pub struct CookieStorage {
    jar: CookieJar,
    domain: Option<String>,
}

impl CookieStorage {
    pub fn new(jar_path: Option<PathBuf>, domain: Option<String>) -> Self {
        Self {
            jar: CookieJar::new(jar_path),
            domain,
        }
    }

    pub fn jar(&self) -> &CookieJar {
        &self.jar
    }

    pub fn build_cookie(&self, queries: &[String], now: DateTime<Utc>) -> Result<StoredCookie> {
        Ok(StoredCookie {
            name: COOKIE_NAME.to_string(),
            value: serde_json::to_string(queries)?,
            expires: Some(expiry_from(now)),
            path: COOKIE_PATH.to_string(),
            domain: self.domain.clone(),
        })
    }

    pub fn load_at(&self, now: DateTime<Utc>) -> Result<Option<Vec<String>>> {
        let header = self.jar.header(now)?;
        Ok(parse_recent_queries_cookie(&header))
    }

    pub fn save_at(&mut self, queries: &[String], now: DateTime<Utc>) -> Result<()> {
        let cookie = self.build_cookie(queries, now)?;
        #[cfg(debug_assertions)]
        log::debug!("Writing cookie: {}", cookie.set_cookie_string());
        self.jar.set(cookie, now)
    }
}

impl QueryStore for CookieStorage {
    fn try_load(&self) -> Result<Option<Vec<String>>> {
        self.load_at(Utc::now())
    }

    fn try_save(&mut self, queries: &[String]) -> Result<()> {
        self.save_at(queries, Utc::now())
    }
}

#[cfg(test)]
#[path = "cookie_tests.rs"]
mod cookie_tests;
