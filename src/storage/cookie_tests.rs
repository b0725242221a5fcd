use chrono::TimeZone;
use tempfile::TempDir;

use super::*;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 31, 12, 30, 0).unwrap()
}

fn storage_in(dir: &TempDir) -> CookieStorage {
    CookieStorage::new(Some(dir.path().join("cookies.json")), None)
}

fn queries(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_load_without_cookie_returns_none() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    assert_eq!(storage.load_at(fixed_now()).unwrap(), None);
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut storage = storage_in(&dir);
    let list = queries(&["rust", "cargo workspaces", "a; b"]);

    storage.save_at(&list, fixed_now()).unwrap();

    assert_eq!(storage.load_at(fixed_now()).unwrap(), Some(list));
}

#[test]
fn test_save_replaces_previous_cookie() {
    let dir = TempDir::new().unwrap();
    let mut storage = storage_in(&dir);

    storage.save_at(&queries(&["old"]), fixed_now()).unwrap();
    storage.save_at(&queries(&["new"]), fixed_now()).unwrap();

    let header = storage.jar().header(fixed_now()).unwrap();
    assert_eq!(header, r#"recent_queries=["new"]"#);
}

#[test]
fn test_expiry_is_one_calendar_month() {
    // Jan 31 + 1 month clamps to the last day of February
    let expected = Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 0).unwrap();
    assert_eq!(expiry_from(fixed_now()), expected);
}

#[test]
fn test_expired_cookie_is_not_loaded() {
    let dir = TempDir::new().unwrap();
    let mut storage = storage_in(&dir);
    storage.save_at(&queries(&["stale"]), fixed_now()).unwrap();

    let later = fixed_now() + Duration::days(60);
    assert_eq!(storage.load_at(later).unwrap(), None);
}

#[test]
fn test_set_cookie_string_format() {
    let storage = CookieStorage::new(None, None);
    let cookie = storage
        .build_cookie(&queries(&["a", "b"]), fixed_now())
        .unwrap();

    assert_eq!(
        cookie.set_cookie_string(),
        r#"recent_queries=["a","b"]; expires=Thu, 29 Feb 2024 12:30:00 GMT; path=/"#
    );
}

#[test]
fn test_configured_domain_is_added() {
    let storage = CookieStorage::new(None, Some(".example.com".to_string()));
    let cookie = storage.build_cookie(&queries(&["a"]), fixed_now()).unwrap();

    assert!(cookie.set_cookie_string().ends_with("; path=/; domain=.example.com"));
}

#[test]
fn test_parse_cookie_among_others() {
    let header = r#"session=abc123; recent_queries=["x","y"]; theme=dark"#;
    assert_eq!(
        parse_recent_queries_cookie(header),
        Some(queries(&["x", "y"]))
    );
}

#[test]
fn test_parse_ignores_similarly_named_cookie() {
    let header = r#"old_recent_queries=["nope"]"#;
    assert_eq!(parse_recent_queries_cookie(header), None);
}

#[test]
fn test_parse_invalid_json_is_none() {
    assert_eq!(parse_recent_queries_cookie("recent_queries={broken"), None);
    assert_eq!(parse_recent_queries_cookie(r#"recent_queries={"a":1}"#), None);
}

#[test]
fn test_parse_empty_header_is_none() {
    assert_eq!(parse_recent_queries_cookie(""), None);
}

#[test]
fn test_corrupt_jar_is_error_on_read_and_replaced_on_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cookies.json");
    fs::write(&path, "not json").unwrap();
    let mut storage = CookieStorage::new(Some(path), None);

    assert!(storage.load_at(fixed_now()).is_err());

    storage.save_at(&queries(&["fresh"]), fixed_now()).unwrap();
    assert_eq!(
        storage.load_at(fixed_now()).unwrap(),
        Some(queries(&["fresh"]))
    );
}

#[test]
fn test_jar_keeps_unrelated_cookies() {
    let dir = TempDir::new().unwrap();
    let mut jar = CookieJar::new(Some(dir.path().join("cookies.json")));
    jar.set(
        StoredCookie {
            name: "session".to_string(),
            value: "abc".to_string(),
            expires: None,
            path: "/".to_string(),
            domain: None,
        },
        fixed_now(),
    )
    .unwrap();

    let mut storage = CookieStorage::new(jar.path().cloned(), None);
    storage.save_at(&queries(&["q"]), fixed_now()).unwrap();

    let header = storage.jar().header(fixed_now()).unwrap();
    assert_eq!(header, r#"session=abc; recent_queries=["q"]"#);
}

#[test]
fn test_save_without_path_fails() {
    let mut storage = CookieStorage::new(None, None);
    let result = storage.save_at(&queries(&["a"]), fixed_now());
    assert!(matches!(result, Err(RecentQueriesError::NoDataDir)));
}
