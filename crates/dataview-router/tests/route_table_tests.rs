//! Integration tests for the application route table
//!
//! Covers:
//! - Name uniqueness and lookup
//! - Literal path resolution for every declared route
//! - Optional parameters present and absent
//! - Layout-only matches and unmatched paths
//! - Construction errors
//! - URL generation

use dataview_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashSet;

fn table() -> std::sync::Arc<RouteTable<Page>> {
    app_routes().expect("application routes are valid")
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_names_are_unique_across_nesting() {
    let table = table();
    let names: Vec<&str> = table.names().collect();
    let unique: HashSet<&str> = names.iter().copied().collect();

    assert_eq!(names.len(), 10);
    assert_eq!(unique.len(), names.len());
}

#[rstest]
#[case("Login", "/login", Page::Login, 0)]
#[case("Register", "/register", Page::Register, 0)]
#[case("ConfirmEmail", "/confirmemail", Page::ConfirmEmail, 0)]
#[case("ForgetPassword1", "/forgetpassword1", Page::ForgetPassword1, 0)]
#[case("ForgetPassword2", "/forgetpassword2", Page::ForgetPassword2, 0)]
#[case("ForgetPassword3", "/forgetpassword3", Page::ForgetPassword3, 0)]
#[case("FileUpload", "/mainpage/upload", Page::FileUpload, 1)]
#[case("EDA", "/mainpage/DataAnalysis/EDA", Page::Eda, 1)]
#[case("Clean", "/mainpage/DataAnalysis/Clean/:id?", Page::Clean, 1)]
#[case("Visualize", "/mainpage/DataAnalysis/Visualize/:id?", Page::Visualize, 1)]
fn test_by_name(#[case] name: &str, #[case] pattern: &str, #[case] page: Page, #[case] depth: usize) {
    let table = table();
    let entry = table.by_name(name).unwrap();
    assert_eq!(entry.pattern, pattern);
    assert_eq!(*entry.component, page);
    assert_eq!(entry.depth, depth);
    assert_eq!(table.entries().filter(|e| e.name == Some(name)).count(), 1);
}

#[test]
fn test_shell_is_unnamed_layout() {
    let table = table();
    let shell = table.entries().find(|e| e.pattern == "/mainpage").unwrap();
    assert_eq!(shell.name, None);
    assert!(shell.is_layout);
    assert_eq!(*shell.component, Page::MainPage);
    assert!(table.by_name("MainPage").is_none());
}

// ============================================================================
// Resolution
// ============================================================================

#[rstest]
#[case("/login", vec![Page::Login])]
#[case("/register", vec![Page::Register])]
#[case("/confirmemail", vec![Page::ConfirmEmail])]
#[case("/forgetpassword1", vec![Page::ForgetPassword1])]
#[case("/forgetpassword2", vec![Page::ForgetPassword2])]
#[case("/forgetpassword3", vec![Page::ForgetPassword3])]
#[case("/mainpage", vec![Page::MainPage])]
#[case("/mainpage/upload", vec![Page::MainPage, Page::FileUpload])]
#[case("/mainpage/DataAnalysis/EDA", vec![Page::MainPage, Page::Eda])]
#[case("/mainpage/DataAnalysis/Clean", vec![Page::MainPage, Page::Clean])]
#[case("/mainpage/DataAnalysis/Visualize", vec![Page::MainPage, Page::Visualize])]
fn test_literal_paths_activate_listed_route(#[case] path: &str, #[case] chain: Vec<Page>) {
    let m = table().resolve(path).unwrap();
    let pages: Vec<Page> = m.matched.iter().map(|r| r.component).collect();
    assert_eq!(pages, chain);
    assert_eq!(m.path, path);
}

#[test]
fn test_clean_without_id() {
    let m = table().resolve("/mainpage/DataAnalysis/Clean").unwrap();
    assert_eq!(m.name(), Some("Clean"));
    assert_eq!(m.param("id"), None);
    assert!(!m.params.contains("id"));
}

#[test]
fn test_clean_with_id() {
    let m = table().resolve("/mainpage/DataAnalysis/Clean/42").unwrap();
    assert_eq!(m.name(), Some("Clean"));
    assert_eq!(m.param("id"), Some("42"));
    assert_eq!(m.layouts().len(), 1);
    assert_eq!(m.layouts()[0].component, Page::MainPage);
}

#[test]
fn test_visualize_with_encoded_id() {
    let m = table().resolve("/mainpage/DataAnalysis/Visualize/sales%202024.csv").unwrap();
    assert_eq!(m.name(), Some("Visualize"));
    assert_eq!(m.param("id"), Some("sales 2024.csv"));
}

#[test]
fn test_optional_param_never_takes_two_segments() {
    assert!(table().resolve("/mainpage/DataAnalysis/Clean/42/43").is_none());
}

#[test]
fn test_mainpage_alone_is_layout_only() {
    let m = table().resolve("/mainpage").unwrap();
    assert!(m.is_layout_only());
    assert_eq!(m.matched.len(), 1);
    assert_eq!(m.name(), None);
    assert!(m.layouts().is_empty());
}

#[rstest]
#[case("/does-not-exist")]
#[case("/")]
#[case("/mainpage/bogus")]
#[case("/mainpage/DataAnalysis")]
#[case("/login/extra")]
#[case("/upload")]
fn test_undeclared_paths_do_not_match(#[case] path: &str) {
    assert!(table().resolve(path).is_none());
}

#[rstest]
#[case("/login/")]
#[case("//login")]
#[case("\\login")]
#[case("/LOGIN")]
#[case("/Login?next=%2Fmainpage")]
fn test_path_variants_resolve(#[case] path: &str) {
    let m = table().resolve(path).unwrap();
    assert_eq!(m.name(), Some("Login"));
}

#[test]
fn test_query_and_hash_are_kept() {
    let m = table()
        .resolve("/mainpage/DataAnalysis/EDA?column=price&chart=hist#summary")
        .unwrap();
    assert_eq!(m.name(), Some("EDA"));
    assert_eq!(m.query.get("column"), Some("price"));
    assert_eq!(m.query.get("chart"), Some("hist"));
    assert_eq!(m.hash.as_deref(), Some("summary"));
    assert!(m.params.is_empty());
}

#[test]
fn test_case_sensitive_copy_of_table() {
    let strict = RouteTable::new(app_route_tree()).unwrap();
    assert!(!strict.is_case_insensitive());
    assert!(strict.resolve("/mainpage/DataAnalysis/EDA").is_some());
    assert!(strict.resolve("/mainpage/dataanalysis/eda").is_none());
}

#[test]
fn test_match_serializes_to_json() {
    let m = table().resolve("/mainpage/DataAnalysis/Clean/7").unwrap();
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["params"]["id"], "7");
    assert_eq!(json["matched"][0]["component"], "MainPage");
    assert_eq!(json["matched"][1]["name"], "Clean");
}

// ============================================================================
// URL generation
// ============================================================================

#[rstest]
#[case("Clean", Params::new(), "/mainpage/DataAnalysis/Clean")]
#[case("Clean", Params::new().with("id", "42"), "/mainpage/DataAnalysis/Clean/42")]
#[case("Visualize", Params::new().with("id", "a/b"), "/mainpage/DataAnalysis/Visualize/a%2Fb")]
#[case("Login", Params::new().with("unused", "x"), "/login")]
fn test_url_for(#[case] name: &str, #[case] params: Params, #[case] expected: &str) {
    assert_eq!(table().url_for(name, &params).unwrap(), expected);
}

#[test]
fn test_url_for_round_trips_through_resolve() {
    let table = table();
    for name in table.names() {
        let url = table.url_for(name, &Params::new().with("id", "3")).unwrap();
        let m = table.resolve(&url).unwrap();
        assert_eq!(m.name(), Some(name));
    }
}

#[test]
fn test_url_for_unknown_name() {
    let err = table().url_for("Dashboard", &Params::new()).unwrap_err();
    assert_eq!(err, RouteError::UnknownName("Dashboard".to_string()));
}

#[test]
fn test_resolve_named_filters_params() {
    let m = table()
        .resolve_named("Clean", &Params::new().with("id", "9").with("tab", "x"))
        .unwrap();
    assert_eq!(m.path, "/mainpage/DataAnalysis/Clean/9");
    assert_eq!(m.param("id"), Some("9"));
    assert_eq!(m.param("tab"), None);
    assert_eq!(m.matched.len(), 2);
}

#[rstest]
#[case(Params::new())]
#[case(Params::new().with("id", ""))]
#[case(Params::new().with("id", "42"))]
#[case(Params::new().with("id", "a b"))]
fn test_resolve_named_agrees_with_resolving_url(#[case] params: Params) {
    let table = table();
    let named = table.resolve_named("Clean", &params).unwrap();
    let via_url = table.resolve(&table.url_for("Clean", &params).unwrap()).unwrap();
    assert_eq!(named, via_url);
}

#[test]
fn test_resolve_named_empty_optional_is_absent() {
    let m = table().resolve_named("Clean", &Params::new().with("id", "")).unwrap();
    assert_eq!(m.path, "/mainpage/DataAnalysis/Clean");
    assert!(!m.params.contains("id"));
}

// ============================================================================
// Construction errors
// ============================================================================

#[test]
fn test_duplicate_name_across_nesting_rejected() {
    let err = RouteTable::new(vec![
        Route::new("/login", "LoginPage").with_name("Login"),
        Route::new("/mainpage", "MainPage")
            .with_child(Route::new("login", "InlineLogin").with_name("Login")),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        RouteError::DuplicateName {
            name: "Login".to_string(),
            first: "/login".to_string(),
            second: "/mainpage/login".to_string(),
        }
    );
}

#[test]
fn test_relative_top_level_rejected() {
    let err = RouteTable::new(vec![Route::new("login", ())]).unwrap_err();
    assert_eq!(
        err,
        RouteError::RelativeTopLevel {
            path: "login".to_string()
        }
    );
}

#[test]
fn test_absolute_child_rejected() {
    let err = RouteTable::new(vec![
        Route::new("/mainpage", ()).with_child(Route::new("/upload", ()))
    ])
    .unwrap_err();
    assert_eq!(
        err,
        RouteError::AbsoluteChild {
            parent: "/mainpage".to_string(),
            path: "/upload".to_string()
        }
    );
}

#[test]
fn test_duplicate_param_in_chain_rejected() {
    let err = RouteTable::new(vec![
        Route::new("/files/:id", ()).with_child(Route::new("clean/:id?", ()))
    ])
    .unwrap_err();
    assert!(matches!(err, RouteError::DuplicateParam { ref param, .. } if param == "id"));
}

#[test]
fn test_malformed_segment_rejected() {
    let err = RouteTable::new(vec![Route::new("/files/:file-id", ())]).unwrap_err();
    assert!(matches!(err, RouteError::InvalidSegment { .. }));
}

// ============================================================================
// Priority
// ============================================================================

#[test]
fn test_static_route_wins_over_earlier_param_route() {
    let table = RouteTable::new(vec![
        Route::new("/files/:id", "FileDetail").with_name("FileDetail"),
        Route::new("/files/new", "NewFile").with_name("NewFile"),
    ])
    .unwrap();

    assert_eq!(table.resolve("/files/new").unwrap().name(), Some("NewFile"));
    assert_eq!(table.resolve("/files/12").unwrap().name(), Some("FileDetail"));
}

#[test]
fn test_declaration_order_breaks_ties() {
    let table = RouteTable::new(vec![
        Route::new("/a/:x", "First").with_name("First"),
        Route::new("/a/:y", "Second").with_name("Second"),
    ])
    .unwrap();

    assert_eq!(table.resolve("/a/1").unwrap().name(), Some("First"));
}

#[test]
fn test_map_components() {
    let names = table().map_components(|page| page.component_name().to_string());
    let m = names.resolve("/mainpage/upload").unwrap();
    let components: Vec<&str> = m.matched.iter().map(|r| r.component.as_str()).collect();
    assert_eq!(components, vec!["MainPage", "FileUploadPage"]);
    assert!(names.is_case_insensitive());
}
