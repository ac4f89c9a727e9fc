//! Forward matching across the public API.

use wayline_core::{Method, Request};
use wayline_router::{
    IntegerMatcher, PathMatcher, Route, RouteSet, TextMatcher, TokenMatcher, Value,
};

fn request(method: Method, url: &str) -> Request {
    Request::new(method, url).expect("test URL parses")
}

#[test]
fn literal_path_route_returns_its_handle() {
    let route: Route<i32> = Route::builder()
        .path(["abc", "def"])
        .handle(123)
        .build()
        .unwrap();

    let result = route
        .match_request(&request(Method::Get, "http://example.com/abc/def"))
        .expect("route matches");
    assert!(result.vars().is_empty());
    assert_eq!(result.handle(), Some(&123));
}

#[test]
fn one_wrong_literal_fails_the_whole_route() {
    let route: Route = Route::builder().path(["abc", "def"]).build().unwrap();

    assert!(
        route
            .match_request(&request(Method::Get, "http://example.com/abc/xyz"))
            .is_none()
    );
    assert!(
        route
            .match_request(&request(Method::Get, "http://example.com/xyz/def"))
            .is_none()
    );
}

#[test]
fn named_integer_segment_extracts_its_value() {
    let segments: Vec<TokenMatcher> = vec![
        "abc".into(),
        "def".into(),
        IntegerMatcher::new().named("Test").into(),
        "end".into(),
    ];
    let route = Route::builder()
        .path(segments)
        .handle("Hello World")
        .build()
        .unwrap();

    let result = route
        .match_request(&request(Method::Get, "http://example.com/abc/def/234/end"))
        .expect("route matches");
    assert_eq!(result.var("Test"), Some(&Value::Int(234)));
    assert_eq!(result.handle(), Some(&"Hello World"));

    assert!(
        route
            .match_request(&request(
                Method::Get,
                "http://example.com/abc/def/notanumber/end"
            ))
            .is_none()
    );
}

#[test]
fn method_matcher_distinguishes_methods() {
    let route = Route::builder()
        .path(["abc", "def"])
        .method(Method::Post)
        .handle("handle")
        .build()
        .unwrap();

    let result = route
        .match_request(&request(Method::Post, "http://example.com/abc/def"))
        .expect("POST matches");
    assert_eq!(result.handle(), Some(&"handle"));

    assert!(
        route
            .match_request(&request(Method::Get, "http://example.com/abc/def"))
            .is_none()
    );
}

#[test]
fn scheme_and_host_matchers_check_their_dimensions() {
    let route: Route = Route::builder()
        .scheme("https")
        .host(["api", "example", "com"])
        .path(["v1"])
        .build()
        .unwrap();

    assert!(
        route
            .match_request(&request(Method::Get, "https://api.example.com/v1"))
            .is_some()
    );
    assert!(
        route
            .match_request(&request(Method::Get, "http://api.example.com/v1"))
            .is_none()
    );
    assert!(
        route
            .match_request(&request(Method::Get, "https://www.example.com/v1"))
            .is_none()
    );
}

#[test]
fn prefix_matching_is_the_default_in_both_directions() {
    let shorter: Route = Route::builder().path(["api"]).build().unwrap();
    assert!(
        shorter
            .match_request(&request(Method::Get, "http://example.com/api/v1/users"))
            .is_some()
    );

    let longer: Route = Route::builder().path(["api", "v1"]).build().unwrap();
    assert!(
        longer
            .match_request(&request(Method::Get, "http://example.com/api"))
            .is_some()
    );
}

#[test]
fn exact_length_opt_in_rejects_length_mismatches() {
    let route: Route = Route::builder()
        .matcher(PathMatcher::new(["api", "v1"]).exact_length(true))
        .build()
        .unwrap();

    assert!(
        route
            .match_request(&request(Method::Get, "http://example.com/api/v1"))
            .is_some()
    );
    assert!(
        route
            .match_request(&request(Method::Get, "http://example.com/api/v1/users"))
            .is_none()
    );
    assert!(
        route
            .match_request(&request(Method::Get, "http://example.com/api"))
            .is_none()
    );
}

#[test]
fn pattern_and_typed_definitions_build_the_same_route() {
    let from_pattern: Route = Route::builder()
        .path_pattern("/users/{id:int}")
        .build()
        .unwrap();

    let segments: Vec<TokenMatcher> = vec![
        "users".into(),
        IntegerMatcher::new().named("id").into(),
    ];
    let typed: Route = Route::builder().path(segments).build().unwrap();

    assert_eq!(from_pattern.matchers(), typed.matchers());

    let req = request(Method::Get, "http://example.com/users/42");
    let a = from_pattern.match_request(&req).unwrap();
    let b = typed.match_request(&req).unwrap();
    assert_eq!(a.vars(), b.vars());
    assert_eq!(a.var("id"), Some(&Value::Int(42)));
}

#[test]
fn unnamed_matchers_extract_nothing() {
    let segments: Vec<TokenMatcher> = vec![IntegerMatcher::new().into()];
    let route: Route = Route::builder().path(segments).build().unwrap();

    let result = route
        .match_request(&request(Method::Get, "http://example.com/5"))
        .expect("integer segment matches");
    assert!(result.vars().is_empty());
}

#[test]
fn shared_variable_names_merge_last_write_wins() {
    let segments: Vec<TokenMatcher> = vec![
        TextMatcher::new().named("x").into(),
        TextMatcher::new().named("x").into(),
    ];
    let route: Route = Route::builder().path(segments).build().unwrap();

    let result = route
        .match_request(&request(Method::Get, "http://example.com/first/second"))
        .unwrap();
    assert_eq!(result.var("x"), Some(&Value::Str("second".to_string())));
}

#[test]
fn route_set_scans_in_registration_order() {
    let catch_all: Route<&str> = Route::builder()
        .path([TokenMatcher::from(TextMatcher::new())])
        .handle("catch-all")
        .build()
        .unwrap();
    let specific: Route<&str> = Route::builder()
        .path(["abc"])
        .handle("specific")
        .build()
        .unwrap();

    let mut broad_first = RouteSet::new();
    broad_first.add(catch_all.clone());
    broad_first.add(specific.clone());

    let mut specific_first = RouteSet::new();
    specific_first.add(specific);
    specific_first.add(catch_all);

    let req = request(Method::Get, "http://example.com/abc");
    assert_eq!(
        broad_first.match_request(&req).unwrap().handle(),
        Some(&"catch-all")
    );
    assert_eq!(
        specific_first.match_request(&req).unwrap().handle(),
        Some(&"specific")
    );
}

#[test]
fn route_set_returns_none_when_nothing_matches() {
    let mut routes: RouteSet<u8> = RouteSet::new();
    routes.add(Route::builder().path(["only"]).handle(1).build().unwrap());

    assert!(
        routes
            .match_request(&request(Method::Get, "http://example.com/other"))
            .is_none()
    );
}

#[test]
fn root_pattern_matches_only_the_root_path() {
    let route: Route = Route::builder().path_pattern("/").build().unwrap();

    assert!(
        route
            .match_request(&request(Method::Get, "http://example.com/"))
            .is_some()
    );
    assert!(
        route
            .match_request(&request(Method::Get, "http://example.com/abc"))
            .is_none()
    );
}
