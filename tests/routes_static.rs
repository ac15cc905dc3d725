use bunner_route_tree::{MatchKind, RouteDefinition, Router};

fn sealed(routes: &[(&str, &str)]) -> Router {
    let router = Router::new(None);
    router
        .add_bulk(
            routes
                .iter()
                .map(|(id, template)| RouteDefinition::new(*id, *template)),
        )
        .expect("routes should register");
    router.seal().expect("router should seal");
    router
}

#[test]
fn router_when_literal_route_registered_then_matches_exact_path() {
    let router = sealed(&[("about", "/about"), ("list", "/posts/list")]);

    let found = router
        .find("/posts/list")
        .expect("lookup should run")
        .expect("literal route should match");

    assert_eq!(found.route_id, "list");
    assert_eq!(found.template, "/posts/list");
    assert_eq!(found.kind, MatchKind::Exact);
    assert!(found.params.is_empty());
}

#[test]
fn router_when_case_insensitive_by_default_then_literal_ignores_case() {
    let router = sealed(&[("about", "/About")]);

    for path in ["/about", "/ABOUT", "/About"] {
        let found = router.find(path).expect("lookup should run");
        assert_eq!(found.map(|m| m.route_id), Some("about".to_string()), "{path}");
    }
}

#[test]
fn router_when_route_is_case_sensitive_then_other_casing_misses() {
    let router = Router::new(None);
    router
        .add(RouteDefinition::new("about", "/About").case_sensitive(true))
        .expect("route should register");
    router.seal().expect("router should seal");

    assert!(router.find("/about").expect("lookup should run").is_none());
    assert!(router.find("/About").expect("lookup should run").is_some());
}

#[test]
fn router_when_root_index_registered_then_empty_and_slash_paths_match() {
    let router = sealed(&[("root", "/")]);

    for path in ["/", ""] {
        let found = router
            .find(path)
            .expect("lookup should run")
            .expect("root index should match");
        assert_eq!(found.route_id, "root");
    }
}

#[test]
fn router_when_path_lacks_leading_slash_then_it_is_rooted() {
    let router = sealed(&[("about", "/about")]);

    let found = router.find("about").expect("lookup should run");
    assert_eq!(found.map(|m| m.route_id), Some("about".to_string()));
}

#[test]
fn router_when_template_lacks_leading_slash_then_it_is_rooted() {
    let router = sealed(&[("about", "about")]);

    let found = router
        .find("/about")
        .expect("lookup should run")
        .expect("rooted template should match");
    assert_eq!(found.template, "/about");
}

#[test]
fn router_when_index_route_registered_then_trailing_slash_selects_it() {
    let router = sealed(&[("layout", "/posts"), ("index", "/posts/")]);

    let found = router
        .find("/posts/")
        .expect("lookup should run")
        .expect("index route should match");
    assert_eq!(found.route_id, "index");
}

#[test]
fn router_when_only_plain_route_exists_then_trailing_slash_still_matches() {
    let router = sealed(&[("posts", "/posts")]);

    let found = router.find("/posts/").expect("lookup should run");
    assert_eq!(found.map(|m| m.route_id), Some("posts".to_string()));
}

#[test]
fn router_when_dynamic_segment_missing_then_returns_none() {
    let router = sealed(&[("item", "/a/$x")]);

    assert!(router.find("/a").expect("lookup should run").is_none());
}

#[test]
fn router_when_path_is_longer_than_every_route_then_returns_none() {
    let router = sealed(&[("abc", "/a/b/c"), ("ab", "/a/b")]);

    assert!(router.find("/a/b/c/d").expect("lookup should run").is_none());
    assert!(router.find("/a").expect("lookup should run").is_none());
}

#[test]
fn router_when_template_is_deeper_than_depth_counter_then_it_still_matches() {
    let prefix = "/a".repeat(70_000);
    let template = format!("{prefix}/$id");
    let router = sealed(&[("deep", template.as_str())]);

    let found = router
        .find(&format!("{prefix}/x"))
        .expect("lookup should run")
        .expect("deep route should match");

    assert_eq!(found.route_id, "deep");
    assert_eq!(found.param("id"), Some("x"));
}
