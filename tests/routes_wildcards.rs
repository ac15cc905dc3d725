use bunner_route_tree::{
    MatchKind, RouteDefinition, RouteTree, RouterOptions, SPLAT_ALIAS_KEY, SPLAT_KEY, build_tree,
};

fn tree(routes: &[(&str, &str)]) -> RouteTree {
    build_tree(
        routes
            .iter()
            .map(|(id, template)| RouteDefinition::new(*id, *template)),
        &RouterOptions::default(),
    )
    .expect("tree should build")
}

#[test]
fn tree_when_wildcard_matches_then_remainder_keeps_slashes() {
    let tree = tree(&[("files", "/files/{$}")]);

    let found = tree
        .match_path("/files/a/b/c", false)
        .expect("wildcard should match");

    assert_eq!(found.kind, MatchKind::Wildcard);
    assert_eq!(found.param(SPLAT_KEY), Some("a/b/c"));
    assert_eq!(found.param(SPLAT_ALIAS_KEY), Some("a/b/c"));
    assert_eq!(found.params.len(), 2);
}

#[test]
fn tree_when_bare_dollar_used_then_it_behaves_as_wildcard() {
    let tree = tree(&[("files", "/files/$")]);

    let found = tree.match_path("/files/x/y", false).expect("should match");
    assert_eq!(found.splat(), Some("x/y"));
}

#[test]
fn tree_when_remainder_is_absent_then_wildcard_captures_empty_string() {
    let tree = tree(&[("files", "/files/$")]);

    let found = tree.match_path("/files", false).expect("should match");
    assert_eq!(found.kind, MatchKind::Wildcard);
    assert_eq!(found.splat(), Some(""));
}

#[test]
fn tree_when_param_and_wildcard_compete_then_param_wins_for_one_part() {
    let tree = tree(&[("splat", "/files/$"), ("file", "/files/$id")]);

    let single = tree.match_path("/files/x", false).expect("should match");
    assert_eq!(single.route_id, "file");
    assert_eq!(single.param("id"), Some("x"));

    let nested = tree.match_path("/files/x/y", false).expect("should match");
    assert_eq!(nested.route_id, "splat");
    assert_eq!(nested.splat(), Some("x/y"));
}

#[test]
fn tree_when_literal_and_root_wildcard_compete_then_literal_wins() {
    let tree = tree(&[("catch_all", "/$"), ("about", "/about")]);

    let found = tree.match_path("/about", false).expect("should match");
    assert_eq!(found.route_id, "about");

    let found = tree
        .match_path("/anything/here", false)
        .expect("should match");
    assert_eq!(found.route_id, "catch_all");
    assert_eq!(found.splat(), Some("anything/here"));
}

#[test]
fn tree_when_wildcard_has_prefix_and_suffix_then_they_are_stripped() {
    let tree = tree(&[("asset", "/assets/v{$}.js")]);

    let found = tree
        .match_path("/assets/v1/app.js", false)
        .expect("affixed wildcard should match");
    assert_eq!(found.splat(), Some("1/app"));

    assert!(tree.match_path("/assets/main.css", false).is_none());
    assert!(tree.match_path("/assets", false).is_none());
}

#[test]
fn tree_when_remainder_is_encoded_then_splat_is_decoded() {
    let tree = tree(&[("files", "/files/$")]);

    let found = tree
        .match_path("/files/my%20docs/a.txt", false)
        .expect("should match");
    assert_eq!(found.splat(), Some("my docs/a.txt"));
}

#[test]
fn tree_when_wildcard_follows_param_then_both_are_captured() {
    let tree = tree(&[("blob", "/repos/$repo/blob/$")]);

    let found = tree
        .match_path("/repos/core/blob/src/lib.rs", false)
        .expect("should match");
    assert_eq!(found.param("repo"), Some("core"));
    assert_eq!(found.splat(), Some("src/lib.rs"));
}

#[test]
fn tree_when_text_follows_wildcard_then_it_is_ignored_for_structure() {
    let tree = tree(&[("files", "/files/$/ignored")]);

    let found = tree.match_path("/files/a/b", false).expect("should match");
    assert_eq!(found.splat(), Some("a/b"));
}

#[test]
fn tree_when_literal_and_trailing_wildcard_end_at_same_path_then_literal_wins() {
    let tree = tree(&[("files", "/files"), ("splat", "/files/$")]);

    let found = tree.match_path("/files", false).expect("should match");
    assert_eq!(found.route_id, "files");
    assert_eq!(found.kind, MatchKind::Exact);
    assert!(found.splat().is_none());

    let found = tree.match_path("/files/a", false).expect("should match");
    assert_eq!(found.route_id, "splat");
    assert_eq!(found.splat(), Some("a"));
}

#[test]
fn tree_when_param_and_deeper_wildcard_end_at_same_path_then_param_wins() {
    let tree = tree(&[("post", "/a/$x"), ("rest", "/a/$x/$")]);

    let found = tree.match_path("/a/b", false).expect("should match");
    assert_eq!(found.route_id, "post");
    assert_eq!(found.kind, MatchKind::Exact);
    assert_eq!(found.param("x"), Some("b"));
}

#[test]
fn tree_when_root_param_competes_with_nested_wildcard_then_param_wins() {
    let tree = tree(&[("id", "/$id"), ("aw", "/a/$")]);

    let found = tree.match_path("/a", false).expect("should match");
    assert_eq!(found.route_id, "id");
    assert_eq!(found.kind, MatchKind::Exact);
    assert_eq!(found.param("id"), Some("a"));

    let found = tree.match_path("/a/b/c", false).expect("should match");
    assert_eq!(found.route_id, "aw");
    assert_eq!(found.splat(), Some("b/c"));
}
