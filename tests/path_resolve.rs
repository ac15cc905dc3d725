use bunner_route_tree::{Router, TrailingSlash, resolve_path};

#[test]
fn resolve_when_target_is_relative_then_it_extends_base() {
    assert_eq!(resolve_path("/docs/guide", "intro", TrailingSlash::Never), "/docs/guide/intro");
    assert_eq!(resolve_path("/docs/guide/", "intro", TrailingSlash::Never), "/docs/guide/intro");
}

#[test]
fn resolve_when_target_walks_up_then_base_segments_are_dropped() {
    assert_eq!(resolve_path("/a/b/c", "../d", TrailingSlash::Never), "/a/b/d");
    assert_eq!(resolve_path("/a/b/c", "./../../e/./f", TrailingSlash::Never), "/a/e/f");
}

#[test]
fn resolve_when_target_is_absolute_then_base_is_ignored() {
    assert_eq!(resolve_path("/a/b", "/c", TrailingSlash::Never), "/c");
}

#[test]
fn resolve_when_target_is_empty_then_result_is_root() {
    assert_eq!(resolve_path("/a/b", "", TrailingSlash::Never), "/");
    assert_eq!(resolve_path("/a/b", "", TrailingSlash::Always), "/");
}

#[test]
fn resolve_when_policy_varies_then_trailing_slash_follows_it() {
    assert_eq!(resolve_path("/a", "b/", TrailingSlash::Never), "/a/b");
    assert_eq!(resolve_path("/a", "b", TrailingSlash::Always), "/a/b/");
    assert_eq!(resolve_path("/a", "b/", TrailingSlash::Preserve), "/a/b/");
}

#[test]
fn resolve_when_segments_are_templates_then_canonical_form_is_used() {
    assert_eq!(
        resolve_path("/posts/{$postId}", "edit", TrailingSlash::Never),
        "/posts/$postId/edit"
    );
    assert_eq!(
        resolve_path("/posts/pre{$id}", "..", TrailingSlash::Never),
        "/posts"
    );
}

#[test]
fn router_when_resolving_same_pair_twice_then_results_match() {
    let router = Router::new(None);

    let first = router.resolve_path("/a/b", "../c");
    let second = router.resolve_path("/a/b", "../c");

    assert_eq!(first, "/a/c");
    assert_eq!(first, second);
}

#[test]
fn router_when_target_is_absolute_then_base_does_not_affect_result() {
    let router = Router::new(None);

    assert_eq!(router.resolve_path("/a", "/x/y"), "/x/y");
    assert_eq!(router.resolve_path("/b", "/x/y"), "/x/y");
}

#[test]
fn router_when_policy_overridden_then_cached_results_stay_separate() {
    let router = Router::new(None);

    assert_eq!(router.resolve_path_with("/a", "b", TrailingSlash::Always), "/a/b/");
    assert_eq!(router.resolve_path_with("/a", "b", TrailingSlash::Never), "/a/b");
    assert_eq!(router.resolve_path("/a", "b"), "/a/b");
}
