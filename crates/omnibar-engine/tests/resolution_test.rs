use omnibar_engine::annotation::AnnotationTree;
use omnibar_engine::protocol::{
    Action, BookmarkRequest, ClearBrowsingDataRequest, GoToWebsiteRequest, NewTabRequest,
    NewWindowRequest, OpenDownloadsRequest, SearchRequest,
};
use omnibar_engine::resolution::{ResolutionEngine, SiteTable, resolve_annotations};
use serde_json::{Value, json};

fn tree(value: Value) -> AnnotationTree {
    serde_json::from_value(value).expect("valid annotation tree")
}

fn resolve(value: Value) -> Vec<Action> {
    resolve_annotations(&tree(value)).into_vec()
}

fn go_to(url: &str) -> Action {
    Action::GoToWebsite(GoToWebsiteRequest::to(url))
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_no_trigger_keys_yields_nothing() {
    let actions = resolve(json!({
        "_text": "what a lovely day",
        "entities": {
            "number": [{"value": 3}],
            "message_body": [{"value": "lovely day"}],
            "duration": [{"value": 1, "unit": "day"}]
        }
    }));
    assert!(actions.is_empty());
}

#[test]
fn test_empty_tree_yields_nothing() {
    assert!(resolve(json!({})).is_empty());
    assert!(resolve(json!({"_text": "", "entities": {}})).is_empty());
}

#[test]
fn test_actions_follow_resolver_order() {
    let actions = resolve(json!({
        "_text": "search for rust, open downloads and a new tab",
        "entities": {
            "command_search": [{"value": "search", "entities": {"message_body": [{"value": "rust"}]}}],
            "command_open_downloads": [{"value": "open downloads"}],
            "command_new_tab": [{"value": "new tab"}]
        }
    }));
    let names: Vec<&str> = actions.iter().map(Action::name).collect();
    assert_eq!(names, vec!["new_tab", "open_downloads", "search"]);
}

// ============================================================================
// New tab / new window
// ============================================================================

#[test]
fn test_new_tab_defaults_to_one() {
    let actions = resolve(json!({
        "_text": "open a new tab",
        "entities": {"command_new_tab": [{"value": "open a new tab"}]}
    }));
    assert_eq!(actions, vec![Action::NewTab(NewTabRequest { num_tabs: 1 })]);
}

#[test]
fn test_new_tab_survives_malformed_scope() {
    let actions = resolve(json!({
        "_text": "open a new tab",
        "entities": {"command_new_tab": [{"value": "new tab", "entities": []}]}
    }));
    assert_eq!(actions, vec![Action::NewTab(NewTabRequest { num_tabs: 1 })]);
}

#[test]
fn test_bad_mention_does_not_hide_good_one() {
    let actions = resolve(json!({
        "_text": "open a new tab",
        "entities": {"command_new_tab": [{"value": "a"}, "junk"]}
    }));
    assert_eq!(actions, vec![Action::NewTab(NewTabRequest { num_tabs: 1 })]);
}

#[test]
fn test_null_entities_resolve_to_nothing() {
    assert!(resolve(json!({"_text": "hello", "entities": null})).is_empty());
}

#[test]
fn test_new_tab_uses_nested_number() {
    let actions = resolve(json!({
        "_text": "open three new tabs",
        "entities": {
            "command_new_tab": [{"value": "open new tabs", "entities": {"number": [{"value": 3}]}}]
        }
    }));
    assert_eq!(actions, vec![Action::NewTab(NewTabRequest { num_tabs: 3 })]);
}

#[test]
fn test_new_tab_ignores_message_scoped_number() {
    let actions = resolve(json!({
        "_text": "open a new tab 5",
        "entities": {
            "command_new_tab": [{"value": "open a new tab"}],
            "number": [{"value": 5}]
        }
    }));
    assert_eq!(actions, vec![Action::NewTab(NewTabRequest { num_tabs: 1 })]);
}

#[test]
fn test_one_tab_action_per_mention() {
    let actions = resolve(json!({
        "_text": "new tab and another 2 new tabs",
        "entities": {
            "command_new_tab": [
                {"value": "new tab"},
                {"value": "new tabs", "entities": {"number": [{"value": 2}]}}
            ]
        }
    }));
    assert_eq!(
        actions,
        vec![
            Action::NewTab(NewTabRequest { num_tabs: 1 }),
            Action::NewTab(NewTabRequest { num_tabs: 2 })
        ]
    );
}

#[test]
fn test_new_window_incognito() {
    let actions = resolve(json!({
        "_text": "open a new incognito window",
        "entities": {"command_new_window": [{"value": "new window"}]}
    }));
    assert_eq!(
        actions,
        vec![Action::NewWindow(NewWindowRequest {
            num_windows: 1,
            incognito: true
        })]
    );
}

#[test]
fn test_new_window_regular() {
    let actions = resolve(json!({
        "_text": "open a new window",
        "entities": {
            "command_new_window": [{"value": "new window", "entities": {"number": [{"value": 2}]}}]
        }
    }));
    assert_eq!(
        actions,
        vec![Action::NewWindow(NewWindowRequest {
            num_windows: 2,
            incognito: false
        })]
    );
}

#[test]
fn test_new_window_private_word_any_case() {
    let actions = resolve(json!({
        "_text": "Open a Private window",
        "entities": {"command_new_window": [{"value": "window"}]}
    }));
    assert!(matches!(
        &actions[0],
        Action::NewWindow(NewWindowRequest { incognito: true, .. })
    ));
}

// ============================================================================
// Navigate
// ============================================================================

#[test]
fn test_navigate_infers_site_from_text() {
    let actions = resolve(json!({
        "_text": "go to google",
        "entities": {"command_go_to_website": [{"value": "go to"}]}
    }));
    assert_eq!(actions, vec![go_to("www.google.com")]);
}

#[test]
fn test_navigate_without_site_reports_missing_param() {
    let actions = resolve(json!({
        "_text": "go to my favourite page",
        "entities": {"command_go_to_website": [{"value": "go to"}]}
    }));
    assert_eq!(
        actions,
        vec![Action::GoToWebsite(GoToWebsiteRequest::missing_website())]
    );
    let value = serde_json::to_value(&actions[0]).unwrap();
    assert_eq!(value["missing_param"], true);
    assert!(value.get("url").is_none());
}

#[test]
fn test_navigate_command_scoped_url_beats_message_url() {
    let actions = resolve(json!({
        "_text": "go to rust-lang.org not google",
        "entities": {
            "command_go_to_website": [{"value": "go to", "entities": {"url": [{"value": "rust-lang.org"}]}}],
            "url": [{"value": "example.com"}]
        }
    }));
    assert_eq!(actions, vec![go_to("rust-lang.org")]);
}

#[test]
fn test_navigate_message_url_beats_site_keyword() {
    let actions = resolve(json!({
        "_text": "go to example.com instead of google",
        "entities": {
            "command_go_to_website": [{"value": "go to"}],
            "url": [{"value": "example.com"}]
        }
    }));
    assert_eq!(actions, vec![go_to("example.com")]);
}

#[test]
fn test_bare_urls_each_become_navigation() {
    let actions = resolve(json!({
        "_text": "example.com and rust-lang.org",
        "entities": {"url": [{"value": "example.com"}, {"value": "rust-lang.org"}]}
    }));
    assert_eq!(actions, vec![go_to("example.com"), go_to("rust-lang.org")]);
}

#[test]
fn test_bare_url_with_bookmark_is_left_to_bookmark() {
    let actions = resolve(json!({
        "_text": "bookmark example.com",
        "entities": {
            "command_bookmark_page": [{"value": "bookmark"}],
            "url": [{"value": "example.com"}]
        }
    }));
    assert_eq!(
        actions,
        vec![Action::Bookmark(BookmarkRequest {
            bookmark_name: String::new(),
            url: "example.com".into()
        })]
    );
}

// ============================================================================
// Check email / downloads / search
// ============================================================================

#[test]
fn test_check_email_defaults_to_gmail() {
    let actions = resolve(json!({
        "_text": "check my email",
        "entities": {"command_check_email": [{"value": "check email"}, {"value": "email"}]}
    }));
    assert_eq!(actions, vec![go_to("www.gmail.com")]);
}

#[test]
fn test_check_email_uses_named_provider() {
    let actions = resolve(json!({
        "_text": "check my outlook email",
        "entities": {"command_check_email": [{"value": "check email"}]}
    }));
    assert_eq!(actions, vec![go_to("www.outlook.com")]);
}

#[test]
fn test_open_downloads_once() {
    let actions = resolve(json!({
        "_text": "show downloads",
        "entities": {"command_open_downloads": [{"value": "downloads"}, {"value": "downloads"}]}
    }));
    assert_eq!(actions, vec![Action::OpenDownloads(OpenDownloadsRequest {})]);
}

#[test]
fn test_search_query_precedence() {
    let actions = resolve(json!({
        "_text": "search cats then search dogs",
        "entities": {
            "command_search": [
                {"value": "search", "entities": {"message_body": [{"value": "cats"}]}},
                {"value": "search"}
            ],
            "message_body": [{"value": "dogs"}]
        }
    }));
    assert_eq!(
        actions,
        vec![
            Action::Search(SearchRequest { query: "cats".into() }),
            Action::Search(SearchRequest { query: "dogs".into() })
        ]
    );
}

#[test]
fn test_search_without_query_is_empty_string() {
    let actions = resolve(json!({
        "_text": "search",
        "entities": {"command_search": [{"value": "search"}]}
    }));
    assert_eq!(actions, vec![Action::Search(SearchRequest { query: String::new() })]);
}

// ============================================================================
// Bookmark
// ============================================================================

#[test]
fn test_bookmark_named_current_page() {
    let actions = resolve(json!({
        "_text": "bookmark this as shopping",
        "entities": {
            "command_bookmark_page": [{
                "value": "bookmark",
                "entities": {"bookmark_name": [{"value": "shopping"}]}
            }]
        }
    }));
    assert_eq!(
        actions,
        vec![Action::Bookmark(BookmarkRequest {
            bookmark_name: "shopping".into(),
            url: "CURRENT PAGE".into()
        })]
    );
}

#[test]
fn test_bookmark_name_falls_back_to_message_body() {
    let scoped = resolve(json!({
        "_text": "bookmark this as recipes",
        "entities": {
            "command_bookmark_page": [{
                "value": "bookmark",
                "entities": {"message_body": [{"value": "recipes"}], "url": [{"value": "food.com"}]}
            }],
            "message_body": [{"value": "ignored"}]
        }
    }));
    assert_eq!(
        scoped,
        vec![Action::Bookmark(BookmarkRequest {
            bookmark_name: "recipes".into(),
            url: "food.com".into()
        })]
    );

    let message = resolve(json!({
        "_text": "bookmark this as recipes",
        "entities": {
            "command_bookmark_page": [{"value": "bookmark"}],
            "message_body": [{"value": "recipes"}]
        }
    }));
    assert_eq!(
        message,
        vec![Action::Bookmark(BookmarkRequest {
            bookmark_name: "recipes".into(),
            url: "CURRENT PAGE".into()
        })]
    );
}

#[test]
fn test_bare_bookmark_name_reads_only_nested_name() {
    let actions = resolve(json!({
        "_text": "shopping bookmark for amazon.com",
        "entities": {
            "bookmark_name": [{"value": "shopping"}],
            "url": [{"value": "amazon.com"}]
        }
    }));
    assert_eq!(
        actions,
        vec![Action::Bookmark(BookmarkRequest {
            bookmark_name: String::new(),
            url: "amazon.com".into()
        })]
    );
}

#[test]
fn test_bare_message_body_is_not_a_bookmark() {
    let actions = resolve(json!({
        "_text": "remember this as recipes",
        "entities": {
            "message_body": [{"value": "recipes", "entities": {"bookmark_name": [{"value": "recipes"}]}}]
        }
    }));
    assert!(actions.is_empty());
}

// ============================================================================
// Clear browsing data
// ============================================================================

#[test]
fn test_bare_browsing_data_type() {
    let actions = resolve(json!({
        "_text": "cookies",
        "entities": {"browsing_data_type": [{"value": "cookies"}]}
    }));
    assert_eq!(
        actions,
        vec![Action::ClearBrowsingData(ClearBrowsingDataRequest {
            browsing_data_type: "cookies".into(),
            duration: json!("all"),
            unit: "None".into()
        })]
    );
}

#[test]
fn test_clear_command_defaults() {
    let actions = resolve(json!({
        "_text": "clear my browsing data",
        "entities": {"command_clear_browsing_data": [{"value": "clear"}]}
    }));
    assert_eq!(
        actions,
        vec![Action::ClearBrowsingData(ClearBrowsingDataRequest::default())]
    );
}

#[test]
fn test_clear_command_resolves_each_mention() {
    let actions = resolve(json!({
        "_text": "clear history for the last 2 hours and clear cache",
        "entities": {
            "command_clear_browsing_data": [
                {
                    "value": "clear",
                    "entities": {
                        "browsing_data_type": [{"value": "history"}],
                        "duration": [{"value": 2, "unit": "hour"}]
                    }
                },
                {"value": "clear", "entities": {"browsing_data_type": [{"value": "cache"}]}}
            ],
            "duration": [{"value": 7, "unit": "day"}]
        }
    }));
    assert_eq!(
        actions,
        vec![
            Action::ClearBrowsingData(ClearBrowsingDataRequest {
                browsing_data_type: "history".into(),
                duration: json!(2),
                unit: "hour".into()
            }),
            Action::ClearBrowsingData(ClearBrowsingDataRequest {
                browsing_data_type: "cache".into(),
                duration: json!(7),
                unit: "day".into()
            })
        ]
    );
}

#[test]
fn test_duration_without_unit_is_ignored() {
    let actions = resolve(json!({
        "_text": "clear cookies for 3",
        "entities": {
            "browsing_data_type": [{"value": "cookies"}],
            "duration": [{"value": 3}]
        }
    }));
    assert_eq!(
        actions,
        vec![Action::ClearBrowsingData(ClearBrowsingDataRequest {
            browsing_data_type: "cookies".into(),
            duration: json!("all"),
            unit: "None".into()
        })]
    );
}

// ============================================================================
// Engine configuration and isolation
// ============================================================================

#[test]
fn test_custom_site_table() {
    let engine = ResolutionEngine::new(SiteTable::with_overrides([("github", "www.github.com")]));
    let actions = engine.resolve(&tree(json!({
        "_text": "go to github",
        "entities": {"command_go_to_website": [{"value": "go to"}]}
    })));
    assert_eq!(actions.into_vec(), vec![go_to("www.github.com")]);
}

#[test]
fn test_resolution_is_idempotent_and_isolated() {
    let tabs = tree(json!({
        "_text": "open a new tab",
        "entities": {"command_new_tab": [{"value": "new tab"}]}
    }));
    let downloads = tree(json!({
        "_text": "open downloads",
        "entities": {"command_open_downloads": [{"value": "downloads"}]}
    }));

    let first = resolve_annotations(&tabs);
    let second = resolve_annotations(&tabs);
    assert_eq!(first, second);

    let other = resolve_annotations(&downloads).into_vec();
    assert_eq!(other, vec![Action::OpenDownloads(OpenDownloadsRequest {})]);
    assert!(!other.iter().any(|a| matches!(a, Action::NewTab(_))));
}

#[test]
fn test_full_sentence_serialization() {
    let actions = resolve_annotations(&tree(json!({
        "_text": "open 2 new tabs and go to youtube",
        "entities": {
            "command_new_tab": [{"value": "new tabs", "entities": {"number": [{"value": 2}]}}],
            "command_go_to_website": [{"value": "go to"}]
        }
    })));
    let json = serde_json::to_string(&actions).unwrap();
    assert_eq!(
        json,
        r#"[{"action":"new_tab","num_tabs":2},{"action":"go_to_website","url":"www.youtube.com"}]"#
    );
}
