//! Integration tests for the pagination contract
//!
//! Exercises `search` (newest first) and `Discussion.comments` (oldest
//! first): page walks are complete, idempotent, cursors are exclusive,
//! and totalCount is independent of the page window.

mod common;

use quorum_api::models::AuthUser;

/// Execute one search page and return the connection JSON
async fn search_page(
    schema: &quorum_api::graphql::QuorumSchema,
    marker: &str,
    first: i32,
    after: Option<&str>,
) -> serde_json::Value {
    let after_arg = match after {
        Some(cursor) => format!(r#", after: "{cursor}""#),
        None => String::new(),
    };
    let query = format!(
        r#"query {{
            search(query: "{marker}", first: {first}{after_arg}) {{
                nodes {{ number title }}
                pageInfo {{ endCursor hasNextPage }}
                totalCount
            }}
        }}"#
    );
    let data = common::execute_ok(schema, &query, None).await;
    data["search"].clone()
}

/// Collect node ids from a connection page
fn node_numbers(connection: &serde_json::Value) -> Vec<i64> {
    connection["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["number"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_search_walk_is_complete_and_ordered() {
    let Some(pool) = common::try_pool().await else {
        return;
    };
    let schema = common::schema(&pool);

    let email = common::unique_email("searcher");
    let (user_id, _) = common::register_user(&schema, &email).await;
    let caller = AuthUser { user_id };

    let marker = common::unique_marker("walk");
    let mut created = Vec::new();
    for i in 0..7 {
        let title = format!("{marker} item {i}");
        created.push(common::create_discussion(&schema, &title, caller).await as i64);
    }

    // Walk all pages following endCursor while hasNextPage
    let mut collected = Vec::new();
    let mut cursor: Option<String> = None;
    let mut total_counts = Vec::new();
    loop {
        let page = search_page(&schema, &marker, 3, cursor.as_deref()).await;
        collected.extend(node_numbers(&page));
        total_counts.push(page["totalCount"].as_i64().unwrap());

        if !page["pageInfo"]["hasNextPage"].as_bool().unwrap() {
            // endCursor still points at the last node of the final page
            assert_eq!(
                page["pageInfo"]["endCursor"].as_str().unwrap(),
                collected.last().unwrap().to_string()
            );
            break;
        }
        cursor = Some(page["pageInfo"]["endCursor"].as_str().unwrap().to_string());
    }

    // Every discussion exactly once, newest first, and totalCount was the
    // full match count on every page regardless of the window
    let expected: Vec<i64> = created.iter().rev().copied().collect();
    assert_eq!(collected, expected);
    assert!(total_counts.iter().all(|&c| c == 7));
}

#[tokio::test]
async fn test_search_page_sizes_and_has_next_page() {
    let Some(pool) = common::try_pool().await else {
        return;
    };
    let schema = common::schema(&pool);

    let email = common::unique_email("pager");
    let (user_id, _) = common::register_user(&schema, &email).await;
    let caller = AuthUser { user_id };

    let marker = common::unique_marker("sizes");
    for i in 0..5 {
        common::create_discussion(&schema, &format!("{marker} {i}"), caller).await;
    }

    let first_page = search_page(&schema, &marker, 3, None).await;
    assert_eq!(node_numbers(&first_page).len(), 3);
    assert!(first_page["pageInfo"]["hasNextPage"].as_bool().unwrap());

    let cursor = first_page["pageInfo"]["endCursor"].as_str().unwrap();
    let second_page = search_page(&schema, &marker, 3, Some(cursor)).await;
    assert_eq!(node_numbers(&second_page).len(), 2);
    assert!(!second_page["pageInfo"]["hasNextPage"].as_bool().unwrap());
}

#[tokio::test]
async fn test_search_is_idempotent_while_data_is_unchanged() {
    let Some(pool) = common::try_pool().await else {
        return;
    };
    let schema = common::schema(&pool);

    let email = common::unique_email("idempotent");
    let (user_id, _) = common::register_user(&schema, &email).await;
    let caller = AuthUser { user_id };

    let marker = common::unique_marker("stable");
    for i in 0..4 {
        common::create_discussion(&schema, &format!("{marker} {i}"), caller).await;
    }

    let a = search_page(&schema, &marker, 2, None).await;
    let b = search_page(&schema, &marker, 2, None).await;
    assert_eq!(a, b);

    let cursor = a["pageInfo"]["endCursor"].as_str().unwrap();
    let c = search_page(&schema, &marker, 2, Some(cursor)).await;
    let d = search_page(&schema, &marker, 2, Some(cursor)).await;
    assert_eq!(c, d);
}

#[tokio::test]
async fn test_search_cursor_is_exclusive() {
    let Some(pool) = common::try_pool().await else {
        return;
    };
    let schema = common::schema(&pool);

    let email = common::unique_email("exclusive");
    let (user_id, _) = common::register_user(&schema, &email).await;
    let caller = AuthUser { user_id };

    let marker = common::unique_marker("excl");
    for i in 0..3 {
        common::create_discussion(&schema, &format!("{marker} {i}"), caller).await;
    }

    let first_page = search_page(&schema, &marker, 2, None).await;
    let first_ids = node_numbers(&first_page);
    let cursor = first_page["pageInfo"]["endCursor"].as_str().unwrap();

    // The cursor row itself never reappears on the next page
    let second_page = search_page(&schema, &marker, 2, Some(cursor)).await;
    let second_ids = node_numbers(&second_page);
    assert!(second_ids.iter().all(|id| !first_ids.contains(id)));
}

#[tokio::test]
async fn test_search_rejects_malformed_cursor() {
    let Some(pool) = common::try_pool().await else {
        return;
    };
    let schema = common::schema(&pool);

    let message = common::execute_err(
        &schema,
        r#"query { search(query: "x", after: "banana") { totalCount } }"#,
        None,
    )
    .await;
    assert!(
        message.contains("invalid cursor"),
        "unexpected message: {message}"
    );
}

#[tokio::test]
async fn test_search_rejects_unknown_cursor() {
    let Some(pool) = common::try_pool().await else {
        return;
    };
    let schema = common::schema(&pool);

    let message = common::execute_err(
        &schema,
        r#"query { search(query: "x", after: "2147483647") { totalCount } }"#,
        None,
    )
    .await;
    assert!(
        message.contains("unknown cursor"),
        "unexpected message: {message}"
    );
}

#[tokio::test]
async fn test_comments_walk_is_ascending_and_complete() {
    let Some(pool) = common::try_pool().await else {
        return;
    };
    let schema = common::schema(&pool);

    let email = common::unique_email("threader");
    let (user_id, _) = common::register_user(&schema, &email).await;
    let caller = AuthUser { user_id };
    let number = common::create_discussion(&schema, "busy-thread", caller).await;

    let mut created = Vec::new();
    for i in 0..5 {
        let query = format!(
            r#"mutation {{ addComment(discussionId: {number}, bodyHTML: "<p>{i}</p>") {{ id }} }}"#
        );
        let data = common::execute_ok(&schema, &query, Some(caller)).await;
        created.push(data["addComment"]["id"].as_i64().unwrap());
    }

    // Walk the discussion's comments two at a time, oldest first
    let mut collected = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let after_arg = match &cursor {
            Some(c) => format!(r#", after: "{c}""#),
            None => String::new(),
        };
        let query = format!(
            r#"query {{
                getDiscussion(number: {number}) {{
                    comments(first: 2{after_arg}) {{
                        nodes {{ id }}
                        pageInfo {{ endCursor hasNextPage }}
                        totalCount
                    }}
                }}
            }}"#
        );
        let data = common::execute_ok(&schema, &query, None).await;
        let connection = &data["getDiscussion"]["comments"];
        assert_eq!(connection["totalCount"], 5);

        for node in connection["nodes"].as_array().unwrap() {
            collected.push(node["id"].as_i64().unwrap());
        }

        if !connection["pageInfo"]["hasNextPage"].as_bool().unwrap() {
            break;
        }
        cursor = Some(
            connection["pageInfo"]["endCursor"]
                .as_str()
                .unwrap()
                .to_string(),
        );
    }

    // Insertion order, each comment exactly once
    assert_eq!(collected, created);
}
