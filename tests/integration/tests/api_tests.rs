//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/unread").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/v1/unread", "not-a-real-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Conversation Tests
// ============================================================================

#[tokio::test]
async fn test_start_conversation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (buyer, buyer_token, seller, _) = seed_pair(&server).await.unwrap();

    let body = StartConversationBody {
        counterpart_id: seller,
    };
    let response = server
        .post_auth("/api/v1/conversations", &buyer_token, &body)
        .await
        .unwrap();
    let conversation: ConversationBody =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(conversation.kind, "private");
    assert_eq!(conversation.status, "active");
    assert_eq!(conversation.created_by, buyer);
    assert_eq!(conversation.participants.len(), 2);
}

#[tokio::test]
async fn test_start_conversation_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (buyer, buyer_token, seller, seller_token) = seed_pair(&server).await.unwrap();

    let first = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: seller,
            },
        )
        .await
        .unwrap();
    let first: ConversationBody = assert_json(first, StatusCode::CREATED).await.unwrap();

    // Same pair from the other side lands on the same conversation
    let second = server
        .post_auth(
            "/api/v1/conversations",
            &seller_token,
            &StartConversationBody {
                counterpart_id: buyer,
            },
        )
        .await
        .unwrap();
    let second: ConversationBody = assert_json(second, StatusCode::CREATED).await.unwrap();

    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn test_start_conversation_with_self_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (buyer, buyer_token, _, _) = seed_pair(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: buyer,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_same_side_pair_is_forbidden() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, buyer_token, _, _) = seed_pair(&server).await.unwrap();
    let other_buyer = seed_user(&server, inbox_core::AccountRole::Counterpart)
        .await
        .unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: other_buyer,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_unknown_counterpart_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, buyer_token, _, _) = seed_pair(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: uuid::Uuid::new_v4(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_outsider_cannot_read_conversation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, buyer_token, seller, _) = seed_pair(&server).await.unwrap();
    let outsider = seed_user(&server, inbox_core::AccountRole::Counterpart)
        .await
        .unwrap();
    let outsider_token = token_for(&server, outsider).unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: seller,
            },
        )
        .await
        .unwrap();
    let conversation: ConversationBody =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/conversations/{}", conversation.id),
            &outsider_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_list_conversations_includes_summary() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (buyer, buyer_token, seller, _) = seed_pair(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: seller,
            },
        )
        .await
        .unwrap();
    let conversation: ConversationBody =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/conversations", &buyer_token)
        .await
        .unwrap();
    let page: PageBody<ConversationSummaryBody> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.pagination.page, 1);
    let summary = page
        .data
        .iter()
        .find(|s| s.id == conversation.id)
        .expect("conversation missing from listing");
    assert_eq!(summary.counterpart.as_ref().map(|u| u.id), Some(seller));
    assert_ne!(summary.counterpart.as_ref().map(|u| u.id), Some(buyer));
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_post_and_list_messages() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (buyer, buyer_token, seller, seller_token) = seed_pair(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: seller,
            },
        )
        .await
        .unwrap();
    let conversation: ConversationBody =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let messages_path = format!("/api/v1/conversations/{}/messages", conversation.id);

    let response = server
        .post_auth(
            &messages_path,
            &buyer_token,
            &CreateMessageBody::text("Is the car still available?"),
        )
        .await
        .unwrap();
    let posted: MessageBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(posted.sender.id, buyer);
    assert_eq!(posted.status, "sent");

    // Seller views the conversation; inbound messages advance to delivered
    let response = server.get_auth(&messages_path, &seller_token).await.unwrap();
    let page: PageBody<MessageBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, posted.id);
    assert_eq!(page.data[0].status, "delivered");
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, buyer_token, seller, _) = seed_pair(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: seller,
            },
        )
        .await
        .unwrap();
    let conversation: ConversationBody =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/conversations/{}/messages", conversation.id),
            &buyer_token,
            &CreateMessageBody::text(""),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_mark_read_and_unread_counts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, buyer_token, seller, seller_token) = seed_pair(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: seller,
            },
        )
        .await
        .unwrap();
    let conversation: ConversationBody =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let messages_path = format!("/api/v1/conversations/{}/messages", conversation.id);
    for content in ["First", "Second", "Third"] {
        let response = server
            .post_auth(&messages_path, &buyer_token, &CreateMessageBody::text(content))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    // Seller's unread badge counts the three inbound messages
    let response = server.get_auth("/api/v1/unread", &seller_token).await.unwrap();
    let unread: UnreadTotalBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.total, 3);

    let response = server
        .get_auth(
            &format!("/api/v1/conversations/{}/unread", conversation.id),
            &seller_token,
        )
        .await
        .unwrap();
    let unread: ConversationUnreadBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.unread_count, 3);

    // Mark read reports the newly read messages and clears the badge
    let response = server
        .post_auth_empty(
            &format!("/api/v1/conversations/{}/read", conversation.id),
            &seller_token,
        )
        .await
        .unwrap();
    let marked: MarkReadBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(marked.read_count, 3);

    let response = server.get_auth("/api/v1/unread", &seller_token).await.unwrap();
    let unread: UnreadTotalBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.total, 0);

    // Repeat mark-read is a no-op
    let response = server
        .post_auth_empty(
            &format!("/api/v1/conversations/{}/read", conversation.id),
            &seller_token,
        )
        .await
        .unwrap();
    let marked: MarkReadBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(marked.read_count, 0);
}

#[tokio::test]
async fn test_archived_conversation_rejects_posts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, buyer_token, seller, _) = seed_pair(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: seller,
            },
        )
        .await
        .unwrap();
    let conversation: ConversationBody =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/api/v1/conversations/{}/archive", conversation.id),
            &buyer_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/conversations/{}/messages", conversation.id),
            &buyer_token,
            &CreateMessageBody::text("Too late"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Still readable after archiving
    let response = server
        .get_auth(
            &format!("/api/v1/conversations/{}", conversation.id),
            &buyer_token,
        )
        .await
        .unwrap();
    let archived: ConversationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(archived.status, "archived");
}

#[tokio::test]
async fn test_message_with_attachment() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, buyer_token, seller, _) = seed_pair(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/conversations",
            &buyer_token,
            &StartConversationBody {
                counterpart_id: seller,
            },
        )
        .await
        .unwrap();
    let conversation: ConversationBody =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = CreateMessageBody {
        content: "Photos of the damage".to_string(),
        message_type: Some("image".to_string()),
        attachment: Some(AttachmentBody {
            url: "https://cdn.example.com/photos/damage.jpg".to_string(),
            name: "damage.jpg".to_string(),
        }),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/conversations/{}/messages", conversation.id),
            &buyer_token,
            &body,
        )
        .await
        .unwrap();
    let posted: MessageBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(posted.message_type, "image");
}
