#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{issuer_header, read_json, setup};

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_session_lifecycle() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let open = || {
        test::TestRequest::post()
            .uri("/api/v1/sessions")
            .peer_addr(std::net::SocketAddr::from(([10, 0, 2, 1], 40000)))
            .insert_header(("User-Agent", "EduAdmin-Test/1.0"))
            .insert_header(issuer_header())
            .set_json(json!({"user_id": 7, "client_id": "laptop-01", "device_name": "Laptop"}))
            .to_request()
    };

    let resp = test::call_service(&app, open()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();
    let session_id = body["data"]["session"]["id"].as_i64().unwrap();
    assert_eq!(token.len(), 64);
    assert_eq!(body["data"]["reused"], false);
    assert_eq!(body["data"]["session"]["user_agent"], "EduAdmin-Test/1.0");

    // 同一设备再次打开复用已有会话
    let resp = test::call_service(&app, open()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["reused"], true);
    assert_eq!(body["data"]["token"], token.as_str());
    assert_eq!(body["data"]["session"]["id"], session_id);

    let req = test::TestRequest::get()
        .uri("/api/v1/sessions/current")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["user_id"], 7);
    assert!(body["data"].get("token").is_none());

    let req = test::TestRequest::get()
        .uri("/api/v1/users/7/sessions?active_only=true")
        .insert_header(issuer_header())
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::delete()
        .uri("/api/v1/sessions/current")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/sessions/current")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_protected_routes_require_token() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/sessions/current")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/sessions/current")
        .insert_header(bearer("not-a-real-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(resp).await;
    assert_ne!(body["code"], 0);
}

#[actix_web::test]
async fn test_cannot_revoke_sessions_of_other_users() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let mut tokens = Vec::new();
    let mut ids = Vec::new();
    for (user_id, client_id) in [(1, "phone-a"), (2, "phone-b")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/sessions")
            .peer_addr(std::net::SocketAddr::from(([10, 0, 2, 2], 40000)))
            .insert_header(issuer_header())
            .set_json(json!({"user_id": user_id, "client_id": client_id}))
            .to_request();
        let body = read_json(test::call_service(&app, req).await).await;
        tokens.push(body["data"]["token"].as_str().unwrap().to_string());
        ids.push(body["data"]["session"]["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/sessions/{}", ids[1]))
        .insert_header(bearer(&tokens[0]))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/sessions/current")
        .insert_header(bearer(&tokens[1]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_open_session_rejects_bad_client_id() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/sessions")
        .peer_addr(std::net::SocketAddr::from(([10, 0, 2, 3], 40000)))
        .insert_header(issuer_header())
        .set_json(json!({"user_id": 3, "client_id": "bad id with spaces"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn test_open_session_requires_issuer_key() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    // 已登录的用户
    let req = test::TestRequest::post()
        .uri("/api/v1/sessions")
        .peer_addr(std::net::SocketAddr::from(([10, 0, 2, 4], 40000)))
        .insert_header(issuer_header())
        .set_json(json!({"user_id": 7, "client_id": "home-laptop"}))
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    // 不带密钥或密钥错误都不能为该用户签发令牌
    for key in [None, Some("guessed-key")] {
        let mut req = test::TestRequest::post()
            .uri("/api/v1/sessions")
            .peer_addr(std::net::SocketAddr::from(([10, 0, 2, 5], 40000)))
            .set_json(json!({"user_id": 7, "client_id": "other-device"}));
        if let Some(key) = key {
            req = req.insert_header(("X-Session-Issuer-Key", key));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = read_json(resp).await;
        assert!(body["data"].get("token").is_none());
    }

    // 用户会话列表同样需要密钥
    let req = test::TestRequest::get()
        .uri("/api/v1/users/7/sessions")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/users/7/sessions")
        .insert_header(issuer_header())
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get()
        .uri("/api/v1/sessions/current")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
