#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use serde_json::json;

use common::{read_json, setup};

#[actix_web::test]
async fn test_expired_announcements_are_hidden_everywhere_but_expired_list() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let past = (Utc::now() - Duration::days(1)).to_rfc3339();
    let future = (Utc::now() + Duration::days(30)).to_rfc3339();

    let req = test::TestRequest::post()
        .uri("/api/v1/announcements")
        .set_json(json!({
            "title": "Lịch thi học kỳ",
            "content": "Xem chi tiết tại phòng đào tạo",
            "location": "homepage",
            "expires_at": future,
            "priority": 5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let live_id = read_json(resp).await["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/announcements")
        .set_json(json!({
            "title": "Nghỉ lễ",
            "content": "Thông báo cũ",
            "location": "homepage",
            "expires_at": past
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let expired_id = read_json(resp).await["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get().uri("/api/v1/announcements").to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    let items = body["data"]["items"].as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], live_id);
    assert_eq!(body["data"]["pagination"]["total"], 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/announcements/active")
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    let ids: Vec<i64> = body["data"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .filter_map(|a| a["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![live_id]);

    let req = test::TestRequest::get()
        .uri("/api/v1/announcements/expired")
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    let ids: Vec<i64> = body["data"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .filter_map(|a| a["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![expired_id]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/announcements/{expired_id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/announcements/{expired_id}"))
        .set_json(json!({"title": "Sửa lại"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/announcements/{expired_id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_announcement_pagination() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    for i in 0..12 {
        let req = test::TestRequest::post()
            .uri("/api/v1/announcements")
            .set_json(json!({
                "title": format!("Thông báo {i}"),
                "content": "Nội dung",
                "location": "homepage"
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/announcements?page=2&limit=5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["data"]["pagination"]["page"], 2);
    assert_eq!(body["data"]["pagination"]["total"], 12);
    assert_eq!(body["data"]["pagination"]["total_pages"], 3);

    let req = test::TestRequest::get()
        .uri("/api/v1/announcements?page=0")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn test_course_announcement_requires_course_and_homepage_clears_it() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/announcements")
        .set_json(json!({
            "title": "Bài tập tuần 3",
            "content": "Nộp trước thứ sáu",
            "location": "course"
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/announcements")
        .set_json(json!({
            "title": "Bài tập tuần 3",
            "content": "Nộp trước thứ sáu",
            "location": "course",
            "course_id": 42
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["course_id"], 42);

    let req = test::TestRequest::get()
        .uri("/api/v1/announcements/active?location=course")
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/announcements/{id}"))
        .set_json(json!({"location": "homepage"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["location"], "homepage");
    assert!(body["data"]["course_id"].is_null());
}

#[actix_web::test]
async fn test_huge_page_is_rejected_without_querying() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/announcements?page=9223372036854775807&limit=100")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("too large")
    );

    // 最大允许的偏移量仍可正常返回空页
    let req = test::TestRequest::get()
        .uri("/api/v1/announcements?page=1000000&limit=100")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["items"], json!([]));
}
