#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{read_json, setup};

#[actix_web::test]
async fn test_student_crud_and_conflict() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(json!({
            "student_code": "SV2026001",
            "full_name": "Nguyễn Văn An",
            "email": "an.nguyen@example.edu.vn",
            "phone": "0912 345 678",
            "class_name": "K15A"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = read_json(resp).await["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(json!({"student_code": "SV2026001", "full_name": "Trần Thị Bình"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = read_json(resp).await;
    assert_ne!(body["code"], 0);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/students/{id}"))
        .set_json(json!({"full_name": "Nguyễn Văn Anh"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["full_name"], "Nguyễn Văn Anh");
    assert_eq!(body["data"]["class_name"], "K15A");

    let req = test::TestRequest::get()
        .uri("/api/v1/students?class_name=K15A")
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/students/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/students/{id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_student_validation_and_bad_ids() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(json!({"student_code": "SV 01", "full_name": "Lê Văn C"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(json!({"student_code": "SV2026002", "full_name": "Lê Văn C", "email": "no-at-sign"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get().uri("/api/v1/students/0").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    // JSON 格式错误走统一错误处理器
    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn test_health_endpoint() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/system/health")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["status"], "ok");
}

#[actix_web::test]
async fn test_student_list_rejects_huge_page() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/students?page=9223372036854775807&size=100")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/students?page=2&size=10")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
