#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{read_json, setup};

fn peer(n: u8) -> std::net::SocketAddr {
    std::net::SocketAddr::from(([10, 0, 1, n], 40000))
}

fn row(class: &str, date: &str, subject: &str) -> serde_json::Value {
    json!({
        "ten_lop": class,
        "ngay_hoc": date,
        "buoi": "Sáng",
        "mon_hoc": subject,
        "so_tiet": 3,
        "sdt_gv": 912345678
    })
}

#[actix_web::test]
async fn test_bulk_create_skips_existing_classes() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes/bulk")
        .set_json(json!({"classes": ["K15A"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes/bulk")
        .set_json(json!({"classes": ["K15A", "K15B", " K15B ", ""]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["count"], 1);
    assert_eq!(body["data"]["classes"][0]["name"], "K15B");

    let req = test::TestRequest::post()
        .uri("/api/v1/classes/bulk")
        .set_json(json!({"classes": ["K15A"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["count"], 0);

    let req = test::TestRequest::get().uri("/api/v1/classes").to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn test_scoped_import_rejects_other_classes() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes/Y/timetable/import")
        .peer_addr(peer(1))
        .set_json(json!([
            row("X", "2/2/2026", "Giải phẫu"),
            row("Y", "3/2/2026", "Sinh lý"),
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(resp).await;
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("'X'"), "unexpected message: {message}");
    assert!(body.get("data").is_none());

    // 校验失败时不会写入任何数据
    let req = test::TestRequest::get()
        .uri("/api/v1/classes/Y/timetable")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_unscoped_import_replaces_only_named_classes() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes/timetable/import")
        .peer_addr(peer(2))
        .set_json(json!([
            row("K1", "2/2/2026", "Hóa sinh"),
            row("K1", "3/2/2026", "Hóa sinh"),
            row("K2", "2/2/2026", "Vi sinh"),
            row("K3", "4/2/2026", "Dược lý"),
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["count"], 4);
    assert_eq!(body["data"]["classes"], json!(["K1", "K2", "K3"]));

    let req = test::TestRequest::post()
        .uri("/api/v1/classes/timetable/import")
        .peer_addr(peer(2))
        .set_json(json!([
            row("K1", "9/2/2026", "Giải phẫu"),
            row("K2", "9/2/2026", "Giải phẫu"),
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/classes/K1/timetable")
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    let entries = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["mon_hoc"], "Giải phẫu");
    assert_eq!(entries[0]["sdt_gv"], "912345678");

    let req = test::TestRequest::get()
        .uri("/api/v1/classes/K3/timetable")
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    let entries = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["mon_hoc"], "Dược lý");

    // 导入时自动登记班级
    let req = test::TestRequest::get().uri("/api/v1/classes").to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(3));
}

#[actix_web::test]
async fn test_import_reports_date_fallbacks_and_missing_rows() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes/timetable/import")
        .peer_addr(peer(3))
        .set_json(json!([row("K9", "23/1", "Giải phẫu")]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"]["date_fallbacks"], 1);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes/timetable/import")
        .peer_addr(peer(3))
        .set_json(json!([
            row("K9", "2/2/2026", "Giải phẫu"),
            {"ngay_hoc": "3/2/2026", "mon_hoc": "Sinh lý"},
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("row(s): 2")
    );
}

#[actix_web::test]
async fn test_timetable_of_registered_class_without_entries_is_empty() {
    let ctx = setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes/bulk")
        .set_json(json!({"classes": ["Y1"]}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/classes/Y1/timetable")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["data"], json!([]));
}
