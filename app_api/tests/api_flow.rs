use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use app_api::handlers;
use app_api::middleware::auth_middleware::AuthMiddleware;
use app_api::result::{AppState, json_config, not_found, path_config, query_config};
use common::config::AppConfig;
use serde_json::{Value, json};

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .app_data(json_config())
                .app_data(query_config())
                .app_data(path_config())
                .wrap(AuthMiddleware { state: $state.clone() })
                .configure(handlers::configure)
                .default_service(web::route().to(not_found)),
        )
        .await
    };
}

fn new_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(&AppConfig::default()))
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

fn register_req(username: &str) -> test::TestRequest {
    test::TestRequest::post().uri("/auth/register").set_json(json!({
        "username": username,
        "password": "secret123",
        "email": format!("{username}@example.com"),
        "fullName": "Test Dietitian"
    }))
}

/// Registers `username` and yields the issued token.
macro_rules! register {
    ($app:expr, $username:expr) => {{
        let resp = test::call_service(&$app, register_req($username).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        body["token"].as_str().unwrap().to_string()
    }};
}

macro_rules! create_client {
    ($app:expr, $token:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/clients")
            .insert_header(bearer($token))
            .set_json(json!({ "name": $name, "heightCm": 170.0 }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        body["id"].as_i64().unwrap()
    }};
}

macro_rules! get_json {
    ($app:expr, $token:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).insert_header(bearer($token)).to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn register_login_and_me() {
    let state = new_state();
    let app = test_app!(state);
    register!(app, "ayse");

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": "ayse", "password": "secret123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["user"]["username"], "ayse");
    assert!(body["user"].get("password").is_none());

    let (status, me) = get_json!(app, &token, "/auth/me");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["fullName"], "Test Dietitian");
}

#[actix_web::test]
async fn duplicate_username_is_a_conflict() {
    let state = new_state();
    let app = test_app!(state);
    register!(app, "ayse");

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "username": "ayse",
            "password": "other1234",
            "email": "second@example.com",
            "fullName": "Someone Else"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 409);
}

#[actix_web::test]
async fn unknown_user_and_wrong_password_fail_identically() {
    let state = new_state();
    let app = test_app!(state);
    register!(app, "ayse");

    let wrong_password = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": "ayse", "password": "wrong1234" }))
        .to_request();
    let resp = test::call_service(&app, wrong_password).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let first = test::read_body(resp).await;

    let unknown_user = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": "nobody", "password": "wrong1234" }))
        .to_request();
    let resp = test::call_service(&app, unknown_user).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let second = test::read_body(resp).await;

    assert_eq!(first, second);
}

#[actix_web::test]
async fn protected_routes_need_a_valid_token() {
    let state = new_state();
    let app = test_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/clients").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 401);

    let (status, _) = get_json!(app, "not-a-token", "/dashboard/stats");
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/status").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn blog_is_public() {
    let state = new_state();
    state.services.article_service.seed_defaults().await.unwrap();
    let app = test_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/blog?limit=2").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let articles: Value = test::read_body_json(resp).await;
    assert_eq!(articles.as_array().unwrap().len(), 2);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/blog/999").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn clients_of_another_user_are_forbidden() {
    let state = new_state();
    let app = test_app!(state);
    let owner = register!(app, "owner");
    let intruder = register!(app, "intruder");
    let client_id = create_client!(app, &owner, "Mehmet Kaya");

    let (status, body) = get_json!(app, &intruder, &format!("/clients/{client_id}"));
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 403);

    let req = test::TestRequest::put()
        .uri(&format!("/clients/{client_id}"))
        .insert_header(bearer(&intruder))
        .set_json(json!({ "name": "Renamed" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete().uri(&format!("/clients/{client_id}")).insert_header(bearer(&intruder)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let (status, _) = get_json!(app, &intruder, "/clients/424242");
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = get_json!(app, &intruder, "/clients");
    assert!(listed.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn measurements_list_newest_date_first() {
    let state = new_state();
    let app = test_app!(state);
    let token = register!(app, "ayse");
    let client_id = create_client!(app, &token, "Mehmet Kaya");

    for (date, weight) in [("2024-02-01T09:00:00Z", 82.0), ("2024-03-01T09:00:00Z", 80.0), ("2024-01-01T09:00:00Z", 85.0)] {
        let req = test::TestRequest::post()
            .uri(&format!("/clients/{client_id}/measurements"))
            .insert_header(bearer(&token))
            .set_json(json!({ "date": date, "weightKg": weight }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let (status, body) = get_json!(app, &token, &format!("/clients/{client_id}/measurements"));
    assert_eq!(status, StatusCode::OK);
    let weights: Vec<f64> = body.as_array().unwrap().iter().map(|m| m["weightKg"].as_f64().unwrap()).collect();
    assert_eq!(weights, vec![80.0, 82.0, 85.0]);
    assert!(body[0]["bmi"].as_f64().is_some());
}

#[actix_web::test]
async fn activity_feed_follows_creations() {
    let state = new_state();
    let app = test_app!(state);
    let token = register!(app, "ayse");
    let client_id = create_client!(app, &token, "Mehmet Kaya");

    for weight in [90.0, 89.0] {
        let req = test::TestRequest::post()
            .uri(&format!("/clients/{client_id}/measurements"))
            .insert_header(bearer(&token))
            .set_json(json!({ "weightKg": weight }))
            .to_request();
        test::call_service(&app, req).await;
    }
    let req = test::TestRequest::post()
        .uri(&format!("/clients/{client_id}/diet-plans"))
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Kilo Verme Diyeti", "startDate": "2024-01-01", "dailyCalories": 1800 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    let req = test::TestRequest::post()
        .uri("/appointments")
        .insert_header(bearer(&token))
        .set_json(json!({ "clientId": client_id, "date": "2030-05-01T10:00:00Z", "kind": "online" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let (_, all) = get_json!(app, &token, "/activities");
    assert_eq!(all.as_array().unwrap().len(), 5);

    let (status, latest) = get_json!(app, &token, "/activities?limit=2");
    assert_eq!(status, StatusCode::OK);
    let latest = latest.as_array().unwrap();
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0]["description"], "Online appointment scheduled with Mehmet Kaya");
    let plan_entry = latest[1]["description"].as_str().unwrap();
    assert!(plan_entry.contains("Kilo Verme Diyeti"));
    assert!(plan_entry.contains("Mehmet Kaya"));
}

#[actix_web::test]
async fn deleting_a_client_cascades() {
    let state = new_state();
    let app = test_app!(state);
    let token = register!(app, "ayse");
    let client_id = create_client!(app, &token, "Mehmet Kaya");
    let other_id = create_client!(app, &token, "Zeynep Demir");

    for id in [client_id, other_id] {
        let req = test::TestRequest::post()
            .uri(&format!("/clients/{id}/measurements"))
            .insert_header(bearer(&token))
            .set_json(json!({ "weightKg": 70.0 }))
            .to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::post()
            .uri("/appointments")
            .insert_header(bearer(&token))
            .set_json(json!({ "clientId": id, "date": "2030-05-01T10:00:00Z" }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::delete().uri(&format!("/clients/{client_id}")).insert_header(bearer(&token)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let (status, _) = get_json!(app, &token, &format!("/clients/{client_id}"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, appointments) = get_json!(app, &token, "/appointments");
    let appointments = appointments.as_array().unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["clientId"], other_id);

    let (_, stats) = get_json!(app, &token, "/dashboard/stats");
    assert_eq!(stats["totalClients"], 1);
    assert_eq!(stats["totalMeasurements"], 1);

    let (_, activities) = get_json!(app, &token, "/activities");
    assert_eq!(activities.as_array().unwrap().len(), 6);
}

#[actix_web::test]
async fn malformed_input_is_a_bad_request() {
    let state = new_state();
    let app = test_app!(state);
    let token = register!(app, "ayse");

    let req = test::TestRequest::post()
        .uri("/clients")
        .insert_header(bearer(&token))
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 400);

    let req = test::TestRequest::post()
        .uri("/clients")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "X" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let (status, _) = get_json!(app, &token, "/activities?limit=abc");
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json!(app, &token, "/clients/abc");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn diet_plan_update_checks_merged_dates() {
    let state = new_state();
    let app = test_app!(state);
    let token = register!(app, "ayse");
    let client_id = create_client!(app, &token, "Mehmet Kaya");

    let req = test::TestRequest::post()
        .uri(&format!("/clients/{client_id}/diet-plans"))
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Akdeniz", "startDate": "2024-03-01" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let plan: Value = test::read_body_json(resp).await;
    let plan_id = plan["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/diet-plans/{plan_id}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "endDate": "2024-02-01" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/diet-plans/{plan_id}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "endDate": "2024-04-01", "isActive": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "Akdeniz");
    assert_eq!(updated["isActive"], false);
}

#[actix_web::test]
async fn unknown_routes_answer_with_the_error_body() {
    let state = new_state();
    let app = test_app!(state);
    let token = register!(app, "ayse");
    let client_id = create_client!(app, &token, "Mehmet Kaya");

    let (status, body) = get_json!(app, &token, &format!("/clients/{client_id}/nothing"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);

    let req = test::TestRequest::patch()
        .uri(&format!("/clients/{client_id}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Renamed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "Resource not found");
}
