mod common;

use axum::Router;
use axum_test::TestServer;
use birthday_facts::api::routes::{local_routes, scraping_routes};
use birthday_facts::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest("/api", scraping_routes().merge(local_routes()))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_facts_success() {
    let server = server(common::create_test_state(common::date(2005, 6, 15)));

    let response = server
        .get("/api/facts")
        .add_query_param("birthdate", "2000-01-01")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["today"], "2005-06-15");
    assert_eq!(json["birthdate"], "2000-01-01");
    assert_eq!(json["is_birthday"], false);
    assert_eq!(json["age"], 5);
    assert_eq!(json["weekday_born"], "Saturday");
    assert_eq!(json["zodiac"]["status"], "known");
    assert_eq!(json["zodiac"]["sign"], "Capricorn");
    assert_eq!(json["weekdays"]["total"], 5);
    assert_eq!(json["moon_phase"]["status"], "available");
    assert_eq!(json["moon_phase"]["value"]["phase"], "Waning Crescent");
    assert_eq!(json["notable_people"]["status"], "available");
    assert_eq!(
        json["notable_people"]["value"]["people"][0]["name"],
        "Ada Example"
    );
}

#[tokio::test]
async fn test_facts_weekday_order() {
    let server = server(common::create_test_state(common::date(2005, 6, 15)));

    let response = server
        .get("/api/facts")
        .add_query_param("birthdate", "2000-01-01")
        .await;

    let json = response.json::<serde_json::Value>();
    let weekdays: Vec<&str> = json["weekdays"]["counts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["weekday"].as_str().unwrap())
        .collect();

    assert_eq!(
        weekdays,
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Saturday"]
    );
}

#[tokio::test]
async fn test_facts_sources_down_still_ok() {
    let server = server(common::create_offline_state(common::date(2005, 6, 15)));

    let response = server
        .get("/api/facts")
        .add_query_param("birthdate", "2000-01-01")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["moon_phase"]["status"], "unavailable");
    assert!(
        json["moon_phase"]["reason"]
            .as_str()
            .unwrap()
            .contains("connection refused")
    );
    assert_eq!(json["notable_people"]["status"], "unavailable");
    assert_eq!(json["age"], 5);
}

#[tokio::test]
async fn test_facts_on_birthday() {
    let server = server(common::create_test_state(common::date(2024, 3, 25)));

    let response = server
        .get("/api/facts")
        .add_query_param("birthdate", "2000-03-25")
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["is_birthday"], true);
    assert_eq!(json["age"], 24);
    assert_eq!(json["zodiac"]["sign"], "Aries");
    assert_eq!(json["weekdays"]["total"], 24);
}

#[tokio::test]
async fn test_facts_rejects_future_date() {
    let server = server(common::create_test_state(common::date(2005, 6, 15)));

    let response = server
        .get("/api/facts")
        .add_query_param("birthdate", "2005-06-16")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["max"], "2005-06-15");
}

#[tokio::test]
async fn test_facts_rejects_before_1900() {
    let server = server(common::create_test_state(common::date(2005, 6, 15)));

    let response = server
        .get("/api/facts")
        .add_query_param("birthdate", "1899-12-31")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["min"], "1900-01-01");
}

#[tokio::test]
async fn test_facts_rejects_malformed_input() {
    let server = server(common::create_test_state(common::date(2005, 6, 15)));

    for input in ["01/01/2000", "2000-1-1", "yesterday"] {
        let response = server
            .get("/api/facts")
            .add_query_param("birthdate", input)
            .await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["message"], "Validation failed");
    }
}

#[tokio::test]
async fn test_facts_rejects_impossible_date() {
    let server = server(common::create_test_state(common::date(2005, 6, 15)));

    let response = server
        .get("/api/facts")
        .add_query_param("birthdate", "2001-02-29")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_facts_missing_birthdate() {
    let server = server(common::create_test_state(common::date(2005, 6, 15)));

    let response = server.get("/api/facts").await;

    response.assert_status_bad_request();
}
