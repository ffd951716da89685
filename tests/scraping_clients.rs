//! Scraped fact clients against a local fixture server.

use axum::{
    Router,
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use birthday_facts::domain::ports::{FetchError, MoonPhaseSource, NotablePeopleSource};
use birthday_facts::infrastructure::scraping::{
    FamousBirthdaysClient, HttpFetcher, MoonGiantClient,
};
use chrono::NaiveDate;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const MOON_PAGE: &str = r#"
<html><body>
  <div id="moonDetails">
    Phase: <span>Full Moon</span><br>
    Illumination: <span>99%</span>
  </div>
</body></html>
"#;

const PEOPLE_PAGE: &str = r#"
<html><body>
  <a class="person-item"><div class="name">First Person, 30</div><div class="title">Actor</div></a>
  <a class="person-item"><div class="name">Second Person, 41</div><div class="title">Chef</div></a>
  <a class="person-item"><div class="name">Third Person</div><div class="title">Poet</div></a>
</body></html>
"#;

async fn moon_page(Path((month, day, year)): Path<(u32, u32, i32)>) -> impl IntoResponse {
    if (month, day, year) == (7, 4, 1990) {
        Html(MOON_PAGE).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn people_page(Path(page): Path<String>) -> impl IntoResponse {
    if page == "july4.html" {
        Html(PEOPLE_PAGE).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn fetcher(retries: usize) -> HttpFetcher {
    HttpFetcher::new(Duration::from_secs(5), retries).unwrap()
}

#[tokio::test]
async fn test_moon_phase_from_fixture_site() {
    let addr = spawn(Router::new().route("/phase/{month}/{day}/{year}", get(moon_page))).await;
    let client = MoonGiantClient::new(fetcher(0), format!("http://{addr}/phase"));

    let moon = client
        .moon_phase(NaiveDate::from_ymd_opt(1990, 7, 4).unwrap())
        .await
        .unwrap();

    assert_eq!(moon.phase, "Full Moon");
    assert_eq!(moon.illumination, "99%");
    assert_eq!(moon.source_url, format!("http://{addr}/phase/7/4/1990"));
}

#[tokio::test]
async fn test_notable_people_from_fixture_site() {
    let addr = spawn(Router::new().route("/{page}", get(people_page))).await;
    let client = FamousBirthdaysClient::new(fetcher(0), format!("http://{addr}"), 2);

    let people = client.notable_people(7, 4).await.unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(people.people[0].name, "First Person");
    assert_eq!(people.people[0].age, Some(30));
    assert_eq!(people.people[1].occupation, "Chef");
    assert_eq!(people.source_url, format!("http://{addr}/july4.html"));
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/phase/{month}/{day}/{year}",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                StatusCode::NOT_FOUND
            }
        }),
    );
    let addr = spawn(app).await;
    let client = MoonGiantClient::new(fetcher(2), format!("http://{addr}/phase"));

    let err = client
        .moon_phase(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404, .. }));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_server_error_is_retried() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/{page}",
        get(move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    StatusCode::SERVICE_UNAVAILABLE.into_response()
                } else {
                    Html(PEOPLE_PAGE).into_response()
                }
            }
        }),
    );
    let addr = spawn(app).await;
    let client = FamousBirthdaysClient::new(fetcher(2), format!("http://{addr}"), 10);

    let people = client.notable_people(7, 4).await.unwrap();

    assert_eq!(people.len(), 3);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_unreachable_site_is_request_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = MoonGiantClient::new(fetcher(0), format!("http://{addr}/phase"));

    let err = client
        .moon_phase(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Request { .. }));
    assert!(err.is_transient());
}
