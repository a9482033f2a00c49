//! Integration tests for the weather fetcher against a mock OpenWeather server.

use meteo_core::{ConditionCategory, Endpoint, OpenWeatherProvider, WeatherFetchError, fetch_weather};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_body(temp: f64, main: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Casablanca",
        "weather": [{ "main": main, "description": "ciel dégagé" }],
        "main": {
            "temp": temp,
            "feels_like": 20.4,
            "temp_min": 19.0,
            "temp_max": 23.6,
            "humidity": 68,
            "pressure": 1016
        },
        "wind": { "speed": 5.1 },
        "visibility": 8000,
        "sys": { "sunrise": 1760421600, "sunset": 1760463000 }
    })
}

fn forecast_body(count: usize) -> serde_json::Value {
    let list: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "dt": 1760432400 + (i as i64) * 10800,
                "main": { "temp": 20.0 + i as f64, "temp_min": 19.0, "temp_max": 24.0 },
                "weather": [{ "main": "Clouds" }],
                "pop": 0.25
            })
        })
        .collect();
    serde_json::json!({ "cod": "200", "list": list })
}

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("q", "Casablanca"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn provider(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new("TEST_KEY".into()).with_base_url(server.uri())
}

#[tokio::test]
async fn test_fetch_weather_success() {
    let server = MockServer::start().await;
    mount(&server, "/weather", ResponseTemplate::new(200).set_body_json(current_body(21.3, "Clear"))).await;
    mount(&server, "/forecast", ResponseTemplate::new(200).set_body_json(forecast_body(12))).await;

    let report = fetch_weather(&provider(&server), "Casablanca").await.unwrap();

    assert_eq!(report.snapshot.location_name, "Casablanca");
    assert_eq!(report.snapshot.temperature_c, 21.3);
    assert_eq!(report.snapshot.category, ConditionCategory::Clear);
    assert_eq!(report.snapshot.visibility_m, Some(8000));
    assert_eq!(report.snapshot.humidity_pct, 68);
    assert_eq!(report.forecast.len(), 12);
    assert_eq!(report.forecast[0].time.timestamp(), 1760432400);
    assert_eq!(report.forecast[0].category, ConditionCategory::Clouds);
    assert_eq!(report.forecast[0].pop, 0.25);
}

#[tokio::test]
async fn test_fetch_weather_forecast_500_fails_whole_fetch() {
    let server = MockServer::start().await;
    mount(&server, "/weather", ResponseTemplate::new(200).set_body_json(current_body(21.3, "Clear"))).await;
    mount(&server, "/forecast", ResponseTemplate::new(500).set_body_string("internal error")).await;

    let err = fetch_weather(&provider(&server), "Casablanca").await.unwrap_err();

    assert_eq!(err.endpoint(), Some(Endpoint::Forecast));
    let msg = err.to_string();
    assert!(msg.contains("500"), "Error should mention 500 status: {}", msg);
}

#[tokio::test]
async fn test_fetch_weather_unknown_city() {
    let server = MockServer::start().await;
    let not_found = serde_json::json!({ "cod": "404", "message": "city not found" });
    mount(&server, "/weather", ResponseTemplate::new(404).set_body_json(not_found.clone())).await;
    mount(&server, "/forecast", ResponseTemplate::new(404).set_body_json(not_found)).await;

    let err = fetch_weather(&provider(&server), "Casablanca").await.unwrap_err();

    assert!(matches!(err, WeatherFetchError::Status { endpoint: Endpoint::Current, .. }));
    assert!(err.to_string().contains("city not found"));
}

#[tokio::test]
async fn test_fetch_weather_malformed_body() {
    let server = MockServer::start().await;
    mount(&server, "/weather", ResponseTemplate::new(200).set_body_string("{not json")).await;
    mount(&server, "/forecast", ResponseTemplate::new(200).set_body_json(forecast_body(1))).await;

    let err = fetch_weather(&provider(&server), "Casablanca").await.unwrap_err();

    assert!(matches!(err, WeatherFetchError::Parse { endpoint: Endpoint::Current, .. }));
}

#[tokio::test]
async fn test_fetch_weather_unreachable_host() {
    // Nothing listens on the discard port.
    let provider = OpenWeatherProvider::new("TEST_KEY".into()).with_base_url("http://127.0.0.1:9");

    let err = fetch_weather(&provider, "Casablanca").await.unwrap_err();

    assert!(matches!(err, WeatherFetchError::Request { .. }));
}
