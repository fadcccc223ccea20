use cep_weather::server::{build_router, serve};
use cep_weather::ServiceConfig;
use httpmock::prelude::*;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestApp {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<cep_weather::Result<()>>,
}

impl TestApp {
    async fn start(viacep: &MockServer, weather: &MockServer) -> Self {
        let mut config = ServiceConfig::default();
        config.viacep.base_url = viacep.url("/ws");
        config.weather_api.base_url = weather.url("/v1");
        config.weather_api.api_key = "test-key".to_string();

        let router = build_router(&config).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve(listener, router, async move {
            let _ = rx.await;
        }));

        Self {
            base_url: format!("http://{}", addr),
            shutdown: Some(tx),
            handle,
        }
    }

    async fn get(&self, path: &str) -> (u16, String) {
        let response = reqwest::get(format!("{}{}", self.base_url, path))
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.text().await.unwrap())
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

fn mock_belford_roxo(viacep: &MockServer) -> httpmock::Mock<'_> {
    viacep.mock(|when, then| {
        when.method(GET).path("/ws/26140040/json/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "cep": "26140-040",
                "localidade": "Belford Roxo",
                "uf": "RJ"
            }));
    })
}

#[tokio::test]
async fn test_end_to_end_success() {
    let viacep = MockServer::start();
    let weather = MockServer::start();

    let cep_mock = mock_belford_roxo(&viacep);
    let weather_mock = weather.mock(|when, then| {
        when.method(GET)
            .path("/v1/current.json")
            .query_param("key", "test-key")
            .query_param("q", "Belford Roxo, RJ, Brazil")
            .query_param("aqi", "no");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "current": { "temp_c": 25.5 } }));
    });

    let app = TestApp::start(&viacep, &weather).await;
    let (status, body) = app.get("/weather/26140040").await;

    assert_eq!(status, 200);
    assert_eq!(body, r#"{"temp_C":25.5,"temp_F":77.9,"temp_K":298.5}"#);
    cep_mock.assert();
    weather_mock.assert();

    app.stop().await;
}

#[tokio::test]
async fn test_hyphenated_postal_code_is_normalized() {
    let viacep = MockServer::start();
    let weather = MockServer::start();

    let cep_mock = mock_belford_roxo(&viacep);
    weather.mock(|when, then| {
        when.method(GET).path("/v1/current.json");
        then.status(200)
            .json_body(serde_json::json!({ "current": { "temp_c": 0.0 } }));
    });

    let app = TestApp::start(&viacep, &weather).await;
    let (status, body) = app.get("/weather/26140-040").await;

    assert_eq!(status, 200);
    assert_eq!(body, r#"{"temp_C":0.0,"temp_F":32.0,"temp_K":273.0}"#);
    cep_mock.assert();

    app.stop().await;
}

#[tokio::test]
async fn test_invalid_postal_code_returns_422() {
    let viacep = MockServer::start();
    let weather = MockServer::start();
    let cep_mock = viacep.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let app = TestApp::start(&viacep, &weather).await;
    let (status, body) = app.get("/weather/123").await;

    assert_eq!(status, 422);
    assert_eq!(body, r#"{"message":"invalid zipcode"}"#);
    cep_mock.assert_hits(0);

    app.stop().await;
}

#[tokio::test]
async fn test_unknown_postal_code_returns_404() {
    let viacep = MockServer::start();
    let weather = MockServer::start();
    viacep.mock(|when, then| {
        when.method(GET).path("/ws/99999999/json/");
        then.status(200).json_body(serde_json::json!({ "erro": true }));
    });
    let weather_mock = weather.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let app = TestApp::start(&viacep, &weather).await;
    let (status, body) = app.get("/weather/99999999").await;

    assert_eq!(status, 404);
    assert_eq!(body, r#"{"message":"can not find zipcode"}"#);
    weather_mock.assert_hits(0);

    app.stop().await;
}

#[tokio::test]
async fn test_weather_not_found_returns_404() {
    let viacep = MockServer::start();
    let weather = MockServer::start();
    mock_belford_roxo(&viacep);
    weather.mock(|when, then| {
        when.method(GET).path("/v1/current.json");
        then.status(400);
    });

    let app = TestApp::start(&viacep, &weather).await;
    let (status, body) = app.get("/weather/26140040").await;

    assert_eq!(status, 404);
    assert_eq!(body, r#"{"message":"weather not found"}"#);

    app.stop().await;
}

#[tokio::test]
async fn test_rejected_api_key_returns_generic_500() {
    let viacep = MockServer::start();
    let weather = MockServer::start();
    mock_belford_roxo(&viacep);
    weather.mock(|when, then| {
        when.method(GET).path("/v1/current.json");
        then.status(401);
    });

    let app = TestApp::start(&viacep, &weather).await;
    let (status, body) = app.get("/weather/26140040").await;

    assert_eq!(status, 500);
    assert_eq!(body, r#"{"message":"internal server error"}"#);

    app.stop().await;
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let viacep = MockServer::start();
    let weather = MockServer::start();

    let app = TestApp::start(&viacep, &weather).await;
    let (status, body) = app.get("/forecast/26140040").await;

    assert_eq!(status, 404);
    assert_eq!(body, r#"{"message":"not found"}"#);

    app.stop().await;
}

#[tokio::test]
async fn test_empty_postal_code_returns_422() {
    let viacep = MockServer::start();
    let weather = MockServer::start();
    let cep_mock = viacep.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let app = TestApp::start(&viacep, &weather).await;
    let (status, body) = app.get("/weather/").await;

    assert_eq!(status, 422);
    assert_eq!(body, r#"{"message":"invalid zipcode"}"#);
    cep_mock.assert_hits(0);

    app.stop().await;
}

#[tokio::test]
async fn test_undecodable_postal_code_returns_422() {
    let viacep = MockServer::start();
    let weather = MockServer::start();
    let cep_mock = viacep.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let app = TestApp::start(&viacep, &weather).await;
    let (status, body) = app.get("/weather/%FF%FE").await;

    assert_eq!(status, 422);
    assert_eq!(body, r#"{"message":"invalid zipcode"}"#);
    cep_mock.assert_hits(0);

    app.stop().await;
}
