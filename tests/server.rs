//! End-to-end test over a real socket.

use serde_json::{json, Value};
use tokio::sync::oneshot;

use roster::config::Config;
use roster::context::ServiceContext;
use roster::http::HealthResponse;
use roster::server::Server;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn serves_crud_over_tcp_and_shuts_down() {
    let config = Config { port: 0, ..Config::default() };
    let server = Server::bind(&config, ServiceContext::live()).await.unwrap();
    let base = format!("http://{}", server.local_addr().unwrap());

    let (stop, stopped) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.run(async move {
        let _ = stopped.await;
    }));

    let client = reqwest::Client::new();

    let health: HealthResponse =
        client.get(format!("{base}/health")).send().await.unwrap().json().await.unwrap();
    assert_eq!(health.status, "ok");
    assert!(chrono::DateTime::parse_from_rfc3339(&health.time).is_ok());

    let response = client
        .post(format!("{base}/students"))
        .json(&json!({"name": "Ana", "group": "G1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created, json!({"id": 1, "name": "Ana", "group": "G1"}));

    let response = client
        .put(format!("{base}/students/1"))
        .json(&json!({"name": "Ana María", "group": "G2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client.delete(format!("{base}/students/1")).send().await.unwrap();
    assert_eq!(response.status(), 204);

    let response = client.get(format!("{base}/students/1")).send().await.unwrap();
    assert_eq!(response.status(), 404);

    stop.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
