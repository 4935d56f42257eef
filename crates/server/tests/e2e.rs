use std::net::SocketAddr;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    server::startup::migrate(&db).await?;

    let app = server::startup::build_app(db);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn create_tomatoes(app: &TestApp) -> anyhow::Result<Value> {
    let res = client()
        .post(app.url("/api/stock"))
        .json(&json!({"name": "Tomatoes", "unitOfMeasure": "Kg", "valueOfMeasure": "1.5", "quantity": 50}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(res.json().await?)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_get_roundtrips() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = create_tomatoes(&app).await?;
    let id = created["id"].as_i64().expect("id assigned");
    assert_eq!(created["name"], "Tomatoes");
    assert_eq!(created["quantity"], 50);
    assert_eq!(created["valueOfMeasure"], "1.5");
    assert!(created["comment"].is_null());

    let res = client().get(app.url(&format!("/api/stock/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);
    Ok(())
}

#[tokio::test]
async fn e2e_get_unknown_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/api/stock/999")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn e2e_list_returns_collection() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/api/stock")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));

    create_tomatoes(&app).await?;
    create_tomatoes(&app).await?;
    let list = client().get(app.url("/api/stock")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 2);
    Ok(())
}

#[tokio::test]
async fn e2e_post_with_id_merges_present_fields() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = create_tomatoes(&app).await?;
    let id = created["id"].as_i64().expect("id assigned");

    let res = client()
        .post(app.url("/api/stock"))
        .json(&json!({"id": id, "name": "", "quantity": 30, "expiryDate": "2025-03-01"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let merged = res.json::<Value>().await?;
    assert_eq!(merged["quantity"], 30);
    assert_eq!(merged["name"], "Tomatoes");
    assert_eq!(merged["unitOfMeasure"], "Kg");
    assert_eq!(merged["expiryDate"], "2025-03-01");
    Ok(())
}

#[tokio::test]
async fn e2e_post_with_unknown_id_is_400() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(app.url("/api/stock"))
        .json(&json!({"id": 4242, "quantity": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_put_replaces_whole_record() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = create_tomatoes(&app).await?;
    let id = created["id"].as_i64().expect("id assigned");

    // body id is ignored in favour of the path
    let res = client()
        .put(app.url(&format!("/api/stock/{id}")))
        .json(&json!({"id": id + 1000, "quantity": 30}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["quantity"], 30);
    assert!(updated["name"].is_null());
    assert!(updated["unitOfMeasure"].is_null());
    Ok(())
}

#[tokio::test]
async fn e2e_put_unknown_is_400() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .put(app.url("/api/stock/31337"))
        .json(&json!({"quantity": 30}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_then_get_and_delete_again() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = create_tomatoes(&app).await?;
    let id = created["id"].as_i64().expect("id assigned");
    let c = client();

    let res = c.delete(app.url(&format!("/api/stock/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!(true));

    let res = c.get(app.url(&format!("/api/stock/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = c.delete(app.url(&format!("/api/stock/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_non_numeric_id_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/api/stock/tomatoes")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
