use std::net::SocketAddr;

use axum::Router;
use configs::ContactConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::{build_router, startup::build_cors, AppState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::testing::memory_db().await?;
    let app: Router = build_router(AppState::new(db, ContactConfig::default()), build_cors());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_red_velvet_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/cakes/", app.base_url))
        .json(&json!({"name": "Red Velvet", "description": "classic", "price": 12.5}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_i64().expect("id");

    let list = c.get(format!("{}/cakes/", app.base_url)).send().await?.json::<Value>().await?;
    let rows = list.as_array().expect("array");
    assert!(rows.iter().any(|r| r["id"] == id && r["name"] == "Red Velvet" && r["price"] == 12.5));

    let res = c.get(format!("{}/cakes/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let got = res.json::<Value>().await?;
    assert_eq!(got["description"], "classic");
    Ok(())
}

#[tokio::test]
async fn e2e_parallel_posts_get_distinct_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let body = json!({"name": "Delivery", "description": "same"});

    let (a, b) = tokio::join!(
        c.post(format!("{}/services/", app.base_url)).json(&body).send(),
        c.post(format!("{}/services/", app.base_url)).json(&body).send(),
    );
    let a = a?.json::<Value>().await?;
    let b = b?.json::<Value>().await?;
    assert_ne!(a["id"], b["id"]);

    let list = c.get(format!("{}/services/", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(list.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn e2e_contact_and_missing_entity() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let contact = c.get(format!("{}/contact/", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(contact["email"], "bestcake222@gmail.com");

    let res = c.delete(format!("{}/services/42", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["detail"], "Услуга не найдена");
    Ok(())
}

#[tokio::test]
async fn e2e_serve_uses_given_contact_and_closes_pool_on_shutdown() -> anyhow::Result<()> {
    let db = models::testing::memory_db().await?;
    let pool_handle = db.clone();
    let contact = ContactConfig { phone: "+7 (900) 000-0000".into(), ..ContactConfig::default() };

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(server::startup::serve(listener, db, contact, async move {
        let _ = stop_rx.await;
    }));

    let got = reqwest::get(format!("{base_url}/contact/")).await?.json::<Value>().await?;
    assert_eq!(got["phone"], "+7 (900) 000-0000");
    assert_eq!(got["email"], "bestcake222@gmail.com");

    let _ = stop_tx.send(());
    server.await??;

    assert!(service::cakes::list_cakes(&pool_handle).await.is_err());
    Ok(())
}
