use std::net::SocketAddr;

use tokio::net::TcpListener;
use uuid::Uuid;

use server::build_router;

async fn start_server(fixture_dir: &str) -> anyhow::Result<String> {
    let app = build_router(fixture_dir);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

#[tokio::test]
async fn health_and_fixture_files_are_served() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("portal_fixtures_{}", Uuid::new_v4()));
    std::fs::create_dir_all(dir.join("users"))?;
    std::fs::write(
        dir.join("users/users.json"),
        r#"{ "users": [ { "userId": "USER_001", "name": "Maxwell Walker", "email": "m@example.com" } ] }"#,
    )?;

    let base_url = start_server(dir.to_str().expect("utf-8 temp path")).await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");

    let res = client
        .get(format!("{}/data/users/users.json", base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let doc = res.json::<serde_json::Value>().await?;
    assert_eq!(doc["users"][0]["userId"], "USER_001");

    let res = client
        .get(format!("{}/data/missing.json", base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}
