//! Socket-level tests: a real listener, driven through the client SDK.

use std::time::Duration;

use album_catalog::AlbumStore;
use catalog_sdk::{Album, CatalogClient, ClientError};
use reqwest::StatusCode;

mod common;

fn album(id: impl Into<String>, price: i64) -> Album {
    Album {
        id: id.into(),
        title: "Take Five".into(),
        artist: "Dave Brubeck".into(),
        price,
    }
}

#[tokio::test]
async fn sdk_round_trip() {
    let server = common::start_server().await;
    let client = CatalogClient::new(&server.url()).unwrap();

    let albums = client.list_albums().await.expect("list");
    assert_eq!(albums.len(), 3);
    assert_eq!(albums[0].title, "Blue Train");

    let created = client.create_album(&album("4", 1999)).await.expect("create");
    assert_eq!(created, album("4", 1999));

    let fetched = client.get_album("4").await.expect("get");
    assert_eq!(fetched, Some(album("4", 1999)));

    assert_eq!(client.get_album("99").await.expect("get missing"), None);

    server.stop().await;
}

#[tokio::test]
async fn ids_with_reserved_characters_round_trip() {
    let store = AlbumStore::with_albums(
        ["1", "1#x", "a?b", "a/b", "50%"]
            .into_iter()
            .map(|id| album_catalog::Album::new(id, format!("title {id}"), "a", 1))
            .collect(),
    );
    let server = common::start_server_with_store(store).await;
    let client = CatalogClient::new(&server.url()).unwrap();

    for id in ["1", "1#x", "a?b", "a/b", "50%"] {
        let fetched = client.get_album(id).await.expect("get");
        assert_eq!(
            fetched.map(|a| a.title),
            Some(format!("title {id}")),
            "lookup of {id:?}"
        );
    }
    assert_eq!(client.get_album("a").await.expect("get"), None);

    server.stop().await;
}

#[tokio::test]
async fn rejected_payload_surfaces_server_message() {
    let server = common::start_server().await;

    let res = reqwest::Client::new()
        .post(format!("{}/albums", server.url()))
        .body("{\"id\": 4}")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("invalid album payload"));
    assert_eq!(server.store.len(), 3);

    server.stop().await;
}

#[tokio::test]
async fn sdk_reports_non_success_status() {
    let server = common::start_server().await;
    let client = CatalogClient::new(&format!("{}/nowhere", server.url())).unwrap();

    match client.list_albums().await {
        Err(ClientError::Status { status, .. }) => assert_eq!(status, StatusCode::NOT_FOUND),
        other => panic!("expected status error, got {other:?}"),
    }

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_creates_all_persist() {
    let server = common::start_server_with_store(AlbumStore::seeded()).await;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    let concurrency = 16;
    let per_task = 25;

    let mut tasks = Vec::new();
    for t in 0..concurrency {
        let client = CatalogClient::with_client(client.clone(), &server.url()).unwrap();
        tasks.push(tokio::spawn(async move {
            for i in 0..per_task {
                client
                    .create_album(&album(format!("{t}-{i}"), i))
                    .await
                    .expect("create should succeed");
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let expected = 3 + concurrency * per_task as usize;
    assert_eq!(server.store.len(), expected);

    let listed = CatalogClient::new(&server.url())
        .unwrap()
        .list_albums()
        .await
        .unwrap();
    assert_eq!(listed.len(), expected);

    // Seeds stay in front; every created id appears exactly once.
    assert_eq!(listed[0].id, "1");
    let mut created: Vec<_> = listed[3..].iter().map(|a| a.id.clone()).collect();
    created.sort();
    created.dedup();
    assert_eq!(created.len(), concurrency * per_task as usize);

    server.stop().await;
}

#[tokio::test]
async fn server_stops_on_shutdown() {
    let server = common::start_server().await;
    let addr = server.addr;
    server.stop().await;

    let res = reqwest::Client::new()
        .get(format!("http://{addr}/albums"))
        .timeout(Duration::from_secs(2))
        .send()
        .await;
    assert!(res.is_err(), "server should no longer accept requests");
}
