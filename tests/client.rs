//! End-to-end test: a real listener and the HTTP client

use geoschools::client::SchoolClient;
use geoschools::common::Config;
use geoschools::store::Storage;
use geoschools::{Error, SchoolRegistry, SchoolServer};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_client_against_live_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let registry = SchoolRegistry::new(Storage::new_memory());
        SchoolServer::new(Config::default())
            .serve_on(listener, registry, async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    let client = SchoolClient::new(format!("http://{}/", addr));

    let far = client
        .add_school("Far Academy", "1 Far Rd", 0.0, 0.0)
        .await
        .unwrap();
    assert_eq!(far.id, 1);

    let near = client
        .add_school("Near School", "2 Near Rd", 12.34, 98.76)
        .await
        .unwrap();
    assert_eq!(near.id, 2);
    assert_eq!(near.name, "Near School");

    match client.add_school("Nowhere", "3 Pole Rd", 95.0, 0.0).await {
        Err(Error::Validation(errors)) => {
            assert_eq!(errors, vec!["Latitude must be between -90 and 90 degrees"]);
        }
        other => panic!("expected validation error, got {:?}", other.map(|s| s.id)),
    }

    let ranked = client.list_schools(12.345678, 98.765432).await.unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].item.id, 2);
    assert_eq!(ranked[1].item.id, 1);
    assert!(ranked[0].distance <= ranked[1].distance);

    match client.list_schools(91.0, 0.0).await {
        Err(Error::Remote { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.starts_with("Latitude must be between"));
        }
        other => panic!("expected remote error, got {:?}", other.map(|r| r.len())),
    }

    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
