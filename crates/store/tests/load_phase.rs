#![forbid(unsafe_code)]

use std::sync::Arc;

use qatalog_fetch::StaticSource;
use qatalog_store::{spawn_load, LoadPhase};

async fn settle(handle: &qatalog_store::CatalogHandle) -> LoadPhase {
    let mut rx = handle.subscribe_phase();
    while *rx.borrow() == LoadPhase::Loading {
        rx.changed().await.expect("load task dropped the phase channel");
    }
    handle.phase()
}

#[tokio::test]
async fn successful_load_publishes_the_snapshot_once() {
    let body = br#"[
        {"Tools": "SonarQube", "Familly": "SAST"},
        {"Tools": "Prettier", "Familly": "Formatting"}
    ]"#;
    let handle = spawn_load(Arc::new(StaticSource::new(&body[..])));
    assert_eq!(settle(&handle).await, LoadPhase::Ready);

    let snap = handle.current();
    assert_eq!(snap.len(), 2);
    assert_eq!(snap.tools[0].name, "SonarQube");
    // subsequent reads observe the same snapshot
    assert!(Arc::ptr_eq(&snap, &handle.current()));
}

#[tokio::test]
async fn failed_load_carries_the_user_message_and_keeps_the_catalog_empty() {
    let handle = spawn_load(Arc::new(StaticSource::new(&b"[]"[..])));
    assert_eq!(
        settle(&handle).await,
        LoadPhase::Failed("Unable to load tools: No tools found in the dataset".into())
    );
    assert!(handle.current().is_empty());
}
