use notification_router::domain::notification::{AttemptRecord, AttemptStatus, InboxEntry};
use notification_router::repo::inbox_repo::InboxRepo;
use uuid::Uuid;

fn entry(event_type: &str) -> InboxEntry {
    InboxEntry {
        notification_id: Uuid::new_v4(),
        event_type: event_type.to_string(),
        delivered_via: "Email".to_string(),
        attempts: vec![AttemptRecord {
            channel: "Email".to_string(),
            status: AttemptStatus::Success,
            reason: "delivered".to_string(),
            fail_prob: Some(0.05),
        }],
        timestamp: chrono::Utc::now().with_timezone(&chrono::FixedOffset::east_opt(0).unwrap()),
    }
}

fn repo(dir: &tempfile::TempDir) -> InboxRepo {
    InboxRepo::new(dir.path().join("inbox.json"), dir.path().join("trash.json"))
}

#[tokio::test]
async fn missing_files_read_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo(&dir);
    assert!(repo.list_inbox().await.unwrap().is_empty());
    assert!(repo.list_trash().await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("inbox.json"), "  \n").unwrap();
    let repo = repo(&dir);
    assert!(repo.list_inbox().await.unwrap().is_empty());
}

#[tokio::test]
async fn corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("inbox.json"), "{not json").unwrap();
    let repo = repo(&dir);
    assert!(repo.list_inbox().await.is_err());
    assert!(repo.append(entry("OTP")).await.is_err());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("inbox.json")).unwrap(),
        "{not json"
    );
}

#[tokio::test]
async fn unreadable_trash_blocks_clear_and_keeps_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo(&dir);
    let kept = entry("OTP");
    repo.append(kept.clone()).await.unwrap();

    let legacy = r#"[{"notification_id": "legacy-1", "event_type": "OTP", "delivered_via": "Inbox", "attempts": [], "timestamp": "2024-01-01T00:00:00+05:30"}]"#;
    std::fs::write(dir.path().join("trash.json"), legacy).unwrap();

    assert!(repo.clear_inbox().await.is_err());
    assert!(repo.delete(kept.notification_id).await.is_err());
    assert!(repo.empty_trash().await.is_err());
    assert_eq!(std::fs::read_to_string(dir.path().join("trash.json")).unwrap(), legacy);
    assert_eq!(repo.list_inbox().await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn clear_moves_every_entry_to_trash() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo(&dir);
    let old = entry("Fraud Alert");
    repo.append(old.clone()).await.unwrap();
    repo.delete(old.notification_id).await.unwrap();

    let a = entry("OTP");
    let b = entry("Monthly Statement");
    repo.append(a.clone()).await.unwrap();
    repo.append(b.clone()).await.unwrap();

    assert_eq!(repo.clear_inbox().await.unwrap(), 2);
    assert!(repo.list_inbox().await.unwrap().is_empty());
    assert_eq!(repo.list_trash().await.unwrap(), vec![old, a, b]);
}

#[tokio::test]
async fn delete_and_restore_are_exclusive_moves() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo(&dir);
    let a = entry("OTP");
    let b = entry("OTP");
    repo.append(a.clone()).await.unwrap();
    repo.append(b.clone()).await.unwrap();

    assert!(repo.delete(a.notification_id).await.unwrap());
    assert!(!repo.delete(a.notification_id).await.unwrap());
    assert_eq!(repo.list_inbox().await.unwrap(), vec![b.clone()]);
    assert_eq!(repo.list_trash().await.unwrap(), vec![a.clone()]);

    assert!(repo.restore(a.notification_id).await.unwrap());
    assert!(!repo.restore(a.notification_id).await.unwrap());
    assert_eq!(repo.list_inbox().await.unwrap(), vec![b, a]);
    assert!(repo.list_trash().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_trash_discards_entries() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo(&dir);
    repo.append(entry("OTP")).await.unwrap();
    repo.clear_inbox().await.unwrap();

    assert_eq!(repo.empty_trash().await.unwrap(), 1);
    assert!(repo.list_trash().await.unwrap().is_empty());
}
