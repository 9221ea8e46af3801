use crate::domain::notification::InboxEntry;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Inbox and Trash as JSON array files. An id lives in at most one of the
/// two at a time; moves take the whole lock.
#[derive(Clone)]
pub struct InboxRepo {
    pub inbox_path: PathBuf,
    pub trash_path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl InboxRepo {
    pub fn new(inbox_path: impl Into<PathBuf>, trash_path: impl Into<PathBuf>) -> Self {
        Self {
            inbox_path: inbox_path.into(),
            trash_path: trash_path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn list_inbox(&self) -> Result<Vec<InboxEntry>> {
        let _guard = self.lock.lock().await;
        read_entries(&self.inbox_path).await
    }

    pub async fn list_trash(&self) -> Result<Vec<InboxEntry>> {
        let _guard = self.lock.lock().await;
        read_entries(&self.trash_path).await
    }

    pub async fn append(&self, entry: InboxEntry) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut inbox = read_entries(&self.inbox_path).await?;
        inbox.push(entry);
        write_entries(&self.inbox_path, &inbox).await
    }

    pub async fn delete(&self, notification_id: Uuid) -> Result<bool> {
        let _guard = self.lock.lock().await;
        move_one(&self.inbox_path, &self.trash_path, notification_id).await
    }

    pub async fn restore(&self, notification_id: Uuid) -> Result<bool> {
        let _guard = self.lock.lock().await;
        move_one(&self.trash_path, &self.inbox_path, notification_id).await
    }

    pub async fn clear_inbox(&self) -> Result<usize> {
        let _guard = self.lock.lock().await;
        let inbox = read_entries(&self.inbox_path).await?;
        let trash = read_entries(&self.trash_path).await?;
        let moved = inbox.len();

        let mut combined = trash.clone();
        combined.extend(inbox);
        transfer(&self.trash_path, &combined, &trash, &self.inbox_path, &[]).await?;
        Ok(moved)
    }

    pub async fn empty_trash(&self) -> Result<usize> {
        let _guard = self.lock.lock().await;
        let removed = read_entries(&self.trash_path).await?.len();
        write_entries(&self.trash_path, &[]).await?;
        Ok(removed)
    }
}

async fn move_one(from: &Path, to: &Path, notification_id: Uuid) -> Result<bool> {
    let mut source = read_entries(from).await?;
    let Some(pos) = source.iter().position(|e| e.notification_id == notification_id) else {
        return Ok(false);
    };
    let target = read_entries(to).await?;

    let entry = source.remove(pos);
    let mut updated = target.clone();
    updated.push(entry);
    transfer(to, &updated, &target, from, &source).await?;
    Ok(true)
}

/// Writes the receiving file, then the giving one. If the second write
/// fails the receiving file is put back so an id never sits in both.
async fn transfer(
    to: &Path,
    to_entries: &[InboxEntry],
    to_previous: &[InboxEntry],
    from: &Path,
    from_entries: &[InboxEntry],
) -> Result<()> {
    write_entries(to, to_entries).await?;
    if let Err(e) = write_entries(from, from_entries).await {
        if let Err(rollback) = write_entries(to, to_previous).await {
            tracing::error!("store rollback failed path={} error={:#}", to.display(), rollback);
        }
        return Err(e);
    }
    Ok(())
}

/// A missing or blank file is an empty store. Anything unparsable is an
/// error so writers never overwrite it.
async fn read_entries(path: &Path) -> Result<Vec<InboxEntry>> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
}

async fn write_entries(path: &Path, entries: &[InboxEntry]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let body = serde_json::to_vec_pretty(entries)?;
    tokio::fs::write(path, body)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
