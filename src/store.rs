use crate::errors::StoreError;
use crate::models::{DailyCount, Ledger};
use async_trait::async_trait;
use chrono::Local;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};
use tracing::error;

/// A missing day is the valid empty state and surfaces as `Ok(None)`,
/// never as an error.
#[async_trait]
pub trait ClickStore: Send + Sync {
    async fn count_for(&self, date: &str) -> Result<Option<DailyCount>, StoreError>;

    /// Creates the row with count 1 if the day has none, bumps it by one
    /// otherwise, and returns the resulting row.
    async fn increment(&self, date: &str) -> Result<DailyCount, StoreError>;
}

pub fn today_key() -> String {
    Local::now().date_naive().to_string()
}

pub fn resolve_data_path() -> PathBuf {
    env::var("CLICKS_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/clicks.json"))
}

pub struct FileStore {
    path: PathBuf,
    ledger: Mutex<Ledger>,
}

impl FileStore {
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let ledger = load_ledger(&path).await;
        Ok(Self {
            path,
            ledger: Mutex::new(ledger),
        })
    }
}

#[async_trait]
impl ClickStore for FileStore {
    async fn count_for(&self, date: &str) -> Result<Option<DailyCount>, StoreError> {
        let ledger = self.ledger.lock().await;
        Ok(ledger.days.get(date).map(|&count| DailyCount {
            date: date.to_string(),
            count,
        }))
    }

    async fn increment(&self, date: &str) -> Result<DailyCount, StoreError> {
        // The lock is held across the bump and the write, so concurrent
        // increments on the same day serialize instead of losing updates.
        let mut ledger = self.ledger.lock().await;
        let count = {
            let slot = ledger.days.entry(date.to_string()).or_insert(0);
            *slot = slot.saturating_add(1);
            *slot
        };
        persist_ledger(&self.path, &ledger).await?;

        Ok(DailyCount {
            date: date.to_string(),
            count,
        })
    }
}

async fn load_ledger(path: &Path) -> Ledger {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(ledger) => ledger,
            Err(err) => {
                error!("failed to parse counter file: {err}");
                Ledger::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ledger::default(),
        Err(err) => {
            error!("failed to read counter file: {err}");
            Ledger::default()
        }
    }
}

async fn persist_ledger(path: &Path, ledger: &Ledger) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(ledger)?;
    fs::write(path, payload).await?;
    Ok(())
}
