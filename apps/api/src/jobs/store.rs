//! Job store: the whole collection lives in one pretty-printed JSON document.
//!
//! Every mutation reads the full document, edits it in memory and rewrites it.
//! Writes land in a sibling temp file that is renamed over the document, so a
//! reader never sees a half-written array. Mutations inside one process are
//! serialized; separate processes still race and the last write wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::job::{JobApplication, JobFields};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("collection document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct JobStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every record in insertion order. A missing document is the
    /// normal first-run state and yields an empty list.
    pub async fn list(&self) -> Result<Vec<JobApplication>, AppError> {
        Ok(self.read_all().await?)
    }

    /// Appends a new record with a fresh id and `created_at == updated_at`.
    pub async fn create(&self, fields: JobFields) -> Result<JobApplication, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut jobs = self.read_all().await?;

        let now = Utc::now();
        let job = JobApplication {
            id: next_id(&jobs, now),
            job_title: fields.job_title,
            company_name: fields.company_name,
            application_link: fields.application_link,
            status: fields.status,
            created_at: now,
            updated_at: now,
        };

        jobs.push(job.clone());
        self.write_all(&jobs).await?;

        info!(id = %job.id, company = %job.company_name, "Created job application");
        Ok(job)
    }

    /// Replaces the mutable fields of `id` in place and refreshes `updated_at`.
    pub async fn update(&self, id: &str, fields: JobFields) -> Result<JobApplication, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut jobs = self.read_all().await?;

        let job = jobs
            .iter_mut()
            .find(|job| job.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

        let updated_at = later_than(job.updated_at, Utc::now());
        job.apply(fields, updated_at);
        let job = job.clone();

        self.write_all(&jobs).await?;

        info!(id = %job.id, status = %job.status, "Updated job application");
        Ok(job)
    }

    /// Removes `id`, keeping the relative order of everything else.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut jobs = self.read_all().await?;

        let before = jobs.len();
        jobs.retain(|job| job.id != id);
        if jobs.len() == before {
            return Err(AppError::NotFound(format!("Job {id} not found")));
        }

        self.write_all(&jobs).await?;

        info!(id, "Deleted job application");
        Ok(())
    }

    async fn ensure_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<JobApplication>, StoreError> {
        self.ensure_dir().await?;

        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No collection document at {:?} yet", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    async fn write_all(&self, jobs: &[JobApplication]) -> Result<(), StoreError> {
        self.ensure_dir().await?;

        let content = serde_json::to_string_pretty(jobs)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, content).await?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        debug!("Wrote {} jobs to {:?}", jobs.len(), self.path);
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "jobs.json".to_string());
        self.path
            .with_file_name(format!(".{name}.{}.tmp", std::process::id()))
    }
}

/// Epoch milliseconds as a decimal string, bumped past any id already taken.
fn next_id(jobs: &[JobApplication], now: DateTime<Utc>) -> String {
    let mut candidate = now.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !jobs.iter().any(|job| job.id == id) {
            return id;
        }
        candidate += 1;
    }
}

/// `now`, unless the clock has not moved past `previous`.
fn later_than(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobStatus;
    use tempfile::TempDir;

    fn fields(title: &str, status: JobStatus) -> JobFields {
        JobFields {
            job_title: title.to_string(),
            company_name: "Acme".to_string(),
            application_link: "https://acme.example/job/1".to_string(),
            status,
        }
    }

    fn store_in(dir: &TempDir) -> JobStore {
        JobStore::new(dir.path().join("data").join("jobs.json"))
    }

    #[tokio::test]
    async fn test_list_without_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.list().await.unwrap().is_empty());
        assert!(dir.path().join("data").is_dir());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_create_then_list_returns_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let job = store
            .create(fields("Engineer", JobStatus::Applied))
            .await
            .unwrap();
        assert_eq!(job.created_at, job.updated_at);
        assert_eq!(job.status, JobStatus::Applied);

        let jobs = store.list().await.unwrap();
        assert_eq!(jobs, vec![job]);
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for i in 0..20 {
            store
                .create(fields(&format!("Role {i}"), JobStatus::Applied))
                .await
                .unwrap();
        }

        let jobs = store.list().await.unwrap();
        let mut ids: Vec<_> = jobs.iter().map(|j| j.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(jobs[0].job_title, "Role 0");
        assert_eq!(jobs[19].job_title, "Role 19");
    }

    #[tokio::test]
    async fn test_update_changes_only_mutable_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let created = store
            .create(fields("Engineer", JobStatus::Applied))
            .await
            .unwrap();
        let updated = store
            .update(&created.id, fields("Senior Engineer", JobStatus::Interviewing))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.job_title, "Senior Engineer");
        assert_eq!(updated.status, JobStatus::Interviewing);

        assert_eq!(store.list().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_missing_id_leaves_collection_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .create(fields("Engineer", JobStatus::Applied))
            .await
            .unwrap();
        let before = store.list().await.unwrap();

        let err = store
            .update("does-not-exist", fields("Other", JobStatus::Offer))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_keeps_relative_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let a = store.create(fields("A", JobStatus::Applied)).await.unwrap();
        let b = store.create(fields("B", JobStatus::Applied)).await.unwrap();
        let c = store.create(fields("C", JobStatus::Applied)).await.unwrap();

        store.delete(&b.id).await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec![a, c]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let a = store.create(fields("A", JobStatus::Applied)).await.unwrap();

        let err = store.delete("nope").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.list().await.unwrap(), vec![a]);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_an_error_not_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(store.path(), "[{\"id\": \"1\", \"jobTi").unwrap();

        let err = store.list().await.unwrap_err();
        assert!(matches!(err, AppError::Storage(StoreError::Corrupt(_))));

        // A write must not clobber the unreadable document.
        assert!(store
            .create(fields("Engineer", JobStatus::Applied))
            .await
            .is_err());
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[{\"id\": \"1\""));
    }

    #[tokio::test]
    async fn test_document_is_pretty_printed_array() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .create(fields("Engineer", JobStatus::Applied))
            .await
            .unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains("\"jobTitle\": \"Engineer\""));
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_all_kept() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(fields(&format!("Role {i}"), JobStatus::Applied))
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.list().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_failed_rename_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        // A non-empty directory where the document belongs makes the rename fail.
        std::fs::create_dir_all(store.path().join("occupied")).unwrap();

        assert!(store.write_all(&[]).await.is_err());

        let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("data"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "left behind: {leftovers:?}");
    }

    #[test]
    fn test_next_id_skips_taken_ids() {
        let now = Utc::now();
        let taken = JobApplication {
            id: now.timestamp_millis().to_string(),
            job_title: "A".to_string(),
            company_name: "B".to_string(),
            application_link: "C".to_string(),
            status: JobStatus::Applied,
            created_at: now,
            updated_at: now,
        };
        let id = next_id(&[taken], now);
        assert_eq!(id, (now.timestamp_millis() + 1).to_string());
    }

    #[test]
    fn test_later_than_never_goes_backwards() {
        let previous = Utc::now();
        let earlier = previous - Duration::seconds(5);
        assert!(later_than(previous, earlier) > previous);
        assert!(later_than(previous, previous) > previous);
    }
}
