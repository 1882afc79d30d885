use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::models::{ApplicationRecord, DashboardStats};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub users: Vec<Value>,
    pub jobs: Vec<Value>,
    pub clients: Vec<Value>,
    pub applications: Vec<ApplicationRecord>,
}

impl DashboardData {
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_candidates: self.users.len(),
            total_jobs: self.jobs.len(),
            active_clients: self.clients.len(),
            total_applications: self.applications.len(),
        }
    }
}

fn collection_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

async fn load_collection(dir: &Path, key: &str) -> Result<Vec<Value>, SourceError> {
    let path = collection_path(dir, key);
    let raw = tokio::fs::read(&path).await.map_err(|source| SourceError::Io {
        path: path.clone(),
        source,
    })?;
    let envelope: Value =
        serde_json::from_slice(&raw).map_err(|source| SourceError::Json { path: path.clone(), source })?;

    let items = unwrap_envelope(envelope, key);
    debug!(collection = key, count = items.len(), "loaded collection");
    Ok(items)
}

/// A missing key or a non-array value reads as an empty collection.
fn unwrap_envelope(envelope: Value, key: &str) -> Vec<Value> {
    match envelope {
        Value::Object(mut fields) => match fields.remove(key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn into_applications(items: Vec<Value>) -> Vec<ApplicationRecord> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(fields) => ApplicationRecord::from(fields),
            _ => ApplicationRecord::default(),
        })
        .collect()
}

pub async fn load_dashboard(dir: &Path) -> Result<DashboardData, SourceError> {
    let (users, jobs, clients, applications) = tokio::try_join!(
        load_collection(dir, "users"),
        load_collection(dir, "jobs"),
        load_collection(dir, "clients"),
        load_collection(dir, "applications"),
    )?;

    Ok(DashboardData {
        users,
        jobs,
        clients,
        applications: into_applications(applications),
    })
}

pub async fn load_dashboard_or_default(dir: &Path) -> DashboardData {
    match load_dashboard(dir).await {
        Ok(data) => data,
        Err(err) => {
            error!(error = %err, "error fetching dashboard data");
            DashboardData::default()
        }
    }
}

/// Appends applications from a CSV export to `applications.json`.
///
/// Header names become field names and empty cells are left out. Rows whose
/// `id` is already known are skipped. The collection is replaced atomically.
pub async fn import_csv(dir: &Path, csv_path: &Path) -> Result<usize, SourceError> {
    let path = collection_path(dir, "applications");
    let mut existing = match tokio::fs::read(&path).await {
        Ok(raw) => into_applications(unwrap_envelope(
            serde_json::from_slice(&raw).map_err(|source| SourceError::Json {
                path: path.clone(),
                source,
            })?,
            "applications",
        )),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(source) => return Err(SourceError::Io { path, source }),
    };

    let raw_csv = tokio::fs::read(csv_path).await.map_err(|source| SourceError::Io {
        path: csv_path.to_path_buf(),
        source,
    })?;
    let csv_error = |source| SourceError::Csv {
        path: csv_path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_reader(raw_csv.as_slice());
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut known: HashSet<String> = existing.iter().filter_map(ApplicationRecord::id).collect();
    let mut inserted = 0usize;

    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let fields: Map<String, Value> = headers
            .iter()
            .zip(row.iter())
            .filter(|(_, cell)| !cell.trim().is_empty())
            .map(|(name, cell)| (name.trim().to_string(), Value::String(cell.trim().to_string())))
            .collect();
        let record = ApplicationRecord::from(fields);

        if let Some(id) = record.id() {
            if !known.insert(id) {
                continue;
            }
        }

        existing.push(record);
        inserted += 1;
    }

    let mut envelope = Map::new();
    envelope.insert(
        "applications".to_string(),
        Value::Array(existing.into_iter().map(|r| Value::Object(r.fields)).collect()),
    );
    let body = serde_json::to_vec_pretty(&Value::Object(envelope))
        .map_err(|source| SourceError::Json { path: path.clone(), source })?;
    replace_file(dir, &path, body).await?;

    info!(inserted, path = %path.display(), "imported applications");
    Ok(inserted)
}

// Writes next to the target and renames, so readers never see a partial file.
async fn replace_file(dir: &Path, path: &Path, body: Vec<u8>) -> Result<(), SourceError> {
    let dir = dir.to_path_buf();
    let target = path.to_path_buf();
    let io_error = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    tokio::task::spawn_blocking(move || -> std::io::Result<()> {
        let mut staged = NamedTempFile::new_in(&dir)?;
        staged.write_all(&body)?;
        staged.as_file().sync_all()?;
        staged.persist(&target).map_err(|err| err.error)?;
        Ok(())
    })
    .await
    .map_err(|err| io_error(std::io::Error::other(err)))?
    .map_err(io_error)
}
