use std::path::Path;

use bolyai_catalog::Task;
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use crate::core::is_success;
use crate::data::{Outcome, RunReport};
use crate::effects::http::HttpClient;
use crate::error::{Error, Result};

/// Downloads documents one request at a time.
pub struct Fetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self { Self { client } }

    pub fn client(&self) -> &C { &self.client }

    /// GET `url` once and return the whole body.
    ///
    /// Only `200 OK` counts as success. For any other status the body is
    /// dropped unread and [`Error::BadStatus`] is returned.
    pub async fn fetch_remote(&self, url: &str) -> Result<Bytes> {
        let response = self.client.get(url).await.map_err(|e| Error::Transport {
            url: url.to_owned(),
            message: e.to_string(),
        })?;

        if !is_success(response.status) {
            return Err(Error::BadStatus {
                url: url.to_owned(),
                status: response.status,
            });
        }

        let mut body = response.body;
        let mut buf = BytesMut::new();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| Error::Transport {
                url: url.to_owned(),
                message: e.to_string(),
            })?;
            buf.extend_from_slice(&chunk);
        }

        Ok(buf.freeze())
    }

    /// Make sure `local_path` holds the document at `url`.
    ///
    /// An existing entry at `local_path` is never touched and no request is
    /// made for it, nor for a path that cannot be inspected. The parent
    /// directory must already exist.
    pub async fn ensure_downloaded(&self, url: &str, local_path: &Path) -> Result<Outcome> {
        let present = bolyai_fs::exists(local_path).map_err(|source| Error::Inspect {
            path: local_path.to_path_buf(),
            source,
        })?;
        if present {
            info!("file {} already exists, skipping download", local_path.display());
            return Ok(Outcome::Skipped);
        }

        info!("downloading {url}...");
        let content = self.fetch_remote(url).await?;
        if content.is_empty() {
            debug!(url, "empty body, nothing written");
            return Ok(Outcome::Empty);
        }

        match bolyai_fs::write_new(local_path, &content) {
            Ok(()) => Ok(Outcome::Downloaded {
                bytes: content.len() as u64,
            }),
            // Another writer got there first; the file is still never replaced.
            Err(bolyai_fs::Error::AlreadyExists) => {
                info!("file {} appeared during download, keeping it", local_path.display());
                Ok(Outcome::Skipped)
            }
            Err(source) => Err(Error::Write {
                path: local_path.to_path_buf(),
                source,
            }),
        }
    }

    pub async fn ensure_task(&self, task: &Task) -> Result<Outcome> {
        self.ensure_downloaded(&task.remote_url, &task.local_path).await
    }
}

/// Resolve every task in order, logging and skipping past failures.
pub async fn run<C: HttpClient>(fetcher: &Fetcher<C>, tasks: &[Task]) -> RunReport {
    let mut report = RunReport::default();

    for task in tasks {
        match fetcher.ensure_task(task).await {
            Ok(outcome) => report.record(&outcome),
            Err(err) => {
                warn!(era = task.era, kind = %task.kind, "{err}");
                report.failed += 1;
            }
        }
    }

    report
}
