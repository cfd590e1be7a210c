//! Workflow artifact retrieval.
//!
//! Artifacts arrive as zip archives. [`GithubClient::fetch_artifact`]
//! downloads one into a scratch directory, extracts it in place, and hands
//! back a [`ReportSource`] over the extracted contents. The scratch
//! directory is a `TempDir` guard, so it is removed on every exit path —
//! early returns and error propagation included.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use crate::error::GithubError;
use crate::http::API_BASE;
use crate::{GithubClient, Method};

/// Scoped handle over a directory of report files.
#[derive(Debug)]
pub enum ReportSource {
    /// Scratch directory owning downloaded artifact contents; removed when
    /// the handle is dropped.
    Scratch(TempDir),
    /// Existing directory supplied by the caller; release is a no-op.
    Local(PathBuf),
}

impl ReportSource {
    /// The directory containing the report files.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Scratch(dir) => dir.path(),
            Self::Local(path) => path.as_path(),
        }
    }
}

impl GithubClient {
    /// Download the zip archive at `url` and extract it into a scratch
    /// directory named after `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] if the download, the write, or the
    /// extraction fails. The scratch directory is released before the error
    /// propagates; nothing is leaked.
    pub async fn fetch_artifact(
        &self,
        url: &str,
        name: &str,
    ) -> Result<ReportSource, GithubError> {
        let scratch = tempfile::Builder::new()
            .prefix("sketchcheck-")
            .tempdir()
            .map_err(|error| {
                GithubError::Artifact(format!("failed to create scratch directory: {error}"))
            })?;

        let response = self.request_raw(Method::GET, url, None).await?;
        stage_archive(scratch.path(), name, &response.body)?;

        Ok(ReportSource::Scratch(scratch))
    }

    /// Resolve the archive download URL of the workflow artifact named
    /// `name`, paging through the repository's artifact listing. The
    /// listing is newest-first, so the first live match wins. `Ok(None)`
    /// when no such artifact exists.
    ///
    /// # Errors
    ///
    /// Propagates transport and parse failures from the listing requests.
    pub async fn find_artifact_download_url(
        &self,
        name: &str,
    ) -> Result<Option<String>, GithubError> {
        let url = format!("{API_BASE}/repos/{}/actions/artifacts", self.repository());
        let mut pages = self.pages(&url);

        while let Some(page) = pages.try_next().await? {
            let artifacts = page.json.get("artifacts").and_then(Value::as_array);
            for artifact in artifacts.into_iter().flatten() {
                if artifact.get("name").and_then(Value::as_str) != Some(name) {
                    continue;
                }
                if artifact.get("expired").and_then(Value::as_bool) == Some(true) {
                    continue;
                }
                if let Some(url) = artifact
                    .get("archive_download_url")
                    .and_then(Value::as_str)
                {
                    return Ok(Some(url.to_string()));
                }
            }
        }

        Ok(None)
    }
}

/// Write the downloaded archive into `scratch`, extract it in place, and
/// remove the archive file.
fn stage_archive(scratch: &Path, name: &str, payload: &[u8]) -> Result<(), GithubError> {
    let archive_path = scratch.join(format!("{name}.zip"));
    fs::write(&archive_path, payload).map_err(|error| {
        GithubError::Artifact(format!(
            "failed to write {}: {error}",
            archive_path.display()
        ))
    })?;

    unpack_archive(&archive_path, scratch)?;

    fs::remove_file(&archive_path).map_err(|error| {
        GithubError::Artifact(format!(
            "failed to remove {}: {error}",
            archive_path.display()
        ))
    })?;

    Ok(())
}

fn unpack_archive(archive: &Path, dest: &Path) -> Result<(), GithubError> {
    let file = File::open(archive).map_err(|error| {
        GithubError::Artifact(format!("failed to open {}: {error}", archive.display()))
    })?;
    let mut zip = zip::ZipArchive::new(file).map_err(|error| {
        GithubError::Artifact(format!("failed to read {}: {error}", archive.display()))
    })?;
    zip.extract(dest).map_err(|error| {
        GithubError::Artifact(format!("failed to extract {}: {error}", archive.display()))
    })
}
