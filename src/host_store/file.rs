//! A flat file implementation of the [`HostStore`][super::HostStore] trait.
use crate::error::Error;
use crate::host_store::{HostRecord, HostStore};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// A file-backed host store. Every operation reads the file from disk. Adds append a single
/// line, deletes rewrite the whole file.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct FileHostStore {
    path: PathBuf,
}

impl FileHostStore {
    /// Create a [`FileHostStore`] for the hosts file at the given path, creating an empty file
    /// if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the path can't be opened or created.
    pub async fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let path = p.as_ref().to_path_buf();
        match File::open(&path).await {
            Ok(_) => {}
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    tracing::info!("creating empty hosts file {}", path.display());
                    File::create(&path).await?;
                }
                _ => return Err(Error::IO(err)),
            },
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<String, Error> {
        Ok(fs::read_to_string(&self.path).await?)
    }
}

#[async_trait::async_trait]
impl HostStore for FileHostStore {
    async fn list(&self) -> Result<Vec<HostRecord>, Error> {
        let contents = self.read().await?;
        let records = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .filter_map(|(n, line)| {
                let record = HostRecord::from_line(line);
                if record.is_none() {
                    tracing::warn!(
                        "skipping malformed line {} in {}: {line:?}",
                        n + 1,
                        self.path.display()
                    );
                }
                record
            })
            .collect();
        Ok(records)
    }

    async fn exists(&self, hostname: &str) -> Result<bool, Error> {
        let contents = self.read().await?;
        Ok(contents
            .lines()
            .filter_map(HostRecord::from_line)
            .any(|record| record.host == hostname))
    }

    async fn append(&mut self, record: &HostRecord) -> Result<(), Error> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        f.write_all(record.to_line().as_bytes()).await?;
        f.flush().await?;
        Ok(())
    }

    async fn delete(&mut self, hostname: &str) -> Result<(), Error> {
        let contents = self.read().await?;
        let kept: String = contents
            .lines()
            .filter(|line| !line.is_empty() && HostRecord::hostname_field(line) != Some(hostname))
            .map(|line| format!("{line}\n"))
            .collect();

        let mut output_file = File::create(&self.path).await?;
        output_file.write_all(kept.as_bytes()).await?;
        output_file.flush().await?;
        Ok(())
    }
}
