use crate::error::Error;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub api_bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub api_timeout: Duration,
    pub hosts_path: PathBuf,
    pub users_path: PathBuf,
    pub token_secret: String,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_token_ttl")]
    pub token_ttl: Duration,
    #[serde(default = "default_reload_command")]
    pub reload_command: Vec<String>,
}

fn default_token_ttl() -> Duration {
    Duration::from_secs(60 * 60)
}

fn default_reload_command() -> Vec<String> {
    ["systemctl", "reload", "dnsmasq.service"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Config {
    /// Load a [`Config`] from the JSON file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] or [`Error::InvalidJSON`] if the file can't be read or parsed, and
    /// [`Error::InvalidConfig`] if the token secret or reload command is empty.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        conf.validate()?;
        Ok(conf)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.token_secret.is_empty() {
            return Err(Error::InvalidConfig("token_secret must not be empty"));
        }
        if self.reload_command.is_empty() {
            return Err(Error::InvalidConfig("reload_command must not be empty"));
        }
        Ok(())
    }
}
