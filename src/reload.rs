//! DNS resolver reload notification.
//!
//! After the hosts file changes the resolver has to be told to re-read it. By default this runs
//! `systemctl reload dnsmasq.service`; see [`Config::reload_command`][crate::config::Config].
//! The command's output is discarded, only its exit status matters. Failures are reported to
//! the caller and never retried.

use crate::error::Error;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;

/// A shared, type-erased [`Reloader`].
pub type DynReloader = Arc<dyn Reloader + Send + Sync>;

#[async_trait::async_trait]
pub trait Reloader {
    /// Notify the resolver that the hosts file has changed.
    async fn reload(&self) -> Result<(), Error>;
}

/// Reloads by running an external command.
#[derive(Debug, Clone)]
pub struct CommandReloader {
    program: String,
    args: Vec<String>,
}

impl CommandReloader {
    /// Build a reloader from an argv style command line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the command line is empty.
    pub fn new(command: &[String]) -> Result<Self, Error> {
        let (program, args) = command
            .split_first()
            .ok_or(Error::InvalidConfig("reload_command must not be empty"))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait::async_trait]
impl Reloader for CommandReloader {
    async fn reload(&self) -> Result<(), Error> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;
        if !status.success() {
            return Err(Error::ReloadFailed {
                command: self.command_line(),
                status,
            });
        }
        tracing::debug!("ran `{}`", self.command_line());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_command_reloader_empty() {
        assert!(matches!(
            CommandReloader::new(&[]),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_command_line() {
        let reloader = CommandReloader::new(&argv(&["systemctl", "reload", "dnsmasq.service"]))
            .unwrap();
        assert_eq!(reloader.command_line(), "systemctl reload dnsmasq.service");
    }

    #[tokio::test]
    async fn test_command_reloader_success() {
        let reloader = CommandReloader::new(&argv(&["sh", "-c", "exit 0"])).unwrap();
        reloader.reload().await.unwrap();
    }

    #[tokio::test]
    async fn test_command_reloader_exit_failure() {
        let reloader = CommandReloader::new(&argv(&["sh", "-c", "exit 3"])).unwrap();
        let err = reloader.reload().await.unwrap_err();
        assert!(matches!(err, Error::ReloadFailed { .. }));
        assert!(err.to_string().starts_with("reload command `sh -c exit 3` exited with"));
    }

    #[tokio::test]
    async fn test_command_reloader_spawn_failure() {
        let reloader = CommandReloader::new(&argv(&["/nonexistent/hostcrab-reload"])).unwrap();
        assert!(matches!(reloader.reload().await, Err(Error::IO(_))));
    }
}
