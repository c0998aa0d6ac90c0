use crate::error::Error;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Static username to password mapping, read from a JSON file of the form
/// `{"users": {"admin": "password"}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct UserList {
    users: HashMap<String, String>,
}

impl UserList {
    /// Load the user list from disk. Called for every login attempt so edits to the file take
    /// effect without a restart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the file can't be read, or [`Error::InvalidJSON`] if it isn't a
    /// valid user list.
    pub async fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = tokio::fs::read(p).await?;
        Ok(serde_json::from_slice(&contents)?)
    }

    pub fn check(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| !expected.is_empty() && expected == password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_user_list_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, r#"{"users": {"admin": "hunter2", "nobody": ""}}"#).unwrap();

        let users = UserList::try_from_file(&path).await.unwrap();
        assert!(users.check("admin", "hunter2"));
        assert!(!users.check("admin", "hunter3"));
        assert!(!users.check("admin", ""));
        assert!(!users.check("root", "hunter2"));
        assert!(!users.check("nobody", ""));
    }

    #[tokio::test]
    async fn test_user_list_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");

        assert!(matches!(
            UserList::try_from_file(&path).await,
            Err(Error::IO(_))
        ));

        std::fs::write(&path, r#"{"admin": "hunter2"}"#).unwrap();
        assert!(matches!(
            UserList::try_from_file(&path).await,
            Err(Error::InvalidJSON(_))
        ));
    }
}
