use super::types::{Args, DatabaseType, PostgresSource};
use super::validation::{check_not_blank, resolve_secret};

pub const DEFAULT_SQLITE_FILE: &str = "golf_log.db";
pub const DEFAULT_POSTGRES_DB: &str = "golf_db";

impl Args {
    /// Validate the database settings for the selected backend.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database configuration is invalid
    pub fn validate(&mut self) -> Result<(), String> {
        if self.db_type == DatabaseType::Postgres {
            if self.connection_url().is_some() {
                return Ok(());
            }
            check_not_blank("host", &self.db_host)?;
            check_not_blank("user", &self.db_user)?;
            check_not_blank("password", &self.db_password)?;
            self.db_password = resolve_secret(&self.db_password)?;
        }
        if self.db_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err("Database name must not be blank".to_string());
        }
        Ok(())
    }

    /// The connection string, if one was given and is not blank.
    #[must_use]
    pub fn connection_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn resolved_db_name(&self) -> String {
        match (&self.db_name, self.db_type) {
            (Some(name), _) => name.trim().to_string(),
            (None, DatabaseType::Sqlite) => DEFAULT_SQLITE_FILE.to_string(),
            (None, DatabaseType::Postgres) => DEFAULT_POSTGRES_DB.to_string(),
        }
    }

    #[must_use]
    pub fn postgres_source(&self) -> PostgresSource {
        match self.connection_url() {
            Some(url) => PostgresSource::Url(url.to_string()),
            None => PostgresSource::Params {
                host: self.db_host.clone(),
                port: self.db_port,
                user: self.db_user.clone(),
                password: self.db_password.clone(),
                dbname: self.resolved_db_name(),
            },
        }
    }
}
