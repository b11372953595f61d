use clap::{Parser, ValueEnum};

use crate::model::course::DEFAULT_COURSE_NAME;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DatabaseType {
    #[default]
    Sqlite,
    Postgres,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Database type: sqlite or postgres
    #[arg(
        short = 'd',
        long,
        value_name = "DATABASE_TYPE",
        env = "DB_TYPE",
        value_enum,
        default_value_t
    )]
    pub db_type: DatabaseType,
    // Only necessary for postgres.
    #[arg(long, value_name = "DATABASE_HOST", env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,
    #[arg(
        short = 'p',
        long,
        value_name = "DATABASE_PORT",
        env = "DB_PORT",
        default_value_t = 5432
    )]
    pub db_port: u16,
    #[arg(
        short = 'u',
        long,
        value_name = "DATABASE_USER",
        env = "DB_USER",
        default_value = "postgres"
    )]
    pub db_user: String,
    /// Password, or the path of a mounted secrets file holding it.
    #[arg(
        short = 'w',
        long,
        value_name = "DATABASE_PASSWORD",
        env = "DB_PASS",
        default_value = "password",
        hide_env_values = true
    )]
    pub db_password: String,

    /// For postgres, the name of the database. For sqlite, the filename.
    #[arg(short = 'n', long, value_name = "DATABASE_NAME", env = "DB_NAME")]
    pub db_name: Option<String>,
    /// Postgres connection string; when set it wins over the individual parameters.
    #[arg(long, value_name = "DATABASE_URL", env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    #[arg(long, value_name = "ADDR", env = "BIND_ADDR", default_value = "0.0.0.0:8081")]
    pub bind: String,
    /// Course name the configuration panel starts with.
    #[arg(long, value_name = "COURSE", env = "DEFAULT_COURSE", default_value = DEFAULT_COURSE_NAME)]
    pub default_course: String,
}

/// Where the postgres backend connects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostgresSource {
    /// Hosted database; always reached over TLS.
    Url(String),
    /// Local server, plain TCP.
    Params {
        host: String,
        port: u16,
        user: String,
        password: String,
        dbname: String,
    },
}

impl PostgresSource {
    #[must_use]
    pub fn requires_tls(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_type: DatabaseType,
    /// Sqlite file path, or the postgres database name.
    pub db_name: String,
    pub postgres: PostgresSource,
    pub bind: String,
    pub default_course: String,
}
