use async_trait::async_trait;
use chrono::NaiveDate;
use deadpool_postgres::tokio_postgres::config::SslMode;
use deadpool_postgres::tokio_postgres::types::ToSql;
use deadpool_postgres::tokio_postgres::{self, Client, NoTls, Row};
use std::future::Future;
use std::sync::Arc;
use tokio_postgres_rustls::MakeRustlsConnect;

use super::{LogStore, RawLogRow, StorageError, TABLE_NAME};
use crate::args::PostgresSource;
use crate::model::choices::Choice;
use crate::model::entry::{HoleEntry, StoredEntry};

const SCHEMA: &str = include_str!("../sql/schema/postgres/00_approach_logs.sql");

const INSERT_SQL: &str = "INSERT INTO approach_logs (round_date, course_name, hole_no, par, \
    dist_range, club, is_green_on, miss_dir, lie_type, recovery_strokes, hole_score, \
    green_type, putts) VALUES ($1::text::date, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
    RETURNING id";

const LIST_SQL: &str = "SELECT id, round_date::text AS round_date, course_name, hole_no, par, \
    dist_range, club, is_green_on, miss_dir, lie_type, recovery_strokes, hole_score, \
    green_type, putts FROM approach_logs WHERE round_date = $1::text::date ORDER BY id DESC";

const DELETE_LATEST_SQL: &str = "DELETE FROM approach_logs WHERE id = \
    (SELECT max(id) FROM approach_logs WHERE round_date = $1::text::date) \
    RETURNING id, round_date::text AS round_date, course_name, hole_no, par, dist_range, club, \
    is_green_on, miss_dir, lie_type, recovery_strokes, hole_score, green_type, putts";

/// PostgreSQL-backed log. Each call connects, runs one statement and drops the
/// client, which ends the connection task.
///
/// A connection string is treated as a hosted database and always requires
/// TLS; the host/port parameters connect in plain text.
#[derive(Clone)]
pub struct PostgresLogStore {
    config: deadpool_postgres::Config,
    tls: bool,
}

fn query_err(e: tokio_postgres::Error) -> StorageError {
    StorageError::Query(e.to_string())
}

fn unavailable(e: tokio_postgres::Error) -> StorageError {
    StorageError::Unavailable(e.to_string())
}

/// rustls client config trusting the webpki root set.
fn tls_connector() -> Result<MakeRustlsConnect, StorageError> {
    let mut roots = rustls::RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = rustls::ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| StorageError::Config(e.to_string()))?
        .with_root_certificates(roots)
        .with_no_client_auth();
    Ok(MakeRustlsConnect::new(config))
}

fn spawn_connection<C>(connection: C)
where
    C: Future<Output = Result<(), tokio_postgres::Error>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::warn!(error = %e, "postgres connection closed with error");
        }
    });
}

fn raw_row(row: &Row) -> Result<RawLogRow, StorageError> {
    Ok(RawLogRow {
        id: i64::from(row.try_get::<_, i32>("id").map_err(query_err)?),
        round_date: row.try_get("round_date").map_err(query_err)?,
        course_name: row.try_get("course_name").map_err(query_err)?,
        hole_no: i64::from(row.try_get::<_, i32>("hole_no").map_err(query_err)?),
        par: i64::from(row.try_get::<_, i32>("par").map_err(query_err)?),
        dist_range: row.try_get("dist_range").map_err(query_err)?,
        club: row.try_get("club").map_err(query_err)?,
        is_green_on: row.try_get("is_green_on").map_err(query_err)?,
        miss_dir: row.try_get("miss_dir").map_err(query_err)?,
        lie_type: row.try_get("lie_type").map_err(query_err)?,
        recovery_strokes: i64::from(row.try_get::<_, i32>("recovery_strokes").map_err(query_err)?),
        hole_score: i64::from(row.try_get::<_, i32>("hole_score").map_err(query_err)?),
        green_type: row.try_get("green_type").map_err(query_err)?,
        putts: i64::from(row.try_get::<_, i32>("putts").map_err(query_err)?),
    })
}

impl PostgresLogStore {
    /// A connection string wins; otherwise the individual parameters are used.
    #[must_use]
    pub fn new(source: &PostgresSource) -> Self {
        let mut config = deadpool_postgres::Config::new();
        match source {
            PostgresSource::Url(url) => {
                config.url = Some(url.clone());
            }
            PostgresSource::Params {
                host,
                port,
                user,
                password,
                dbname,
            } => {
                config.host = Some(host.clone());
                config.port = Some(*port);
                config.user = Some(user.clone());
                config.password = Some(password.clone());
                config.dbname = Some(dbname.clone());
            }
        }
        Self {
            config,
            tls: source.requires_tls(),
        }
    }

    #[must_use]
    pub fn uses_tls(&self) -> bool {
        self.tls
    }

    /// Driver config for one connection; TLS sources are forced to `sslmode=require`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Config` if the connection string does not parse.
    pub fn pg_config(&self) -> Result<tokio_postgres::Config, StorageError> {
        let mut pg_config = self
            .config
            .get_pg_config()
            .map_err(|e| StorageError::Config(e.to_string()))?;
        if self.tls {
            pg_config.ssl_mode(SslMode::Require);
        }
        Ok(pg_config)
    }

    async fn connect(&self) -> Result<Client, StorageError> {
        let pg_config = self.pg_config()?;
        if self.tls {
            let (client, connection) = pg_config
                .connect(tls_connector()?)
                .await
                .map_err(unavailable)?;
            spawn_connection(connection);
            Ok(client)
        } else {
            let (client, connection) = pg_config.connect(NoTls).await.map_err(unavailable)?;
            spawn_connection(connection);
            Ok(client)
        }
    }
}

#[async_trait]
impl LogStore for PostgresLogStore {
    async fn init_schema(&self) -> Result<(), StorageError> {
        let client = self.connect().await?;
        client.batch_execute(SCHEMA).await.map_err(query_err)?;
        tracing::info!(table = TABLE_NAME, "postgres schema ready");
        Ok(())
    }

    async fn insert(&self, entry: &HoleEntry) -> Result<i64, StorageError> {
        let client = self.connect().await?;
        let round_date = entry.round_date.to_string();
        let hole_no = i32::from(entry.hole_no);
        let par = i32::from(entry.par);
        let recovery_strokes = i32::from(entry.recovery_strokes);
        let hole_score = i32::from(entry.hole_score);
        let putts = i32::from(entry.putts);
        let dist_range = entry.dist_range.code();
        let club = entry.club.code();
        let miss_dir = entry.miss_dir.code();
        let lie_type = entry.lie_type.code();
        let green_type = entry.green_type.code();
        let params: [&(dyn ToSql + Sync); 13] = [
            &round_date,
            &entry.course_name,
            &hole_no,
            &par,
            &dist_range,
            &club,
            &entry.is_green_on,
            &miss_dir,
            &lie_type,
            &recovery_strokes,
            &hole_score,
            &green_type,
            &putts,
        ];
        let row = client
            .query_one(INSERT_SQL, &params)
            .await
            .map_err(query_err)?;
        let id: i32 = row.try_get("id").map_err(query_err)?;
        Ok(i64::from(id))
    }

    async fn list(&self, round_date: NaiveDate) -> Result<Vec<StoredEntry>, StorageError> {
        let client = self.connect().await?;
        let round_date = round_date.to_string();
        let rows = client
            .query(LIST_SQL, &[&round_date])
            .await
            .map_err(query_err)?;
        rows.iter()
            .map(|row| raw_row(row)?.into_stored())
            .collect()
    }

    async fn delete_latest(
        &self,
        round_date: NaiveDate,
    ) -> Result<Option<StoredEntry>, StorageError> {
        let client = self.connect().await?;
        let round_date = round_date.to_string();
        let row = client
            .query_opt(DELETE_LATEST_SQL, &[&round_date])
            .await
            .map_err(query_err)?;
        row.map(|row| raw_row(&row)?.into_stored()).transpose()
    }
}
