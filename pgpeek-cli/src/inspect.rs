//! Database inspection.
//!
//! Commands talk to the database through the [`Inspector`] trait so the
//! rendering code can be exercised without a live server.

use std::fmt::Display;

use chrono::NaiveDateTime;
use tracing::warn;

use crate::error::CliResult;
use crate::output;

/// Timestamp format used in every listing.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Server metadata shown by `pgpeek db`.
///
/// A field is `None` when its query failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerInfo {
    pub database: Option<String>,
    pub version: Option<String>,
    pub user: Option<String>,
    pub encoding: Option<String>,
    pub timezone: Option<String>,
}

/// A table and its column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub schema: String,
    pub name: String,
    pub column_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Read-only access to the inspected database.
#[allow(async_fn_in_trait)]
pub trait Inspector {
    /// Collect server metadata. Individual failures leave fields empty.
    async fn server_info(&self) -> ServerInfo;

    /// List the tables of `schema`.
    async fn tables(&self, schema: &str) -> CliResult<Vec<TableRow>>;

    /// List tenants ordered by name.
    async fn tenants(&self) -> CliResult<Vec<Tenant>>;

    /// List roles ordered by name.
    async fn roles(&self) -> CliResult<Vec<Role>>;

    /// List users ordered by username.
    async fn users(&self) -> CliResult<Vec<User>>;
}

/// Fixed SQL used by the PostgreSQL inspector.
pub mod queries {
    pub const CURRENT_DATABASE: &str = "SELECT current_database()";
    pub const VERSION: &str = "SELECT version()";
    pub const CURRENT_USER: &str = "SELECT current_user::text";
    pub const SERVER_ENCODING: &str = "SHOW server_encoding";
    pub const TIMEZONE: &str = "SHOW timezone";

    pub const TABLES: &str = "\
        SELECT t.table_schema::text, t.table_name::text, \
               (SELECT count(*) FROM information_schema.columns c \
                 WHERE c.table_schema = t.table_schema AND c.table_name = t.table_name) AS column_count \
        FROM information_schema.tables t \
        WHERE t.table_schema::text = $1 \
        ORDER BY t.table_schema, t.table_name";

    pub const TENANTS: &str = "\
        SELECT id::text, name, created_at::timestamp \
        FROM tenants \
        ORDER BY name";

    pub const ROLES: &str = "\
        SELECT id::text, name, description, created_at::timestamp \
        FROM roles \
        ORDER BY name";

    pub const USERS: &str = "\
        SELECT id::text, username, email, created_at::timestamp \
        FROM users \
        ORDER BY username";
}

/// Decode every row, warning about and dropping the ones that fail.
pub fn decode_rows<R, T, E: Display>(
    rows: &[R],
    what: &str,
    decode: impl Fn(&R) -> Result<T, E>,
) -> Vec<T> {
    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        match decode(row) {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!(what, error = %e, "Skipping row");
                output::warn(&format!("Error scanning row: {}", e));
            }
        }
    }
    items
}

// ============================================================================
// PostgreSQL Inspector
// ============================================================================

#[cfg(feature = "postgres")]
pub mod postgres {
    use super::*;
    use tokio_postgres::{Client, NoTls, Row};
    use tracing::{debug, error};

    use crate::error::CliError;

    /// PostgreSQL inspector over a single connection.
    pub struct PostgresInspector {
        client: Client,
    }

    impl PostgresInspector {
        /// Connect to the database.
        pub async fn connect(connection_string: &str) -> CliResult<Self> {
            debug!(url_len = connection_string.len(), "Connecting to database");
            let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
                .await
                .map_err(|e| CliError::Database(format!("Failed to connect: {}", e)))?;

            // Spawn the connection handler
            tokio::spawn(async move {
                if let Err(e) = connection.await {
                    error!(error = %e, "Connection error");
                }
            });

            Ok(Self { client })
        }

        async fn scalar(&self, sql: &str) -> Option<String> {
            match self.client.query_one(sql, &[]).await {
                Ok(row) => match row.try_get::<_, String>(0) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        debug!(sql, error = %e, "Failed to decode metadata value");
                        None
                    }
                },
                Err(e) => {
                    debug!(sql, error = %e, "Metadata query failed");
                    None
                }
            }
        }

        async fn list<T>(
            &self,
            what: &str,
            sql: &str,
            params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
            decode: fn(&Row) -> Result<T, tokio_postgres::Error>,
        ) -> CliResult<Vec<T>> {
            let rows = self
                .client
                .query(sql, params)
                .await
                .map_err(|e| CliError::Database(format!("Failed to query {}: {}", what, e)))?;
            debug!(what, rows = rows.len(), "Query returned");

            Ok(decode_rows(&rows, what, decode))
        }
    }

    fn table_row(row: &Row) -> Result<TableRow, tokio_postgres::Error> {
        Ok(TableRow {
            schema: row.try_get(0)?,
            name: row.try_get(1)?,
            column_count: row.try_get(2)?,
        })
    }

    fn tenant(row: &Row) -> Result<Tenant, tokio_postgres::Error> {
        Ok(Tenant {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            created_at: row.try_get(2)?,
        })
    }

    fn role(row: &Row) -> Result<Role, tokio_postgres::Error> {
        Ok(Role {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            description: row.try_get(2)?,
            created_at: row.try_get(3)?,
        })
    }

    fn user(row: &Row) -> Result<User, tokio_postgres::Error> {
        Ok(User {
            id: row.try_get(0)?,
            username: row.try_get(1)?,
            email: row.try_get(2)?,
            created_at: row.try_get(3)?,
        })
    }

    impl Inspector for PostgresInspector {
        async fn server_info(&self) -> ServerInfo {
            ServerInfo {
                database: self.scalar(queries::CURRENT_DATABASE).await,
                version: self.scalar(queries::VERSION).await,
                user: self.scalar(queries::CURRENT_USER).await,
                encoding: self.scalar(queries::SERVER_ENCODING).await,
                timezone: self.scalar(queries::TIMEZONE).await,
            }
        }

        async fn tables(&self, schema: &str) -> CliResult<Vec<TableRow>> {
            self.list("tables", queries::TABLES, &[&schema], table_row).await
        }

        async fn tenants(&self) -> CliResult<Vec<Tenant>> {
            self.list("tenants", queries::TENANTS, &[], tenant).await
        }

        async fn roles(&self) -> CliResult<Vec<Role>> {
            self.list("roles", queries::ROLES, &[], role).await
        }

        async fn users(&self) -> CliResult<Vec<User>> {
            self.list("users", queries::USERS, &[], user).await
        }
    }
}

/// Connect to the database named by `url`.
#[cfg(feature = "postgres")]
pub async fn connect(url: &str) -> CliResult<postgres::PostgresInspector> {
    postgres::PostgresInspector::connect(url).await
}

/// Connect to the database named by `url`.
#[cfg(not(feature = "postgres"))]
pub async fn connect(_url: &str) -> CliResult<unsupported::Unsupported> {
    Err(crate::error::CliError::Command(
        "pgpeek was built without the `postgres` feature".to_string(),
    ))
}

#[cfg(not(feature = "postgres"))]
pub mod unsupported {
    use super::*;

    /// Placeholder inspector for builds without a database driver.
    pub enum Unsupported {}

    impl Inspector for Unsupported {
        async fn server_info(&self) -> ServerInfo {
            match *self {}
        }

        async fn tables(&self, _schema: &str) -> CliResult<Vec<TableRow>> {
            match *self {}
        }

        async fn tenants(&self) -> CliResult<Vec<Tenant>> {
            match *self {}
        }

        async fn roles(&self) -> CliResult<Vec<Role>> {
            match *self {}
        }

        async fn users(&self) -> CliResult<Vec<User>> {
            match *self {}
        }
    }
}
