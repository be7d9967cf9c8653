//! In-memory [`Inspector`] used by command tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{CliError, CliResult};
use crate::inspect::{Inspector, Role, ServerInfo, TableRow, Tenant, User};

#[derive(Debug, Default)]
pub struct FakeInspector {
    pub info: ServerInfo,
    pub tables: Vec<TableRow>,
    pub tenants: Vec<Tenant>,
    pub roles: Vec<Role>,
    pub users: Vec<User>,
    pub fail: bool,
}

pub fn timestamp(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 30, 0)
        .unwrap()
}

impl FakeInspector {
    fn check(&self, what: &str) -> CliResult<()> {
        if self.fail {
            Err(CliError::Database(format!("Failed to query {}: relation does not exist", what)))
        } else {
            Ok(())
        }
    }
}

impl Inspector for FakeInspector {
    async fn server_info(&self) -> ServerInfo {
        self.info.clone()
    }

    async fn tables(&self, schema: &str) -> CliResult<Vec<TableRow>> {
        self.check("tables")?;
        Ok(self
            .tables
            .iter()
            .filter(|t| t.schema == schema)
            .cloned()
            .collect())
    }

    async fn tenants(&self) -> CliResult<Vec<Tenant>> {
        self.check("tenants")?;
        Ok(self.tenants.clone())
    }

    async fn roles(&self) -> CliResult<Vec<Role>> {
        self.check("roles")?;
        Ok(self.roles.clone())
    }

    async fn users(&self) -> CliResult<Vec<User>> {
        self.check("users")?;
        Ok(self.users.clone())
    }
}
