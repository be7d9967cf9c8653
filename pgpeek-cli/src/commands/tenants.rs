//! `pgpeek tenants` command - List tenants.

use crate::error::CliResult;
use crate::inspect::{Inspector, TIMESTAMP_FORMAT, Tenant};
use crate::output::{self, TextTable};

/// Run the tenants command
pub async fn run<I: Inspector>(inspector: &I) -> CliResult<()> {
    let tenants = inspector.tenants().await?;
    print!("{}", render(&tenants));
    Ok(())
}

/// Render the tenant listing
pub fn render(tenants: &[Tenant]) -> String {
    let mut table = TextTable::new(&[("ID", 36), ("NAME", 30), ("CREATED AT", 25)], 91);
    for tenant in tenants {
        table.push_row([
            tenant.id.clone(),
            tenant.name.clone(),
            tenant.created_at.format(TIMESTAMP_FORMAT).to_string(),
        ]);
    }

    output::listing("Tenants", &table, "No tenants found.", "Total tenants")
}
