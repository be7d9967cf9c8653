//! `pgpeek roles` command - List roles.

use crate::error::CliResult;
use crate::inspect::{Inspector, Role, TIMESTAMP_FORMAT};
use crate::output::{self, TextTable};

/// Run the roles command
pub async fn run<I: Inspector>(inspector: &I) -> CliResult<()> {
    let roles = inspector.roles().await?;
    print!("{}", render(&roles));
    Ok(())
}

/// Render the role listing
pub fn render(roles: &[Role]) -> String {
    let mut table = TextTable::new(
        &[("ID", 36), ("NAME", 20), ("DESCRIPTION", 30), ("CREATED AT", 25)],
        111,
    );
    for role in roles {
        table.push_row([
            role.id.clone(),
            role.name.clone(),
            role.description.clone().unwrap_or_default(),
            role.created_at.format(TIMESTAMP_FORMAT).to_string(),
        ]);
    }

    output::listing("Roles", &table, "No roles found.", "Total roles")
}
