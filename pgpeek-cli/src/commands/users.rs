//! `pgpeek users` command - List users.

use crate::error::CliResult;
use crate::inspect::{Inspector, TIMESTAMP_FORMAT, User};
use crate::output::{self, TextTable};

/// Run the users command
pub async fn run<I: Inspector>(inspector: &I) -> CliResult<()> {
    let users = inspector.users().await?;
    print!("{}", render(&users));
    Ok(())
}

/// Render the user listing
pub fn render(users: &[User]) -> String {
    let mut table = TextTable::new(
        &[("ID", 36), ("USERNAME", 20), ("EMAIL", 30), ("CREATED AT", 25)],
        111,
    );
    for user in users {
        table.push_row([
            user.id.clone(),
            user.username.clone(),
            user.email.clone(),
            user.created_at.format(TIMESTAMP_FORMAT).to_string(),
        ]);
    }

    output::listing("Users", &table, "No users found.", "Total users")
}
