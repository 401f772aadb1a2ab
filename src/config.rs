//! Login credentials for the calendar page.

use anyhow::Result;

const USERNAME_VAR: &str = "GRUNDFOSKORET_USERNAME";
const PASSWORD_VAR: &str = "GRUNDFOSKORET_PASSWORD";

/// Frontend login for the choir site, read from the environment.
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Read both credential variables, failing with a remedy when either
    /// is missing.
    pub fn from_env() -> Result<Credentials> {
        Ok(Credentials {
            username: read_var(USERNAME_VAR)?,
            password: read_var(PASSWORD_VAR)?,
        })
    }
}

fn read_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| {
        anyhow::anyhow!(
            "{} is not set.\n\n\
            Export the choir page login first:\n\n\
            export {}=...\n\
            export {}=...",
            name,
            USERNAME_VAR,
            PASSWORD_VAR
        )
    })
}
