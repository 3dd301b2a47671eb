use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};

use crate::commands::open_store;

pub fn run(service: &str) -> Result<()> {
    let secret = rpassword::prompt_password("Secret value: ")
        .context("Failed to read secret value")?;
    if secret.is_empty() {
        anyhow::bail!("Secret value must not be empty.");
    }
    let secret = SecretString::new(secret);

    let store = open_store(service);
    store
        .store(&secret.expose_secret().to_string())
        .context("Failed to store the secret")?;

    println!("Secret stored.");
    Ok(())
}
