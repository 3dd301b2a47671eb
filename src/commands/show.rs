use anyhow::{Context, Result};
use keyslot::KeyslotError;

use crate::commands::open_store;

pub fn run(service: &str) -> Result<()> {
    let store = open_store(service);

    match store.retrieve::<String>() {
        Ok(secret) => {
            println!("{}", secret);
            Ok(())
        }
        Err(KeyslotError::NoItem) => {
            println!("No secret stored. Add one with: keyslot set");
            Ok(())
        }
        Err(e) => Err(e).context("Failed to retrieve the secret"),
    }
}
