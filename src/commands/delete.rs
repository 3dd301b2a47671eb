use anyhow::{Context, Result};

use crate::commands::open_store;

pub fn run(service: &str) -> Result<()> {
    let store = open_store(service);
    store.delete().context("Failed to clear the slot")?;

    // Delete is idempotent: clearing an already-empty slot also lands here.
    println!("Slot cleared.");
    Ok(())
}
