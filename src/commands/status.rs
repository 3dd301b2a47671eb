use anyhow::{Context, Result};

use crate::commands::open_store;

pub fn run(service: &str) -> Result<()> {
    let store = open_store(service);
    let occupied = store
        .exists::<String>()
        .context("Failed to query the slot")?;

    if occupied {
        println!("Slot is occupied.");
    } else {
        println!("Slot is empty.");
    }
    Ok(())
}
