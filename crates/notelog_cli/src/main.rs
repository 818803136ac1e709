//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notelog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use notelog_core::store::EntryStore;

fn main() {
    println!("notelog_core ping={}", notelog_core::ping());
    println!("notelog_core version={}", notelog_core::core_version());

    // One in-memory round trip to prove the store wiring end to end.
    match smoke_round_trip() {
        Ok(count) => println!("notelog_core smoke entries={count}"),
        Err(err) => {
            eprintln!("notelog_core smoke failed: {err}");
            std::process::exit(1);
        }
    }
}

fn smoke_round_trip() -> Result<usize, notelog_core::StoreError> {
    let store = EntryStore::open("memory", "")?;
    store.entry_create("smoke entry #probe", 1)?;
    let entries = store.current()?;
    Ok(entries.len())
}
