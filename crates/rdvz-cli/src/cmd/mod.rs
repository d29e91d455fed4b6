// crates/rdvz-cli/src/cmd/mod.rs

pub mod plan;
