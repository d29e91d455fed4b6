// crates/rdvz-cli/src/io/mod.rs

pub mod tikz;
