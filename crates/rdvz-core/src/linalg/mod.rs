// crates/rdvz-core/src/linalg/mod.rs
//
// Fixed-size 3x3 arithmetic for the CW pipeline. Everything here is a
// plain `Copy` value; there is no general N-dimensional machinery.

pub mod mat3;
pub mod vec3;
