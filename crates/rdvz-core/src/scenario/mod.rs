pub mod defaults;
pub mod scenario;
