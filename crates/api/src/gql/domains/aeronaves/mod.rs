pub mod resolvers;
pub mod service;
pub mod types;
pub mod validation;

pub use resolvers::{AeronaveMutation, AeronaveQuery};
pub use types::{Aeronave, AeronaveInput};
