pub mod aeronaves;

pub use aeronaves::{CreateAeronave, UpdateAeronave};
