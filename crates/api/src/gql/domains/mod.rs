pub mod aeronaves;
