//! Módulo de base de datos
//!
//! Maneja la conexión con PostgreSQL y los datos de demostración

pub mod connection;
pub mod seed;

pub use connection::connect;
