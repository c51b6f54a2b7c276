//! Modelos de datos del catálogo

pub mod car;

pub use car::Car;
