//! Servicios de lógica de negocio

pub mod car_filter_service;
