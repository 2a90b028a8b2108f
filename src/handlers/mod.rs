pub mod app;
pub mod locations;
