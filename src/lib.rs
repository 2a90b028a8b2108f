//! Bearer-token protected HTTP directory of MedRehab Group clinic locations.
//!
//! The directory is compiled into the process and never mutated at runtime;
//! handlers are stateless and safe under any level of concurrency.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod startup;

pub use startup::AppState;
