pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod month;
pub mod routes;
pub mod seed;
pub mod server;
pub mod state;

pub use routes::app;
