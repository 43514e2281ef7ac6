//! # HTTP Server Module
//!
//! Axum-based HTTP surface for the student roster.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/students` - Create and list students
//! - `/students/{id}` - Get, update, delete one student
//! - `/students/{id}/summary` - One-sentence summary

pub mod config;
pub mod server;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
pub use student_routes::{student_routes, StudentState};
