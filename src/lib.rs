//! rosterd - A minimal in-memory student roster HTTP service

pub mod cli;
pub mod http_server;
pub mod roster;
