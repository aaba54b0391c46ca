//! Cars API - CRUD service for car records
//!
//! Serves car records from a relational store with an in-memory
//! read-through TTL cache in front of single-record reads.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod usecases;

pub use api::AppState;
pub use config::Config;
pub use error::{AppError, Result};
