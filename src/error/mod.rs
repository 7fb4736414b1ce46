//! Error handling for the bookstore manager.
//!
//! `AppError` is the application-wide error type; diesel errors are routed
//! through [`DatabaseErrorConverter`], which leans on [`ConstraintParser`]
//! to turn PostgreSQL constraint violations into structured variants.

pub mod app_error;
pub mod constraint_parser;
pub mod database_converter;

pub use app_error::{AppError, AppResult, ValidationFieldError};
pub use constraint_parser::ConstraintParser;
pub use database_converter::DatabaseErrorConverter;
