//! Domain layer - Core records and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The record shapes here are the JSON contract between the directory and
//! catalog services.

pub mod constants;
pub mod error;
pub mod product;
pub mod user;

pub use constants::*;
pub use error::DomainError;
pub use product::{seed_products, CreateProduct, Product, UserProducts};
pub use user::{seed_users, CreateUser, User};
