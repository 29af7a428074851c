//! File-backed loaders for province cost tables and personas.

pub mod json_backend;

use crate::errors::CostError;

pub type Result<T> = std::result::Result<T, CostError>;

pub use json_backend::{
    load_personas, load_province_store, load_validated_province_store, parse_province_store,
};
