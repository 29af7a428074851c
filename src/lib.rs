#![doc(test(attr(deny(warnings))))]

//! Court Costs estimates the out-of-pocket expenses of going through family
//! court: child care, legal and mediation fees, transport, lost income and
//! moving costs, priced from per-province cost tables.

pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod storage;
pub mod utils;

pub use domain::{CalculationResult, Persona, Stage, UserInputs};
pub use engine::{ExpenseCalculator, ProvinceDataAccessor, ProvinceSource, ProvinceStore};
pub use errors::CostError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Court Costs tracing initialized.");
    });
}
