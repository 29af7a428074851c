//! Calculation services over province cost tables.
//! Depends on `domain`; no terminal I/O and no file access.

pub mod accessor;
pub mod calculator;
pub mod prep_days;
pub mod store;

pub use accessor::ProvinceDataAccessor;
pub use calculator::{ExpenseCalculator, MEDIATION_STAGE, WORKING_DAYS_PER_YEAR};
pub use prep_days::{FixedPrepDays, NoPrepDays, PrepDays};
pub use store::{ProvinceSource, ProvinceStore};
