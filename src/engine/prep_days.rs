//! Estimators for days spent preparing for court, with and without a lawyer.

use crate::{
    domain::{LawyerSplit, Persona},
    errors::Result,
};

/// Supplies preparation days for a persona in a province.
///
/// Closures of the same shape implement this trait, so tests and callers can
/// plug in ad-hoc estimators.
pub trait PrepDays: Send + Sync {
    fn prep_days(&self, persona: &Persona, province: &str) -> Result<LawyerSplit>;
}

impl<F> PrepDays for F
where
    F: Fn(&Persona, &str) -> Result<LawyerSplit> + Send + Sync,
{
    fn prep_days(&self, persona: &Persona, province: &str) -> Result<LawyerSplit> {
        self(persona, province)
    }
}

/// Assumes no preparation time beyond the court events themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrepDays;

impl PrepDays for NoPrepDays {
    fn prep_days(&self, _persona: &Persona, _province: &str) -> Result<LawyerSplit> {
        Ok(LawyerSplit::zero())
    }
}

/// Uses the same preparation days for every persona and province.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrepDays(pub LawyerSplit);

impl PrepDays for FixedPrepDays {
    fn prep_days(&self, _persona: &Persona, _province: &str) -> Result<LawyerSplit> {
        Ok(self.0)
    }
}
