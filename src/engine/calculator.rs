//! Out-of-pocket expense calculations.
//!
//! Every operation is a pure function of the persona, the province cost table
//! and the [`UserInputs`] the calculator was built with. Lookup failures
//! propagate unchanged; nothing is caught or replaced with a default.

use crate::{
    currency::CurrencyFormatter,
    domain::{
        CalculationResult, CostBreakdown, LawyerSplit, LegalFees, Persona, ProvKey, Stage,
        UserInputs, DEFAULT_PROVINCE,
    },
    errors::Result,
};

use super::{accessor::ProvinceDataAccessor, prep_days::PrepDays, store::ProvinceSource};

/// Working days per year used to turn annual income into a daily rate.
pub const WORKING_DAYS_PER_YEAR: f64 = 242.0;

/// Mediation is always priced as if settled at the application stage.
pub const MEDIATION_STAGE: Stage = Stage::Application;

/// Combines province cost tables, user inputs and a prep-day estimator.
pub struct ExpenseCalculator<S, P, F> {
    accessor: ProvinceDataAccessor<S>,
    prep_days: P,
    formatter: F,
    inputs: UserInputs,
    working_days_per_year: f64,
}

impl<S, P, F> ExpenseCalculator<S, P, F>
where
    S: ProvinceSource,
    P: PrepDays,
    F: CurrencyFormatter,
{
    pub fn new(source: S, prep_days: P, formatter: F, inputs: UserInputs) -> Self {
        Self {
            accessor: ProvinceDataAccessor::new(source),
            prep_days,
            formatter,
            inputs,
            working_days_per_year: WORKING_DAYS_PER_YEAR,
        }
    }

    pub fn with_working_days(mut self, days: f64) -> Self {
        self.working_days_per_year = days;
        self
    }

    pub fn inputs(&self) -> &UserInputs {
        &self.inputs
    }

    pub fn accessor(&self) -> &ProvinceDataAccessor<S> {
        &self.accessor
    }

    /// Days needing child care: court events at the persona's stage plus prep days.
    pub fn calculate_child_care_days(&self, persona: &Persona, prov: &str) -> Result<LawyerSplit> {
        if persona.children == 0 {
            return Ok(LawyerSplit::zero());
        }
        let events = self.accessor.find_events_at_stage(prov, persona.stage)?;
        let prep = self.prep_days.prep_days(persona, prov)?;
        Ok(prep.offset(events))
    }

    pub fn calculate_child_care_cost(&self, persona: &Persona, prov: &str) -> Result<LawyerSplit> {
        if persona.children == 0 {
            return Ok(LawyerSplit::zero());
        }
        let days = self.calculate_child_care_days(persona, prov)?;
        let per_child = self
            .accessor
            .get_number(prov, &ProvKey::ChildCarePerChildPerDay)?;
        let care_cost = per_child * f64::from(persona.children);
        Ok(days.scale(care_cost))
    }

    /// Whether legal aid covers the persona's lawyer fees.
    ///
    /// Personas flagged ineligible never qualify. Everyone else qualifies when
    /// income falls below the province cutoff for their household size.
    pub fn get_legal_aid_eligibility(&self, persona: &Persona, prov: &str) -> Result<bool> {
        if !persona.legal_aid_eligible {
            return Ok(false);
        }
        let cutoff = self
            .accessor
            .get_number(prov, &ProvKey::LegalAidEligibility(persona.kid_bracket()))?;
        Ok(self.inputs.income < cutoff)
    }

    pub fn calculate_legal_fees(&self, persona: &Persona, prov: &str) -> Result<LegalFees> {
        let legal_aid_multiple = if self.get_legal_aid_eligibility(persona, prov)? {
            0.0
        } else {
            1.0
        };
        let accessor = &self.accessor;

        let legal_fees = accessor.find_legal_fees_at_stage(prov, persona.stage)?;
        let court_fees = accessor.find_court_fees_at_stage(prov, persona.stage)?;
        let prof_fees = accessor.find_professional_fees_at_stage(prov, persona.stage)?;
        let combined = court_fees + prof_fees;

        let mediation_legal = accessor.find_legal_fees_at_stage(prov, MEDIATION_STAGE)?;
        let mediation_prof = accessor.find_professional_fees_at_stage(prov, MEDIATION_STAGE)?;
        let mediation_court = accessor.find_court_fees_at_stage(prov, MEDIATION_STAGE)?;
        let mediation_flat = accessor.get_number(prov, &ProvKey::MediationFees)?;

        Ok(LegalFees {
            lawyer: legal_fees * persona.conflict * legal_aid_multiple + combined,
            no_lawyer: combined,
            mediation: mediation_legal * legal_aid_multiple
                + mediation_prof
                + mediation_court
                + mediation_flat,
        })
    }

    /// Court events at the persona's stage times the per-trip rate for the distance band.
    pub fn calculate_transport_cost(&self, persona: &Persona, prov: &str) -> Result<f64> {
        let events = self.accessor.find_events_at_stage(prov, persona.stage)?;
        let rate = self
            .accessor
            .get_number(prov, &ProvKey::Transport(self.inputs.distance.clone()))?;
        Ok(events * rate)
    }

    pub fn calculate_lost_income(&self, persona: &Persona, prov: &str) -> Result<f64> {
        if persona.employed == 0.0 {
            return Ok(0.0);
        }
        let events = self.accessor.find_events_at_stage(prov, persona.stage)?;
        let daily_income = self.inputs.income / self.working_days_per_year * persona.employed;
        let days = persona.days_per_appearance();
        // Not applied yet: represented personas may miss fewer days.
        let days_with_lawyer = adjust_for_lawyer(days);
        tracing::trace!(days, days_with_lawyer, "appearance days");
        Ok(events * days * daily_income)
    }

    pub fn calculate_moving_cost(&self, persona: &Persona, prov: &str) -> Result<f64> {
        if !persona.moves {
            return Ok(0.0);
        }
        self.accessor.get_number(prov, &ProvKey::MovingCosts)
    }

    /// Runs every category calculation and returns the raw amounts.
    pub fn calculate_breakdown(&self, persona: &Persona, prov: &str) -> Result<CostBreakdown> {
        let breakdown = CostBreakdown {
            child_care: self.calculate_child_care_cost(persona, prov)?,
            legal_fees: self.calculate_legal_fees(persona, prov)?,
            transport: self.calculate_transport_cost(persona, prov)?,
            lost_income: self.calculate_lost_income(persona, prov)?,
            moving: self.calculate_moving_cost(persona, prov)?,
        };
        tracing::debug!(
            persona = %persona.name,
            province = prov,
            stage = %persona.stage,
            ?breakdown,
            "calculated out-of-pocket breakdown"
        );
        Ok(breakdown)
    }

    /// Formatted out-of-pocket estimate for `persona` in `prov`.
    pub fn calculate_out_of_pocket(&self, persona: &Persona, prov: &str) -> Result<CalculationResult> {
        let breakdown = self.calculate_breakdown(persona, prov)?;
        let fmt = |amount: f64| self.formatter.format_amount(amount);
        Ok(CalculationResult {
            child_care_lawyer: fmt(breakdown.child_care.lawyer),
            child_care_no_lawyer: fmt(breakdown.child_care.no_lawyer),
            fees_lawyer: fmt(breakdown.legal_fees.lawyer),
            fees_no_lawyer: fmt(breakdown.legal_fees.no_lawyer),
            mediation: fmt(breakdown.legal_fees.mediation),
            transport: fmt(breakdown.transport),
            lost_income: fmt(breakdown.lost_income),
            moving: fmt(breakdown.moving),
        })
    }

    /// [`calculate_out_of_pocket`](Self::calculate_out_of_pocket) for [`DEFAULT_PROVINCE`].
    pub fn calculate_out_of_pocket_default(&self, persona: &Persona) -> Result<CalculationResult> {
        self.calculate_out_of_pocket(persona, DEFAULT_PROVINCE)
    }
}

// TODO: reduce appearance days once represented-litigant attendance data is available.
fn adjust_for_lawyer(days: f64) -> f64 {
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        currency::LocaleCurrencyFormatter,
        domain::{DistanceBand, ProvinceData, StageMetric},
        engine::{prep_days::NoPrepDays, store::ProvinceStore},
    };

    fn trial_store() -> ProvinceStore {
        [ProvinceData::new("ON")
            .with(ProvKey::ByStage(StageMetric::CourtEvents, Stage::Trial), 2.0)
            .with(ProvKey::Transport(DistanceBand::new("near")), 20.0)]
        .into_iter()
        .collect()
    }

    fn calculator(
        income: f64,
    ) -> ExpenseCalculator<ProvinceStore, NoPrepDays, LocaleCurrencyFormatter> {
        ExpenseCalculator::new(
            trial_store(),
            NoPrepDays,
            LocaleCurrencyFormatter::default(),
            UserInputs::new(income, "near"),
        )
    }

    #[test]
    fn lost_income_uses_daily_rate_over_working_days() {
        let mut persona = Persona::new("worker", Stage::Trial);
        persona.employed = 1.0;
        persona.days_off_per_appearance = 1.0;
        persona.sick_days_per_appearance = 1.0;
        let lost = calculator(48_400.0).calculate_lost_income(&persona, "ON").unwrap();
        assert_eq!(lost, 800.0);
    }

    #[test]
    fn custom_working_days_change_daily_rate() {
        let mut persona = Persona::new("worker", Stage::Trial);
        persona.employed = 0.5;
        persona.days_off_per_appearance = 1.0;
        let lost = calculator(50_000.0)
            .with_working_days(250.0)
            .calculate_lost_income(&persona, "ON")
            .unwrap();
        assert_eq!(lost, 2.0 * 1.0 * 100.0);
    }

    #[test]
    fn no_children_skips_data_lookups() {
        let persona = Persona::new("solo", Stage::Application);
        let split = calculator(0.0)
            .calculate_child_care_cost(&persona, "NOWHERE")
            .unwrap();
        assert_eq!(split, LawyerSplit::zero());
    }

    #[test]
    fn unemployed_and_staying_personas_cost_nothing_for_those_categories() {
        let persona = Persona::new("home", Stage::Trial);
        let calc = calculator(90_000.0);
        assert_eq!(calc.calculate_lost_income(&persona, "ON").unwrap(), 0.0);
        assert_eq!(calc.calculate_moving_cost(&persona, "ON").unwrap(), 0.0);
    }
}
