//! Typed lookups over a [`ProvinceSource`].

use crate::{
    domain::{FieldValue, ProvKey, ProvinceData, Stage, StageMetric, DEFAULT_PROVINCE},
    errors::{CostError, Result},
};

use super::store::ProvinceSource;

/// Reads constants and per-stage schedules for a province, failing loudly on gaps.
#[derive(Debug, Clone)]
pub struct ProvinceDataAccessor<S> {
    source: S,
}

impl<S: ProvinceSource> ProvinceDataAccessor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the full record for `province`.
    pub fn get_prov_data(&self, province: &str) -> Result<&ProvinceData> {
        self.source.lookup(province).ok_or_else(|| {
            tracing::warn!(province, "province not present in data store");
            CostError::ProvinceNotFound(province.to_string())
        })
    }

    /// Returns the record for [`DEFAULT_PROVINCE`].
    pub fn get_default_prov_data(&self) -> Result<&ProvinceData> {
        self.get_prov_data(DEFAULT_PROVINCE)
    }

    /// Returns the raw value stored under `key`.
    pub fn get_field(&self, province: &str, key: &ProvKey) -> Result<&FieldValue> {
        let record = self.get_prov_data(province)?;
        let name = key.as_key();
        tracing::trace!(province, key = %name, "province lookup");
        record.field(&name).ok_or(CostError::MissingField {
            province: province.to_string(),
            key: name,
        })
    }

    pub fn get_number(&self, province: &str, key: &ProvKey) -> Result<f64> {
        self.get_field(province, key)?
            .as_number()
            .ok_or_else(|| CostError::InvalidField {
                province: province.to_string(),
                key: key.as_key(),
            })
    }

    fn at_stage(&self, province: &str, metric: StageMetric, stage: Stage) -> Result<f64> {
        self.get_number(province, &ProvKey::ByStage(metric, stage))
    }

    pub fn find_events_at_stage(&self, province: &str, stage: Stage) -> Result<f64> {
        self.at_stage(province, StageMetric::CourtEvents, stage)
    }

    pub fn find_court_fees_at_stage(&self, province: &str, stage: Stage) -> Result<f64> {
        self.at_stage(province, StageMetric::CourtFees, stage)
    }

    pub fn find_professional_fees_at_stage(&self, province: &str, stage: Stage) -> Result<f64> {
        self.at_stage(province, StageMetric::ProfessionalFees, stage)
    }

    pub fn find_legal_fees_at_stage(&self, province: &str, stage: Stage) -> Result<f64> {
        self.at_stage(province, StageMetric::LegalFees, stage)
    }

    /// Looks up a per-stage schedule by stage name (case-insensitive).
    pub fn find_at_stage_named(
        &self,
        province: &str,
        metric: StageMetric,
        stage: &str,
    ) -> Result<f64> {
        let stage = Stage::parse(&stage.to_lowercase())?;
        self.at_stage(province, metric, stage)
    }
}
