//! Per-province cost schedules and the typed keys used to read them.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use super::{
    inputs::DistanceBand,
    persona::{KidBracket, Stage},
};

pub const DEFAULT_PROVINCE: &str = "ON";

/// Per-stage schedules held by each province record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageMetric {
    CourtEvents,
    CourtFees,
    ProfessionalFees,
    LegalFees,
}

impl StageMetric {
    pub const ALL: [StageMetric; 4] = [
        StageMetric::CourtEvents,
        StageMetric::CourtFees,
        StageMetric::ProfessionalFees,
        StageMetric::LegalFees,
    ];

    fn prefix(self) -> &'static str {
        match self {
            StageMetric::CourtEvents => "court-events",
            StageMetric::CourtFees => "court-fees",
            StageMetric::ProfessionalFees => "professional-fees",
            StageMetric::LegalFees => "legal-fees",
        }
    }
}

/// A field of a province record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProvKey {
    ChildCarePerChildPerDay,
    LegalAidEligibility(KidBracket),
    ByStage(StageMetric, Stage),
    MediationFees,
    Transport(DistanceBand),
    MovingCosts,
}

impl ProvKey {
    /// Renders the hyphenated key used by the cost-table data.
    pub fn as_key(&self) -> String {
        match self {
            ProvKey::ChildCarePerChildPerDay => "child-care-per-child-per-day".into(),
            ProvKey::LegalAidEligibility(bracket) => {
                format!("legal-aid-eligibility-{}", bracket.slug())
            }
            ProvKey::ByStage(metric, stage) => {
                format!("{}-by-stage-{}", metric.prefix(), stage.slug())
            }
            ProvKey::MediationFees => "mediation-fees".into(),
            ProvKey::Transport(band) => format!("transport-{}", band.as_str()),
            ProvKey::MovingCosts => "moving-costs".into(),
        }
    }

    /// Every key a complete record must carry, excluding data-defined transport bands.
    pub fn required() -> Vec<ProvKey> {
        let mut keys = vec![
            ProvKey::ChildCarePerChildPerDay,
            ProvKey::MediationFees,
            ProvKey::MovingCosts,
        ];
        keys.extend(KidBracket::ALL.into_iter().map(ProvKey::LegalAidEligibility));
        for metric in StageMetric::ALL {
            keys.extend(
                Stage::ALL
                    .into_iter()
                    .map(|stage| ProvKey::ByStage(metric, stage)),
            );
        }
        keys
    }
}

impl fmt::Display for ProvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

/// Raw value stored under a province key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Cost schedule for a single province.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceData {
    pub province: String,
    #[serde(flatten)]
    fields: BTreeMap<String, FieldValue>,
}

impl ProvinceData {
    pub fn new(province: impl Into<String>) -> Self {
        Self {
            province: province.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style setter for numeric fields.
    pub fn with(mut self, key: ProvKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: ProvKey, value: f64) {
        self.fields.insert(key.as_key(), FieldValue::Number(value));
    }

    pub fn set_raw(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Transport bands the record defines, in key order.
    pub fn distance_bands(&self) -> Vec<DistanceBand> {
        self.keys()
            .filter_map(|key| key.strip_prefix("transport-"))
            .map(DistanceBand::new)
            .collect()
    }

    /// Lists every required key absent from the record.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing: Vec<String> = ProvKey::required()
            .iter()
            .map(ProvKey::as_key)
            .filter(|key| !self.fields.contains_key(key))
            .collect();
        if self.distance_bands().is_empty() {
            missing.push("transport-<band>".into());
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_render_like_the_data_sheet() {
        assert_eq!(
            ProvKey::ByStage(StageMetric::CourtEvents, Stage::Trial).as_key(),
            "court-events-by-stage-trial"
        );
        assert_eq!(
            ProvKey::LegalAidEligibility(KidBracket::TwoOrMore).as_key(),
            "legal-aid-eligibility-2+-kids"
        );
        assert_eq!(
            ProvKey::Transport(DistanceBand::new("Near")).as_key(),
            "transport-near"
        );
    }

    #[test]
    fn record_round_trips_flattened_fields() {
        let json = r#"{"province": "BC", "moving-costs": 1200, "has-unified-court": true}"#;
        let record: ProvinceData = serde_json::from_str(json).unwrap();
        assert_eq!(record.province, "BC");
        assert_eq!(
            record.field("moving-costs").and_then(FieldValue::as_number),
            Some(1200.0)
        );
        assert_eq!(
            record.field("has-unified-court"),
            Some(&FieldValue::Flag(true))
        );
    }

    #[test]
    fn missing_fields_reports_absent_combinations() {
        let mut record = ProvinceData::new("ON");
        for key in ProvKey::required() {
            record.set(key, 1.0);
        }
        record.set(ProvKey::Transport(DistanceBand::new("near")), 10.0);
        assert!(record.missing_fields().is_empty());

        let mut record = record.clone();
        record.fields.remove("court-fees-by-stage-trial");
        assert_eq!(record.missing_fields(), vec!["court-fees-by-stage-trial"]);
    }
}
