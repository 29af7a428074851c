use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strsim::levenshtein;

use crate::errors::CostError;

/// Phases of a family-court proceeding, each keyed into per-stage cost tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Application,
    CaseConference,
    SettlementConference,
    TrialManagementConference,
    Trial,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Application,
        Stage::CaseConference,
        Stage::SettlementConference,
        Stage::TrialManagementConference,
        Stage::Trial,
    ];

    /// Lower-case slug used inside province data keys.
    pub fn slug(self) -> &'static str {
        match self {
            Stage::Application => "application",
            Stage::CaseConference => "case-conference",
            Stage::SettlementConference => "settlement-conference",
            Stage::TrialManagementConference => "trial-management-conference",
            Stage::Trial => "trial",
        }
    }

    /// Parses a stage name, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, CostError> {
        let normalized = input.trim().to_lowercase().replace([' ', '_'], "-");
        if let Some(stage) = Stage::ALL.into_iter().find(|s| s.slug() == normalized) {
            return Ok(stage);
        }

        let suggestion = Stage::ALL
            .into_iter()
            .map(|s| (levenshtein(s.slug(), &normalized), s.slug()))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= 3)
            .map(|(_, slug)| slug.to_string());

        Err(CostError::UnknownStage {
            input: input.to_string(),
            suggestion,
        })
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Stage {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::parse(s)
    }
}

impl Serialize for Stage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for Stage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Stage::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Representative profile of someone going through the process.
///
/// Field names on the wire follow the persona data sheet. Absent numbers read
/// as zero and absent flags as false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    #[serde(rename = "persona", default)]
    pub name: String,
    #[serde(default)]
    pub children: u32,
    pub stage: Stage,
    #[serde(default)]
    pub conflict: f64,
    #[serde(rename = "legal-aid-eligible", default)]
    pub legal_aid_eligible: bool,
    #[serde(default)]
    pub employed: f64,
    #[serde(rename = "days-off-per-appearance", default)]
    pub days_off_per_appearance: f64,
    #[serde(rename = "sick-days-per-appearance", default)]
    pub sick_days_per_appearance: f64,
    #[serde(rename = "move", default)]
    pub moves: bool,
}

impl Persona {
    /// Creates a persona at `stage` with every other attribute zeroed.
    pub fn new(name: impl Into<String>, stage: Stage) -> Self {
        Self {
            name: name.into(),
            children: 0,
            stage,
            conflict: 0.0,
            legal_aid_eligible: false,
            employed: 0.0,
            days_off_per_appearance: 0.0,
            sick_days_per_appearance: 0.0,
            moves: false,
        }
    }

    /// Days away from work for a single court appearance.
    pub fn days_per_appearance(&self) -> f64 {
        self.days_off_per_appearance + self.sick_days_per_appearance
    }

    pub fn kid_bracket(&self) -> KidBracket {
        KidBracket::for_children(self.children)
    }
}

/// Household-size bracket used by legal aid income cutoffs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KidBracket {
    None,
    One,
    TwoOrMore,
}

impl KidBracket {
    pub const ALL: [KidBracket; 3] = [KidBracket::None, KidBracket::One, KidBracket::TwoOrMore];

    pub fn for_children(children: u32) -> Self {
        match children {
            0 => KidBracket::None,
            1 => KidBracket::One,
            _ => KidBracket::TwoOrMore,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            KidBracket::None => "0-kids",
            KidBracket::One => "1-kids",
            KidBracket::TwoOrMore => "2+-kids",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_parse_ignores_case() {
        assert_eq!(Stage::parse("TRIAL").unwrap(), Stage::Trial);
        assert_eq!(
            Stage::parse("Case Conference").unwrap(),
            Stage::CaseConference
        );
    }

    #[test]
    fn stage_parse_suggests_closest_slug() {
        match Stage::parse("aplication") {
            Err(CostError::UnknownStage { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("application"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn kid_bracket_matches_sheet_keys() {
        assert_eq!(KidBracket::for_children(0).slug(), "0-kids");
        assert_eq!(KidBracket::for_children(1).slug(), "1-kids");
        assert_eq!(KidBracket::for_children(4).slug(), "2+-kids");
    }

    #[test]
    fn persona_reads_sheet_field_names() {
        let json = r#"{
            "persona": "Sam",
            "children": 2,
            "stage": "Trial",
            "conflict": 1.5,
            "legal-aid-eligible": true,
            "employed": 0.5,
            "days-off-per-appearance": 1,
            "sick-days-per-appearance": 0.5,
            "move": true
        }"#;
        let persona: Persona = serde_json::from_str(json).unwrap();
        assert_eq!(persona.name, "Sam");
        assert_eq!(persona.stage, Stage::Trial);
        assert!(persona.legal_aid_eligible);
        assert!(persona.moves);
        assert_eq!(persona.days_per_appearance(), 1.5);
    }

    #[test]
    fn persona_defaults_missing_fields_to_falsy() {
        let persona: Persona = serde_json::from_str(r#"{"stage": "application"}"#).unwrap();
        assert_eq!(persona.children, 0);
        assert_eq!(persona.employed, 0.0);
        assert!(!persona.moves);
        assert!(!persona.legal_aid_eligible);
    }
}
