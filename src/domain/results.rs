use serde::{Deserialize, Serialize};

/// An amount estimated both with and without a lawyer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawyerSplit {
    pub lawyer: f64,
    pub no_lawyer: f64,
}

impl LawyerSplit {
    pub fn new(lawyer: f64, no_lawyer: f64) -> Self {
        Self { lawyer, no_lawyer }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Adds the same amount to both variants.
    pub fn offset(self, amount: f64) -> Self {
        Self::new(self.lawyer + amount, self.no_lawyer + amount)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.lawyer * factor, self.no_lawyer * factor)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalFees {
    pub lawyer: f64,
    pub no_lawyer: f64,
    /// Fees when the dispute is settled through mediation at the application stage.
    pub mediation: f64,
}

/// Unformatted amounts for every expense category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub child_care: LawyerSplit,
    pub legal_fees: LegalFees,
    pub transport: f64,
    pub lost_income: f64,
    pub moving: f64,
}

/// Formatted out-of-pocket estimate, one currency string per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub child_care_lawyer: String,
    pub child_care_no_lawyer: String,
    pub fees_lawyer: String,
    pub fees_no_lawyer: String,
    pub mediation: String,
    pub transport: String,
    pub lost_income: String,
    pub moving: String,
}

impl CalculationResult {
    /// Label/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("Child care (lawyer)", self.child_care_lawyer.as_str()),
            ("Child care (no lawyer)", self.child_care_no_lawyer.as_str()),
            ("Fees (lawyer)", self.fees_lawyer.as_str()),
            ("Fees (no lawyer)", self.fees_no_lawyer.as_str()),
            ("Mediation", self.mediation.as_str()),
            ("Transport", self.transport.as_str()),
            ("Lost income", self.lost_income.as_str()),
            ("Moving", self.moving.as_str()),
        ]
    }
}
