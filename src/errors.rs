use thiserror::Error;

/// Error type covering cost-table lookups and the loaders that feed them.
#[derive(Debug, Error)]
pub enum CostError {
    #[error("no cost data for province `{0}`")]
    ProvinceNotFound(String),
    #[error("{key} not defined for {province}")]
    MissingField { province: String, key: String },
    #[error("{key} for {province} is not a number")]
    InvalidField { province: String, key: String },
    #[error("unknown stage `{input}`{}", suggestion_hint(.suggestion))]
    UnknownStage {
        input: String,
        suggestion: Option<String>,
    },
    #[error("{province} is missing {} cost field(s): {}", .missing.len(), .missing.join(", "))]
    IncompleteProvince {
        province: String,
        missing: Vec<String>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(best) => format!(" (did you mean `{best}`?)"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CostError>;
