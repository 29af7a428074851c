use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    domain::{Persona, ProvinceData},
    engine::ProvinceStore,
    errors::CostError,
};

use super::Result;

/// Accepted layouts of a province data file.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProvinceFile {
    Wrapped {
        #[serde(rename = "provData")]
        prov_data: Vec<ProvinceData>,
    },
    Bare(Vec<ProvinceData>),
}

impl ProvinceFile {
    fn into_records(self) -> Vec<ProvinceData> {
        match self {
            ProvinceFile::Wrapped { prov_data } => prov_data,
            ProvinceFile::Bare(records) => records,
        }
    }
}

/// Parses province cost tables from JSON text.
pub fn parse_province_store(data: &str) -> Result<ProvinceStore> {
    let file: ProvinceFile = serde_json::from_str(data)?;
    Ok(file.into_records().into_iter().collect())
}

/// Loads province cost tables from disk.
pub fn load_province_store(path: &Path) -> Result<ProvinceStore> {
    let data = fs::read_to_string(path)?;
    let store = parse_province_store(&data)?;
    tracing::info!(
        path = %path.display(),
        provinces = store.len(),
        "loaded province cost tables"
    );
    Ok(store)
}

/// Loads province cost tables and rejects any record missing a required field.
pub fn load_validated_province_store(path: &Path) -> Result<ProvinceStore> {
    let store = load_province_store(path)?;
    store.validate()?;
    Ok(store)
}

/// Loads a JSON array of personas.
pub fn load_personas(path: &Path) -> Result<Vec<Persona>> {
    let data = fs::read_to_string(path)?;
    let personas: Vec<Persona> = serde_json::from_str(&data).map_err(|err| {
        tracing::warn!(path = %path.display(), error = %err, "unreadable persona file");
        CostError::Serde(err)
    })?;
    tracing::info!(path = %path.display(), count = personas.len(), "loaded personas");
    Ok(personas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ProvinceSource;

    #[test]
    fn accepts_wrapped_and_bare_layouts() {
        let wrapped = r#"{"provData": [{"province": "ON", "moving-costs": 1500}]}"#;
        let bare = r#"[{"province": "ON", "moving-costs": 1500}, {"province": "BC"}]"#;

        let store = parse_province_store(wrapped).unwrap();
        assert_eq!(store.len(), 1);
        let store = parse_province_store(bare).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.lookup("BC").is_some());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_province_store("{\"provData\": 3}").unwrap_err();
        assert!(matches!(err, CostError::Serde(_)));
    }
}
