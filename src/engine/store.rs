use std::collections::BTreeMap;

use crate::{domain::ProvinceData, errors::CostError};

/// Abstraction over the key-value provider holding province cost tables.
pub trait ProvinceSource: Send + Sync {
    fn lookup(&self, province: &str) -> Option<&ProvinceData>;
}

/// In-memory set of province records keyed by province code.
#[derive(Debug, Clone, Default)]
pub struct ProvinceStore {
    records: BTreeMap<String, ProvinceData>,
}

impl ProvinceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any existing entry for the same province.
    pub fn insert(&mut self, record: ProvinceData) -> Option<ProvinceData> {
        self.records.insert(record.province.clone(), record)
    }

    pub fn provinces(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks that every record carries the full stage × metric schedule.
    pub fn validate(&self) -> Result<(), CostError> {
        for record in self.records.values() {
            let missing = record.missing_fields();
            if !missing.is_empty() {
                tracing::warn!(
                    province = %record.province,
                    missing = missing.len(),
                    "incomplete province cost table"
                );
                return Err(CostError::IncompleteProvince {
                    province: record.province.clone(),
                    missing,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<ProvinceData> for ProvinceStore {
    fn from_iter<I: IntoIterator<Item = ProvinceData>>(iter: I) -> Self {
        let mut store = ProvinceStore::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

impl ProvinceSource for ProvinceStore {
    fn lookup(&self, province: &str) -> Option<&ProvinceData> {
        self.records.get(province)
    }
}

impl<T: ProvinceSource + ?Sized> ProvinceSource for &T {
    fn lookup(&self, province: &str) -> Option<&ProvinceData> {
        (**self).lookup(province)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProvKey;

    #[test]
    fn later_records_replace_earlier_ones() {
        let mut store = ProvinceStore::new();
        store.insert(ProvinceData::new("ON").with(ProvKey::MovingCosts, 1.0));
        let replaced = store.insert(ProvinceData::new("ON").with(ProvKey::MovingCosts, 2.0));
        assert!(replaced.is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn validate_rejects_incomplete_records() {
        let store: ProvinceStore = [ProvinceData::new("NS")].into_iter().collect();
        match store.validate() {
            Err(CostError::IncompleteProvince { province, missing }) => {
                assert_eq!(province, "NS");
                assert!(missing.contains(&"mediation-fees".to_string()));
            }
            other => panic!("expected incomplete province, got {other:?}"),
        }
    }
}
