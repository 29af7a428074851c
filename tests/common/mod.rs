#![allow(dead_code)]

use court_costs::{
    currency::LocaleCurrencyFormatter,
    domain::{DistanceBand, KidBracket, ProvKey, ProvinceData, Stage, StageMetric},
    engine::{ExpenseCalculator, NoPrepDays, PrepDays},
    Persona, ProvinceStore, UserInputs,
};
use once_cell::sync::Lazy;

/// Complete Ontario table shared by the integration tests.
pub static ONTARIO: Lazy<ProvinceStore> = Lazy::new(|| [ontario()].into_iter().collect());

pub fn ontario() -> ProvinceData {
    let per_stage = |metric: StageMetric, values: [f64; 5]| {
        Stage::ALL
            .into_iter()
            .zip(values)
            .map(move |(stage, value)| (ProvKey::ByStage(metric, stage), value))
    };

    let mut record = ProvinceData::new("ON")
        .with(ProvKey::ChildCarePerChildPerDay, 50.0)
        .with(ProvKey::LegalAidEligibility(KidBracket::None), 30_000.0)
        .with(ProvKey::LegalAidEligibility(KidBracket::One), 40_000.0)
        .with(ProvKey::LegalAidEligibility(KidBracket::TwoOrMore), 50_000.0)
        .with(ProvKey::MediationFees, 1_500.0)
        .with(ProvKey::Transport(DistanceBand::new("near")), 20.0)
        .with(ProvKey::Transport(DistanceBand::new("far")), 60.0)
        .with(ProvKey::MovingCosts, 2_500.0);

    // application, case conference, settlement conference, trial management, trial
    let schedules = per_stage(StageMetric::CourtEvents, [1.0, 2.0, 2.0, 1.0, 3.0])
        .chain(per_stage(StageMetric::CourtFees, [200.0, 0.0, 0.0, 0.0, 300.0]))
        .chain(per_stage(
            StageMetric::ProfessionalFees,
            [100.0, 0.0, 250.0, 0.0, 500.0],
        ))
        .chain(per_stage(
            StageMetric::LegalFees,
            [2_000.0, 3_000.0, 4_000.0, 5_000.0, 10_000.0],
        ));
    for (key, value) in schedules {
        record.set(key, value);
    }
    record
}

/// Two children at trial, legal-aid flagged, fully employed and relocating.
pub fn trial_parent() -> Persona {
    Persona {
        name: "Trial parent".into(),
        children: 2,
        stage: Stage::Trial,
        conflict: 1.5,
        legal_aid_eligible: true,
        employed: 1.0,
        days_off_per_appearance: 1.0,
        sick_days_per_appearance: 0.0,
        moves: true,
    }
}

pub fn calculator(
    income: f64,
    distance: &str,
) -> ExpenseCalculator<&'static ProvinceStore, NoPrepDays, LocaleCurrencyFormatter> {
    calculator_with(income, distance, NoPrepDays)
}

pub fn calculator_with<P: PrepDays>(
    income: f64,
    distance: &str,
    prep_days: P,
) -> ExpenseCalculator<&'static ProvinceStore, P, LocaleCurrencyFormatter> {
    ExpenseCalculator::new(
        &*ONTARIO,
        prep_days,
        LocaleCurrencyFormatter::default(),
        UserInputs::new(income, distance),
    )
}

/// Serializes `records` as a province data file.
pub fn province_file_json(records: &[ProvinceData]) -> String {
    serde_json::json!({ "provData": records }).to_string()
}
