//! Shared fixtures for the rootstep integration tests.

use rootstep_session::Inputs;
use serde::Deserialize;

/// A bracketed problem with a known root.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub root: f64,
    pub inputs: Inputs,
}

#[derive(Debug, Deserialize)]
struct Scenarios {
    scenario: Vec<Scenario>,
}

const SCENARIOS: &str = include_str!("../fixtures/scenarios.toml");

/// Loads every scenario from `fixtures/scenarios.toml`.
///
/// # Errors
///
/// Returns an error if the fixture file is not valid TOML for [`Scenario`].
pub fn scenarios() -> Result<Vec<Scenario>, toml::de::Error> {
    toml::from_str::<Scenarios>(SCENARIOS).map(|file| file.scenario)
}
