//! ctq-instruments
//!
//! CTQ-SF scoring. Pure and synchronous: a versioned scoring table, the
//! engine that turns an answer set into per-scale scores and
//! classifications, the total-band scorer behind the submission endpoint,
//! and the quiz runner session.

pub mod band;
pub mod config;
pub mod engine;
pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;

use std::path::Path;

use ctq_core::models::answer::AnswerSet;

use config::ScoringConfig;
use error::InstrumentError;
use scoring::CtqResult;

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "ctq_sf").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "CTQ-SF").
    fn name(&self) -> &str;

    /// The scoring table this instrument scores against.
    fn config(&self) -> &ScoringConfig;

    fn score(&self, answers: &AnswerSet) -> CtqResult {
        engine::compute_result(answers, self.config())
    }

    /// Format a result as structured text, one line per scale.
    fn to_structured_input(&self, result: &CtqResult) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for (scale, outcome) in result.scales.iter() {
            output.push_str(&format!(
                "- {scale}: {} ({}, {})\n",
                outcome.score,
                outcome.severity,
                if outcome.positive { "positive" } else { "negative" },
            ));
        }
        output.push_str(&format!("- Minimization/Denial (MD): {}\n", result.minimization));
        output.push_str(&format!("- Total: {}\n", result.total));
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::ctq_sf::CtqSf::standard())]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument, scoring against the table at `table` when given
/// instead of the shipped one.
pub fn load_instrument(
    id: &str,
    table: Option<&Path>,
) -> Result<Box<dyn Instrument>, InstrumentError> {
    match (id, table) {
        (instruments::ctq_sf::ID, Some(path)) => {
            let config = ScoringConfig::load(path)?;
            Ok(Box::new(instruments::ctq_sf::CtqSf::with_config(config)?))
        }
        _ => get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string())),
    }
}
