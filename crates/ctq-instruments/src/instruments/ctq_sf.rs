use std::borrow::Cow;

use crate::config::{ConfigError, ScoringConfig};
use crate::Instrument;

pub const ID: &str = "ctq_sf";

/// CTQ-SF: Childhood Trauma Questionnaire, Short Form.
/// 28 items rated 1-5. Five clinical scales of five items each (sums 5-25)
/// plus a three-item Minimization/Denial count.
pub struct CtqSf {
    config: Cow<'static, ScoringConfig>,
}

impl CtqSf {
    pub fn standard() -> Self {
        Self {
            config: Cow::Borrowed(ScoringConfig::standard()),
        }
    }

    /// Score against a replacement table.
    pub fn with_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: Cow::Owned(config),
        })
    }
}

impl Default for CtqSf {
    fn default() -> Self {
        Self::standard()
    }
}

impl Instrument for CtqSf {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "CTQ-SF"
    }

    fn config(&self) -> &ScoringConfig {
        &self.config
    }
}
