use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The five clinical sub-dimensions of the CTQ-SF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClinicalScale {
    EmotionalAbuse,
    PhysicalAbuse,
    SexualAbuse,
    EmotionalNeglect,
    PhysicalNeglect,
}

impl ClinicalScale {
    /// Instrument order, as the results view lists them.
    pub const ALL: [ClinicalScale; 5] = [
        ClinicalScale::EmotionalAbuse,
        ClinicalScale::PhysicalAbuse,
        ClinicalScale::SexualAbuse,
        ClinicalScale::EmotionalNeglect,
        ClinicalScale::PhysicalNeglect,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ClinicalScale::EmotionalAbuse => "EA",
            ClinicalScale::PhysicalAbuse => "PA",
            ClinicalScale::SexualAbuse => "SA",
            ClinicalScale::EmotionalNeglect => "EN",
            ClinicalScale::PhysicalNeglect => "PN",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ClinicalScale::EmotionalAbuse => "Emotional Abuse",
            ClinicalScale::PhysicalAbuse => "Physical Abuse",
            ClinicalScale::SexualAbuse => "Sexual Abuse",
            ClinicalScale::EmotionalNeglect => "Emotional Neglect",
            ClinicalScale::PhysicalNeglect => "Physical Neglect",
        }
    }
}

impl fmt::Display for ClinicalScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Any scale that owns items: a clinical scale or Minimization/Denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Clinical(ClinicalScale),
    MinimizationDenial,
}

impl Scale {
    pub fn code(self) -> &'static str {
        match self {
            Scale::Clinical(scale) => scale.code(),
            Scale::MinimizationDenial => "MD",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Clinical(scale) => scale.fmt(f),
            Scale::MinimizationDenial => f.write_str("Minimization/Denial (MD)"),
        }
    }
}

/// One value per clinical scale. The scale set is closed, so this is a
/// plain record rather than a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct PerScale<T> {
    pub emotional_abuse: T,
    pub physical_abuse: T,
    pub sexual_abuse: T,
    pub emotional_neglect: T,
    pub physical_neglect: T,
}

impl<T> PerScale<T> {
    pub fn from_fn(mut f: impl FnMut(ClinicalScale) -> T) -> Self {
        Self {
            emotional_abuse: f(ClinicalScale::EmotionalAbuse),
            physical_abuse: f(ClinicalScale::PhysicalAbuse),
            sexual_abuse: f(ClinicalScale::SexualAbuse),
            emotional_neglect: f(ClinicalScale::EmotionalNeglect),
            physical_neglect: f(ClinicalScale::PhysicalNeglect),
        }
    }

    pub fn get(&self, scale: ClinicalScale) -> &T {
        match scale {
            ClinicalScale::EmotionalAbuse => &self.emotional_abuse,
            ClinicalScale::PhysicalAbuse => &self.physical_abuse,
            ClinicalScale::SexualAbuse => &self.sexual_abuse,
            ClinicalScale::EmotionalNeglect => &self.emotional_neglect,
            ClinicalScale::PhysicalNeglect => &self.physical_neglect,
        }
    }

    /// Entries in instrument order.
    pub fn iter(&self) -> impl Iterator<Item = (ClinicalScale, &T)> + '_ {
        ClinicalScale::ALL.into_iter().map(move |scale| (scale, self.get(scale)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(ClinicalScale, &T) -> U) -> PerScale<U> {
        PerScale::from_fn(|scale| f(scale, self.get(scale)))
    }
}

/// Four-level ordinal label for a clinical scale score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Severity {
    None,
    Low,
    Moderate,
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        };
        f.write_str(label)
    }
}

/// Inclusive lower bounds of the Low, Moderate and Severe bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct SeverityCutoffs {
    pub low: u32,
    pub moderate: u32,
    pub severe: u32,
}

impl SeverityCutoffs {
    pub fn classify(&self, score: u32) -> Severity {
        if score >= self.severe {
            Severity::Severe
        } else if score >= self.moderate {
            Severity::Moderate
        } else if score >= self.low {
            Severity::Low
        } else {
            Severity::None
        }
    }

    pub(crate) fn is_ascending(&self) -> bool {
        self.low < self.moderate && self.moderate < self.severe
    }
}

/// Score and both classifications for one clinical scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleOutcome {
    pub score: u32,
    pub severity: Severity,
    /// Score meets the scale's dichotomous cutoff. Derived from its own
    /// table, so it can disagree with `severity` at band edges.
    pub positive: bool,
}

/// The engine's output for one completed answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CtqResult {
    pub scales: PerScale<ScaleOutcome>,
    /// Count of Minimization/Denial items answered "Very Often True".
    pub minimization: u32,
    /// Sum of the five clinical scale scores.
    pub total: u32,
}

impl CtqResult {
    pub fn outcome(&self, scale: ClinicalScale) -> &ScaleOutcome {
        self.scales.get(scale)
    }

    pub fn highest_severity(&self) -> Severity {
        self.scales
            .iter()
            .map(|(_, outcome)| outcome.severity)
            .max()
            .unwrap_or(Severity::None)
    }

    /// Any scale at Moderate or above.
    pub fn recommends_support(&self) -> bool {
        self.highest_severity() >= Severity::Moderate
    }

    /// Tag attached to the therapist referral link.
    pub fn referral_tag(&self) -> &'static str {
        match self.highest_severity() {
            Severity::Severe => "severe",
            Severity::Moderate => "moderate",
            Severity::Low | Severity::None => "low",
        }
    }

    pub fn positive_scales(&self) -> impl Iterator<Item = ClinicalScale> + '_ {
        self.scales
            .iter()
            .filter(|(_, outcome)| outcome.positive)
            .map(|(scale, _)| scale)
    }
}
