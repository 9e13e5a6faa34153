//! Shared serializable enums for lead classification and task kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Urgency classification of a sales lead.
///
/// Variants are declared from least to most urgent so that the derived
/// ordering gives `Hot > Warm > Potential > Nurture`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeadPriority {
    /// Long-term nurture, no near-term action expected.
    Nurture,
    /// Possible interest, default for unclassified leads.
    Potential,
    /// Clear interest, callback within a business day.
    Warm,
    /// Ready to buy, actioned on the nearest working day.
    Hot,
}

impl LeadPriority {
    /// All priorities, most urgent first.
    pub const ALL: [Self; 4] = [Self::Hot, Self::Warm, Self::Potential, Self::Nurture];

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Potential => "potential",
            Self::Nurture => "nurture",
        }
    }
}

impl fmt::Display for LeadPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of CRM task attached to a lead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    /// Call the lead to arrange an appointment.
    Terminieren,
    /// The appointment itself.
    Termin,
    /// Follow-up touch point.
    FollowUp,
    /// Anything else.
    Sonstiges,
}

impl TaskType {
    /// Whether per-day capacity ceilings apply to this task type.
    pub const fn is_capacity_limited(self) -> bool {
        matches!(self, Self::Terminieren | Self::Termin)
    }

    /// Wire name as stored in the CRM.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Terminieren => "TERMINIEREN",
            Self::Termin => "TERMIN",
            Self::FollowUp => "FOLLOW_UP",
            Self::Sonstiges => "SONSTIGES",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
