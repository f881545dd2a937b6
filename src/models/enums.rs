//! Shared domain enums

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// LaptopStatus
// ---------------------------------------------------------------------------

/// Operational status of a laptop. Operators may move between any two values.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LaptopStatus {
    Available,
    InReview,
    Reserved,
    #[default]
    InUse,
    Checking,
    Faulty,
}

impl LaptopStatus {
    pub const ALL: [LaptopStatus; 6] = [
        LaptopStatus::Available,
        LaptopStatus::InReview,
        LaptopStatus::Reserved,
        LaptopStatus::InUse,
        LaptopStatus::Checking,
        LaptopStatus::Faulty,
    ];

    /// Wire / form value
    pub fn slug(&self) -> &'static str {
        match self {
            LaptopStatus::Available => "available",
            LaptopStatus::InReview => "in_review",
            LaptopStatus::Reserved => "reserved",
            LaptopStatus::InUse => "in_use",
            LaptopStatus::Checking => "checking",
            LaptopStatus::Faulty => "faulty",
        }
    }
}

impl FromStr for LaptopStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LaptopStatus::ALL
            .into_iter()
            .find(|status| status.slug() == s.trim())
            .ok_or_else(|| format!("Unknown laptop status '{}'", s))
    }
}

impl std::fmt::Display for LaptopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LaptopStatus::Available => "Available",
            LaptopStatus::InReview => "In review",
            LaptopStatus::Reserved => "Reserved",
            LaptopStatus::InUse => "In use",
            LaptopStatus::Checking => "Checking",
            LaptopStatus::Faulty => "Faulty",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AdviceType
// ---------------------------------------------------------------------------

/// Kind of advice being requested; each kind has its own requirement vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceType {
    NewSoftwarePackage,
    NewFunctionality,
    HardwareQuality,
}

const SOFTWARE_PACKAGE_REQUIREMENTS: &[&str] = &[
    "Compatibility with existing systems",
    "User-friendly interface",
    "Offline availability",
    "Data import/export",
    "Multi-user support",
    "Printer driver for print jobs",
    "Performance monitoring (CPU, RAM, etc.)",
];

const FUNCTIONALITY_REQUIREMENTS: &[&str] = &[
    "Mobile simulation",
    "Presentation tools",
    "Remote desktop",
    "Cloud synchronisation",
    "Virtualisation options",
];

const HARDWARE_QUALITY_REQUIREMENTS: &[&str] = &[
    "Sound card quality",
    "Graphics card performance",
    "Processor speed",
    "Memory capacity",
    "Screen resolution",
];

impl AdviceType {
    /// Requirements a request of this type may select, in display order
    pub fn requirements(&self) -> &'static [&'static str] {
        match self {
            AdviceType::NewSoftwarePackage => SOFTWARE_PACKAGE_REQUIREMENTS,
            AdviceType::NewFunctionality => FUNCTIONALITY_REQUIREMENTS,
            AdviceType::HardwareQuality => HARDWARE_QUALITY_REQUIREMENTS,
        }
    }

    pub fn allows(&self, requirement: &str) -> bool {
        self.requirements().contains(&requirement)
    }
}

impl std::fmt::Display for AdviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AdviceType::NewSoftwarePackage => "New software package",
            AdviceType::NewFunctionality => "New functionality",
            AdviceType::HardwareQuality => "Hardware quality",
        };
        write!(f, "{}", label)
    }
}
