use serde::Serialize;
use std::fmt;

/// KPI progress classification.
///
/// The ordering matters: increasing the current value with target and dates
/// fixed never moves a KPI backwards along
/// `NotStarted < Delayed < AtRisk < OnTrack < Achieved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Status {
    NotStarted,
    Delayed,
    AtRisk,
    OnTrack,
    Achieved,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::Delayed => "Delayed",
            Status::AtRisk => "At Risk",
            Status::OnTrack => "On Track",
            Status::Achieved => "Achieved",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Not Started" => Some(Status::NotStarted),
            "Delayed" => Some(Status::Delayed),
            "At Risk" => Some(Status::AtRisk),
            "On Track" => Some(Status::OnTrack),
            "Achieved" => Some(Status::Achieved),
            _ => None,
        }
    }

    /// ANSI color used wherever a status is rendered.
    pub fn color(&self) -> &'static str {
        match self {
            Status::Achieved => crate::utils::colors::GREEN,
            Status::OnTrack => crate::utils::colors::BLUE,
            Status::AtRisk => crate::utils::colors::YELLOW,
            Status::Delayed => crate::utils::colors::RED,
            Status::NotStarted => crate::utils::colors::GREY,
        }
    }

    /// Status marker for compact card-style output.
    pub fn icon(&self) -> &'static str {
        match self {
            Status::Achieved => "🟢",
            Status::OnTrack => "🔵",
            Status::AtRisk => "🟡",
            Status::Delayed => "🔴",
            Status::NotStarted => "⚪",
        }
    }

    pub fn all() -> [Status; 5] {
        [
            Status::Achieved,
            Status::OnTrack,
            Status::AtRisk,
            Status::Delayed,
            Status::NotStarted,
        ]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
