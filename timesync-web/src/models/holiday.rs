use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayStatus {
    Pending,
    Approved,
    Denied,
    Cancelled,
}

impl HolidayStatus {
    pub const ALL: [HolidayStatus; 4] = [
        HolidayStatus::Pending,
        HolidayStatus::Approved,
        HolidayStatus::Denied,
        HolidayStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayStatus::Pending => "pending",
            HolidayStatus::Approved => "approved",
            HolidayStatus::Denied => "denied",
            HolidayStatus::Cancelled => "cancelled",
        }
    }

    /// Question asked before submitting. Pending has none and is never sent.
    pub fn confirm_message(&self) -> Option<&'static str> {
        match self {
            HolidayStatus::Pending => None,
            HolidayStatus::Approved => {
                Some("Are you sure you want to approve this holiday request?")
            }
            HolidayStatus::Denied => Some("Are you sure you want to deny this holiday request?"),
            HolidayStatus::Cancelled => {
                Some("Are you sure you want to cancel this holiday request?")
            }
        }
    }

    pub fn requires_reason(&self) -> bool {
        matches!(self, HolidayStatus::Denied)
    }
}

impl fmt::Display for HolidayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HolidayStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HolidayStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid action: {}", s))
    }
}

/// Body of `PATCH /api/holidays/{id}/update-status/`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: HolidayStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_reason: Option<String>,
}

/// Success body of the mutating endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionMessage {
    #[serde(default)]
    pub message: Option<String>,
}
