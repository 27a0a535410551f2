use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorrowingStatus {
    Pending,
    Approved,
    Rejected,
    Active,
    Returned,
}

impl BorrowingStatus {
    pub const ALL: [BorrowingStatus; 5] = [
        BorrowingStatus::Pending,
        BorrowingStatus::Approved,
        BorrowingStatus::Rejected,
        BorrowingStatus::Active,
        BorrowingStatus::Returned,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BorrowingStatus::Pending => "PENDING",
            BorrowingStatus::Approved => "APPROVED",
            BorrowingStatus::Rejected => "REJECTED",
            BorrowingStatus::Active => "ACTIVE",
            BorrowingStatus::Returned => "RETURNED",
        }
    }

    /// The asset is currently with the employee.
    pub fn is_held(self) -> bool {
        matches!(self, BorrowingStatus::Active | BorrowingStatus::Approved)
    }
}

impl std::str::FromStr for BorrowingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        BorrowingStatus::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown borrowing status: {}", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditStatus {
    Pending,
    Verified,
    Rejected,
}

impl AuditStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditStatus::Pending => "PENDING",
            AuditStatus::Verified => "VERIFIED",
            AuditStatus::Rejected => "REJECTED",
        }
    }
}

impl std::str::FromStr for AuditStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        [AuditStatus::Pending, AuditStatus::Verified, AuditStatus::Rejected]
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown audit status: {}", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorrowingAction {
    Approve,
    Reject,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Verify,
    Reject,
}

/// Body of `PUT /borrowings/{id}/action`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BorrowingActionRequest {
    pub action: BorrowingAction,
}

/// Body of `PUT /audits/{id}/decision`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AuditDecisionRequest {
    pub action: AuditAction,
}
