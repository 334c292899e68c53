use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use super::DomainError;

/// Kind of blockchain action requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    Transfer,
    Deploy,
    Call,
    Approve,
    Swap,
    Stake,
    Unstake,
    Withdraw,
    Mint,
    Burn,
}

impl OperationType {
    pub const ALL: [OperationType; 10] = [
        OperationType::Transfer,
        OperationType::Deploy,
        OperationType::Call,
        OperationType::Approve,
        OperationType::Swap,
        OperationType::Stake,
        OperationType::Unstake,
        OperationType::Withdraw,
        OperationType::Mint,
        OperationType::Burn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Transfer => "TRANSFER",
            OperationType::Deploy => "DEPLOY",
            OperationType::Call => "CALL",
            OperationType::Approve => "APPROVE",
            OperationType::Swap => "SWAP",
            OperationType::Stake => "STAKE",
            OperationType::Unstake => "UNSTAKE",
            OperationType::Withdraw => "WITHDRAW",
            OperationType::Mint => "MINT",
            OperationType::Burn => "BURN",
        }
    }

    /// Whether the payload of this operation is expected to carry an amount.
    pub fn requires_amount(&self) -> bool {
        matches!(
            self,
            OperationType::Transfer
                | OperationType::Swap
                | OperationType::Stake
                | OperationType::Withdraw
                | OperationType::Mint
        )
    }

    /// Whether the payload of this operation is expected to name a recipient.
    pub fn requires_recipient(&self) -> bool {
        matches!(self, OperationType::Transfer | OperationType::Mint)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(OperationType::as_str).collect()
    }
}

impl FromStr for OperationType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == value)
            .ok_or_else(|| DomainError::InvalidOperationType(value.to_string()))
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
