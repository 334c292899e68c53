use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use super::DomainError;

/// Blockchain network a transaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ChainType {
    #[serde(rename = "EVM")]
    Evm,
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "TRON")]
    Tron,
    #[serde(rename = "SOL")]
    Sol,
}

impl ChainType {
    pub const ALL: [ChainType; 4] = [ChainType::Evm, ChainType::Btc, ChainType::Tron, ChainType::Sol];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChainType::Evm => "EVM",
            ChainType::Btc => "BTC",
            ChainType::Tron => "TRON",
            ChainType::Sol => "SOL",
        }
    }

    /// Value of the routing attribute attached to published messages.
    pub fn routing_attribute(&self) -> &'static str {
        self.as_str()
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(ChainType::as_str).collect()
    }
}

impl FromStr for ChainType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "EVM" => Ok(ChainType::Evm),
            "BTC" => Ok(ChainType::Btc),
            "TRON" => Ok(ChainType::Tron),
            "SOL" => Ok(ChainType::Sol),
            other => Err(DomainError::InvalidChainType(other.to_string())),
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
