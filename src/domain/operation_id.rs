use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::DomainError;

/// Globally unique identifier of a published operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(Uuid);

impl OperationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(text: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(text)
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifierFormat(text.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for OperationId {
    type Err = DomainError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_parse_back_to_themselves() {
        let id = OperationId::generate();
        assert_eq!(OperationId::parse(&id.to_string()), Ok(id));
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(OperationId::generate(), OperationId::generate());
    }

    #[test]
    fn parses_canonical_text() {
        let text = "550e8400-e29b-41d4-a716-446655440000";
        let id = OperationId::parse(text).unwrap();
        assert_eq!(id.to_string(), text);
        assert_eq!(id, text.parse::<OperationId>().unwrap());
        assert_ne!(id, OperationId::parse("550e8400-e29b-41d4-a716-446655440001").unwrap());
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "invalid-uuid", "123", "550e8400-e29b-41d4-a716", "not-a-uuid-at-all"] {
            assert_eq!(
                OperationId::parse(text),
                Err(DomainError::InvalidIdentifierFormat(text.to_string()))
            );
        }
    }
}
