use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::transaction::Payload;
use crate::domain::{ChainType, DomainError, OperationType};
use crate::schemas::PublishTransactionRequest;

pub const AMOUNT_FIELD: &str = "amount";
pub const RECIPIENT_FIELD: &str = "to";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

/// Extra per-operation checks layered on top of the field rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationPolicy {
    /// Enforce `amount`/`to` payload keys for operations whose policy asks for them.
    pub enforce_operation_fields: bool,
}

/// Request that passed validation, with the vocabulary already resolved.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub chain_type: ChainType,
    pub operation_type: OperationType,
    pub payload: Payload,
}

pub fn validate_required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    Ok(())
}

pub fn validate_enum(field: &'static str, value: &str, allowed: &[&str]) -> ValidationResult {
    if allowed.iter().all(|candidate| value != *candidate) {
        return Err(ValidationError::new(
            field,
            format!("must be one of: {}", allowed.join(", ")),
        ));
    }

    Ok(())
}

fn validate_vocabulary<T>(
    field: &'static str,
    value: Option<&str>,
    allowed: &[&str],
    errors: &mut Vec<ValidationError>,
) -> Option<T>
where
    T: FromStr<Err = DomainError>,
{
    let Some(value) = value else {
        errors.push(ValidationError::new(field, "is required"));
        return None;
    };

    let checked = validate_required(field, value)
        .and_then(|_| validate_enum(field, value, allowed))
        .and_then(|_| value.parse::<T>().map_err(|e| ValidationError::new(field, e.to_string())));

    match checked {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn has_value(payload: &Payload, key: &str) -> bool {
    payload.get(key).is_some_and(|value| !value.is_null())
}

fn validate_operation_fields(
    operation_type: OperationType,
    payload: &Payload,
    errors: &mut Vec<ValidationError>,
) {
    if operation_type.requires_amount() && !has_value(payload, AMOUNT_FIELD) {
        errors.push(ValidationError::new(
            "payload.amount",
            format!("is required for {} operations", operation_type),
        ));
    }

    if operation_type.requires_recipient() && !has_value(payload, RECIPIENT_FIELD) {
        errors.push(ValidationError::new(
            "payload.to",
            format!("is required for {} operations", operation_type),
        ));
    }
}

/// Validates every field of the request and reports all violations at once.
pub fn validate_publish_request(
    request: PublishTransactionRequest,
    policy: &ValidationPolicy,
) -> Result<ValidatedRequest, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let chain_type = validate_vocabulary::<ChainType>(
        "chain_type",
        request.chain_type.as_deref(),
        &ChainType::names(),
        &mut errors,
    );
    let operation_type = validate_vocabulary::<OperationType>(
        "operation_type",
        request.operation_type.as_deref(),
        &OperationType::names(),
        &mut errors,
    );

    let payload = request.payload;
    if payload.is_none() {
        errors.push(ValidationError::new("payload", "is required"));
    }

    if policy.enforce_operation_fields {
        if let (Some(operation_type), Some(payload)) = (operation_type, payload.as_ref()) {
            validate_operation_fields(operation_type, payload, &mut errors);
        }
    }

    match (chain_type, operation_type, payload) {
        (Some(chain_type), Some(operation_type), Some(payload)) if errors.is_empty() => {
            Ok(ValidatedRequest {
                chain_type,
                operation_type,
                payload,
            })
        }
        _ => Err(errors),
    }
}
