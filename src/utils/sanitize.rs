use serde_json::Value;

/// Masks key material and credentials in JSON payloads before they are logged.
pub fn sanitize_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sanitized = serde_json::Map::new();
            for (key, val) in map {
                let sanitized_val = if is_sensitive_field(key) {
                    mask_value(val)
                } else {
                    sanitize_json(val)
                };
                sanitized.insert(key.clone(), sanitized_val);
            }
            Value::Object(sanitized)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sanitize_json).collect()),
        _ => value.clone(),
    }
}

fn is_sensitive_field(key: &str) -> bool {
    matches!(
        key.to_lowercase().as_str(),
        "private_key"
            | "privatekey"
            | "mnemonic"
            | "seed"
            | "seed_phrase"
            | "keystore"
            | "password"
            | "secret"
            | "token"
            | "api_key"
            | "authorization"
    )
}

fn mask_value(value: &Value) -> Value {
    match value {
        Value::String(s) if s.chars().count() > 8 => {
            let chars: Vec<char> = s.chars().collect();
            let visible: String = chars[..4].iter().collect();
            let end: String = chars[chars.len() - 4..].iter().collect();
            Value::String(format!("{}****{}", visible, end))
        }
        _ => Value::String("****".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_private_key() {
        let input = json!({
            "private_key": "0x4c0883a69102937d6231471b5dbb6204fe512961708279f2",
            "amount": "100.00"
        });

        let sanitized = sanitize_json(&input);

        assert_eq!(sanitized["private_key"], "0x4c****79f2");
        assert_eq!(sanitized["amount"], "100.00");
    }

    #[test]
    fn test_sanitize_nested() {
        let input = json!({
            "payload": {
                "mnemonic": ["abandon", "ability"],
                "to": "0x2"
            }
        });

        let sanitized = sanitize_json(&input);
        assert_eq!(sanitized["payload"]["mnemonic"], "****");
        assert_eq!(sanitized["payload"]["to"], "0x2");
    }

    #[test]
    fn test_short_secret_fully_masked() {
        let sanitized = sanitize_json(&json!({"Seed": "abc"}));
        assert_eq!(sanitized["Seed"], "****");
    }
}
