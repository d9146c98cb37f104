// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```ignore
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            let first: String = parts[0].chars().take(1).collect();
            format!("{}***@{}", first, parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Walks a JSON value and masks every string stored under an `email` key.
pub fn mask_emails_in_json(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                if key.eq_ignore_ascii_case("email") {
                    if let serde_json::Value::String(email) = entry {
                        *email = safe_email_log(email);
                        continue;
                    }
                }
                mask_emails_in_json(entry);
            }
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(mask_emails_in_json),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_safe_email_log() {
        assert_eq!(safe_email_log("blueBill@hotmail.com"), "b***@hotmail.com");
        assert_eq!(safe_email_log("blueBill"), "***@***.***");
        assert_eq!(safe_email_log(""), "***@***.***");
    }

    #[test]
    fn test_mask_emails_in_json_nested() {
        let mut body = json!({
            "firstName": "Justin",
            "email": "blueBill@hotmail.com",
            "submitted": { "email": "justin@example.org" }
        });
        mask_emails_in_json(&mut body);

        assert_eq!(body["firstName"], "Justin");
        assert_eq!(body["email"], "b***@hotmail.com");
        assert_eq!(body["submitted"]["email"], "j***@example.org");
    }
}
