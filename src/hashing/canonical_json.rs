use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Serializa un `Value` de JSON a una representación canónica:
/// - Objetos con claves ordenadas
/// - Sin espacios redundantes
pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => serde_json::to_string(s).unwrap(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(to_canonical_json).collect();
            format!("[{}]", inner.join(","))
        }
        Value::Object(map) => {
            let sorted: BTreeMap<&String, String> = map.iter().map(|(k, v)| (k, to_canonical_json(v))).collect();
            let inner: Vec<String> = sorted.into_iter()
                                           .map(|(k, v)| format!("{}:{}", serde_json::to_string(k).unwrap(), v))
                                           .collect();
            format!("{{{}}}", inner.join(","))
        }
    }
}

/// Calcula el hash SHA-256 (hex) de la forma canónica de un valor
/// serializable. Dos valores lógicamente iguales producen el mismo hash
/// aunque el orden de claves difiera.
pub fn compute_sorted_hash<T: serde::Serialize>(value: &T) -> String {
    let json = serde_json::to_value(value).unwrap_or(Value::Null);
    let canonical = to_canonical_json(&json);
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::{compute_sorted_hash, to_canonical_json};
    use serde_json::json;

    #[test]
    fn test_canonical_form_of_exam_lines() {
        // Escalares y arreglos conservan orden y forma compacta
        assert_eq!(to_canonical_json(&json!(null)), "null");
        assert_eq!(to_canonical_json(&json!(100)), "100");
        assert_eq!(to_canonical_json(&json!("Multiple choice question.")), "\"Multiple choice question.\"");
        let lines = json!(["Multiple choice question.", "Numeric grading over 100."]);
        assert_eq!(to_canonical_json(&lines),
                   "[\"Multiple choice question.\",\"Numeric grading over 100.\"]");
    }

    #[test]
    fn test_canonical_form_sorts_record_keys() {
        let record = json!({ "lines": ["Exam delivered as PDF."], "family": "traditional" });
        assert_eq!(to_canonical_json(&record),
                   "{\"family\":\"traditional\",\"lines\":[\"Exam delivered as PDF.\"]}");
    }

    #[test]
    fn test_canonical_form_recurses_into_nested_reports() {
        let report = json!({ "runs": [ { "family": "gamified" }, null ], "session": { "count": 1 } });
        assert_eq!(to_canonical_json(&report),
                   "{\"runs\":[{\"family\":\"gamified\"},null],\"session\":{\"count\":1}}");
    }

    #[test]
    fn test_hash_is_key_order_independent() {
        let a = json!({ "q": "line", "family": "gamified" });
        let b = json!({ "family": "gamified", "q": "line" });
        assert_eq!(compute_sorted_hash(&a), compute_sorted_hash(&b));
    }

    #[test]
    fn test_hash_changes_with_content() {
        let a = json!({ "family": "gamified" });
        let b = json!({ "family": "traditional" });
        assert_ne!(compute_sorted_hash(&a), compute_sorted_hash(&b));
    }
}
