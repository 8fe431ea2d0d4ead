// lax_int accepts an integer or a string holding one, e.g. `3` or `"3"`.
pub mod lax_int {
    use serde::{Deserialize, Deserializer};
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrText {
        Int(i64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match IntOrText::deserialize(deserializer).map_err(|_| D::Error::custom("expected an integer"))? {
            IntOrText::Int(value) => Ok(value),
            IntOrText::Text(text) => text.trim().parse::<i64>()
                .map_err(|_| D::Error::custom(format!("expected an integer, got {:?}", text))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use crate::utils::number::lax_int;

    #[derive(Debug, Deserialize)]
    struct Keyed {
        #[serde(deserialize_with = "lax_int::deserialize")]
        id: i64,
    }

    #[tokio::test]
    async fn test_should_read_integers_and_integral_text() {
        for json in [r#"{"id": 3}"#, r#"{"id": "3"}"#, r#"{"id": " 3 "}"#] {
            let keyed: Keyed = serde_json::from_str(json).expect("should parse");
            assert_eq!(3, keyed.id);
        }
    }

    #[tokio::test]
    async fn test_should_reject_other_values() {
        for json in [r#"{"id": "three"}"#, r#"{"id": "3.5"}"#, r#"{"id": true}"#, r#"{"id": null}"#, r#"{}"#] {
            assert!(serde_json::from_str::<Keyed>(json).is_err(), "{} should fail", json);
        }
    }
}
