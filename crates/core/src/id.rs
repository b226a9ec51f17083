//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// The catalog API is free to key products by integer or by string; both
/// shapes are accepted and round-trip unchanged through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Numeric(u64),
    Text(String),
}

impl ProductId {
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            ProductId::Numeric(n) => Some(*n),
            ProductId::Text(_) => None,
        }
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductId::Numeric(n) => core::fmt::Display::fmt(n, f),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    /// Parses a path segment such as `/products/{id}`.
    ///
    /// Digits-only input becomes `Numeric`, anything else non-empty `Text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        Ok(match s.parse::<u64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(s.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_and_text_ids() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::Numeric(42));
        assert_eq!(
            "sku-42".parse::<ProductId>().unwrap(),
            ProductId::Text("sku-42".to_string())
        );
    }

    #[test]
    fn rejects_empty_id() {
        let err = "  ".parse::<ProductId>().unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            _ => panic!("Expected InvalidId error for empty id"),
        }
    }

    #[test]
    fn deserializes_both_json_shapes() {
        let ids: Vec<ProductId> = serde_json::from_str(r#"[7, "abc"]"#).unwrap();
        assert_eq!(ids, vec![ProductId::Numeric(7), ProductId::Text("abc".into())]);
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[7,"abc"]"#);
    }

    #[test]
    fn display_matches_path_segment() {
        assert_eq!(ProductId::from(3).to_string(), "3");
        assert_eq!(ProductId::from("x-1").to_string(), "x-1");
    }
}
