//! Column codecs shared by the repositories.

use std::str::FromStr;

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use log::warn;
use receipt_tracker_core::{Category, Error, Result};

use crate::errors::StorageError;

/// Fresh row id. UUID v7 keeps ids time-ordered within the process.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

pub fn now_utc() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub fn decimal_to_db(value: Decimal) -> String {
    value.to_string()
}

/// Malformed stored amounts surface as `ValidationError::DecimalParse`.
pub fn decimal_from_db(value: &str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|e| {
        warn!("Stored amount '{}' is not a decimal: {}", value, e);
        Error::from(e)
    })
}

pub fn flag_to_db(flag: bool) -> i32 {
    if flag {
        1
    } else {
        0
    }
}

pub fn flag_from_db(value: i32) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(StorageError::Decode(format!("flag value {}", other)).into()),
    }
}

pub fn category_from_db(value: &str) -> Result<Category> {
    Category::from_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_tracker_core::errors::ValidationError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_flag_codec() {
        assert_eq!(flag_to_db(true), 1);
        assert_eq!(flag_to_db(false), 0);
        assert!(flag_from_db(flag_to_db(true)).unwrap());
        assert!(!flag_from_db(flag_to_db(false)).unwrap());
        assert!(flag_from_db(2).is_err());
        assert!(flag_from_db(-1).is_err());
    }

    #[test]
    fn test_decimal_text_keeps_scale() {
        assert_eq!(decimal_to_db(dec!(42.50)), "42.50");
        let parsed = decimal_from_db("0.10").unwrap();
        assert_eq!(parsed, dec!(0.10));
        assert_eq!(parsed.scale(), 2);
    }

    #[test]
    fn test_bad_stored_values_are_validation_errors() {
        let err = decimal_from_db("12,5").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DecimalParse(_))
        ));

        let err = category_from_db("snacks").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_ids_sort_in_creation_order() {
        let ids: Vec<String> = (0..100).map(|_| new_id()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
