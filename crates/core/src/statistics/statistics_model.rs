use std::collections::BTreeMap;
use std::ops::Index;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Category;
use crate::errors::{Error, Result};
use crate::utils::decimal_utils::{checked_add, checked_sum};

/// Spend per category, always holding every `Category` key.
///
/// Categories without spending map to zero, so any key can be read
/// unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Category, Decimal>",
    into = "BTreeMap<Category, Decimal>"
)]
pub struct CategoryTotals {
    totals: BTreeMap<Category, Decimal>,
}

impl CategoryTotals {
    pub fn zeroed() -> Self {
        CategoryTotals {
            totals: Category::ALL.iter().map(|c| (*c, Decimal::ZERO)).collect(),
        }
    }

    /// Adds `amount` to `category`. Leaves the totals untouched on overflow.
    pub fn add(&mut self, category: Category, amount: Decimal) -> Result<()> {
        let slot = self.totals.entry(category).or_insert(Decimal::ZERO);
        *slot = checked_add(*slot, amount)?;
        Ok(())
    }

    /// Folds `(category, amount)` rows into a complete map.
    pub fn try_from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Category, Decimal)>,
    {
        let mut totals = CategoryTotals::zeroed();
        for (category, amount) in rows {
            totals.add(category, amount)?;
        }
        Ok(totals)
    }

    pub fn get(&self, category: Category) -> Decimal {
        self.totals.get(&category).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum over all categories.
    pub fn total(&self) -> Result<Decimal> {
        checked_sum(self.totals.values().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.totals.iter().map(|(c, v)| (*c, *v))
    }
}

impl Default for CategoryTotals {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Index<Category> for CategoryTotals {
    type Output = Decimal;

    fn index(&self, category: Category) -> &Decimal {
        // zeroed() populates every key and add() never removes one
        &self.totals[&category]
    }
}

impl TryFrom<BTreeMap<Category, Decimal>> for CategoryTotals {
    type Error = Error;

    fn try_from(partial: BTreeMap<Category, Decimal>) -> Result<Self> {
        CategoryTotals::try_from_rows(partial)
    }
}

impl From<CategoryTotals> for BTreeMap<Category, Decimal> {
    fn from(totals: CategoryTotals) -> Self {
        totals.totals
    }
}

/// Both dashboard figures for one inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_spent: Decimal,
    pub by_category: CategoryTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zeroed_has_every_category() {
        let totals = CategoryTotals::zeroed();
        for category in Category::ALL {
            assert_eq!(totals[category], Decimal::ZERO);
        }
        assert_eq!(totals.iter().count(), 7);
    }

    #[test]
    fn test_add_accumulates_without_drift() {
        let totals =
            CategoryTotals::try_from_rows(std::iter::repeat((Category::Food, dec!(0.10))).take(10))
                .unwrap();
        assert_eq!(totals.get(Category::Food), dec!(1.00));
        assert_eq!(totals.total().unwrap(), dec!(1.00));
    }

    #[test]
    fn test_add_overflow_is_reported() {
        let half = dec!(50000000000000000000000000000);
        let mut totals = CategoryTotals::zeroed();
        totals.add(Category::Fuel, half).unwrap();

        assert!(totals.add(Category::Fuel, half).is_err());
        assert_eq!(totals[Category::Fuel], half);

        totals.add(Category::Food, half).unwrap();
        assert!(matches!(totals.total(), Err(Error::Calculation(_))));
    }

    #[test]
    fn test_deserializing_partial_map_fills_missing_keys() {
        let totals: CategoryTotals = serde_json::from_str(r#"{"fuel": 30.5}"#).unwrap();
        assert_eq!(totals.get(Category::Fuel), dec!(30.5));
        assert_eq!(totals[Category::Sweets], Decimal::ZERO);
        assert_eq!(totals.iter().count(), 7);
    }

    #[test]
    fn test_serializes_all_keys() {
        let json = serde_json::to_value(CategoryTotals::zeroed()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert!(object.contains_key("household"));
    }
}
