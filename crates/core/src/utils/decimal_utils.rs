use rust_decimal::Decimal;

use crate::errors::{Error, Result};

/// Adds two amounts, failing instead of panicking when the result leaves
/// the `Decimal` range.
pub fn checked_add(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| Error::Calculation(format!("{} + {} overflows", lhs, rhs)))
}

pub fn checked_sub(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| Error::Calculation(format!("{} - {} overflows", lhs, rhs)))
}

/// Exact sum of `amounts`; zero for an empty input.
pub fn checked_sum<I>(amounts: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, checked_add)
}
