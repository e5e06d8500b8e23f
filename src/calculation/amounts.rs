//! Overflow-checked arithmetic on amounts.
//!
//! `Decimal` operators panic when a result leaves the 96-bit range. The
//! engines go through these helpers instead, so oversized input surfaces as
//! an [`EngineError::InvalidInput`] naming the offending line item.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Message of every overflow error.
pub const AMOUNT_OUT_OF_RANGE: &str = "amount out of range";

/// Multiplies two amounts, failing on overflow.
pub(crate) fn checked_product(field: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EngineError::invalid_input(field, AMOUNT_OUT_OF_RANGE))
}

/// Adds up amounts, failing on overflow.
pub(crate) fn checked_sum<'a>(
    field: &str,
    amounts: impl IntoIterator<Item = &'a Decimal>,
) -> EngineResult<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))
        .ok_or_else(|| EngineError::invalid_input(field, AMOUNT_OUT_OF_RANGE))
}
