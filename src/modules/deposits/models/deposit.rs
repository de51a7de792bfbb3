use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::error::{AppError, Result};
use crate::core::traits::Entity;

/// A security deposit held against a rental agreement.
///
/// `agreement_id` is NULL until the deposit is tied to an agreement; the
/// `agreement-is-null` list filter reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Deposit {
    pub id: Option<i64>,
    pub amount: Decimal,
    pub paid_on: Option<NaiveDate>,
    #[serde(default)]
    pub refunded: bool,
    pub agreement_id: Option<i64>,
}

impl Deposit {
    /// Field constraints checked before any store interaction
    pub fn validate(&self) -> Result<()> {
        if self.amount.is_sign_negative() {
            return Err(AppError::validation("Deposit amount must not be negative"));
        }

        Ok(())
    }
}

impl Entity for Deposit {
    const NAME: &'static str = "deposit";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
