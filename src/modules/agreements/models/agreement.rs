use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::error::{AppError, Result};
use crate::core::traits::Entity;

/// A rental agreement. Apartments and deposits reference it by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Agreement {
    pub id: Option<i64>,
    pub number: String,
    pub tenant_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monthly_rent: Option<Decimal>,
}

impl Agreement {
    /// Field constraints checked before any store interaction
    pub fn validate(&self) -> Result<()> {
        if self.number.trim().is_empty() {
            return Err(AppError::validation("Agreement number must not be blank"));
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(AppError::validation(
                    "Agreement end date must not precede its start date",
                ));
            }
        }

        Ok(())
    }
}

impl Entity for Agreement {
    const NAME: &'static str = "agreement";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
