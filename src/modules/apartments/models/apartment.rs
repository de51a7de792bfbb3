use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::error::{AppError, Result};
use crate::core::traits::Entity;

/// A rentable unit.
///
/// `agreement_id` points at the active rental agreement and stays NULL
/// while the unit is vacant; the `agreement-is-null` list filter reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Apartment {
    pub id: Option<i64>,
    pub name: String,
    pub address: Option<String>,
    pub floor: Option<i32>,
    pub room_count: Option<i32>,
    pub monthly_rent: Option<Decimal>,
    pub agreement_id: Option<i64>,
}

impl Apartment {
    /// Field constraints checked before any store interaction
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Apartment name must not be blank"));
        }

        if let Some(rent) = self.monthly_rent {
            if rent.is_sign_negative() {
                return Err(AppError::validation(
                    "Apartment monthly rent must not be negative",
                ));
            }
        }

        Ok(())
    }
}

impl Entity for Apartment {
    const NAME: &'static str = "apartment";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
