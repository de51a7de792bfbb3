use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::error::Result;
use crate::core::traits::EntityRepository;
use crate::modules::apartments::models::Apartment;

/// MySQL-backed apartment store.
pub struct MySqlApartmentRepository {
    pool: MySqlPool,
}

impl MySqlApartmentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, mut apartment: Apartment) -> Result<Apartment> {
        let result = sqlx::query(
            r#"
            INSERT INTO apartments (name, address, floor, room_count, monthly_rent, agreement_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&apartment.name)
        .bind(&apartment.address)
        .bind(apartment.floor)
        .bind(apartment.room_count)
        .bind(apartment.monthly_rent)
        .bind(apartment.agreement_id)
        .execute(&self.pool)
        .await?;

        apartment.id = Some(result.last_insert_id() as i64);
        Ok(apartment)
    }

    // whole-record write keyed by id; inserts when the row vanished
    async fn replace(&self, apartment: Apartment, id: i64) -> Result<Apartment> {
        sqlx::query(
            r#"
            INSERT INTO apartments (id, name, address, floor, room_count, monthly_rent, agreement_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                name = VALUES(name),
                address = VALUES(address),
                floor = VALUES(floor),
                room_count = VALUES(room_count),
                monthly_rent = VALUES(monthly_rent),
                agreement_id = VALUES(agreement_id)
            "#,
        )
        .bind(id)
        .bind(&apartment.name)
        .bind(&apartment.address)
        .bind(apartment.floor)
        .bind(apartment.room_count)
        .bind(apartment.monthly_rent)
        .bind(apartment.agreement_id)
        .execute(&self.pool)
        .await?;

        Ok(apartment)
    }
}

#[async_trait]
impl EntityRepository<Apartment> for MySqlApartmentRepository {
    async fn save(&self, apartment: Apartment) -> Result<Apartment> {
        match apartment.id {
            Some(id) => self.replace(apartment, id).await,
            None => self.insert(apartment).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Apartment>> {
        let apartment = sqlx::query_as::<_, Apartment>(
            r#"
            SELECT id, name, address, floor, room_count, monthly_rent, agreement_id
            FROM apartments
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(apartment)
    }

    async fn find_all(&self) -> Result<Vec<Apartment>> {
        let apartments = sqlx::query_as::<_, Apartment>(
            r#"
            SELECT id, name, address, floor, room_count, monthly_rent, agreement_id
            FROM apartments
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(apartments)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM apartments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
