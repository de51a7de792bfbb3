use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::error::Result;
use crate::core::traits::EntityRepository;
use crate::modules::agreements::models::Agreement;

/// MySQL-backed agreement store.
pub struct MySqlAgreementRepository {
    pool: MySqlPool,
}

impl MySqlAgreementRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, mut agreement: Agreement) -> Result<Agreement> {
        let result = sqlx::query(
            r#"
            INSERT INTO agreements (number, tenant_name, start_date, end_date, monthly_rent)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&agreement.number)
        .bind(&agreement.tenant_name)
        .bind(agreement.start_date)
        .bind(agreement.end_date)
        .bind(agreement.monthly_rent)
        .execute(&self.pool)
        .await?;

        agreement.id = Some(result.last_insert_id() as i64);
        Ok(agreement)
    }

    // whole-record write keyed by id; inserts when the row vanished
    async fn replace(&self, agreement: Agreement, id: i64) -> Result<Agreement> {
        sqlx::query(
            r#"
            INSERT INTO agreements (id, number, tenant_name, start_date, end_date, monthly_rent)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                number = VALUES(number),
                tenant_name = VALUES(tenant_name),
                start_date = VALUES(start_date),
                end_date = VALUES(end_date),
                monthly_rent = VALUES(monthly_rent)
            "#,
        )
        .bind(id)
        .bind(&agreement.number)
        .bind(&agreement.tenant_name)
        .bind(agreement.start_date)
        .bind(agreement.end_date)
        .bind(agreement.monthly_rent)
        .execute(&self.pool)
        .await?;

        Ok(agreement)
    }
}

#[async_trait]
impl EntityRepository<Agreement> for MySqlAgreementRepository {
    async fn save(&self, agreement: Agreement) -> Result<Agreement> {
        match agreement.id {
            Some(id) => self.replace(agreement, id).await,
            None => self.insert(agreement).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Agreement>> {
        let agreement = sqlx::query_as::<_, Agreement>(
            r#"
            SELECT id, number, tenant_name, start_date, end_date, monthly_rent
            FROM agreements
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(agreement)
    }

    async fn find_all(&self) -> Result<Vec<Agreement>> {
        let agreements = sqlx::query_as::<_, Agreement>(
            r#"
            SELECT id, number, tenant_name, start_date, end_date, monthly_rent
            FROM agreements
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(agreements)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM agreements WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
