use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::error::Result;
use crate::core::traits::EntityRepository;
use crate::modules::deposits::models::Deposit;

/// MySQL-backed deposit store.
pub struct MySqlDepositRepository {
    pool: MySqlPool,
}

impl MySqlDepositRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, mut deposit: Deposit) -> Result<Deposit> {
        let result = sqlx::query(
            r#"
            INSERT INTO deposits (amount, paid_on, refunded, agreement_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(deposit.amount)
        .bind(deposit.paid_on)
        .bind(deposit.refunded)
        .bind(deposit.agreement_id)
        .execute(&self.pool)
        .await?;

        deposit.id = Some(result.last_insert_id() as i64);
        Ok(deposit)
    }

    // whole-record write keyed by id; inserts when the row vanished
    async fn replace(&self, deposit: Deposit, id: i64) -> Result<Deposit> {
        sqlx::query(
            r#"
            INSERT INTO deposits (id, amount, paid_on, refunded, agreement_id)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                amount = VALUES(amount),
                paid_on = VALUES(paid_on),
                refunded = VALUES(refunded),
                agreement_id = VALUES(agreement_id)
            "#,
        )
        .bind(id)
        .bind(deposit.amount)
        .bind(deposit.paid_on)
        .bind(deposit.refunded)
        .bind(deposit.agreement_id)
        .execute(&self.pool)
        .await?;

        Ok(deposit)
    }
}

#[async_trait]
impl EntityRepository<Deposit> for MySqlDepositRepository {
    async fn save(&self, deposit: Deposit) -> Result<Deposit> {
        match deposit.id {
            Some(id) => self.replace(deposit, id).await,
            None => self.insert(deposit).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Deposit>> {
        let deposit = sqlx::query_as::<_, Deposit>(
            r#"
            SELECT id, amount, paid_on, refunded, agreement_id
            FROM deposits
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deposit)
    }

    async fn find_all(&self) -> Result<Vec<Deposit>> {
        let deposits = sqlx::query_as::<_, Deposit>(
            r#"
            SELECT id, amount, paid_on, refunded, agreement_id
            FROM deposits
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(deposits)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM deposits WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
