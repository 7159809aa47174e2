use sqlx::SqlitePool;

use crate::domain::customer::{validate_name, CustomerError, Email};
use crate::models::{Customer, CustomerPatch, NewCustomer};

// ============================================================================
// Customer Repository
// ============================================================================
//
// Mediates between request payloads and storage rows:
// 1. Validate incoming fields (email syntax, non-empty name)
// 2. Execute a single bounded transaction per operation
// 3. Map the unique-constraint violation on email to DuplicateEmail
//
// Concurrent writers racing on the same email are serialized by the storage
// engine's constraint check; exactly one wins, the rest get DuplicateEmail.
//
// ============================================================================

pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All customers, oldest first. Never fails on an empty table.
    pub async fn list(&self) -> Result<Vec<Customer>, CustomerError> {
        let customers =
            sqlx::query_as("SELECT id, name, email FROM clientes ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(customers)
    }

    pub async fn get(&self, id: i64) -> Result<Customer, CustomerError> {
        sqlx::query_as("SELECT id, name, email FROM clientes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(CustomerError::NotFound)
    }

    /// Insert a new customer and return it with the storage-assigned id.
    pub async fn create(&self, new: NewCustomer) -> Result<Customer, CustomerError> {
        let name = validate_name(new.name)?;
        let email = Email::parse(new.email)?;

        let customer: Customer = sqlx::query_as(
            "INSERT INTO clientes (name, email) VALUES (?, ?) RETURNING id, name, email",
        )
        .bind(&name)
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(conflict_on_unique)?;

        tracing::debug!(id = customer.id, "Customer created");
        Ok(customer)
    }

    /// Apply only the fields present in the patch; the rest keep their stored
    /// values. Runs in a transaction so an email collision leaves the row
    /// exactly as it was.
    pub async fn update(
        &self,
        id: i64,
        patch: CustomerPatch,
    ) -> Result<Customer, CustomerError> {
        let mut tx = self.pool.begin().await?;

        let current: Customer =
            sqlx::query_as("SELECT id, name, email FROM clientes WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(CustomerError::NotFound)?;

        let name = match patch.name {
            Some(name) => validate_name(name)?,
            None => current.name,
        };
        let email = match patch.email {
            Some(email) => Email::parse(email)?.into_inner(),
            None => current.email,
        };

        let updated: Customer = sqlx::query_as(
            "UPDATE clientes SET name = ?, email = ? WHERE id = ? RETURNING id, name, email",
        )
        .bind(&name)
        .bind(&email)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(conflict_on_unique)?;

        tx.commit().await?;

        tracing::debug!(id, "Customer updated");
        Ok(updated)
    }

    /// Remove the customer permanently.
    pub async fn delete(&self, id: i64) -> Result<(), CustomerError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CustomerError::NotFound);
        }

        tracing::debug!(id, "Customer deleted");
        Ok(())
    }
}

/// Translate the engine's unique-constraint signal into DuplicateEmail;
/// everything else stays a storage error.
fn conflict_on_unique(err: sqlx::Error) -> CustomerError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            CustomerError::DuplicateEmail
        }
        other => CustomerError::Database(other),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn test_repository() -> CustomerRepository {
        // Single connection so the in-memory database is shared
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::init_schema(&pool).await.unwrap();
        CustomerRepository::new(pool)
    }

    fn new_customer(name: &str, email: &str) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_on_empty_storage() {
        let repo = test_repository().await;
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_round_trips() {
        let repo = test_repository().await;

        let created = repo
            .create(new_customer("Ana", "ana@example.com"))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Ana");

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(repo.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_email() {
        let repo = test_repository().await;

        let err = repo
            .create(new_customer("Ana", "not-an-email"))
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::InvalidEmail(_)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let repo = test_repository().await;

        let err = repo
            .create(new_customer("  ", "ana@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::EmptyName));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_with_single_row_persisted() {
        let repo = test_repository().await;

        repo.create(new_customer("Ana", "ana@example.com"))
            .await
            .unwrap();
        let err = repo
            .create(new_customer("Outra Ana", "ana@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::DuplicateEmail));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_id_not_found() {
        let repo = test_repository().await;
        assert!(matches!(
            repo.get(42).await.unwrap_err(),
            CustomerError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_update_missing_id_not_found() {
        let repo = test_repository().await;

        let err = repo
            .update(42, CustomerPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::NotFound));
    }

    #[tokio::test]
    async fn test_update_name_only_keeps_email() {
        let repo = test_repository().await;
        let created = repo
            .create(new_customer("Ana", "ana@example.com"))
            .await
            .unwrap();

        let updated = repo
            .update(
                created.id,
                CustomerPatch {
                    name: Some("Ana Souza".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Ana Souza");
        assert_eq!(updated.email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_update_email_only_keeps_name() {
        let repo = test_repository().await;
        let created = repo
            .create(new_customer("Ana", "ana@example.com"))
            .await
            .unwrap();

        let updated = repo
            .update(
                created.id,
                CustomerPatch {
                    name: None,
                    email: Some("ana.souza@example.com".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.email, "ana.souza@example.com");
    }

    #[tokio::test]
    async fn test_update_conflicting_email_rolls_back() {
        let repo = test_repository().await;
        repo.create(new_customer("Ana", "ana@example.com"))
            .await
            .unwrap();
        let bruno = repo
            .create(new_customer("Bruno", "bruno@example.com"))
            .await
            .unwrap();

        let err = repo
            .update(
                bruno.id,
                CustomerPatch {
                    name: Some("Bruno Lima".to_string()),
                    email: Some("ana@example.com".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::DuplicateEmail));

        // Rollback verified: neither field changed
        let unchanged = repo.get(bruno.id).await.unwrap();
        assert_eq!(unchanged.name, "Bruno");
        assert_eq!(unchanged.email, "bruno@example.com");
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let repo = test_repository().await;
        let created = repo
            .create(new_customer("Ana", "ana@example.com"))
            .await
            .unwrap();

        repo.delete(created.id).await.unwrap();
        assert!(matches!(
            repo.get(created.id).await.unwrap_err(),
            CustomerError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_id_not_found() {
        let repo = test_repository().await;
        assert!(matches!(
            repo.delete(42).await.unwrap_err(),
            CustomerError::NotFound
        ));
    }
}
