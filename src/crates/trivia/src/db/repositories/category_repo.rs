//! Category repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::models::Category;

/// Category repository for managing category database operations
pub struct CategoryRepository;

impl CategoryRepository {
    /// Insert a new category
    pub async fn create(pool: &DatabasePool, kind: &str) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>("INSERT INTO categories (type) VALUES (?) RETURNING *")
            .bind(kind)
            .fetch_one(pool)
            .await
    }

    /// Get a category by ID
    pub async fn get_by_id(pool: &DatabasePool, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all categories ordered by id
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Count total categories
    pub async fn count(pool: &DatabasePool) -> Result<i64, sqlx::Error> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await?;

        Ok(result.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseConnection;

    async fn setup() -> DatabaseConnection {
        let conn = DatabaseConnection::in_memory().await.unwrap();
        conn.run_migrations().await.unwrap();
        conn
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let conn = setup().await;
        let science = CategoryRepository::create(conn.pool(), "Science").await.unwrap();
        assert_eq!(science.kind, "Science");

        let found = CategoryRepository::get_by_id(conn.pool(), science.id).await.unwrap();
        assert_eq!(found, Some(science));
        assert!(CategoryRepository::get_by_id(conn.pool(), 200).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let conn = setup().await;
        assert!(CategoryRepository::list(conn.pool()).await.unwrap().is_empty());
        assert_eq!(CategoryRepository::count(conn.pool()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let conn = setup().await;
        CategoryRepository::create(conn.pool(), "Science").await.unwrap();
        CategoryRepository::create(conn.pool(), "Art").await.unwrap();

        let kinds: Vec<_> = CategoryRepository::list(conn.pool())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(kinds, vec!["Science", "Art"]);
    }
}
