use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductFilter;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str =
    "id, name, description, price, stock, category, brand, image_urls, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_page(
        &self,
        offset: u64,
        limit: u32,
        filter: &ProductFilter,
    ) -> Result<(Vec<Product>, u64), RepositoryError> {
        // Newest first with the id as tie-breaker, so pages stay stable
        // when several products share a creation timestamp.
        let query = format!(
            r#"SELECT {PRODUCT_COLUMNS} FROM products
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR category = $2)
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4"#
        );

        let entities = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(filter.search.as_deref())
            .bind(filter.category.as_deref())
            .bind(i64::from(limit))
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM products
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR category = $2)"#,
        )
        .bind(filter.search.as_deref())
        .bind(filter.category.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok((
            entities.into_iter().map(|e| e.into_domain()).collect(),
            total.max(0) as u64,
        ))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let entity = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, stock, category, brand, image_urls, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                stock = EXCLUDED.stock,
                category = EXCLUDED.category,
                brand = EXCLUDED.brand,
                image_urls = EXCLUDED.image_urls,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(product.stock)
        .bind(&product.category)
        .bind(&product.brand)
        .bind(&product.image_urls)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
