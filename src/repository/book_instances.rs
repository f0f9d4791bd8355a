//! Book instances repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book_instance::{BookInstanceRow, BookInstanceStatus},
};

const SELECT_WITH_TITLE: &str = r#"
    SELECT bi.id, bi.book_id, bi.imprint, bi.status, bi.due_back, b.title AS book_title
    FROM book_instances bi
    JOIN books b ON b.id = bi.book_id
"#;

/// Column values written on create and update
#[derive(Debug, Clone)]
pub struct BookInstanceValues<'a> {
    pub book_id: i32,
    pub imprint: &'a str,
    pub status: BookInstanceStatus,
    pub due_back: NaiveDate,
}

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List every copy with its book title, soonest due first
    pub async fn list(&self) -> AppResult<Vec<BookInstanceRow>> {
        let query = format!("{} ORDER BY bi.due_back, bi.id", SELECT_WITH_TITLE);
        let rows = sqlx::query_as::<_, BookInstanceRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<BookInstanceRow> {
        let query = format!("{} WHERE bi.id = $1", SELECT_WITH_TITLE);
        sqlx::query_as::<_, BookInstanceRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    pub async fn list_by_book(&self, book_id: i32) -> AppResult<Vec<BookInstanceRow>> {
        let query = format!("{} WHERE bi.book_id = $1 ORDER BY bi.id", SELECT_WITH_TITLE);
        let rows = sqlx::query_as::<_, BookInstanceRow>(&query)
            .bind(book_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &BookInstanceValues<'_>) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO book_instances (book_id, imprint, status, due_back)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(data.book_id)
        .bind(data.imprint)
        .bind(data.status)
        .bind(data.due_back)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: i32, data: &BookInstanceValues<'_>) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE book_instances
            SET book_id = $2, imprint = $3, status = $4, due_back = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.book_id)
        .bind(data.imprint)
        .bind(data.status)
        .bind(data.due_back)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book instance {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::on_delete)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book instance {} not found", id)));
        }
        Ok(())
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn count_by_status(&self, status: BookInstanceStatus) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
