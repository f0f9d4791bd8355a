//! Books repository for database operations

use sqlx::{Pool, Postgres, Transaction};

use crate::{
    error::{AppError, AppResult},
    models::{
        author::AuthorRef,
        book::{Book, BookForm, BookListEntry},
        genre::Genre,
        record_url,
    },
};

#[derive(sqlx::FromRow)]
struct BookListRow {
    id: i32,
    title: String,
    author_id: i32,
    author_first_name: String,
    author_family_name: String,
}

impl From<BookListRow> for BookListEntry {
    fn from(row: BookListRow) -> Self {
        Self {
            url: record_url("book", row.id),
            id: row.id,
            title: row.title,
            author: AuthorRef::new(row.author_id, &row.author_family_name, &row.author_first_name),
        }
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books with their author, ordered by title
    pub async fn list_entries(&self) -> AppResult<Vec<BookListEntry>> {
        let rows = sqlx::query_as::<_, BookListRow>(
            r#"
            SELECT b.id, b.title, b.author_id,
                   a.first_name AS author_first_name,
                   a.family_name AS author_family_name
            FROM books b
            JOIN authors a ON a.id = b.author_id
            ORDER BY b.title, b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(BookListEntry::from).collect())
    }

    /// All books ordered by title (form choices)
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY title, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Genres linked to a book, ordered by name
    pub async fn get_genres(&self, book_id: i32) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.* FROM genres g
            JOIN book_genres bg ON bg.genre_id = g.id
            WHERE bg.book_id = $1
            ORDER BY g.name, g.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_author(&self, author_id: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE author_id = $1 ORDER BY title, id",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_genre(&self, genre_id: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.* FROM books b
            JOIN book_genres bg ON bg.book_id = b.id
            WHERE bg.genre_id = $1
            ORDER BY b.title, b.id
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a book and its genre links in one transaction
    pub async fn create(&self, data: &BookForm, author_id: i32) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, summary, isbn, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.isbn)
        .bind(author_id)
        .fetch_one(&mut *tx)
        .await?;

        link_genres(&mut tx, book.id, &data.genre).await?;
        tx.commit().await?;
        Ok(book)
    }

    /// Replace every mutable field of a book, genre set included
    pub async fn update(&self, id: i32, data: &BookForm, author_id: i32) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $2, summary = $3, isbn = $4, author_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.isbn)
        .bind(author_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        link_genres(&mut tx, id, &data.genre).await?;

        tx.commit().await?;
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::on_delete)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

async fn link_genres(
    tx: &mut Transaction<'_, Postgres>,
    book_id: i32,
    genre_ids: &[i32],
) -> AppResult<()> {
    if genre_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        r#"
        INSERT INTO book_genres (book_id, genre_id)
        SELECT $1, UNNEST($2::int[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(book_id)
    .bind(genre_ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
