//! Book management service

use std::collections::HashSet;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::AuthorRef,
        book::{BookDetail, BookForm, BookFormScreen, BookListEntry, BookView, GenreChoice},
        book_instance::BookInstanceView,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BookListEntry>> {
        self.repository.books.list_entries().await
    }

    /// Book with its author and genres resolved
    pub async fn get(&self, id: i32) -> AppResult<BookView> {
        let book = self.repository.books.get_by_id(id).await?;
        let (author, genres) = tokio::try_join!(
            self.repository.authors.get_by_id(book.author_id),
            self.repository.books.get_genres(id),
        )?;
        Ok(BookView::new(book, AuthorRef::from(&author), &genres))
    }

    /// Book with every copy of it
    pub async fn detail(&self, id: i32) -> AppResult<BookDetail> {
        let (book, instances) = tokio::try_join!(
            self.get(id),
            self.repository.book_instances.list_by_book(id),
        )?;
        Ok(BookDetail {
            book,
            book_instances: instances.into_iter().map(BookInstanceView::from).collect(),
        })
    }

    /// Form screen; `id` selects the book being edited
    pub async fn form_screen(&self, id: Option<i32>) -> AppResult<BookFormScreen> {
        let book = match id {
            Some(id) => Some(self.get(id).await?),
            None => None,
        };
        let (authors, genres) = tokio::try_join!(
            self.repository.authors.list(),
            self.repository.genres.list(),
        )?;

        let checked: HashSet<i32> = book
            .as_ref()
            .map(|b| b.genre.iter().map(|g| g.id).collect())
            .unwrap_or_default();

        Ok(BookFormScreen {
            title: if book.is_some() { "Update Book" } else { "Create Book" }.to_string(),
            authors: authors.iter().map(AuthorRef::from).collect(),
            genres: genres
                .into_iter()
                .map(|g| GenreChoice {
                    checked: checked.contains(&g.id),
                    id: g.id,
                    name: g.name,
                })
                .collect(),
            book,
        })
    }

    pub async fn create(&self, form: BookForm) -> AppResult<BookView> {
        let form = form.normalized();
        form.validate()?;
        let author_id = required_author(&form)?;
        let book = self.repository.books.create(&form, author_id).await?;
        tracing::info!("Book created: id={} title={}", book.id, book.title);
        self.get(book.id).await
    }

    pub async fn update(&self, id: i32, form: BookForm) -> AppResult<BookView> {
        let form = form.normalized();
        form.validate()?;
        let author_id = required_author(&form)?;
        self.repository.books.update(id, &form, author_id).await?;
        tracing::info!("Book updated: id={}", id);
        self.get(id).await
    }

    /// Delete a book that has no copies left
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let detail = self.detail(id).await?;
        if !detail.book_instances.is_empty() {
            return Err(AppError::Conflict(format!(
                "Book '{}' still has {} copy(ies); delete them before deleting the book",
                detail.book.title,
                detail.book_instances.len()
            )));
        }
        self.repository.books.delete(id).await?;
        tracing::info!("Book deleted: id={}", id);
        Ok(())
    }
}

fn required_author(form: &BookForm) -> AppResult<i32> {
    form.author
        .ok_or_else(|| AppError::Validation("Author must not be empty".to_string()))
}
