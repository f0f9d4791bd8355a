//! Author management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{AuthorDetail, AuthorForm, AuthorView},
        book::BookSummary,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<AuthorView>> {
        let authors = self.repository.authors.list().await?;
        Ok(authors.iter().map(AuthorView::from).collect())
    }

    /// Author with all of their books
    pub async fn detail(&self, id: i32) -> AppResult<AuthorDetail> {
        let (author, books) = tokio::try_join!(
            self.repository.authors.get_by_id(id),
            self.repository.books.list_by_author(id),
        )?;
        Ok(AuthorDetail {
            author: author.into(),
            books: books.into_iter().map(BookSummary::from).collect(),
        })
    }

    pub async fn get(&self, id: i32) -> AppResult<AuthorView> {
        Ok(self.repository.authors.get_by_id(id).await?.into())
    }

    pub async fn create(&self, form: AuthorForm) -> AppResult<AuthorView> {
        let form = form.normalized();
        form.validate()?;
        let author = self.repository.authors.create(&form).await?;
        tracing::info!("Author created: id={} name={}", author.id, author.name());
        Ok(author.into())
    }

    pub async fn update(&self, id: i32, form: AuthorForm) -> AppResult<AuthorView> {
        let form = form.normalized();
        form.validate()?;
        let author = self.repository.authors.update(id, &form).await?;
        tracing::info!("Author updated: id={}", id);
        Ok(author.into())
    }

    /// Delete an author that no book references
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let detail = self.detail(id).await?;
        if !detail.books.is_empty() {
            return Err(AppError::Conflict(format!(
                "Author {} still has {} book(s); delete them before deleting the author",
                detail.author.name,
                detail.books.len()
            )));
        }
        self.repository.authors.delete(id).await?;
        tracing::info!("Author deleted: id={}", id);
        Ok(())
    }
}
