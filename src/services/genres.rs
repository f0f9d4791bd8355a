//! Genre management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::BookSummary,
        genre::{GenreDetail, GenreForm, GenreView},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<GenreView>> {
        let genres = self.repository.genres.list().await?;
        Ok(genres.iter().map(GenreView::from).collect())
    }

    /// Genre with the books filed under it
    pub async fn detail(&self, id: i32) -> AppResult<GenreDetail> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres.get_by_id(id),
            self.repository.books.list_by_genre(id),
        )?;
        Ok(GenreDetail {
            genre: genre.into(),
            books: books.into_iter().map(BookSummary::from).collect(),
        })
    }

    pub async fn get(&self, id: i32) -> AppResult<GenreView> {
        Ok(self.repository.genres.get_by_id(id).await?.into())
    }

    /// Create a genre, or return the existing one with the same name.
    /// The flag is `true` when a new record was inserted.
    pub async fn create(&self, form: GenreForm) -> AppResult<(GenreView, bool)> {
        let form = form.normalized();
        form.validate()?;

        if let Some(existing) = self.repository.genres.find_by_name(&form.name).await? {
            tracing::info!("Genre '{}' already exists as id={}", form.name, existing.id);
            return Ok((existing.into(), false));
        }

        let genre = self.repository.genres.create(&form).await?;
        tracing::info!("Genre created: id={} name={}", genre.id, genre.name);
        Ok((genre.into(), true))
    }

    pub async fn update(&self, id: i32, form: GenreForm) -> AppResult<GenreView> {
        let form = form.normalized();
        form.validate()?;
        let genre = self.repository.genres.update(id, &form).await?;
        tracing::info!("Genre updated: id={}", id);
        Ok(genre.into())
    }

    /// Delete a genre that no book is filed under
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let detail = self.detail(id).await?;
        if !detail.books.is_empty() {
            return Err(AppError::Conflict(format!(
                "Genre {} is used by {} book(s); remove it from them first",
                detail.genre.name,
                detail.books.len()
            )));
        }
        self.repository.genres.delete(id).await?;
        tracing::info!("Genre deleted: id={}", id);
        Ok(())
    }
}
