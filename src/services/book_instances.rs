//! Book instance (copy) management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book_instance::{
            BookInstanceForm, BookInstanceFormScreen, BookInstanceStatus, BookInstanceView, BookRef,
        },
        record_url,
    },
    repository::{book_instances::BookInstanceValues, Repository},
};

#[derive(Clone)]
pub struct BookInstancesService {
    repository: Repository,
}

impl BookInstancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BookInstanceView>> {
        let rows = self.repository.book_instances.list().await?;
        Ok(rows.into_iter().map(BookInstanceView::from).collect())
    }

    pub async fn detail(&self, id: i32) -> AppResult<BookInstanceView> {
        Ok(self.repository.book_instances.get_by_id(id).await?.into())
    }

    /// Form screen; `id` selects the copy being edited
    pub async fn form_screen(&self, id: Option<i32>) -> AppResult<BookInstanceFormScreen> {
        let book_instance = match id {
            Some(id) => Some(self.detail(id).await?),
            None => None,
        };
        let books = self.repository.books.list().await?;

        Ok(BookInstanceFormScreen {
            title: if book_instance.is_some() {
                "Update BookInstance"
            } else {
                "Create BookInstance"
            }
            .to_string(),
            book_instance,
            books: books
                .into_iter()
                .map(|b| BookRef {
                    url: record_url("book", b.id),
                    id: b.id,
                    title: b.title,
                })
                .collect(),
            statuses: BookInstanceStatus::ALL.to_vec(),
        })
    }

    pub async fn create(&self, form: BookInstanceForm) -> AppResult<BookInstanceView> {
        let form = form.normalized();
        form.validate()?;
        let id = self.repository.book_instances.create(&values(&form)?).await?;
        tracing::info!("Book instance created: id={}", id);
        self.detail(id).await
    }

    pub async fn update(&self, id: i32, form: BookInstanceForm) -> AppResult<BookInstanceView> {
        let form = form.normalized();
        form.validate()?;
        self.repository.book_instances.update(id, &values(&form)?).await?;
        tracing::info!("Book instance updated: id={}", id);
        self.detail(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.book_instances.delete(id).await?;
        tracing::info!("Book instance deleted: id={}", id);
        Ok(())
    }
}

fn values(form: &BookInstanceForm) -> AppResult<BookInstanceValues<'_>> {
    let book_id = form
        .book
        .ok_or_else(|| AppError::Validation("Book must be specified".to_string()))?;
    Ok(BookInstanceValues {
        book_id,
        imprint: &form.imprint,
        status: form.status,
        due_back: form.due_back_or_today(),
    })
}
