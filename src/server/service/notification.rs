//! Notification banner service.
//!
//! Banner images are rendered off the async runtime, written below
//! `UPLOAD_DIR/notifications/`, and removed again when their banner is deleted.

use std::path::{Path, PathBuf};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::{internal::InternalError, service::ServiceError, AppError},
    model::notification::{Notification, NotificationParams},
    overlay::OverlayRenderer,
};

/// Subdirectory of the upload directory holding banner images.
pub const NOTIFICATION_UPLOAD_DIR: &str = "notifications";

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    overlay: &'a OverlayRenderer,
    upload_dir: &'a Path,
}

impl<'a> NotificationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        overlay: &'a OverlayRenderer,
        upload_dir: &'a Path,
    ) -> Self {
        Self {
            db,
            overlay,
            upload_dir,
        }
    }

    /// Gets the active banner, if any.
    pub async fn get_active(&self) -> Result<Option<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db).get_active().await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db).get_all().await?)
    }

    /// Creates a banner, rendering and storing its image first when one is uploaded.
    ///
    /// If the database insert fails the stored image is removed again.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created banner
    /// - `Err(AppError::OverlayErr)` - Image could not be decoded or rendered
    /// - `Err(AppError::InternalErr)` - Image could not be written
    /// - `Err(AppError::Service)` - Database failure
    pub async fn create(
        &self,
        params: NotificationParams,
        image: Option<Vec<u8>>,
    ) -> Result<Notification, AppError> {
        let image_path = match image {
            Some(image) => Some(self.store_image(&params, image).await?),
            None => None,
        };

        match NotificationRepository::new(self.db)
            .create(params, image_path.clone())
            .await
        {
            Ok(notification) => {
                tracing::info!("Created notification {}", notification.id);
                Ok(notification)
            }
            Err(err) => {
                if let Some(path) = image_path {
                    self.remove_image(&path).await;
                }
                Err(err.into())
            }
        }
    }

    /// Deletes a banner and its stored image.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let Some(notification) = NotificationRepository::new(self.db).delete(id).await? else {
            return Err(ServiceError::NotFound("Notification not found".to_string()).into());
        };

        if let Some(path) = notification.image_path {
            self.remove_image(&path).await;
        }

        Ok(())
    }

    /// Renders the overlay and writes it, returning the path relative to the upload dir.
    async fn store_image(
        &self,
        params: &NotificationParams,
        image: Vec<u8>,
    ) -> Result<String, AppError> {
        let renderer = self.overlay.clone();
        let message = params.message.clone();
        let secondary = params.secondary_message.clone();

        let jpeg = tokio::task::spawn_blocking(move || {
            renderer.render(&image, &message, secondary.as_deref())
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Overlay task failed: {}", e)))??;

        let relative = format!(
            "{}/{}-{:08x}.jpg",
            NOTIFICATION_UPLOAD_DIR,
            Utc::now().timestamp_millis(),
            rand::random::<u32>()
        );
        let destination = self.upload_dir.join(&relative);

        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| upload_error(parent.to_path_buf(), source))?;
        }
        tokio::fs::write(&destination, jpeg)
            .await
            .map_err(|source| upload_error(destination.clone(), source))?;

        Ok(relative)
    }

    async fn remove_image(&self, relative: &str) {
        let path = self.upload_dir.join(relative);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!("Failed to remove banner image {}: {}", path.display(), e);
        }
    }
}

fn upload_error(path: PathBuf, source: std::io::Error) -> AppError {
    InternalError::Upload {
        path: path.display().to_string(),
        source,
    }
    .into()
}
