//! Reading `multipart/form-data` submissions with an optional file part.

use axum::extract::Multipart;

use crate::{
    model::notification::NotificationInputDto,
    server::{error::AppError, util::form::FormInput},
};

/// Name of the file part carrying the banner image.
pub const IMAGE_FIELD: &str = "image";

/// Text fields and the optional uploaded image of a multipart form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MultipartForm {
    pub fields: FormInput,
    /// `None` when the image part is missing or empty, as browsers send an empty part
    /// for an untouched file input.
    pub image: Option<Vec<u8>>,
}

impl MultipartForm {
    /// Drains every part of `multipart`.
    ///
    /// # Returns
    /// - `Ok(MultipartForm)` - All parts read
    /// - `Err(AppError::BadRequest)` - Malformed body or a text part that is not UTF-8
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == IMAGE_FIELD {
                let bytes = field.bytes().await.map_err(bad_request)?;
                form.image = (!bytes.is_empty()).then(|| bytes.to_vec());
            } else {
                let value = field.text().await.map_err(bad_request)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Banner fields, named `message`, `secondary_message`, `link`, and `active`.
    pub fn notification_input(&self) -> NotificationInputDto {
        NotificationInputDto {
            message: self.fields.text("message"),
            secondary_message: self.fields.text("secondary_message"),
            link: self.fields.text("link"),
            active: self.fields.flag("active"),
        }
    }
}

fn bad_request(err: axum::extract::multipart::MultipartError) -> AppError {
    tracing::debug!("Rejected multipart body: {}", err);
    AppError::BadRequest(format!("Invalid form data: {}", err.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_notification_input() {
        let form = MultipartForm {
            fields: FormInput::from([
                ("message", " New album out now "),
                ("secondary_message", "Stream everywhere"),
                ("link", ""),
                ("active", "on"),
            ]),
            image: None,
        };

        let input = form.notification_input();

        assert_eq!(input.message.as_deref(), Some("New album out now"));
        assert_eq!(input.secondary_message.as_deref(), Some("Stream everywhere"));
        assert_eq!(input.link, None);
        assert!(input.active);
    }
}
