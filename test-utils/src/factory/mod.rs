//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows directly through SeaORM active models, bypassing the application's services.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let artist = factory::artist::create_artist(&db).await?;
//! let release = factory::release::ReleaseFactory::new(&db)
//!     .title("Night Drive")
//!     .artist(artist.id)
//!     .build()
//!     .await?;
//! ```

pub mod artist;
pub mod featured_artist;
pub mod group;
pub mod helpers;
pub mod notification;
pub mod release;
pub mod track;
pub mod user;

pub use artist::create_artist;
pub use featured_artist::create_featured_artist;
pub use group::create_group;
pub use notification::create_notification;
pub use release::create_release;
pub use track::create_track;
pub use user::{create_admin, create_user};
