pub use super::artist::Entity as Artist;
pub use super::artist_group::Entity as ArtistGroup;
pub use super::featured_artist::Entity as FeaturedArtist;
pub use super::group_member::Entity as GroupMember;
pub use super::notification::Entity as Notification;
pub use super::release::Entity as Release;
pub use super::release_artist::Entity as ReleaseArtist;
pub use super::track::Entity as Track;
pub use super::user::Entity as User;
