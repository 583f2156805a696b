use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::release_artist::Entity")]
    ReleaseArtist,
    #[sea_orm(has_many = "super::group_member::Entity")]
    GroupMember,
    #[sea_orm(has_one = "super::featured_artist::Entity")]
    FeaturedArtist,
}

impl Related<super::release_artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReleaseArtist.def()
    }
}

impl Related<super::group_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupMember.def()
    }
}

impl Related<super::featured_artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeaturedArtist.def()
    }
}

impl Related<super::release::Entity> for Entity {
    fn to() -> RelationDef {
        super::release_artist::Relation::Release.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::release_artist::Relation::Artist.def().rev())
    }
}

impl Related<super::artist_group::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_member::Relation::ArtistGroup.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_member::Relation::Artist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
