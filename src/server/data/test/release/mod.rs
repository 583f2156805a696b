use crate::server::{
    data::release::ReleaseRepository,
    model::{page::PageRequest, release::ReleaseParams},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;

fn params(title: &str, artist_ids: Vec<i32>) -> ReleaseParams {
    ReleaseParams {
        title: title.to_string(),
        released_on: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
        cover_art: "https://cdn.example.com/covers/test.jpg".to_string(),
        catalog_number: None,
        description: None,
        artist_ids,
    }
}
