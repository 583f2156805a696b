//! Catalog forms for admins.

use axum::{
    extract::{Path, State},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        artist::ArtistInputDto, featured_artist::FeaturedArtistInputDto, form::FormState,
        group::GroupInputDto, release::ReleaseInputDto, track::TrackInputDto,
    },
    server::{
        action::require_admin,
        error::AppError,
        model::{
            artist::ArtistParams, featured_artist::FeaturedArtistParams, group::GroupParams,
            release::ReleaseParams, track::TrackParams,
        },
        service::{
            artist::ArtistService, featured_artist::FeaturedArtistService, group::GroupService,
            release::ReleaseService, track::TrackService,
        },
        state::AppState,
        util::form::FormInput,
    },
};

const RELEASE_CONFLICTS: &[(&str, &str)] = &[(
    "catalog_number",
    "This catalog number is already assigned to another release",
)];

pub async fn create_release(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let mut form = FormState::with_fields(input.echo(&[]));
    let dto = release_input(&input, &mut form);

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = save_release(&state, &session, None, dto).await;

    Json(form.resolve(result, RELEASE_CONFLICTS))
}

pub async fn update_release(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let mut form = FormState::with_fields(input.echo(&[]));
    let dto = release_input(&input, &mut form);

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = save_release(&state, &session, Some(id), dto).await;

    Json(form.resolve(result, RELEASE_CONFLICTS))
}

fn release_input(input: &FormInput, form: &mut FormState) -> ReleaseInputDto {
    ReleaseInputDto {
        title: input.text("title"),
        released_on: input.text("released_on"),
        cover_art: input.text("cover_art"),
        catalog_number: input.text("catalog_number"),
        description: input.text("description"),
        artist_ids: input.ids("artist_ids", form),
    }
}

async fn save_release(
    state: &AppState,
    session: &Session,
    id: Option<i32>,
    dto: ReleaseInputDto,
) -> Result<(), AppError> {
    let params = ReleaseParams::try_from_dto(dto)?;
    require_admin(state, session).await?;

    let service = ReleaseService::new(&state.db);
    match id {
        Some(id) => service.update(id, params).await?,
        None => service.create(params).await?,
    };

    Ok(())
}

pub async fn create_track(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let mut form = FormState::with_fields(input.echo(&[]));

    let dto = TrackInputDto {
        title: input.text("title"),
        duration_seconds: input.number(
            "duration_seconds",
            "Duration must be a whole number of seconds",
            &mut form,
        ),
        track_number: input.number("track_number", "Track number must be a number", &mut form),
        release_id: input.number("release_id", "Release must be a valid ID", &mut form),
        audio_url: input.text("audio_url"),
    };

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = save_track(&state, &session, dto).await;

    Json(form.resolve(result, &[]))
}

async fn save_track(state: &AppState, session: &Session, dto: TrackInputDto) -> Result<(), AppError> {
    let params = TrackParams::try_from_dto(dto)?;
    require_admin(state, session).await?;

    TrackService::new(&state.db).create(params).await?;

    Ok(())
}

pub async fn create_artist(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let mut form = FormState::with_fields(input.echo(&[]));
    let dto = artist_input(&input);

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = save_artist(&state, &session, None, dto).await;

    Json(form.resolve(result, &[]))
}

pub async fn update_artist(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let mut form = FormState::with_fields(input.echo(&[]));
    let dto = artist_input(&input);

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = save_artist(&state, &session, Some(id), dto).await;

    Json(form.resolve(result, &[]))
}

fn artist_input(input: &FormInput) -> ArtistInputDto {
    ArtistInputDto {
        name: input.text("name"),
        bio: input.text("bio"),
        image_url: input.text("image_url"),
    }
}

async fn save_artist(
    state: &AppState,
    session: &Session,
    id: Option<i32>,
    dto: ArtistInputDto,
) -> Result<(), AppError> {
    let params = ArtistParams::try_from_dto(dto)?;
    require_admin(state, session).await?;

    let service = ArtistService::new(&state.db);
    match id {
        Some(id) => service.update(id, params).await?,
        None => service.create(params).await?,
    };

    Ok(())
}

pub async fn create_group(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let mut form = FormState::with_fields(input.echo(&[]));

    let dto = GroupInputDto {
        name: input.text("name"),
        description: input.text("description"),
        image_url: input.text("image_url"),
        member_ids: input.ids("member_ids", &mut form),
    };

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = save_group(&state, &session, dto).await;

    Json(form.resolve(result, &[]))
}

async fn save_group(state: &AppState, session: &Session, dto: GroupInputDto) -> Result<(), AppError> {
    let params = GroupParams::try_from_dto(dto)?;
    require_admin(state, session).await?;

    GroupService::new(&state.db).create(params).await?;

    Ok(())
}

pub async fn create_featured_artist(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let mut form = FormState::with_fields(input.echo(&[]));

    let dto = FeaturedArtistInputDto {
        artist_id: input.number("artist_id", "Artist must be a valid ID", &mut form),
        headline: input.text("headline"),
        position: input.number("position", "Position must be a number", &mut form),
        published: input.flag("published"),
    };

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = save_featured_artist(&state, &session, dto).await;

    Json(form.resolve(result, &[]))
}

async fn save_featured_artist(
    state: &AppState,
    session: &Session,
    dto: FeaturedArtistInputDto,
) -> Result<(), AppError> {
    let params = FeaturedArtistParams::try_from_dto(dto)?;
    require_admin(state, session).await?;

    FeaturedArtistService::new(&state.db).create(params).await?;

    Ok(())
}
