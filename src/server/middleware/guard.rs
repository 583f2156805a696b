//! Role requirements composed onto routers.

use axum::{
    extract::{Request, State},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_sessions::Session;

use crate::server::{
    middleware::auth::{AuthGuard, Permission},
    model::user::Role,
    state::AppState,
};

/// Wraps every route of `router` with a role requirement.
///
/// The authorized `User` is inserted into the request extensions for handlers to use.
pub fn require_role(router: Router<AppState>, state: AppState, role: Role) -> Router<AppState> {
    router.route_layer(from_fn_with_state(
        state,
        move |State(state): State<AppState>, session: Session, request: Request, next: Next| {
            enforce_role(state, session, role, request, next)
        },
    ))
}

async fn enforce_role(
    state: AppState,
    session: Session,
    role: Role,
    mut request: Request,
    next: Next,
) -> Response {
    match AuthGuard::new(&state.db, &session)
        .require(Permission::for_role(role))
        .await
    {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}
