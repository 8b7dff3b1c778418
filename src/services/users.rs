use crate::AppState;
use crate::cache::models::CachedUser;
use crate::database::models::UserPatch;
use crate::error::AppError;
use crate::routes::users::model::{MeResponse, UpdateUserRequest, UsersResponse};

pub fn me(current_user: CachedUser) -> MeResponse {
    MeResponse { user: current_user }
}

pub async fn user(state: &AppState, user_id: i64) -> Result<MeResponse, AppError> {
    let user = state.union.get(user_id).await?;

    Ok(MeResponse { user })
}

pub async fn update_user(
    state: &AppState,
    user_id: i64,
    req: UpdateUserRequest,
) -> Result<(), AppError> {
    let mut user = state.union.get(user_id).await?;

    let patch = UserPatch {
        first_name: req.first_name,
        last_name: req.last_name,
        verified: None,
    };
    if patch.is_empty() {
        return Ok(());
    }

    if let Some(first_name) = &patch.first_name {
        user.first_name = Some(first_name.clone());
    }
    if let Some(last_name) = &patch.last_name {
        user.last_name = Some(last_name.clone());
    }

    state.union.update(&user, patch).await
}

pub async fn delete_user(state: &AppState, user_id: i64) -> Result<(), AppError> {
    // resolve first so an unknown id surfaces as NotFound
    let user = state.union.get(user_id).await?;

    state.union.delete(user.id).await
}

pub async fn users(state: &AppState, page: i64) -> Result<UsersResponse, AppError> {
    let page = page.max(1);
    let page_size = state.config.pagination_items;
    let end_index = page * page_size;
    let start_index = end_index - page_size;

    let count = state.store.count().await?;
    let data = state.union.page(page, start_index, page_size).await?;

    Ok(UsersResponse {
        next: count > end_index,
        previous: end_index.min(count) >= page_size,
        count,
        data,
    })
}
