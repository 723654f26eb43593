//! Handlers for the `/account` resource: profile details and the profile
//! picture upload.

use axum::extract::{Multipart, State};
use axum::Json;
use spendlog_core::error::CoreError;
use spendlog_core::picture;
use spendlog_db::models::user::{UpdateUser, UserResponse};
use spendlog_db::repositories::UserRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /account`.
#[derive(Debug, serde::Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 2, max = 20, message = "Username must be 2-20 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
}

/// GET /api/v1/account
///
/// The authenticated user's own profile.
pub async fn get_account(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth.user_id,
            })
        })?;
    Ok(Json(DataResponse { data: user.into() }))
}

/// PUT /api/v1/account
///
/// Update username and/or email. Uniqueness clashes surface as 409.
pub async fn update_account(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateAccountRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = UserRepo::update_profile(
        &state.pool,
        auth.user_id,
        &UpdateUser {
            username: input.username,
            email: input.email,
        },
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        })
    })?;

    tracing::info!(user_id = auth.user_id, "Account updated");

    Ok(Json(DataResponse { data: user.into() }))
}

/// PUT /api/v1/account/picture
///
/// Multipart upload of a new profile picture. The image is downscaled to
/// the avatar size, re-encoded as PNG, and stored under
/// `<upload_dir>/profile_pics/<random>.png`.
pub async fn upload_picture(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    // The avatar is re-encoded as PNG regardless of what arrived.
    let (upload, _extension) = read_picture_field(multipart, state.config.max_upload_bytes).await?;

    let processed = picture::process_avatar(&upload)?;

    let relative_path = format!("profile_pics/{}.png", picture::random_stem());
    write_upload(&state, &relative_path, &processed).await?;

    UserRepo::update_image_file(&state.pool, auth.user_id, &relative_path).await?;

    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth.user_id,
            })
        })?;

    tracing::info!(user_id = auth.user_id, path = %relative_path, "Profile picture updated");

    Ok(Json(DataResponse { data: user.into() }))
}

// ---------------------------------------------------------------------------
// Upload helpers (shared with the receipt upload in `handlers::expenses`)
// ---------------------------------------------------------------------------

/// Pull the first `picture` field out of a multipart body, enforcing the
/// extension allow-list and the size cap. Returns the bytes and the
/// normalized lowercase extension.
pub(crate) async fn read_picture_field(
    mut multipart: Multipart,
    max_bytes: usize,
) -> AppResult<(Vec<u8>, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("picture") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let Some(extension) = picture::allowed_extension(&filename) else {
            return Err(AppError::BadRequest(
                "Only jpg, jpeg, and png files are allowed".into(),
            ));
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if bytes.len() > max_bytes {
            return Err(AppError::BadRequest(format!(
                "File exceeds the upload limit of {max_bytes} bytes"
            )));
        }
        return Ok((bytes.to_vec(), extension));
    }

    Err(AppError::BadRequest(
        "Multipart field 'picture' is required".into(),
    ))
}

/// Write processed upload bytes under the configured upload root.
pub(crate) async fn write_upload(
    state: &AppState,
    relative_path: &str,
    bytes: &[u8],
) -> AppResult<()> {
    let full_path = state.config.upload_dir.join(relative_path);
    if let Some(parent) = full_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
    }
    tokio::fs::write(&full_path, bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;
    Ok(())
}
