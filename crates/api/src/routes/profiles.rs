//! Profile Routes

use axum::{
    extract::{Path, State},
    Json,
};
use profile_catalog::Profile;

use crate::error::ApiError;
use crate::SharedContext;

/// Look up the profile for one trait letter
pub async fn get_profile(
    State(ctx): State<SharedContext>,
    Path(code): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    ctx.catalog
        .lookup(&code)
        .cloned()
        .map(Json)
        .ok_or(ApiError::ProfileNotFound(code))
}
