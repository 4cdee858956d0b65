//! Vehicle API endpoints. Listing is public; writes are admin-only.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};
use crate::AppState;

/// GET /api/vehicles - List all vehicles, newest first.
pub async fn list_vehicles(State(state): State<AppState>) -> ApiResult<Vec<Vehicle>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_vehicles().await {
        Ok(vehicles) => success(vehicles, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/vehicles - Create a vehicle.
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> ApiResult<Vehicle> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.name.trim().is_empty() {
        return error(
            AppError::Validation("Name is required".to_string()),
            revision_id,
        );
    }

    match state.repo.create_vehicle(&request).await {
        Ok(vehicle) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(vehicle, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/vehicles/:id - Update a vehicle.
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateVehicleRequest>,
) -> ApiResult<Vehicle> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.update_vehicle(&id, &request).await {
        Ok(vehicle) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(vehicle, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/vehicles/:id - Delete a vehicle.
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_vehicle(&id).await {
        Ok(()) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
