use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, put},
    Json, Router,
};

use crate::dto::car_dto::{CarRequest, DeleteResponse, FilterResult, UpsertResult};
use crate::models::Car;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/:id", put(upsert_car).delete(delete_car))
        .route("/color/:color", get(cars_by_color))
        .route("/price/between/:min/:max", get(cars_by_price_between))
        .route("/price/under/:max", get(cars_by_price_under))
        .route("/price/over/:min", get(cars_by_price_over))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state.car_controller().list_all().await?;
    Ok(Json(cars))
}

async fn cars_by_color(
    State(state): State<AppState>,
    color: Result<Path<String>, PathRejection>,
) -> Result<FilterResult, AppError> {
    let Path(color) = color?;
    state.car_controller().filter_by_color(&color).await
}

async fn cars_by_price_between(
    State(state): State<AppState>,
    bounds: Result<Path<(f64, f64)>, PathRejection>,
) -> Result<FilterResult, AppError> {
    let Path((min, max)) = bounds?;
    state.car_controller().filter_by_price_range(min, max).await
}

async fn cars_by_price_under(
    State(state): State<AppState>,
    max: Result<Path<f64>, PathRejection>,
) -> Result<FilterResult, AppError> {
    let Path(max) = max?;
    state.car_controller().filter_by_price_ceiling(max).await
}

async fn cars_by_price_over(
    State(state): State<AppState>,
    min: Result<Path<f64>, PathRejection>,
) -> Result<FilterResult, AppError> {
    let Path(min) = min?;
    state.car_controller().filter_by_price_floor(min).await
}

async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<CarRequest>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    let Json(request) = payload?;
    let car = state.car_controller().create(request).await?;
    Ok(Json(car))
}

async fn upsert_car(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CarRequest>, JsonRejection>,
) -> Result<UpsertResult, AppError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    state.car_controller().upsert(id, request).await
}

async fn delete_car(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let Path(id) = id?;
    let ack = state.car_controller().delete(id).await?;
    Ok(Json(ack))
}
