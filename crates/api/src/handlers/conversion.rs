//! Handlers for the `/conversion` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use unitconv_core::conversion::{ConversionRule, CreateConversionRule, UpdateConversionRule};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::{required, ConvertParams, UnitPairParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/conversion/new
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateConversionRule>,
) -> AppResult<(StatusCode, Json<DataResponse<ConversionRule>>)> {
    let rule = state.engine.create_rule(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: rule })))
}

/// GET /api/v1/conversion/show?fromUnit=&toUnit=
pub async fn show(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UnitPairParams>,
) -> AppResult<Json<DataResponse<ConversionRule>>> {
    let (from_unit, to_unit) = params.into_pair()?;
    let rule = state.engine.retrieve_rule(&from_unit, &to_unit).await?;
    Ok(Json(DataResponse { data: rule }))
}

/// GET /api/v1/conversion/show/all
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ConversionRule>>>> {
    let rules = state.engine.retrieve_all().await?;
    Ok(Json(DataResponse { data: rules }))
}

/// PUT /api/v1/conversion/update
pub async fn update(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateConversionRule>,
) -> AppResult<Json<DataResponse<ConversionRule>>> {
    let rule = state.engine.update_rule(&input).await?;
    Ok(Json(DataResponse { data: rule }))
}

/// DELETE /api/v1/conversion/remove?fromUnit=&toUnit=
pub async fn remove(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UnitPairParams>,
) -> AppResult<Json<DataResponse<String>>> {
    let (from_unit, to_unit) = params.into_pair()?;
    state.engine.delete_rule(&from_unit, &to_unit).await?;
    Ok(Json(DataResponse {
        data: format!("Conversion Config {from_unit}/{to_unit} removed"),
    }))
}

/// GET /api/v1/conversion/convert?fromUnit=&toUnit=&inputValue=
///
/// Identical units echo the input back without consulting the engine.
pub async fn convert(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ConvertParams>,
) -> AppResult<Json<DataResponse<f64>>> {
    let from_unit = required(params.from_unit, "fromUnit")?;
    let to_unit = required(params.to_unit, "toUnit")?;
    let input_value = required(params.input_value, "inputValue")?;

    if from_unit.is_empty() || to_unit.is_empty() {
        return Err(AppError::BadRequest(
            "All parameters [fromUnit, toUnit and inputValue] are mandatory.".to_string(),
        ));
    }

    if !input_value.is_finite() {
        return Err(AppError::BadRequest(
            "Parameter [inputValue] must be a finite number.".to_string(),
        ));
    }

    if from_unit == to_unit {
        return Ok(Json(DataResponse { data: input_value }));
    }

    let result = state
        .engine
        .convert(&from_unit, &to_unit, input_value)
        .await?;
    Ok(Json(DataResponse { data: result }))
}
