use crate::{
    api::models::*,
    core::{
        errors::TripLedgerError,
        models::{
            Destination, Expense, ExpenseByCategory, ExpenseCategory, ExportBundle,
            ParticipantInfo, Profile, Trip, TripSummary,
        },
        services::{NewDestination, NewExpense, NewExpenseShare, TripLedgerService},
    },
    infrastructure::{
        document::{html::HtmlRenderer, share::LoggingShareGateway},
        store::in_memory::InMemoryTripStore,
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

// Newtype wrapper for TripLedgerError to implement IntoResponse
pub struct ApiError(TripLedgerError);

impl From<TripLedgerError> for ApiError {
    fn from(err: TripLedgerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            TripLedgerError::TripNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Trip {} not found", id))
            }
            TripLedgerError::ProfileNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Profile for user {} not found", id),
            ),
            TripLedgerError::CategoryNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Category {} not found", id))
            }
            TripLedgerError::NotTripParticipant(id) => (
                StatusCode::FORBIDDEN,
                format!("User {} is not a trip participant", id),
            ),
            TripLedgerError::AlreadyTripParticipant(id) => (
                StatusCode::CONFLICT,
                format!("User {} is already a trip participant", id),
            ),
            TripLedgerError::InvalidShareSplit => (
                StatusCode::BAD_REQUEST,
                "Share amounts do not sum to the expense amount".to_string(),
            ),
            TripLedgerError::InvalidShareUser(id) => (
                StatusCode::BAD_REQUEST,
                format!("User {} is not a trip participant for share", id),
            ),
            TripLedgerError::InvalidInput(field, msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {:?}", field, msg),
            ),
            TripLedgerError::StoreError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Store error: {}", msg))
            }
            TripLedgerError::RenderError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Render error: {}", msg),
            ),
            TripLedgerError::ShareError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Share error: {}", msg),
            ),
            TripLedgerError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", msg),
            ),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}

// Define API routes
pub fn api_routes(
    service: Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>,
) -> Router {
    Router::new()
        .route("/profiles", axum::routing::post(save_profile))
        .route("/categories", axum::routing::post(save_category))
        .route("/trips", axum::routing::post(create_trip))
        .route("/trips/{trip_id}", axum::routing::get(get_trip))
        .route(
            "/trips/{trip_id}/destinations",
            axum::routing::post(add_destination),
        )
        .route(
            "/trips/{trip_id}/participants",
            axum::routing::post(add_participant),
        )
        .route("/trips/{trip_id}/expenses", axum::routing::post(add_expense))
        .route(
            "/trips/{trip_id}/balances",
            axum::routing::get(get_trip_balances),
        )
        .route(
            "/trips/{trip_id}/expenses/by_category",
            axum::routing::get(get_expenses_by_category),
        )
        .route("/trips/{trip_id}/summary", axum::routing::get(get_trip_summary))
        .route("/trips/{trip_id}/report", axum::routing::get(get_trip_report))
        .route("/trips/{trip_id}/export", axum::routing::post(export_trip))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/profiles",
    request_body = SaveProfileRequest,
    responses(
        (status = 201, description = "Profile saved"),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn save_profile(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Json(req): Json<SaveProfileRequest>,
) -> Result<StatusCode, ApiError> {
    let profile = Profile {
        email: req.email,
        first_name: req.first_name,
        last_name: req.last_name,
    };
    service.save_profile(&req.user_id, profile).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = SaveCategoryRequest,
    responses(
        (status = 201, description = "Category saved"),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn save_category(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Json(req): Json<SaveCategoryRequest>,
) -> Result<StatusCode, ApiError> {
    let category = ExpenseCategory {
        name: req.name,
        icon: req.icon,
        color: req.color,
    };
    service.save_category(&req.id, category).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    post,
    path = "/api/trips",
    request_body = CreateTripRequest,
    responses(
        (status = 200, description = "Trip created", body = Trip),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Owner profile not found", body = ErrorResponse)
    )
)]
pub async fn create_trip(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Json(req): Json<CreateTripRequest>,
) -> Result<Json<Trip>, ApiError> {
    let trip = service
        .create_trip(
            req.title,
            req.description.unwrap_or_default(),
            req.start_date,
            req.end_date,
            req.budget,
            &req.user_id,
        )
        .await?;
    Ok(Json(trip))
}

#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}",
    params(("trip_id" = String, Path, description = "Trip identifier")),
    responses(
        (status = 200, description = "Trip found", body = Trip),
        (status = 404, description = "Trip not found", body = ErrorResponse)
    )
)]
pub async fn get_trip(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Path(trip_id): Path<String>,
) -> Result<Json<Trip>, ApiError> {
    let trip = service
        .get_trip(&trip_id)
        .await?
        .ok_or_else(|| TripLedgerError::TripNotFound(trip_id))?;
    Ok(Json(trip))
}

#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/destinations",
    params(("trip_id" = String, Path, description = "Trip identifier")),
    request_body = AddDestinationRequest,
    responses(
        (status = 200, description = "Destination added", body = Destination),
        (status = 404, description = "Trip not found", body = ErrorResponse)
    )
)]
pub async fn add_destination(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Path(trip_id): Path<String>,
    Json(req): Json<AddDestinationRequest>,
) -> Result<Json<Destination>, ApiError> {
    let destination = service
        .add_destination(
            &trip_id,
            NewDestination {
                name: req.name,
                description: req.description,
                country: req.country,
                price: req.price,
                address: req.address,
            },
        )
        .await?;
    Ok(Json(destination))
}

#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/participants",
    params(("trip_id" = String, Path, description = "Trip identifier")),
    request_body = AddParticipantRequest,
    responses(
        (status = 200, description = "Participant added", body = ParticipantInfo),
        (status = 404, description = "Trip or profile not found", body = ErrorResponse),
        (status = 409, description = "Already a participant", body = ErrorResponse)
    )
)]
pub async fn add_participant(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Path(trip_id): Path<String>,
    Json(req): Json<AddParticipantRequest>,
) -> Result<Json<ParticipantInfo>, ApiError> {
    let participant = service.add_participant(&trip_id, &req.user_id).await?;
    Ok(Json(participant))
}

#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/expenses",
    params(("trip_id" = String, Path, description = "Trip identifier")),
    request_body = AddExpenseRequest,
    responses(
        (status = 200, description = "Expense added", body = Expense),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "Payer is not a participant", body = ErrorResponse),
        (status = 404, description = "Trip or category not found", body = ErrorResponse)
    )
)]
pub async fn add_expense(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Path(trip_id): Path<String>,
    Json(req): Json<AddExpenseRequest>,
) -> Result<Json<Expense>, ApiError> {
    let shares = req
        .shares
        .into_iter()
        .map(|share| NewExpenseShare {
            user_id: share.user_id,
            share_amount: share.share_amount,
            share_percentage: share.share_percentage,
        })
        .collect();
    let expense = service
        .add_expense(
            &trip_id,
            NewExpense {
                title: req.title,
                description: req.description,
                amount: req.amount,
                currency: req.currency,
                date: req.date,
                category_id: req.category_id,
                paid_by_user_id: req.paid_by_user_id,
                is_split: req.is_split,
                shares,
            },
        )
        .await?;
    Ok(Json(expense))
}

#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/balances",
    params(("trip_id" = String, Path, description = "Trip identifier")),
    responses(
        (status = 200, description = "Balanced participants", body = [ParticipantInfo]),
        (status = 404, description = "Trip not found", body = ErrorResponse)
    )
)]
pub async fn get_trip_balances(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<ParticipantInfo>>, ApiError> {
    let balances = service.trip_balances(&trip_id).await?;
    Ok(Json(balances))
}

#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/expenses/by_category",
    params(("trip_id" = String, Path, description = "Trip identifier")),
    responses(
        (status = 200, description = "Category rollup", body = [ExpenseByCategory]),
        (status = 404, description = "Trip not found", body = ErrorResponse)
    )
)]
pub async fn get_expenses_by_category(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<ExpenseByCategory>>, ApiError> {
    let rollup = service.trip_expenses_by_category(&trip_id).await?;
    Ok(Json(rollup))
}

#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/summary",
    params(("trip_id" = String, Path, description = "Trip identifier")),
    responses(
        (status = 200, description = "Trip summary", body = TripSummary),
        (status = 404, description = "Trip not found", body = ErrorResponse)
    )
)]
pub async fn get_trip_summary(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Path(trip_id): Path<String>,
) -> Result<Json<TripSummary>, ApiError> {
    let summary = service.trip_summary(&trip_id).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/report",
    params(("trip_id" = String, Path, description = "Trip identifier")),
    responses(
        (status = 200, description = "Export bundle", body = ExportBundle),
        (status = 404, description = "Trip not found", body = ErrorResponse)
    )
)]
pub async fn get_trip_report(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Path(trip_id): Path<String>,
) -> Result<Json<ExportBundle>, ApiError> {
    let bundle = service.trip_report(&trip_id).await?;
    Ok(Json(bundle))
}

#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/export",
    params(("trip_id" = String, Path, description = "Trip identifier")),
    responses(
        (status = 200, description = "Document rendered and shared", body = ExportResponse),
        (status = 404, description = "Trip not found", body = ErrorResponse),
        (status = 500, description = "Render or share failure", body = ErrorResponse)
    )
)]
pub async fn export_trip(
    State(service): State<Arc<TripLedgerService<InMemoryTripStore, HtmlRenderer, LoggingShareGateway>>>,
    Path(trip_id): Path<String>,
) -> Result<Json<ExportResponse>, ApiError> {
    let document = service.export_trip(&trip_id).await?;
    Ok(Json(ExportResponse {
        size_bytes: document.size_bytes(),
        file_name: document.file_name,
        mime_type: document.mime_type,
    }))
}
