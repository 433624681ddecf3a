use utoipa::OpenApi;

use crate::{
    api::models::{
        AddDestinationRequest, AddExpenseRequest, AddParticipantRequest, CreateTripRequest,
        ErrorResponse, ExportResponse, SaveCategoryRequest, SaveProfileRequest, ShareInput,
    },
    core::models::{
        Destination, Expense, ExpenseByCategory, ExpenseCategory, ExpenseShare, ExportBundle,
        ParticipantInfo, Profile, Role, Trip, TripSummary,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::save_profile,
        super::handlers::save_category,
        super::handlers::create_trip,
        super::handlers::get_trip,
        super::handlers::add_destination,
        super::handlers::add_participant,
        super::handlers::add_expense,
        super::handlers::get_trip_balances,
        super::handlers::get_expenses_by_category,
        super::handlers::get_trip_summary,
        super::handlers::get_trip_report,
        super::handlers::export_trip
    ),
    components(schemas(
        SaveProfileRequest,
        SaveCategoryRequest,
        CreateTripRequest,
        AddDestinationRequest,
        AddParticipantRequest,
        AddExpenseRequest,
        ShareInput,
        ExportResponse,
        ErrorResponse,
        Trip,
        Destination,
        Expense,
        ExpenseShare,
        ExpenseCategory,
        Profile,
        ParticipantInfo,
        Role,
        ExpenseByCategory,
        TripSummary,
        ExportBundle
    )),
    tags(
        (name = "tripledger", description = "Trip financial reconciliation API")
    )
)]
pub struct ApiDoc;
