//! Trip HTTP handlers.
//!
//! ```text
//! POST   /api/v1/trips
//! GET    /api/v1/trips
//! GET    /api/v1/trips/{trip_id}
//! PUT    /api/v1/trips/{trip_id}
//! DELETE /api/v1/trips/{trip_id}
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    CreateTripRequest, DeleteTripRequest, GetTripRequest, ListTripsRequest, TripPayload,
    UpdateTripRequest,
};
use crate::domain::trip::{TripFields, TripStatus};
use crate::domain::Error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{invalid_status_error, parse_date, parse_uuid, FieldName};
use crate::inbound::http::ApiResult;

const TRIP_ID_FIELD: FieldName = FieldName::new("tripId");

/// Request body for creating or replacing a trip.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripBody {
    #[schema(example = "Kyoto in autumn")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "Kyoto")]
    pub destination: String,
    #[schema(format = "date", example = "2026-11-02")]
    pub start_date: String,
    #[schema(format = "date", example = "2026-11-09")]
    pub end_date: String,
    #[schema(value_type = String, example = "1800.00")]
    pub budget: Decimal,
    /// Lifecycle status; omitted means PLANNING on create and "keep the
    /// stored status" on update.
    #[schema(example = "PLANNING")]
    pub status: Option<String>,
}

fn parse_fields(body: TripBody) -> Result<TripFields, Error> {
    let status = body
        .status
        .map(|raw| {
            TripStatus::parse(&raw)
                .ok_or_else(|| invalid_status_error(FieldName::new("status"), &raw))
        })
        .transpose()?;

    Ok(TripFields {
        title: body.title,
        description: body.description,
        destination: body.destination,
        start_date: parse_date(&body.start_date, FieldName::new("startDate"))?,
        end_date: parse_date(&body.end_date, FieldName::new("endDate"))?,
        budget: body.budget,
        status,
    })
}

/// Create a trip owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/trips",
    request_body = TripBody,
    responses(
        (status = 201, description = "Trip created", body = TripPayload),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["trips"],
    operation_id = "createTrip"
)]
#[post("/trips")]
pub async fn create_trip(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<TripBody>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_user_id()?;
    let fields = parse_fields(payload.into_inner())?;
    let trip = state.trips.create_trip(CreateTripRequest { caller, fields }).await?;
    Ok(HttpResponse::Created().json(trip))
}

/// List the caller's trips.
#[utoipa::path(
    get,
    path = "/api/v1/trips",
    responses(
        (status = 200, description = "Trips", body = [TripPayload]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["trips"],
    operation_id = "listTrips"
)]
#[get("/trips")]
pub async fn list_trips(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<TripPayload>>> {
    let caller = session.require_user_id()?;
    let trips = state.trips_query.list_trips(ListTripsRequest { caller }).await?;
    Ok(web::Json(trips))
}

/// Fetch one trip by id.
#[utoipa::path(
    get,
    path = "/api/v1/trips/{trip_id}",
    params(("trip_id" = String, Path, format = "uuid")),
    responses(
        (status = 200, description = "Trip", body = TripPayload),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["trips"],
    operation_id = "getTrip"
)]
#[get("/trips/{trip_id}")]
pub async fn get_trip(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TripPayload>> {
    let caller = session.require_user_id()?;
    let trip_id = parse_uuid(&path.into_inner(), TRIP_ID_FIELD)?;
    let trip = state
        .trips_query
        .get_trip(GetTripRequest { caller, trip_id })
        .await?;
    Ok(web::Json(trip))
}

/// Replace a trip's mutable fields.
#[utoipa::path(
    put,
    path = "/api/v1/trips/{trip_id}",
    params(("trip_id" = String, Path, format = "uuid")),
    request_body = TripBody,
    responses(
        (status = 200, description = "Trip updated", body = TripPayload),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["trips"],
    operation_id = "updateTrip"
)]
#[put("/trips/{trip_id}")]
pub async fn update_trip(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<TripBody>,
) -> ApiResult<web::Json<TripPayload>> {
    let caller = session.require_user_id()?;
    let trip_id = parse_uuid(&path.into_inner(), TRIP_ID_FIELD)?;
    let fields = parse_fields(payload.into_inner())?;
    let trip = state
        .trips
        .update_trip(UpdateTripRequest {
            caller,
            trip_id,
            fields,
        })
        .await?;
    Ok(web::Json(trip))
}

/// Delete a trip and all of its expenses.
#[utoipa::path(
    delete,
    path = "/api/v1/trips/{trip_id}",
    params(("trip_id" = String, Path, format = "uuid")),
    responses(
        (status = 204, description = "Trip deleted"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["trips"],
    operation_id = "deleteTrip"
)]
#[delete("/trips/{trip_id}")]
pub async fn delete_trip(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_user_id()?;
    let trip_id = parse_uuid(&path.into_inner(), TRIP_ID_FIELD)?;
    state
        .trips
        .delete_trip(DeleteTripRequest { caller, trip_id })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "trips_tests.rs"]
mod tests;
