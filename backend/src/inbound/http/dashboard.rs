//! Dashboard HTTP handler.
//!
//! ```text
//! GET /api/v1/dashboard
//! ```

use actix_web::{get, web};

use crate::domain::ports::{DashboardRequest, DashboardSnapshot};
use crate::domain::Error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Assemble the caller's dashboard: trip count, budget aggregates, and
/// upcoming trips.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Dashboard snapshot", body = DashboardSnapshot),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "getDashboard"
)]
#[get("/dashboard")]
pub async fn get_dashboard(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<DashboardSnapshot>> {
    let caller = session.require_user_id()?;
    let snapshot = state.dashboard.snapshot(DashboardRequest { caller }).await?;
    Ok(web::Json(snapshot))
}
