//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP endpoint and the schemas they exchange.
//! The session cookie issued by `POST /api/v1/login` is registered as the
//! document-wide security scheme; the handlers for registration and login
//! opt out individually with `security([])`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::ports::{
    AddExpenseResponse, DashboardSnapshot, DeleteExpenseResponse, ExpensePayload,
    RecommendationPayload, TripPayload,
};
use crate::domain::{BudgetSummary, Error, ErrorCode, TripStatus, UserId};
use crate::inbound::http::expenses::ExpenseBody;
use crate::inbound::http::recommendations::RecommendationBody;
use crate::inbound::http::trips::TripBody;
use crate::inbound::http::users::{CredentialsBody, SessionUserBody};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "TripEase backend API",
        description = "Session-authenticated HTTP interface for trips, expenses, \
            AI travel recommendations, and the budget dashboard."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::trips::create_trip,
        crate::inbound::http::trips::list_trips,
        crate::inbound::http::trips::get_trip,
        crate::inbound::http::trips::update_trip,
        crate::inbound::http::trips::delete_trip,
        crate::inbound::http::expenses::add_expense,
        crate::inbound::http::expenses::list_expenses,
        crate::inbound::http::expenses::delete_expense,
        crate::inbound::http::recommendations::generate_recommendation,
        crate::inbound::http::recommendations::list_recommendations,
        crate::inbound::http::recommendations::delete_recommendation,
        crate::inbound::http::dashboard::get_dashboard,
    ),
    components(schemas(
        Error,
        ErrorCode,
        UserId,
        TripStatus,
        BudgetSummary,
        TripPayload,
        ExpensePayload,
        RecommendationPayload,
        DashboardSnapshot,
        AddExpenseResponse,
        DeleteExpenseResponse,
        CredentialsBody,
        SessionUserBody,
        TripBody,
        ExpenseBody,
        RecommendationBody,
    )),
    tags(
        (name = "users", description = "Registration and session management"),
        (name = "trips", description = "Trip CRUD"),
        (name = "expenses", description = "Per-trip expense tracking"),
        (name = "recommendations", description = "AI travel recommendations"),
        (name = "dashboard", description = "Budget and trip aggregates")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::RefOr;
    use utoipa::OpenApi;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[test]
    fn dashboard_snapshot_schema_uses_camel_case() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let snapshot = schemas.get("DashboardSnapshot").expect("snapshot schema");

        assert_object_schema_has_field(snapshot, "totalTrips");
        assert_object_schema_has_field(snapshot, "totalExpenses");
        assert_object_schema_has_field(snapshot, "budgetSummary");
        assert_object_schema_has_field(snapshot, "upcomingTrips");
    }

    #[test]
    fn every_trip_path_is_registered() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/v1/trips"));
        assert!(paths.contains_key("/api/v1/trips/{trip_id}"));
        assert!(paths.contains_key("/api/v1/trips/{trip_id}/expenses"));
        assert!(paths.contains_key("/api/v1/expenses/{expense_id}"));
        assert!(paths.contains_key("/api/v1/recommendations"));
        assert!(paths.contains_key("/api/v1/dashboard"));
    }
}
