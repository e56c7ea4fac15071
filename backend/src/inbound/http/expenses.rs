//! Expense HTTP handlers.
//!
//! ```text
//! POST   /api/v1/trips/{trip_id}/expenses
//! GET    /api/v1/trips/{trip_id}/expenses
//! DELETE /api/v1/expenses/{expense_id}
//! ```

use actix_web::{delete, get, post, web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::expense::ExpenseFields;
use crate::domain::ports::{
    AddExpenseRequest, AddExpenseResponse, DeleteExpenseRequest, DeleteExpenseResponse,
    ExpensePayload, ListExpensesRequest,
};
use crate::domain::Error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_date, parse_uuid, FieldName};
use crate::inbound::http::ApiResult;

const TRIP_ID_FIELD: FieldName = FieldName::new("tripId");
const EXPENSE_ID_FIELD: FieldName = FieldName::new("expenseId");

/// Request body for recording an expense.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBody {
    #[schema(example = "Shinkansen tickets")]
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "120.50")]
    pub amount: Decimal,
    #[schema(format = "date", example = "2026-11-03")]
    pub expense_date: String,
    #[schema(example = "transport")]
    pub category: String,
}

fn parse_fields(body: ExpenseBody) -> Result<ExpenseFields, Error> {
    Ok(ExpenseFields {
        title: body.title,
        description: body.description,
        amount: body.amount,
        expense_date: parse_date(&body.expense_date, FieldName::new("expenseDate"))?,
        category: body.category,
    })
}

/// Record an expense against a trip.
#[utoipa::path(
    post,
    path = "/api/v1/trips/{trip_id}/expenses",
    params(("trip_id" = String, Path, format = "uuid")),
    request_body = ExpenseBody,
    responses(
        (status = 201, description = "Expense recorded", body = AddExpenseResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["expenses"],
    operation_id = "addExpense"
)]
#[post("/trips/{trip_id}/expenses")]
pub async fn add_expense(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ExpenseBody>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_user_id()?;
    let trip_id = parse_uuid(&path.into_inner(), TRIP_ID_FIELD)?;
    let fields = parse_fields(payload.into_inner())?;
    let response = state
        .expenses
        .add_expense(AddExpenseRequest {
            caller,
            trip_id,
            fields,
        })
        .await?;
    Ok(HttpResponse::Created().json(response))
}

/// List a trip's expenses.
#[utoipa::path(
    get,
    path = "/api/v1/trips/{trip_id}/expenses",
    params(("trip_id" = String, Path, format = "uuid")),
    responses(
        (status = 200, description = "Expenses", body = [ExpensePayload]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["expenses"],
    operation_id = "listExpenses"
)]
#[get("/trips/{trip_id}/expenses")]
pub async fn list_expenses(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ExpensePayload>>> {
    let caller = session.require_user_id()?;
    let trip_id = parse_uuid(&path.into_inner(), TRIP_ID_FIELD)?;
    let expenses = state
        .expenses_query
        .list_expenses(ListExpensesRequest { caller, trip_id })
        .await?;
    Ok(web::Json(expenses))
}

/// Delete an expense.
#[utoipa::path(
    delete,
    path = "/api/v1/expenses/{expense_id}",
    params(("expense_id" = String, Path, format = "uuid")),
    responses(
        (status = 200, description = "Expense deleted", body = DeleteExpenseResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["expenses"],
    operation_id = "deleteExpense"
)]
#[delete("/expenses/{expense_id}")]
pub async fn delete_expense(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteExpenseResponse>> {
    let caller = session.require_user_id()?;
    let expense_id = parse_uuid(&path.into_inner(), EXPENSE_ID_FIELD)?;
    let response = state
        .expenses
        .delete_expense(DeleteExpenseRequest { caller, expense_id })
        .await?;
    Ok(web::Json(response))
}

#[cfg(test)]
#[path = "expenses_tests.rs"]
mod tests;
