use crate::core::range::{parse_bound, valid_range};
use crate::core::route::{Route, RouteTable};
use crate::core::{Employee, EmployeeStore};
use crate::domain::event::{Envelope, ErrorBody, GatewayRequest, GatewayResponse};
use crate::domain::model::parse_id;
use crate::utils::error::{GatewayError, Result};
use serde::Serialize;
use tracing::Instrument;

const LIST_FAILURE_MESSAGE: &str = "An error occurred while processing the request.";

pub struct Dispatcher<S: EmployeeStore> {
    store: S,
    routes: RouteTable,
}

impl<S: EmployeeStore> Dispatcher<S> {
    pub fn new(store: S) -> Self {
        Self::with_routes(store, RouteTable::default())
    }

    pub fn with_routes(store: S, routes: RouteTable) -> Self {
        Self { store, routes }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Handle one gateway invocation. Never fails: every error becomes a
    /// response with the matching status.
    pub async fn handle(&self, request: &GatewayRequest) -> GatewayResponse {
        let route = self.routes.resolve(&request.route_key);
        let span = tracing::info_span!(
            "request",
            route_key = %request.route_key,
            route = %route,
            status = tracing::field::Empty,
        );

        async {
            tracing::info!(
                has_query = request.query().is_some(),
                has_body = request.body.is_some(),
                "Handling request"
            );

            let response = match self.dispatch(route, request).await {
                Ok(response) => response,
                Err(e) => {
                    if e.is_client_error() {
                        tracing::warn!("Rejected {} request: {}", route, e);
                    } else {
                        tracing::error!("Error processing {} request: {}", route, e);
                    }
                    error_response(route, &e)
                }
            };

            tracing::Span::current().record("status", response.status_code);
            response
        }
        .instrument(span)
        .await
    }

    async fn dispatch(&self, route: Route, request: &GatewayRequest) -> Result<GatewayResponse> {
        match route {
            Route::List => self.list(request).await,
            Route::Get => self.get(request).await,
            Route::Create => self.create(request).await,
            Route::Unknown => {
                tracing::debug!("No handler for route key '{}'", request.route_key);
                envelope(Envelope::empty())
            }
        }
    }

    async fn list(&self, request: &GatewayRequest) -> Result<GatewayResponse> {
        let employees = self.store.list().await?;

        let Some(query) = request.query() else {
            return json(&employees);
        };

        let start = query.get("start").and_then(|raw| parse_bound(raw));
        let end = query.get("end").and_then(|raw| parse_bound(raw));
        let (Some(start), Some(end)) = (start, end) else {
            return Err(GatewayError::InvalidQueryParameters);
        };

        let range = valid_range(start, end, employees.len());
        tracing::debug!(
            "Slicing {} employees with [{}, {}) -> [{}, {})",
            employees.len(),
            start,
            end,
            range.start,
            range.end
        );
        json(range.apply(&employees))
    }

    async fn get(&self, request: &GatewayRequest) -> Result<GatewayResponse> {
        let raw_id = request
            .path_param("id")
            .ok_or_else(|| GatewayError::MissingPathParameter {
                name: "id".to_string(),
            })?;

        // an id that is not an integer can never match a stored one
        let found = match parse_id(raw_id) {
            Some(id) => self.store.find(id).await?,
            None => None,
        };

        match found {
            Some(employee) => envelope(Envelope::with(serde_json::to_string(&employee)?)),
            None => {
                tracing::debug!("No employee with id '{}'", raw_id);
                envelope(Envelope::empty())
            }
        }
    }

    async fn create(&self, request: &GatewayRequest) -> Result<GatewayResponse> {
        let body = request.body.as_deref().ok_or(GatewayError::InvalidBody)?;
        let employee: Employee = serde_json::from_str(body).map_err(|e| {
            tracing::debug!("Unparseable create body: {}", e);
            GatewayError::InvalidBody
        })?;

        tracing::info!("Adding employee {} ({})", employee.name, employee.employee_id);
        let employees = self.store.append(employee).await?;
        envelope(Envelope::with(serde_json::to_string(&employees)?))
    }
}

fn json<T: Serialize + ?Sized>(payload: &T) -> Result<GatewayResponse> {
    Ok(GatewayResponse::ok(serde_json::to_string(payload)?))
}

fn envelope(envelope: Envelope) -> Result<GatewayResponse> {
    json(&envelope)
}

fn error_response(route: Route, error: &GatewayError) -> GatewayResponse {
    let body = match (route, error) {
        (_, GatewayError::InvalidBody) => ErrorBody {
            message: error.to_string(),
            error: None,
        },
        (Route::List, _) => ErrorBody {
            message: LIST_FAILURE_MESSAGE.to_string(),
            error: Some(error.to_string()),
        },
        _ => ErrorBody {
            message: error.to_string(),
            error: None,
        },
    };

    let body = serde_json::to_string(&body)
        .unwrap_or_else(|_| r#"{"message":"Internal error"}"#.to_string());
    GatewayResponse::new(error.status_code(), body)
}
