//! Application route configuration.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{contact_routes, event_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Page shell. Loads the contact list and reloads it on every `Update` event.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Contacts</title>
</head>
<body>
  <h1>Contacts</h1>
  <table id="contacts">
    <thead><tr><th>Name</th><th>Primary email</th><th>Emails</th></tr></thead>
    <tbody></tbody>
  </table>
  <script>
    async function load() {
      const res = await fetch('/contacts');
      const rows = await res.json();
      const body = document.querySelector('#contacts tbody');
      body.replaceChildren(...rows.map(c => {
        const tr = document.createElement('tr');
        for (const text of [
          [c.title, c.firstName, c.lastName].filter(Boolean).join(' '),
          c.primaryEmail ?? '',
          c.emails.join(', '),
        ]) {
          const td = document.createElement('td');
          td.textContent = text;
          tr.appendChild(td);
        }
        return tr;
      }));
    }
    new EventSource('/events').addEventListener('Update', load);
    load();
  </script>
</body>
</html>
"#;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/contacts", contact_routes())
        .nest("/events", event_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
    event_subscribers: usize,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.database.ping().await {
        Ok(_) => ServiceStatus {
            status: "healthy",
            error: None,
        },
        Err(e) => ServiceStatus {
            status: "unhealthy",
            error: Some(e.to_string()),
        },
    };

    let healthy = database.error.is_none();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        services: ServiceHealth {
            database,
            event_subscribers: state.events.subscriber_count(),
        },
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
