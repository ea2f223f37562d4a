//! Server-sent event stream of contact changes.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;

use crate::api::AppState;

/// Create event routes
pub fn event_routes() -> Router<AppState> {
    Router::new().route("/", get(subscribe))
}

/// Subscribe to change events
///
/// Every successful save or delete pushes an `Update` event. Clients that
/// fall behind skip the missed events and keep listening.
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    responses(
        (status = 200, description = "Event stream", content_type = "text/event-stream")
    )
)]
pub async fn subscribe(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.events.subscribe();
    tracing::debug!(
        subscribers = state.events.subscriber_count(),
        "Client subscribed to events"
    );

    let events = stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    let message = Event::default().event(event.name()).data(event.name());
                    return Some((Ok(message), receiver));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Event subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
