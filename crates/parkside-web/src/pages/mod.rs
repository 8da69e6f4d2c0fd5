mod home;
mod nationalpark;
pub mod render;
mod trails;

use salvo::Router;

/// Front-end route table. Role gates live inside the handlers; the API
/// enforces the real ones on every relayed call.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .get(home::index_handler)
        .push(home::routes())
        .push(nationalpark::routes())
        .push(trails::routes())
}
