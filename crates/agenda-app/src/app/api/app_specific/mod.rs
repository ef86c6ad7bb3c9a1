// App-specific API handlers, outside the event resource itself.

use salvo::Router;

mod healthcheck;

#[must_use]
pub fn routes() -> Router {
    Router::new().push(healthcheck::routes())
}
