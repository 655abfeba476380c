mod auth;
mod deferred_handlers;
mod dto;
mod error;
mod handlers;
mod router;
mod watch_list_handlers;

pub use auth::AuthenticatedAccount;
pub use dto::*;
pub use error::ApiError;
pub use router::{AppState, create_router};
