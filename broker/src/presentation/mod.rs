pub mod rest;

pub use rest::{ApiError, AppState, AuthenticatedAccount, create_router};
