mod dto;
mod handlers;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
