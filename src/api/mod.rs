//! HTTP API module for the Call Budget Engine.
//!
//! This module exposes the budget, burden, and schedule calculations as REST
//! endpoints and translates UI-shaped input into engine types.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BudgetRequest, BurdenRequest, CallContextRequest, ProviderRequest, ScheduleRequest,
    TierRequest, resolve_providers_on_call,
};
pub use response::{ApiError, BurdenResponse, ScheduleResponse};
pub use state::AppState;
