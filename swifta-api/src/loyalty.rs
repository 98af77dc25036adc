use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use swifta_booking::LoyaltyEntry;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/loyalty/{contact}", get(get_loyalty_account))
}

#[derive(Debug, Serialize)]
pub(crate) struct LoyaltyAccountView {
    pub contact: String,
    pub balance: i64,
    pub history: Vec<LoyaltyEntry>,
}

pub(crate) async fn get_loyalty_account(
    State(state): State<AppState>,
    Path(contact): Path<String>,
) -> Result<Json<LoyaltyAccountView>, AppError> {
    let loyalty = state.loyalty.read().await;

    Ok(Json(LoyaltyAccountView {
        balance: loyalty.balance(&contact),
        history: loyalty.history(&contact).to_vec(),
        contact,
    }))
}
