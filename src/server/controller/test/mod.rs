use axum::{
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue},
    response::IntoResponse,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::{service::token::TokenService, state::AppState};


fn state(db: &DatabaseConnection) -> AppState {
    AppState::new(
        db.clone(),
        TokenService::new("controller-secret", Duration::minutes(15)),
    )
}

fn auth_headers(state: &AppState, user_id: i32) -> HeaderMap {
    let token = state.tokens.issue(user_id).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn status<T: IntoResponse, E: IntoResponse>(result: Result<T, E>) -> axum::http::StatusCode {
    match result {
        Ok(resp) => resp.into_response().status(),
        Err(err) => err.into_response().status(),
    }
}
