use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::AppError;
use crate::gui_config::render_config_js;
use crate::state::AppState;

pub(crate) async fn config_js(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = render_config_js(&state.settings)?;
    Ok(([(header::CONTENT_TYPE, "application/javascript")], body))
}
