pub mod articles;
pub mod assets;
pub mod maintenance;
pub mod pages;
pub mod projects;

use crate::services::listing::{ListParams, ListQuery};
use crate::web::state::AppState;

/// Parses and clamps raw listing parameters against the configured
/// page-size bounds.
pub(crate) fn list_query(state: &AppState, params: &ListParams) -> ListQuery {
    ListQuery::from_params(
        params,
        state.config.content.default_page_size,
        state.config.content.max_page_size,
    )
}
