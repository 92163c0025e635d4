use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoData;
use crate::domain::page::Page;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoState;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_todos(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    params: Result<Query<ListTodosParams>, QueryRejection>,
) -> Result<ApiSuccess<ListTodosResponseData>, ApiError> {
    let Query(params) = params?;

    let filter = params.try_into_filter()?;

    state
        .todo_service
        .list_todos(&user.id, filter)
        .await
        .map_err(ApiError::from)
        .map(|todos| {
            ApiSuccess::new(
                StatusCode::OK,
                ListTodosResponseData {
                    todos: todos.iter().map(TodoData::from).collect(),
                },
            )
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListTodosParams {
    title: Option<String>,
    description: Option<String>,
    state: Option<String>,
    offset: Option<u32>,
    limit: Option<u32>,
}

impl ListTodosParams {
    fn try_into_filter(self) -> Result<TodoFilter, TodoError> {
        Ok(TodoFilter {
            title: self.title,
            description: self.description,
            state: self.state.map(|s| s.parse::<TodoState>()).transpose()?,
            page: Page::or_default(self.offset, self.limit, TodoFilter::DEFAULT_LIMIT),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTodosResponseData {
    pub todos: Vec<TodoData>,
}
