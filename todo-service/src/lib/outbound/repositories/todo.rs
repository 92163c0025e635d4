use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;
use uuid::Uuid;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoTitle;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::UserId;

const SELECT_TODOS: &str = "SELECT id, user_id, title, description, state, created_at FROM todos";

#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    state: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = TodoError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        Ok(Todo {
            id: TodoId(row.id),
            user_id: UserId(row.user_id),
            title: TodoTitle::new(row.title)?,
            description: row.description,
            state: row.state.parse()?,
            created_at: row.created_at,
        })
    }
}

/// `LIKE` pattern matching `needle` anywhere, with wildcards in it escaped.
fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn database_error(e: sqlx::Error) -> TodoError {
    TodoError::DatabaseError(e.to_string())
}

pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, user_id, title, description, state, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(todo.id.0)
        .bind(todo.user_id.0)
        .bind(todo.title.as_str())
        .bind(&todo.description)
        .bind(todo.state.as_str())
        .bind(todo.created_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(todo)
    }

    async fn find(&self, owner: &UserId, id: &TodoId) -> Result<Option<Todo>, TodoError> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_TODOS);
        query
            .push(" WHERE user_id = ")
            .push_bind(owner.0)
            .push(" AND id = ")
            .push_bind(id.0);

        query
            .build_query_as::<TodoRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Todo::try_from)
            .transpose()
    }

    async fn list(&self, owner: &UserId, filter: &TodoFilter) -> Result<Vec<Todo>, TodoError> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_TODOS);
        query.push(" WHERE user_id = ").push_bind(owner.0);

        if let Some(title) = &filter.title {
            query
                .push(" AND title LIKE ")
                .push_bind(contains_pattern(title));
        }
        if let Some(description) = &filter.description {
            query
                .push(" AND description LIKE ")
                .push_bind(contains_pattern(description));
        }
        if let Some(state) = filter.state {
            query.push(" AND state = ").push_bind(state.as_str());
        }

        query
            .push(" ORDER BY created_at, id OFFSET ")
            .push_bind(i64::from(filter.page.offset))
            .push(" LIMIT ")
            .push_bind(i64::from(filter.page.limit));

        let rows = query
            .build_query_as::<TodoRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.into_iter().map(Todo::try_from).collect()
    }

    async fn update(&self, todo: Todo) -> Result<Todo, TodoError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = $3, description = $4, state = $5
            WHERE user_id = $1 AND id = $2
            "#,
        )
        .bind(todo.user_id.0)
        .bind(todo.id.0)
        .bind(todo.title.as_str())
        .bind(&todo.description)
        .bind(todo.state.as_str())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound);
        }

        Ok(todo)
    }

    async fn delete(&self, owner: &UserId, id: &TodoId) -> Result<(), TodoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE user_id = $1 AND id = $2
            "#,
        )
        .bind(owner.0)
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("milk"), "%milk%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
    }
}
