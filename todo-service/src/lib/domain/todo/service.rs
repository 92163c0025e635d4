use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for todo operations.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    /// # Arguments
    /// * `repository` - Todo persistence implementation
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(
        &self,
        owner: &UserId,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let todo = Todo {
            id: TodoId::new(),
            user_id: *owner,
            title: command.title,
            description: command.description,
            state: command.state,
            created_at: Utc::now(),
        };

        let created = self.repository.create(todo).await?;
        tracing::debug!(todo_id = %created.id, user_id = %owner, "Todo created");

        Ok(created)
    }

    async fn list_todos(&self, owner: &UserId, filter: TodoFilter) -> Result<Vec<Todo>, TodoError> {
        self.repository.list(owner, &filter).await
    }

    async fn update_todo(
        &self,
        owner: &UserId,
        id: &TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let mut todo = self
            .repository
            .find(owner, id)
            .await?
            .ok_or(TodoError::NotFound)?;

        command.apply(&mut todo);

        self.repository.update(todo).await
    }

    async fn delete_todo(&self, owner: &UserId, id: &TodoId) -> Result<(), TodoError> {
        self.repository.delete(owner, id).await?;
        tracing::debug!(todo_id = %id, user_id = %owner, "Todo deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::page::Page;
    use crate::domain::todo::models::TodoState;
    use crate::domain::todo::models::TodoTitle;

    mock! {
        pub TestTodoRepository {}

        #[async_trait]
        impl TodoRepository for TestTodoRepository {
            async fn create(&self, todo: Todo) -> Result<Todo, TodoError>;
            async fn find(&self, owner: &UserId, id: &TodoId) -> Result<Option<Todo>, TodoError>;
            async fn list(&self, owner: &UserId, filter: &TodoFilter) -> Result<Vec<Todo>, TodoError>;
            async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;
            async fn delete(&self, owner: &UserId, id: &TodoId) -> Result<(), TodoError>;
        }
    }

    fn test_todo(owner: UserId) -> Todo {
        Todo {
            id: TodoId::new(),
            user_id: owner,
            title: TodoTitle::new("Buy milk".to_string()).unwrap(),
            description: "semi-skimmed".to_string(),
            state: TodoState::Todo,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_todo_sets_owner() {
        let mut repository = MockTestTodoRepository::new();
        let owner = UserId::new();

        repository
            .expect_create()
            .withf(move |todo| todo.user_id == owner && todo.title.as_str() == "Buy milk")
            .times(1)
            .returning(|todo| Ok(todo));

        let service = TodoService::new(Arc::new(repository));

        let command = CreateTodoCommand {
            title: TodoTitle::new("Buy milk".to_string()).unwrap(),
            description: String::new(),
            state: TodoState::Draft,
        };
        let todo = service.create_todo(&owner, command).await.unwrap();

        assert_eq!(todo.user_id, owner);
        assert_eq!(todo.state, TodoState::Draft);
    }

    #[tokio::test]
    async fn test_list_todos_scoped_to_owner() {
        let mut repository = MockTestTodoRepository::new();
        let owner = UserId::new();
        let todos = vec![test_todo(owner)];

        repository
            .expect_list()
            .withf(move |o, filter| *o == owner && filter.page == Page::new(5, 1))
            .times(1)
            .returning(move |_, _| Ok(todos.clone()));

        let service = TodoService::new(Arc::new(repository));

        let filter = TodoFilter {
            page: Page::new(5, 1),
            ..TodoFilter::default()
        };
        let result = service.list_todos(&owner, filter).await.unwrap();
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_update_todo_applies_only_given_fields() {
        let mut repository = MockTestTodoRepository::new();
        let owner = UserId::new();
        let existing = test_todo(owner);
        let todo_id = existing.id;

        repository
            .expect_find()
            .withf(move |o, id| *o == owner && *id == todo_id)
            .times(1)
            .returning(move |_, _| Ok(Some(existing.clone())));
        repository
            .expect_update()
            .withf(|todo| {
                todo.state == TodoState::Done
                    && todo.title.as_str() == "Buy milk"
                    && todo.description == "semi-skimmed"
            })
            .times(1)
            .returning(|todo| Ok(todo));

        let service = TodoService::new(Arc::new(repository));

        let command = UpdateTodoCommand {
            state: Some(TodoState::Done),
            ..UpdateTodoCommand::default()
        };
        let todo = service.update_todo(&owner, &todo_id, command).await.unwrap();
        assert_eq!(todo.state, TodoState::Done);
    }

    #[tokio::test]
    async fn test_update_foreign_todo_not_found() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_find()
            .times(1)
            .returning(|_, _| Ok(None));
        repository.expect_update().times(0);

        let service = TodoService::new(Arc::new(repository));

        let result = service
            .update_todo(&UserId::new(), &TodoId::new(), UpdateTodoCommand::default())
            .await;
        assert!(matches!(result, Err(TodoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_foreign_todo_not_found() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|_, _| Err(TodoError::NotFound));

        let service = TodoService::new(Arc::new(repository));

        let result = service.delete_todo(&UserId::new(), &TodoId::new()).await;
        assert!(matches!(result, Err(TodoError::NotFound)));
    }
}
