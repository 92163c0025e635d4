pub mod todo;
pub mod user;

pub use todo::PostgresTodoRepository;
pub use user::PostgresUserRepository;
