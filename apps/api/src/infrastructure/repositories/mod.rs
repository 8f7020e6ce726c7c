// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_user_repository;
pub mod postgres_user_repository;
pub mod timeout_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use timeout_user_repository::{TimeoutUserRepository, DEFAULT_REQUEST_TIMEOUT};
