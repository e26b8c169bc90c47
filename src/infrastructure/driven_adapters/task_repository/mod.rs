//! Task repository implementations

mod in_memory;
mod postgres;

pub use in_memory::InMemoryTaskRepository;
pub use postgres::PostgresTaskRepository;
