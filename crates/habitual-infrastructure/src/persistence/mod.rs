mod in_memory_store;
mod json_file_store;
pub mod repositories;

pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;

use habitual_domain::DomainError;

pub(crate) fn storage_err(context: &str, err: std::io::Error) -> DomainError {
    DomainError::Storage(format!("{context}: {err}"))
}
