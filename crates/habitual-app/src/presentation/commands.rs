// Module declarations
pub mod config;
pub mod habit;
pub mod query;
pub mod reminder;
pub mod session;
pub mod settings;
pub mod system;

// Re-export all commands for easy access
pub use config::*;
pub use habit::*;
pub use query::*;
pub use reminder::*;
pub use session::*;
pub use settings::*;
pub use system::*;
