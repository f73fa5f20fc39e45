mod habit_queries;
mod progress_queries;

pub use habit_queries::HabitQueries;
pub use progress_queries::ProgressQueries;
