mod aggregate;
mod repository;
mod value_objects;
mod weekly;


pub use aggregate::Habit;
pub use repository::HabitRepository;
pub use value_objects::{HabitDetails, HabitType, Priority};
pub use weekly::{week_start, DailyProgress, WeekCell, WeekGrid, WeekRow};
