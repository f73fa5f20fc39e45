mod habit_dto;

pub use habit_dto::{AddHabitInput, ChartBarDto, HabitCardDto, SessionSnapshot};
