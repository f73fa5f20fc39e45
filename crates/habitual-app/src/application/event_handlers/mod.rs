mod scheduler_reload_handler;

pub use scheduler_reload_handler::SchedulerReloadEventHandler;
