mod dashboard;
mod workout;

pub use dashboard::Dashboard;
pub use workout::DayWorkout;
