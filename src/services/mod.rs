pub mod floor_plan;
pub mod seating;
