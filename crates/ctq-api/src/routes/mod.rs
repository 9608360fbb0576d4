pub mod health;
pub mod instruments;
pub mod quizzes;
pub mod score;
pub mod submit;
