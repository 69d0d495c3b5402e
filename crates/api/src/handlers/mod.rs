pub mod directors;
pub mod health;
pub mod movies;
