pub mod trivia_service;
pub use trivia_service::{CategoryQuestions, TriviaError, TriviaService};

pub mod trivia_service_impl;
pub use trivia_service_impl::SeaOrmTriviaService;
