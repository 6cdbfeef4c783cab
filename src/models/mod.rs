pub mod category;
pub mod question;

pub use category::{Category, CategoryMap, category_map};
pub use question::{NewQuestion, Question, QuestionPage};
