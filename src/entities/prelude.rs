pub use super::categories::Entity as Categories;
pub use super::questions::Entity as Questions;
