pub mod description;
pub mod issue;
pub mod markup;
