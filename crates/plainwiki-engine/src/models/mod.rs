pub mod page;
pub mod title;

pub use page::Page;
pub use title::{Title, TitleError};
