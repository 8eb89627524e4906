pub mod assets;
pub mod contact;
pub mod content;
pub mod page;
