pub mod blocks;
pub mod page;
pub mod ui_state;
