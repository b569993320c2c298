pub mod api;
pub mod print;
pub mod state;
pub mod ui;
