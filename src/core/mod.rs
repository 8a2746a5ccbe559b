pub mod event;
pub mod grid;
