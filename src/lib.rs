pub mod error;
pub mod event;
pub mod intake;
pub mod ui;
pub mod vim;
