mod stage;
mod status_bar;

pub mod nav_dots;

pub use nav_dots::NavDotsWidget;
pub use stage::StageWidget;
pub use status_bar::StatusBarWidget;
