pub mod app;
pub mod context;
pub mod month_pane;
pub mod status_line;

pub use app::App;
pub use context::{Context, Theme};
pub use month_pane::MonthPane;
pub use status_line::StatusLine;
