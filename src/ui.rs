mod footer;
mod header;
mod loading;
mod main_content;
mod movie_detail;
mod pagination;
mod toast;
#[allow(clippy::module_inception)]
mod ui;

pub use ui::ui;
