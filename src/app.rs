#[allow(clippy::module_inception)]
mod app;
pub mod config;
pub mod fetch;
pub mod notifications;
pub mod pagination;
pub mod tmdb;

pub use app::{App, CurrentScreen};

#[cfg(test)]
pub(crate) use app::tests as test_support;
