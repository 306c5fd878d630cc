//! Terminal front end for the demo driver

pub mod app;

pub use app::App;
