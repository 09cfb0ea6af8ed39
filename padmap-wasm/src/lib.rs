mod api;
mod config;
mod error;
mod fetch;
mod render;

pub use api::{set_panic_hook, set_server, show, show_scene, svg_snapshot};
