//! Event and render handlers, split out of app.rs by concern

mod event_loop;
mod hit_test;
mod keyboard;
mod mouse;
mod navigation;
mod rendering;
mod themes;

pub use hit_test::HitTarget;
pub use navigation::{resolve_href, LinkTarget};
