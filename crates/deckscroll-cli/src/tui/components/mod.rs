//! Screen components drawn around the document content

pub mod minimap;
pub mod nav_bar;
pub mod progress_bar;
pub mod scrollbars;
pub mod toast;

pub use minimap::{render_minimap, MinimapPanelState, MinimapRenderResult};
pub use nav_bar::{render_nav_bar, NavBarAreas, NavBarInfo};
pub use progress_bar::render_progress_bar;
pub use scrollbars::render_scrollbar;
pub use toast::{render_toasts, Toast, ToastQueue};
