//! Window manager backends: query windows and desktops, apply geometry.

mod errors;
mod traits;
mod wmctrl;

pub use errors::WmError;
pub use traits::WindowManagerBackend;
pub use wmctrl::WmctrlBackend;
