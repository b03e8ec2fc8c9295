mod errors;
mod parser;
mod types;

pub use errors::ParseError;
pub use parser::{
    parse_desktop_line, parse_desktop_listing, parse_state_flags, parse_window_line,
    parse_window_listing,
};
pub use types::{
    DesktopRecord, MAXIMIZED_HORZ, MAXIMIZED_VERT, Position, Rect, Size, WindowRecord,
};
