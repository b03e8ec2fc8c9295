//! Parsers for `wmctrl -lGpx`, `wmctrl -d` and `xprop _NET_WM_STATE` output.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, warn};

use super::errors::ParseError;
use super::types::{DesktopRecord, Position, Rect, Size, WindowRecord};

/// `<id> <desktop> <pid> <left> <top> <width> <height> <class> <owner> <title>`
static WINDOW_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<id>[A-Za-z0-9]+)\s+(?P<desktop>-?\d+)\s+(?P<pid>\d+)\s+(?P<left>-?\d+)\s+(?P<top>-?\d+)\s+(?P<width>\d+)\s+(?P<height>\d+)\s+(?P<class>\S+)\s+(?P<owner>\S+)\s?(?P<title>.*)$",
    )
    .expect("window line pattern is valid")
});

/// `<index> <*|-> DG: <w>x<h> VP: <x>,<y>|N/A WA: <l>,<t> <w>x<h> <name>`
static DESKTOP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<index>\d+)\s+(?P<active>[-*])\s+DG:\s+(?P<dg_width>\d+)x(?P<dg_height>\d+)\s+VP:\s+(?P<vp>N/A|-?\d+,-?\d+)\s+WA:\s+(?P<wa_left>-?\d+),(?P<wa_top>-?\d+)\s+(?P<wa_width>\d+)x(?P<wa_height>\d+)\s*(?P<name>.*)$",
    )
    .expect("desktop line pattern is valid")
});

const STATE_PROPERTY: &str = "_NET_WM_STATE(ATOM) =";
const STATE_ATOM_PREFIX: &str = "_NET_WM_STATE_";

/// Parse one line of `wmctrl -lGpx` output.
pub fn parse_window_line(line: &str) -> Result<WindowRecord, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let caps = WINDOW_LINE
        .captures(line)
        .ok_or_else(|| ParseError::GrammarMismatch {
            kind: "window",
            line: line.to_string(),
        })?;

    Ok(WindowRecord {
        id: caps["id"].to_string(),
        desktop: number(&caps, "desktop", line)?,
        process_id: number(&caps, "pid", line)?,
        position: Position {
            left: number(&caps, "left", line)?,
            top: number(&caps, "top", line)?,
        },
        size: Size {
            width: number(&caps, "width", line)?,
            height: number(&caps, "height", line)?,
        },
        class_name: caps["class"].to_string(),
        owner_name: caps["owner"].to_string(),
        title: caps["title"].to_string(),
        command_line: None,
        state_flags: None,
    })
}

/// Parse a whole window listing, skipping lines that don't fit.
pub fn parse_window_listing(text: &str) -> Vec<WindowRecord> {
    parse_listing(text, "window", parse_window_line)
}

/// Parse one line of `wmctrl -d` output.
pub fn parse_desktop_line(line: &str) -> Result<DesktopRecord, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let caps = DESKTOP_LINE
        .captures(line)
        .ok_or_else(|| ParseError::GrammarMismatch {
            kind: "desktop",
            line: line.to_string(),
        })?;

    let viewport = match &caps["vp"] {
        "N/A" => None,
        vp => {
            let (x, y) = vp.split_once(',').ok_or_else(|| ParseError::InvalidNumber {
                field: "vp",
                value: vp.to_string(),
                line: line.to_string(),
            })?;
            Some(Position {
                left: parse_field("vp", x, line)?,
                top: parse_field("vp", y, line)?,
            })
        }
    };

    Ok(DesktopRecord {
        index: number(&caps, "index", line)?,
        is_active: &caps["active"] == "*",
        desktop_geometry: Size {
            width: number(&caps, "dg_width", line)?,
            height: number(&caps, "dg_height", line)?,
        },
        viewport,
        working_area: Rect {
            left: number(&caps, "wa_left", line)?,
            top: number(&caps, "wa_top", line)?,
            width: number(&caps, "wa_width", line)?,
            height: number(&caps, "wa_height", line)?,
        },
        name: caps["name"].trim_end().to_string(),
    })
}

pub fn parse_desktop_listing(text: &str) -> Vec<DesktopRecord> {
    parse_listing(text, "desktop", parse_desktop_line)
}

/// Extract EWMH state flags from `xprop -id <id> _NET_WM_STATE` output.
///
/// `_NET_WM_STATE_MAXIMIZED_VERT` becomes `MAXIMIZED_VERT`. A window with
/// the property unset (`_NET_WM_STATE:  not found.`) has no flags.
pub fn parse_state_flags(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix(STATE_PROPERTY))
        .map(|atoms| {
            atoms
                .split(',')
                .map(str::trim)
                .filter(|atom| !atom.is_empty())
                .map(|atom| atom.trim_start_matches(STATE_ATOM_PREFIX).to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn parse_listing<T>(
    text: &str,
    kind: &'static str,
    parse: impl Fn(&str) -> Result<T, ParseError>,
) -> Vec<T> {
    let mut records = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            debug!(event = "core.parse.blank_line_skipped", kind = kind);
            continue;
        }
        match parse(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(
                    event = "core.parse.line_skipped",
                    kind = kind,
                    error = %e
                );
            }
        }
    }
    records
}

fn number<T: FromStr>(caps: &Captures<'_>, field: &'static str, line: &str) -> Result<T, ParseError> {
    parse_field(field, &caps[field], line)
}

fn parse_field<T: FromStr>(field: &'static str, value: &str, line: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
        line: line.to_string(),
    })
}
