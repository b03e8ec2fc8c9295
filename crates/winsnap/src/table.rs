use winsnap_core::DesktopRecord;
use winsnap_core::WindowRecord;
use winsnap_core::reconcile::{ApplyStep, Instruction, InstructionKind};

/// Print a formatted table of live windows
pub fn print_windows_table(windows: &[WindowRecord]) {
    let rows: Vec<Vec<String>> = windows
        .iter()
        .map(|w| {
            vec![
                w.id.clone(),
                desktop_label(w.desktop),
                w.process_id.to_string(),
                format!("{}x{}", w.size.width, w.size.height),
                format!("{},{}", w.position.left, w.position.top),
                w.class_name.clone(),
                w.title.clone(),
            ]
        })
        .collect();

    print_table(
        &[
            Column::new("ID", 10, 10),
            Column::new("Desk", 4, 4),
            Column::new("PID", 3, 7),
            Column::new("Size", 4, 9),
            Column::new("Position", 8, 11),
            Column::new("Class", 5, 30),
            Column::new("Title", 5, 40),
        ],
        &rows,
    );
    println!("\nTotal: {} window(s)", windows.len());
}

/// Print a formatted table of desktops
pub fn print_desktops_table(desktops: &[DesktopRecord]) {
    let rows: Vec<Vec<String>> = desktops
        .iter()
        .map(|d| {
            let wa = d.working_area;
            vec![
                d.index.to_string(),
                if d.is_active { "*" } else { "" }.to_string(),
                format!("{}x{}", d.desktop_geometry.width, d.desktop_geometry.height),
                format!("{},{} {}x{}", wa.left, wa.top, wa.width, wa.height),
                d.name.clone(),
            ]
        })
        .collect();

    print_table(
        &[
            Column::new("Index", 5, 5),
            Column::new("Active", 6, 6),
            Column::new("Geometry", 8, 11),
            Column::new("Working area", 12, 23),
            Column::new("Name", 4, 30),
        ],
        &rows,
    );
    println!("\nTotal: {} desktop(s)", desktops.len());
}

/// Print planned restore instructions
pub fn print_instructions_table(instructions: &[Instruction]) {
    if instructions.is_empty() {
        println!("Nothing to change.");
        return;
    }

    let rows: Vec<Vec<String>> = instructions
        .iter()
        .map(|i| {
            let action = match &i.kind {
                InstructionKind::Reapply { rule, stored_id } => {
                    format!("restore ({}, from {})", rule.as_str(), stored_id)
                }
                InstructionKind::Relocate => "relocate".to_string(),
            };
            let target = i
                .geometry()
                .map(|r| format!("{},{} {}x{}", r.left, r.top, r.width, r.height))
                .unwrap_or_default();
            let unmaximize = i
                .steps
                .iter()
                .any(|s| matches!(s, ApplyStep::ClearFlags { .. }));
            vec![
                i.window_id.clone(),
                action,
                target,
                if unmaximize { "yes" } else { "" }.to_string(),
                i.title.clone(),
            ]
        })
        .collect();

    print_table(
        &[
            Column::new("ID", 10, 10),
            Column::new("Action", 6, 30),
            Column::new("Target", 6, 23),
            Column::new("Unmax", 5, 5),
            Column::new("Title", 5, 40),
        ],
        &rows,
    );
}

struct Column {
    header: &'static str,
    min: usize,
    max: usize,
}

impl Column {
    fn new(header: &'static str, min: usize, max: usize) -> Self {
        Self { header, min, max }
    }
}

fn print_table(columns: &[Column], rows: &[Vec<String>]) {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(idx, col)| {
            rows.iter()
                .map(|row| row[idx].chars().count())
                .max()
                .unwrap_or(col.min)
                .clamp(col.min, col.max)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        println!("{}{}{}", left, segments.join(mid), right);
    };
    let line = |cells: Vec<String>| {
        println!("│ {} │", cells.join(" │ "));
    };

    rule("┌", "┬", "┐");
    line(
        columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| truncate(col.header, *w))
            .collect(),
    );
    rule("├", "┼", "┤");
    for row in rows {
        line(
            row.iter()
                .zip(&widths)
                .map(|(cell, w)| truncate(cell, *w))
                .collect(),
        );
    }
    rule("└", "┴", "┘");
}

fn desktop_label(desktop: i32) -> String {
    if desktop == -1 {
        "all".to_string()
    } else {
        desktop.to_string()
    }
}

/// Pad or cut `s` to exactly `max_len` characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return format!("{:<width$}", s, width = max_len);
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{:<width$}", format!("{}...", kept), width = max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short     ");
        assert_eq!(truncate("Mozilla Firefox - Start", 10), "Mozilla...");
        assert_eq!(truncate("exact", 5), "exact");
        assert_eq!(truncate("", 3), "   ");
    }

    #[test]
    fn test_truncate_multibyte() {
        let result = truncate("Überblick — Straße", 8);
        assert_eq!(result.chars().count(), 8);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_desktop_label() {
        assert_eq!(desktop_label(-1), "all");
        assert_eq!(desktop_label(3), "3");
    }

    #[test]
    fn test_print_tables_do_not_panic() {
        print_windows_table(&[]);
        print_desktops_table(&[]);
        print_instructions_table(&[]);
    }
}
