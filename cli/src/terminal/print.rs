//! Terminal output for the registrar.
//!
//! Everything shown to the user goes out as a `tracing` event on
//! [`PRINT_TARGET`]; the formatter in [`super::logging`] writes those events
//! verbatim, so quiet levels and `RUST_LOG` never swallow a command result.

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::format::Detail;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "registrar::print";

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::print::print("");
    };
    ($msg:expr) => {
        $crate::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// `═══⟦ text ⟧═══` padded to [`TOTAL_WIDTH`].
fn framed(text: &str, fill: &str) -> String {
    let width: usize = UnicodeWidthStr::width(text);
    let pad: usize = TOTAL_WIDTH.saturating_sub(width);
    let left: usize = pad / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        text.color(colors::PRIMARY).bold(),
        fill.repeat(pad - left).color(colors::SEPARATOR)
    )
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    print(&framed(&format!("⟦ REGISTRAR v{} ⟧", env!("CARGO_PKG_VERSION")), "═"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&framed(&format!("⟦ {} ⟧", msg.to_uppercase()), "─"));
}

pub fn menu_item(number: usize, label: &str) {
    print(&format!(
        "{}{} {}",
        number.to_string().color(colors::ACCENT),
        ".".color(colors::SEPARATOR),
        label.color(colors::TEXT_DEFAULT)
    ));
}

/// A request that changed the registry.
pub fn success(msg: &str) {
    print(&format!("{} {}", "[+]".green().bold(), msg.color(colors::TEXT_DEFAULT)));
}

/// A request the registry refused, or input that was not understood.
pub fn failure(msg: &str) {
    print(&format!("{} {}", "[-]".red().bold(), msg.color(colors::TEXT_DEFAULT)));
}

/// One catalog entry: the course code, then its details as a one-level tree.
pub fn course_tree(idx: usize, code: &str, details: &[Detail]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        code.color(colors::PRIMARY).bold()
    ));

    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// Closing line of the course listing.
pub fn catalog_summary(courses: usize, open_seats: u32) {
    let summary: String = format!(
        "{} courses, {} seats open",
        courses.to_string().bold().green(),
        open_seats.to_string().bold().yellow()
    );
    let indent: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(&summary)) / 2;
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
    print(&format!("{}{}", " ".repeat(indent), summary));
}

/// `Courses registered by <name>:` followed by one line per course.
pub fn schedule(name: &str, lines: &[String]) {
    print(&format!("Courses registered by {}:", name.color(colors::PRIMARY)));
    for line in lines {
        print(line);
    }
}

pub fn end_of_program() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}
