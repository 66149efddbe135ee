//! Output formatting utilities

use std::io::{self, Write};

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

/// Write a success message
pub fn success(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg.green())
}

/// Write an error message
pub fn error(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg.red())
}

/// Write a warning message
pub fn warning(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg.yellow())
}

/// Write an info message
pub fn info(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg.cyan())
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
