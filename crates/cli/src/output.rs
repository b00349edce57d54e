use resolver_audit_domain::ResolverEntry;
use std::fmt::Write;
use std::str::FromStr;

const COLUMNS: [&str; 6] = ["id", "type", "address", "netmask", "options", "pid_with_namespace"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (table, json)", other)),
        }
    }
}

pub fn render(entries: &[ResolverEntry], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Table => Ok(render_table(entries)),
    }
}

fn row_cells(entry: &ResolverEntry) -> [String; 6] {
    [
        entry.id.to_string(),
        entry.kind.to_string(),
        entry.address.clone(),
        entry.netmask.map(|m| m.to_string()).unwrap_or_default(),
        entry.options.map(|o| o.to_string()).unwrap_or_default(),
        entry.pid_with_namespace.clone(),
    ]
}

/// Left-aligned columns separated by two spaces.
pub fn render_table(entries: &[ResolverEntry]) -> String {
    let rows: Vec<[String; 6]> = entries.iter().map(row_cells).collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &COLUMNS.map(String::from), &widths);
    for row in &rows {
        write_line(&mut out, row, &widths);
    }
    out
}

fn write_line(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let _ = write!(line, "{:<width$}", cell, width = width);
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
