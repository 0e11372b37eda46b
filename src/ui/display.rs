//! Terminal rendering for repository rows

use console::Style;

use crate::catalog::{self, RepositoryRow};

/// Render the repository list in simple or detailed form
pub fn render_rows(rows: &[RepositoryRow], detailed: bool) -> String {
    if rows.is_empty() {
        return "No repositories registered.".to_string();
    }

    let mut out = format!(
        "Registered repositories ({}, {} skills):\n",
        rows.len(),
        catalog::total_skills(rows)
    );
    for row in rows {
        out.push('\n');
        out.push_str(&render_row(row, detailed));
    }
    out
}

fn render_row(row: &RepositoryRow, detailed: bool) -> String {
    let bold = Style::new().bold();
    let mut out = format!(
        "  {} {}\n",
        Style::new().bold().yellow().apply_to(&row.display_name),
        Style::new().dim().apply_to(skill_count_label(row.skill_count))
    );
    if !row.subtitle.is_empty() {
        out.push_str(&format!("    {}\n", Style::new().dim().apply_to(&row.subtitle)));
    }
    if !row.enabled {
        out.push_str(&format!("    {}\n", Style::new().red().apply_to("disabled")));
    }
    if detailed {
        out.push_str(&format!("    {} {}\n", bold.apply_to("Kind:"), row.kind));
        out.push_str(&format!(
            "    {} {}/{}\n",
            bold.apply_to("Key:"),
            row.owner,
            row.name
        ));
        if !row.web_url.is_empty() {
            out.push_str(&format!("    {} {}\n", bold.apply_to("URL:"), row.web_url));
        }
    }
    out
}

fn skill_count_label(count: usize) -> String {
    if count == 1 {
        "(1 skill)".to_string()
    } else {
        format!("({count} skills)")
    }
}

/// Print the rendered list to stdout
pub fn display_rows(rows: &[RepositoryRow], detailed: bool) {
    print!("{}", render_rows(rows, detailed));
    if rows.is_empty() {
        println!();
    }
}
