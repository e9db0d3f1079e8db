/// Renders rows as a left-aligned text table.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![
        line(headers.to_vec()),
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    ];

    if rows.is_empty() {
        out.push("(nenhum registro)".to_string());
    }
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }

    out.join("\n")
}

/// Cell text for an optional value.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
