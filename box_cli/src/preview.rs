//! Text rendering of the side panel for terminal preview.

use box_core::geometry::PanelGeometry;
use box_core::Summary;

/// Render the panel outline, post lines (`:`) and drill holes (`o`) on a
/// character grid `columns` wide. Rows keep the panel's aspect ratio with
/// the usual 2:1 terminal cell correction.
pub fn render_panel(panel: &PanelGeometry, columns: usize) -> String {
    let columns = columns.max(8);
    let width = panel.width_mm();
    let height = panel.height_mm();
    let rows = ((height / width) * columns as f64 / 2.0).round().max(4.0) as usize;

    let col_of = |x: f64| ((x / width) * (columns - 1) as f64).round() as usize;
    // row 0 is the top edge
    let row_of = |y: f64| rows - 1 - ((y / height) * (rows - 1) as f64).round() as usize;

    let mut grid = vec![vec![' '; columns]; rows];

    for line in &panel.post_lines {
        let c = col_of(line.start.x);
        for row in grid.iter_mut() {
            row[c] = ':';
        }
    }
    for hole in &panel.drill_holes {
        grid[row_of(hole.center.y)][col_of(hole.center.x)] = 'o';
    }
    for (r, row) in grid.iter_mut().enumerate() {
        let edge = r == 0 || r == rows - 1;
        for (c, cell) in row.iter_mut().enumerate() {
            let side = c == 0 || c == columns - 1;
            *cell = match (edge, side) {
                (true, true) => '+',
                (true, false) => '-',
                (false, true) if *cell == 'o' => 'o',
                (false, true) => '|',
                (false, false) => *cell,
            };
        }
    }

    let mut out: String = grid
        .into_iter()
        .map(|row| row.into_iter().collect::<String>() + "\n")
        .collect();
    out.push_str(&position_labels(panel, columns, &col_of));
    out
}

/// One row of post x labels, skipping labels that would overlap.
fn position_labels(panel: &PanelGeometry, columns: usize, col_of: &dyn Fn(f64) -> usize) -> String {
    let mut line = vec![' '; columns + 8];
    let mut next_free = 0;
    for post in &panel.post_lines {
        let label = format!("{}", post.start.x.trunc() as u64);
        let start = col_of(post.start.x).saturating_sub(label.len() / 2);
        if start < next_free || start + label.len() > line.len() {
            continue;
        }
        for (i, ch) in label.chars().enumerate() {
            line[start + i] = ch;
        }
        next_free = start + label.len() + 1;
    }
    let text: String = line.into_iter().collect();
    format!("{}\n", text.trim_end())
}

/// Drill schedule, e.g. `10 holes per post at 200, 400, ... 2000 mm`.
pub fn drill_schedule(panel: &PanelGeometry) -> String {
    let heights: Vec<String> = panel
        .holes_on_post(0)
        .map(|h| format!("{}", h.center.y))
        .collect();
    match heights.len() {
        0 => "No drill holes (panel lower than one interval)".to_string(),
        n => format!("{} holes per post at {} mm", n, heights.join(", ")),
    }
}

pub fn post_table(summary: &Summary) -> String {
    summary
        .post_positions_mm
        .iter()
        .enumerate()
        .map(|(i, x)| format!("  P{:<3} x = {:>5} mm", i + 1, x))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use box_core::{decompose, BoxSpec, DesignSettings};

    fn reference() -> (PanelGeometry, Summary) {
        let result = decompose(&BoxSpec::default(), &DesignSettings::default()).unwrap();
        let summary = result.summary();
        (result.panel, summary)
    }

    #[test]
    fn test_render_has_frame_and_posts() {
        let (panel, _) = reference();
        let text = render_panel(&panel, 60);
        let first = text.lines().next().unwrap();
        assert!(first.starts_with('+'));
        assert!(first.ends_with('+'));
        assert!(text.contains(':'));
        assert!(text.contains('o'));
        assert!(text.contains("4200"));
    }

    #[test]
    fn test_drill_schedule() {
        let (panel, _) = reference();
        let schedule = drill_schedule(&panel);
        assert!(schedule.starts_with("10 holes per post"));
        assert!(schedule.contains("2000"));
        assert!(!schedule.contains("2100"));
    }

    #[test]
    fn test_post_table_rows() {
        let (_, summary) = reference();
        assert_eq!(post_table(&summary).lines().count(), 8);
    }
}
