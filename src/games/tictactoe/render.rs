//! Text layouts for the board.
//!
//! Transcripts wrap these in fixed-width blocks, so every character
//! (including trailing spaces) is part of the format.

use super::board::Matrix;

const ROW_LABELS: [char; 3] = ['A', 'B', 'C'];
const COL_LABELS: [char; 3] = ['1', '2', '3'];

fn cell(matrix: &Matrix, row: usize, col: usize) -> String {
    matrix[row][col].map_or_else(|| " ".to_string(), |piece| piece.to_string())
}

/// Renders with plain ASCII separators.
pub fn ascii(matrix: &Matrix) -> String {
    let mut text = Vec::with_capacity(8);
    for (i, label) in ROW_LABELS.iter().enumerate() {
        if i > 0 {
            text.push("+---+---+---+---".to_string());
        }
        let cells: Vec<String> = (0..3).map(|j| cell(matrix, i, j)).collect();
        text.push(format!("| {label} | {}", cells.join(" | ")));
    }
    text.push("+---+---+---+---+".to_string());

    let mut footer = String::from("    | ");
    for label in COL_LABELS {
        footer.push_str(&format!("{label} | "));
    }
    text.push(footer);
    text.push("    +---+---+---+".to_string());
    text.join("\n")
}

/// Renders with Unicode box-drawing glyphs.
pub fn pretty(matrix: &Matrix) -> String {
    let mut text = Vec::with_capacity(9);
    for (i, label) in ROW_LABELS.iter().enumerate() {
        text.push(if i == 0 {
            "╔══━╋━━━╋━━━╋━━━╋━".to_string()
        } else {
            "╠══━╋━━━╋━━━╋━━━╋━".to_string()
        });
        let mut line = format!("║ {label} ┃ ");
        for j in 0..3 {
            line.push_str(&format!("{} ┃ ", cell(matrix, i, j)));
        }
        text.push(line);
    }
    text.push("╚══━╋━━━╋━━━╋━━━╋━".to_string());

    let mut footer = String::from("    ║ ");
    for label in COL_LABELS {
        footer.push_str(&format!("{label} ║ "));
    }
    text.push(footer);
    text.push("    ╚═══╩═══╩═══╝".to_string());
    text.join("\n")
}
