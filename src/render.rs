//! Text rendering of a move history.

use timeline_core::MoveHistory;

/// Renders the displayed board, the status line and the move list.
pub fn render_view(history: &MoveHistory, number_empty: bool) -> String {
    format!(
        "{}\n\n{}\n{}",
        history.current().render(number_empty),
        history.status(),
        render_moves(history)
    )
}

/// Renders one line per snapshot, marking the one under the cursor.
pub fn render_moves(history: &MoveHistory) -> String {
    history
        .entries()
        .iter()
        .map(|entry| {
            let marker = if *entry.is_current() { '>' } else { ' ' };
            format!("{marker} {}. {}", entry.step(), entry.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
