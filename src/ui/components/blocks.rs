//! Block components for UI rendering
//!
//! Common block patterns used across views.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with title and specified borders
pub fn titled_block<'a>(title: Line<'a>, borders: Borders) -> Block<'a> {
    Block::default().borders(borders).title(title)
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::ALL)
}

/// Bordered panel block; the border is highlighted while the panel has vim focus
pub fn panel_block<'a>(title: &'a str, vim_focused: bool) -> Block<'a> {
    let title = Line::from(format!(" {} ", title))
        .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan));
    let block = bordered_block(title);
    if vim_focused {
        block.border_style(Style::default().fg(Color::Blue))
    } else {
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_panel_block_title() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(panel_block("Files", false), frame.area()))
            .unwrap();

        let top: String = (0..20)
            .map(|x| terminal.backend().buffer()[(x, 0)].symbol().to_string())
            .collect();
        assert!(top.contains(" Files "));
    }

    #[test]
    fn test_panel_block_focus_border() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(panel_block("X", true), frame.area()))
            .unwrap();

        assert_eq!(terminal.backend().buffer()[(0, 1)].fg, Color::Blue);
    }
}
