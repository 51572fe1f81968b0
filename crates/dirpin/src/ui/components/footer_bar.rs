use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

/// The footer bar with key hints and the selection position.
pub struct FooterBar {
    entry_count: Option<usize>,
    selected_index: Option<usize>,
}

impl FooterBar {
    pub fn new(entry_count: Option<usize>, selected_index: Option<usize>) -> Self {
        Self {
            entry_count,
            selected_index,
        }
    }

    fn position_text(&self) -> Option<String> {
        let count = self.entry_count?;
        match self.selected_index {
            Some(index) => Some(format!("{}/{count} ", index + 1)),
            None => Some(format!("{count} ")),
        }
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let help_text = " q: quit | Enter: open | Bksp: up | j/k: nav | o: open | e: reveal";

        let mut spans = vec![Span::styled(
            help_text,
            Style::default().fg(Color::Gray),
        )];

        if let Some(position) = self.position_text() {
            let help_width = help_text.chars().count();
            let position_width = position.chars().count();
            let total_width = usize::from(area.width);

            if help_width + position_width < total_width {
                let padding = " ".repeat(total_width - help_width - position_width);
                spans.push(Span::raw(padding));
                spans.push(Span::styled(position, Style::default().fg(Color::Green)));
            }
        }

        let footer = Paragraph::new(Line::from(spans));

        f.render_widget(footer, area);
    }
}
