use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::icon::Icon;
use crate::ui::util::truncate_path_start;

/// The header bar showing the pinned folder, doubling as the drop target for
/// row drags.
pub struct HeaderBar<'a> {
    folder: Option<&'a str>,
    drag_target: bool,
}

impl<'a> HeaderBar<'a> {
    pub fn new(folder: Option<&'a str>, drag_target: bool) -> Self {
        Self {
            folder,
            drag_target,
        }
    }
}

impl Component for HeaderBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let max_path_width = usize::from(area.width).saturating_sub(4);
        let text = match self.folder {
            Some(folder) => format!(
                " {} {}",
                Icon::Pin,
                truncate_path_start(folder, max_path_width)
            ),
            None => format!(" {} no folder pinned", Icon::Pin),
        };

        let style = if self.drag_target {
            // Highlight while a dragged row hovers over the bar.
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        };

        let header = Paragraph::new(Line::from(Span::raw(text))).style(style);

        f.render_widget(header, area);
    }
}
