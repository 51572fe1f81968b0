use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::virtualizer::{self, ROW_HEIGHT};
use crate::app::{App, DragPayload};
use crate::domain::entry::Entry;
use crate::ui::Page;
use crate::ui::icon::Icon;
use crate::ui::util::truncate_with_ellipsis;

/// The entry list page.
///
/// Rows are virtualized: only the slice covered by the viewport is turned
/// into lines, so folder size does not affect render cost.
pub struct BrowserPage<'a> {
    app: &'a App,
}

impl<'a> BrowserPage<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Page for BrowserPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(snapshot) = self.app.snapshot() else {
            render_notice(f, area, "No folder pinned");
            return;
        };
        if snapshot.is_empty() {
            render_notice(f, area, "Folder is empty.");
            return;
        }

        let visible = virtualizer::visible_range(
            self.app.scroll_offset(),
            f32::from(area.height),
            ROW_HEIGHT,
            snapshot.len(),
        );
        let selected = self.app.selected_index();
        let dragging = self.app.dragging();
        let max_name_width = usize::from(area.width).saturating_sub(4);

        let lines: Vec<Line<'_>> = visible
            .filter_map(|index| snapshot.get(index).map(|entry| (index, entry)))
            .map(|(index, entry)| {
                entry_line(entry, selected == Some(index), dragging, max_name_width)
            })
            .collect();

        f.render_widget(Paragraph::new(lines), area);
    }
}

fn entry_line<'a>(
    entry: &'a Entry,
    is_selected: bool,
    dragging: Option<&DragPayload>,
    max_name_width: usize,
) -> Line<'a> {
    let icon = Icon::for_entry(entry.is_folder, entry.is_empty_folder);
    let name = truncate_with_ellipsis(entry.display_name(), max_name_width);

    let mut style = if entry.is_folder {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    if is_selected {
        style = style.bg(Color::DarkGray);
    }
    if dragging.is_some_and(|payload| payload.entry_id == entry.id) {
        style = style.add_modifier(Modifier::DIM);
    }

    Line::from(Span::styled(format!(" {icon} {name}"), style))
}

fn render_notice(f: &mut Frame, area: Rect, message: &str) {
    let notice = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(notice, area);
}
