pub mod components;
pub mod icon;
pub mod layout;
pub mod pages;
pub mod util;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Renders one full frame.
///
/// The list viewport height is reported to the app before the list renders,
/// so a pending scroll-into-view request resolves against the geometry the
/// rows are about to be drawn with.
pub fn render(f: &mut Frame, app: &mut App) {
    let areas = layout::panel_areas(f.area());

    app.layout_viewport(f32::from(areas.list.height));

    components::header_bar::HeaderBar::new(app.displayed_folder(), app.drag_over_header())
        .render(f, areas.header);

    pages::browser::BrowserPage::new(app).render(f, areas.list);

    components::footer_bar::FooterBar::new(
        app.snapshot().map(crate::app::model::Snapshot::len),
        app.selected_index(),
    )
    .render(f, areas.footer);
}
