//! UI module for rendering the TUI

pub mod components;
mod field_renderer;
mod form;
mod layout;
mod preview;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, preview_area) = layout::create_layout(area, app.show_preview());

    form::draw(frame, form_area, app);

    if let Some(preview_area) = preview_area {
        preview::draw(frame, preview_area, app);
    }

    layout::draw_status_bar(frame, app);

    // A blocking alert overlays everything until dismissed
    if let Some(alert) = &app.state.alert {
        components::render_alert_dialog(frame, alert);
    }
}
