//! Main render/view function (View in TEA pattern)


use aspire_app::AppState;
use chrono::{Datelike, Local};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::page::{Page, PageView};
use crate::theme::styles;
use crate::widgets::{self, RenderContext};

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, this records the page geometry (content height, visible
/// rows and section anchors) back into `state` so scrolling and in-page
/// links resolve against the current terminal size.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    draw(frame, state, Local::now().year());
}

fn draw(frame: &mut Frame, state: &mut AppState, year: i32) {
    let area = frame.area();
    let ctx = RenderContext::new(state.theme, state.settings.ui.icons);

    // Fill entire terminal with the page background
    frame.render_widget(Block::default().style(styles::page(&ctx.palette)), area);

    let areas = layout::create(area);

    let page = Page::build(state, ctx, areas.body.width, year);
    state.sync_viewport(page.height(), areas.body.height, page.anchors().to_vec());
    frame.render_widget(PageView::new(&page, state.scroll_offset()), areas.body);

    let header = widgets::Header::new(ctx)
        .solid(state.scroll.is_past_threshold())
        .narrow(layout::is_narrow(area))
        .menu_open(state.menu.is_open());
    frame.render_widget(header, areas.header);

    if state.menu.is_open() {
        let overlay = layout::menu_overlay(areas.body, widgets::MobileMenuOverlay::height());
        frame.render_widget(widgets::MobileMenuOverlay::new(ctx, &state.menu), overlay);
    }

    frame.render_widget(widgets::KeyHints::new(ctx, state.ui_mode()), areas.hints);
}
