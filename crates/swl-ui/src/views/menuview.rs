use swl_engine::coords::Rect;
use swl_engine::raster::Renderer;

use super::{DataView, RowContext, RowPainter};

/// A list of menu entries, normally backed by a
/// [`MenuModel`](crate::models::MenuModel).
pub type MenuView = DataView<String, MenuRows>;

/// Draws each row as its text using the view's alignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuRows;

impl RowPainter<String> for MenuRows {
    fn paint_row(&self, renderer: &mut Renderer, ctx: &RowContext<'_>, item: &String, bounds: Rect) {
        renderer.draw_text(ctx.font, item, bounds.inset(ctx.padding), ctx.alignment);
    }
}
