use swl_engine::coords::Rect;
use swl_engine::paint::{Color, Colors};
use swl_engine::raster::{Alignment, Renderer};
use swl_engine::text::FontRef;

use crate::models::ListItem;

use super::{DataView, RowContext, RowPainter};

/// A table of [`ListItem`]s under a row of column headers.
pub type ListView<T> = DataView<T, ListColumns>;

const DEFAULT_COLUMN_RATIO: u32 = 1;
pub const DEFAULT_HEADER_HEIGHT: i32 = 60;

/// Column layout and header for a [`ListView`].
///
/// Column widths are proportional to their ratios. Columns past the end of
/// the ratio list get ratio 1; a ratio of 0 hides the column. At most one
/// column per header is drawn.
#[derive(Debug, Clone)]
pub struct ListColumns {
    headers: Vec<String>,
    ratios: Vec<u32>,
    header_font: FontRef,
    header_height: i32,
    selection_color: Color,
    item_borders: bool,
}

impl Default for ListColumns {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            ratios: Vec::new(),
            header_font: FontRef::new(),
            header_height: DEFAULT_HEADER_HEIGHT,
            selection_color: Colors::LIGHT_GREEN,
            item_borders: false,
        }
    }
}

impl ListColumns {
    pub fn columns(&self) -> usize {
        self.headers.len()
    }

    fn ratio_at(&self, col: usize) -> u32 {
        if col >= self.columns() {
            return 0;
        }
        self.ratios.get(col).copied().unwrap_or(DEFAULT_COLUMN_RATIO)
    }

    fn total_ratio(&self) -> u32 {
        (0..self.columns()).map(|c| self.ratio_at(c)).sum()
    }

    /// Pixel width of every column for a content area `internal_width` wide.
    pub fn column_widths(&self, internal_width: i32) -> Vec<i32> {
        let total = self.total_ratio();
        (0..self.columns())
            .map(|c| match self.ratio_at(c) {
                0 => 0,
                r => (internal_width as f32 * (r as f32 / total as f32)) as i32,
            })
            .collect()
    }

    /// Left edge of every column, starting at `left`.
    fn column_xs(&self, left: i32, internal_width: i32) -> Vec<(i32, i32)> {
        let mut x = left;
        self.column_widths(internal_width)
            .into_iter()
            .map(|w| {
                let col = (x, w);
                x += w;
                col
            })
            .collect()
    }
}

impl<T: ListItem> RowPainter<T> for ListColumns {
    fn header_height(&self) -> i32 {
        self.header_height
    }

    fn is_ready(&self) -> bool {
        self.header_font.strong_count() > 0
    }

    fn paint_header(&self, renderer: &mut Renderer, _ctx: &RowContext<'_>, bounds: Rect) {
        let Some(font) = self.header_font.upgrade() else { return };
        for (header, (x, w)) in self.headers.iter().zip(self.column_xs(bounds.x, bounds.w)) {
            let cell = Rect::new(x, bounds.y, w, bounds.h);
            renderer.draw_text(&font, header, cell, Alignment::LEFT | Alignment::VCENTER);
        }
    }

    fn paint_row(&self, renderer: &mut Renderer, ctx: &RowContext<'_>, item: &T, bounds: Rect) {
        if item.is_selected() {
            renderer.fill_rect(bounds, self.selection_color);
        }
        let pad = ctx.padding;
        let columns = self.column_xs(bounds.x, bounds.w);
        for (col, (x, w)) in columns.into_iter().enumerate().take(item.fields()) {
            let cell = Rect::new(x + pad.left, bounds.y + pad.top, w - pad.left, bounds.h - pad.top);
            renderer.draw_text(ctx.font, &item.field_at(col), cell, Alignment::LEFT | Alignment::VCENTER);
        }
        if self.item_borders {
            renderer.draw_rect(bounds, Colors::BLACK);
        }
    }
}

impl<T: ListItem + 'static> DataView<T, ListColumns> {
    pub fn headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.painter_mut().headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn column_ratios(mut self, ratios: &[u32]) -> Self {
        self.painter_mut().ratios = ratios.to_vec();
        self
    }

    pub fn header_font(mut self, font: FontRef) -> Self {
        self.painter_mut().header_font = font;
        self
    }

    pub fn header_height(mut self, height: i32) -> Self {
        self.painter_mut().header_height = height;
        self
    }

    pub fn selection_color(mut self, color: Color) -> Self {
        self.painter_mut().selection_color = color;
        self
    }

    pub fn draw_item_borders(mut self, draw: bool) -> Self {
        self.painter_mut().item_borders = draw;
        self
    }

    /// Column widths for the current bounds and margins.
    pub fn column_widths(&self) -> Vec<i32> {
        self.painter().column_widths(self.internal_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataModel, ListModel};
    use crate::testing;
    use crate::widget::Widget;
    use std::cell::RefCell;
    use std::rc::Rc;
    use swl_engine::coords::{Margins, Point};
    use swl_engine::text::SharedFont;

    #[derive(Clone)]
    struct Row {
        selected: bool,
        fields: usize,
    }

    fn row(selected: bool, fields: usize) -> Row {
        Row { selected, fields }
    }

    impl ListItem for Row {
        fn is_selected(&self) -> bool {
            self.selected
        }

        fn set_selected(&mut self, selected: bool) {
            self.selected = selected;
        }

        fn fields(&self) -> usize {
            self.fields
        }

        fn field_at(&self, _: usize) -> String {
            "HH".into()
        }
    }

    fn columns(headers: &[&str], ratios: &[u32]) -> ListColumns {
        ListColumns {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            ratios: ratios.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn widths_follow_ratios() {
        assert_eq!(columns(&["A", "B", "C"], &[1, 1, 2]).column_widths(400), vec![100, 100, 200]);
    }

    #[test]
    fn missing_ratios_default_to_one() {
        assert_eq!(columns(&["A", "B", "C", "D"], &[2]).column_widths(500), vec![200, 100, 100, 100]);
    }

    #[test]
    fn zero_ratio_hides_column() {
        assert_eq!(columns(&["A", "B"], &[0, 3]).column_widths(300), vec![0, 300]);
    }

    #[test]
    fn ratios_beyond_headers_are_ignored() {
        assert_eq!(columns(&["A", "B"], &[1, 1, 8]).column_widths(200), vec![100, 100]);
    }

    #[test]
    fn view_builders_reach_columns() {
        let v: ListView<Row> = ListView::new(Rect::new(0, 0, 410, 300))
            .margins(Margins::new(0, 0, 5, 5))
            .headers(["A", "B", "C"])
            .column_ratios(&[1, 1, 2]);
        assert_eq!(v.column_widths(), vec![100, 100, 200]);
        assert!(!RowPainter::<Row>::is_ready(v.painter()));
    }

    #[test]
    fn header_shifts_rows_down() {
        let model = Rc::new(RefCell::new(ListModel::new()));
        model.borrow_mut().add_items((0..3).map(|_| row(false, 1)));
        let v: ListView<Row> = ListView::new(Rect::new(0, 0, 100, 200)).item_height(20).model(&model);
        assert_eq!(v.max_displayable_rows(), (200 - DEFAULT_HEADER_HEIGHT) as usize / 20);
        assert_eq!(v.index_at(Point::new(5, 30)), None);
        assert_eq!(v.index_at(Point::new(5, DEFAULT_HEADER_HEIGHT + 25)), Some(1));
        assert_eq!(model.borrow().rows(), 3);
    }

    // ── row painting ───────────────────────────────────────────────────

    fn two_columns(model: &Rc<RefCell<ListModel<Row>>>, font: &SharedFont) -> ListView<Row> {
        ListView::new(Rect::new(0, 0, 200, 80))
            .model(model)
            .headers(["A", "B"])
            .header_font(Rc::downgrade(font))
            .header_height(0)
            .item_font(Rc::downgrade(font))
            .item_height(40)
            .background(Colors::WHITE)
            .selection_color(Colors::LIGHT_BLUE)
    }

    fn rows(items: impl IntoIterator<Item = Row>) -> Rc<RefCell<ListModel<Row>>> {
        let mut model = ListModel::new();
        model.add_items(items);
        Rc::new(RefCell::new(model))
    }

    #[test]
    fn selected_row_is_highlighted() {
        let font = testing::font(24.0, Colors::BLACK);
        let model = rows([row(true, 1), row(false, 1)]);
        let v = two_columns(&model, &font);
        let mut r = Renderer::new(200, 80);
        v.render(&mut r);

        assert_eq!(r.screen().pixel(195, 2), Some(Colors::LIGHT_BLUE));
        assert_eq!(r.screen().pixel(195, 42), Some(Colors::WHITE));
    }

    #[test]
    fn toggling_selection_changes_highlight() {
        let font = testing::font(24.0, Colors::BLACK);
        let model = rows([row(false, 1), row(false, 1)]);
        let v = two_columns(&model, &font);
        model.borrow_mut().toggle_select(1);
        let mut r = Renderer::new(200, 80);
        v.render(&mut r);

        assert_eq!(r.screen().pixel(195, 2), Some(Colors::WHITE));
        assert_eq!(r.screen().pixel(195, 42), Some(Colors::LIGHT_BLUE));
    }

    #[test]
    fn cells_stop_at_fewer_fields() {
        let font = testing::font(24.0, Colors::BLACK);
        let model = rows([row(false, 1), row(false, 3)]);
        let v = two_columns(&model, &font);
        let mut r = Renderer::new(200, 80);
        v.render(&mut r);

        let screen = r.screen();
        assert!(testing::inked(screen, Rect::new(0, 0, 100, 40), Colors::WHITE) > 0);
        assert_eq!(testing::inked(screen, Rect::new(100, 0, 100, 40), Colors::WHITE), 0);
        assert!(testing::inked(screen, Rect::new(0, 40, 100, 40), Colors::WHITE) > 0);
        assert!(testing::inked(screen, Rect::new(100, 40, 100, 40), Colors::WHITE) > 0);
    }

    #[test]
    fn borders_outline_each_row() {
        let font = testing::font(24.0, Colors::BLACK);
        let model = rows([row(false, 0), row(false, 0)]);
        let v = two_columns(&model, &font).draw_item_borders(true);
        let mut r = Renderer::new(200, 80);
        v.render(&mut r);

        assert_eq!(r.screen().pixel(100, 0), Some(Colors::BLACK));
        assert_eq!(r.screen().pixel(100, 39), Some(Colors::BLACK));
        assert_eq!(r.screen().pixel(100, 20), Some(Colors::WHITE));
    }

    #[test]
    fn header_font_is_required() {
        let font = testing::font(24.0, Colors::BLACK);
        let model = rows([row(false, 1)]);
        let v: ListView<Row> = ListView::new(Rect::new(0, 0, 200, 80))
            .model(&model)
            .headers(["A"])
            .item_font(Rc::downgrade(&font));
        assert!(!v.is_visible());
        let v = v.header_font(Rc::downgrade(&font));
        assert!(v.is_visible());
    }
}
