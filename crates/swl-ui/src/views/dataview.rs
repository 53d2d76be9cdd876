use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swl_engine::coords::{Margins, Point, Rect};
use swl_engine::paint::{Color, Colors};
use swl_engine::raster::{Alignment, Renderer};
use swl_engine::text::{Font, FontRef};

use crate::capability::Fill;
use crate::event::{MouseEvent, MouseEventKind, WheelEvent};
use crate::models::{DataModel, WeakModel};
use crate::widget::{Widget, WidgetItem};

/// Receives the row under the pointer, `None` when no row is there.
pub type IndexCallback = Box<dyn FnMut(Option<usize>)>;

/// Receives the raw wheel event after the view has scrolled.
pub type ScrollCallback = Box<dyn FnMut(&WheelEvent)>;

/// Shared drawing parameters handed to a [`RowPainter`].
pub struct RowContext<'a> {
    pub font: &'a Font,
    pub padding: Margins,
    pub alignment: Alignment,
    /// The area inside the margins, header included.
    pub content: Rect,
}

/// Draws one kind of row. The scrolling and hit-testing in [`DataView`]
/// never look at the row type.
pub trait RowPainter<T> {
    /// Height reserved above the rows.
    fn header_height(&self) -> i32 {
        0
    }

    /// Extra conditions for the view to be drawable, e.g. a header font.
    fn is_ready(&self) -> bool {
        true
    }

    fn paint_header(&self, _renderer: &mut Renderer, _ctx: &RowContext<'_>, _bounds: Rect) {}

    fn paint_row(&self, renderer: &mut Renderer, ctx: &RowContext<'_>, item: &T, bounds: Rect);
}

/// Draws the rows of a model that fit in its bounds, starting at
/// [`display_index`](Self::display_index), and maps pointer positions back
/// to row indices.
///
/// The model is held weakly. A view without a live model or item font is
/// invisible and ignores events.
pub struct DataView<T: 'static, P> {
    item: WidgetItem,
    fill: Fill,
    painter: P,

    model: Option<WeakModel<T>>,
    item_font: FontRef,
    margins: Margins,
    item_padding: Margins,
    item_height: i32,
    alignment: Alignment,
    display_index: usize,

    scrolled: Option<ScrollCallback>,
    index_clicked: Option<IndexCallback>,
    index_hovered: Option<IndexCallback>,
}

pub const DEFAULT_ITEM_HEIGHT: i32 = 40;

impl<T: 'static, P: RowPainter<T> + Default> DataView<T, P> {
    pub fn new(bounds: Rect) -> Self {
        Self::with_painter(bounds, P::default())
    }
}

impl<T: 'static, P: RowPainter<T>> DataView<T, P> {
    pub fn with_painter(bounds: Rect, painter: P) -> Self {
        Self {
            item: WidgetItem::new(bounds),
            fill: Fill::new(Colors::WHITE),
            painter,
            model: None,
            item_font: FontRef::new(),
            margins: Margins::zero(),
            item_padding: Margins::zero(),
            item_height: DEFAULT_ITEM_HEIGHT,
            alignment: Alignment::CENTER,
            display_index: 0,
            scrolled: None,
            index_clicked: None,
            index_hovered: None,
        }
    }

    // ── builders ──────────────────────────────────────────────────────────

    pub fn model<M: DataModel<T> + 'static>(mut self, model: &Rc<RefCell<M>>) -> Self {
        self.set_model(model);
        self
    }

    pub fn item_font(mut self, font: FontRef) -> Self {
        self.item_font = font;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn item_padding(mut self, padding: Margins) -> Self {
        self.item_padding = padding;
        self
    }

    pub fn item_height(mut self, height: i32) -> Self {
        self.item_height = height;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.fill.color = color;
        self
    }

    pub fn on_scrolled(mut self, f: impl FnMut(&WheelEvent) + 'static) -> Self {
        self.scrolled = Some(Box::new(f));
        self
    }

    pub fn on_index_clicked(mut self, f: impl FnMut(Option<usize>) + 'static) -> Self {
        self.index_clicked = Some(Box::new(f));
        self
    }

    pub fn on_index_hovered(mut self, f: impl FnMut(Option<usize>) + 'static) -> Self {
        self.index_hovered = Some(Box::new(f));
        self
    }

    // ── setters ───────────────────────────────────────────────────────────

    /// Points the view at `model` and scrolls back to the top.
    pub fn set_model<M: DataModel<T> + 'static>(&mut self, model: &Rc<RefCell<M>>) {
        let weak: Weak<RefCell<M>> = Rc::downgrade(model);
        self.model = Some(weak);
        self.display_index = 0;
    }

    pub fn set_item_font(&mut self, font: FontRef) {
        self.item_font = font;
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut P {
        &mut self.painter
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// `true` with a live model, a live item font and a ready painter.
    pub fn is_valid(&self) -> bool {
        self.model.as_ref().is_some_and(|m| m.strong_count() > 0)
            && self.item_font.strong_count() > 0
            && self.painter.is_ready()
    }

    /// Rows in the model, `0` without one.
    pub fn rows(&self) -> usize {
        self.model
            .as_ref()
            .and_then(|m| m.upgrade())
            .map_or(0, |m| m.borrow().rows())
    }

    /// First row drawn. Follows the model when it shrinks below the
    /// stored scroll position.
    pub fn display_index(&self) -> usize {
        self.display_index.min(self.max_display_index())
    }

    pub fn set_display_index(&mut self, index: usize) {
        self.display_index = index.min(self.max_display_index());
    }

    pub fn internal_width(&self) -> i32 {
        self.item.width() - self.margins.horizontal()
    }

    /// Height available to rows: bounds minus margins minus the header.
    pub fn internal_height(&self) -> i32 {
        self.item.height() - self.margins.vertical() - self.painter.header_height()
    }

    /// How many whole rows fit.
    pub fn max_displayable_rows(&self) -> usize {
        if self.item_height <= 0 {
            return 0;
        }
        (self.internal_height() / self.item_height).max(0) as usize
    }

    pub fn max_display_index(&self) -> usize {
        self.rows().saturating_sub(self.max_displayable_rows())
    }

    fn content_left(&self) -> i32 {
        self.item.x() + self.margins.left
    }

    /// Top of the first row.
    fn rows_top(&self) -> i32 {
        self.item.y() + self.margins.top + self.painter.header_height()
    }

    /// Model row under `p` (parent-local). `None` outside the content band,
    /// below the last visible row, or past the end of the model.
    pub fn index_at(&self, p: Point) -> Option<usize> {
        let left = self.content_left();
        let right = self.item.x() + self.item.width() - self.margins.right;
        if p.x < left || p.x > right || self.item_height <= 0 {
            return None;
        }
        let dy = p.y - self.rows_top();
        if dy < 0 {
            return None;
        }
        let row = (dy / self.item_height) as usize;
        if row >= self.max_displayable_rows() {
            return None;
        }
        let index = self.display_index() + row;
        (index < self.rows()).then_some(index)
    }

    /// Moves the window by `rows` (positive scrolls down), clamped to
    /// `0..=max_display_index`.
    pub fn scroll_by(&mut self, rows: i32) {
        let max = self.max_display_index() as i64;
        let next = (self.display_index() as i64 + rows as i64).clamp(0, max);
        self.display_index = next as usize;
    }
}

impl<T: 'static, P: RowPainter<T> + 'static> Widget for DataView<T, P> {
    fn item(&self) -> &WidgetItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut WidgetItem {
        &mut self.item
    }

    fn is_visible(&self) -> bool {
        self.is_valid()
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> bool {
        if !(self.is_visible() && self.item.accepts(event.pos)) {
            return false;
        }
        let index = self.index_at(event.pos);
        let slot = match event.kind {
            MouseEventKind::Up => &mut self.index_clicked,
            MouseEventKind::Motion => &mut self.index_hovered,
            MouseEventKind::Down => return true,
        };
        if let Some(f) = slot {
            f(index);
        }
        true
    }

    fn handle_wheel_event(&mut self, event: &WheelEvent) -> bool {
        if !(self.is_visible() && self.item.accepts(event.pos)) {
            return false;
        }
        if event.wheel.y == 0 {
            return true;
        }
        self.scroll_by(-event.wheel.y);
        if let Some(f) = &mut self.scrolled {
            f(event);
        }
        true
    }

    fn render(&self, renderer: &mut Renderer) {
        let (Some(model), Some(font)) = (self.model.as_ref().and_then(|m| m.upgrade()), self.item_font.upgrade())
        else {
            return;
        };
        if !self.painter.is_ready() {
            return;
        }
        let bounds = self.item.bounds();
        self.fill.render(renderer, bounds, self.item.is_enabled());

        let ctx = RowContext {
            font: &font,
            padding: self.item_padding,
            alignment: self.alignment,
            content: bounds.inset(self.margins),
        };
        let header_height = self.painter.header_height();
        if header_height > 0 {
            let header = Rect::new(ctx.content.x, ctx.content.y, ctx.content.w, header_height);
            self.painter.paint_header(renderer, &ctx, header);
        }

        let first = self.display_index();
        let model = model.borrow();
        let last = model.rows().min(first + self.max_displayable_rows());
        let top = self.rows_top();
        for (slot, row) in (first..last).enumerate() {
            let Some(value) = model.at(row) else { break };
            let y = top + self.item_height * slot as i32;
            let row_bounds = Rect::new(ctx.content.x, y, ctx.content.w, self.item_height);
            self.painter.paint_row(renderer, &ctx, value, row_bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use std::cell::Cell;
    use swl_engine::input::MouseButton;
    use swl_engine::text::SharedFont;

    #[derive(Default)]
    struct Plain;

    impl RowPainter<u32> for Plain {
        fn paint_row(&self, _: &mut Renderer, _: &RowContext<'_>, _: &u32, _: Rect) {}
    }

    fn ten_rows() -> Rc<RefCell<Vec<u32>>> {
        Rc::new(RefCell::new((0..10).collect()))
    }

    fn view(model: &Rc<RefCell<Vec<u32>>>) -> DataView<u32, Plain> {
        DataView::new(Rect::new(0, 0, 200, 100)).item_height(20).model(model)
    }

    // ── geometry ───────────────────────────────────────────────────────

    #[test]
    fn window_sizes() {
        let model = ten_rows();
        let v = view(&model);
        assert_eq!(v.max_displayable_rows(), 5);
        assert_eq!(v.max_display_index(), 5);
        assert_eq!(v.rows(), 10);
    }

    #[test]
    fn index_at_maps_rows() {
        let model = ten_rows();
        let v = view(&model);
        assert_eq!(v.index_at(Point::new(10, 25)), Some(1));
        assert_eq!(v.index_at(Point::new(10, 0)), Some(0));
        assert_eq!(v.index_at(Point::new(10, 205)), None);
        assert_eq!(v.index_at(Point::new(201, 25)), None);
    }

    #[test]
    fn index_at_past_model_end() {
        let model = Rc::new(RefCell::new(vec![1u32, 2]));
        let v = view(&model);
        assert_eq!(v.index_at(Point::new(10, 30)), Some(1));
        assert_eq!(v.index_at(Point::new(10, 45)), None);
    }

    #[test]
    fn index_at_respects_margins() {
        let model = ten_rows();
        let v = view(&model).margins(Margins::new(10, 0, 5, 5));
        assert_eq!(v.index_at(Point::new(4, 15)), None);
        assert_eq!(v.index_at(Point::new(10, 5)), None);
        assert_eq!(v.index_at(Point::new(10, 10)), Some(0));
        assert_eq!(v.index_at(Point::new(195, 30)), Some(1));
    }

    // ── scrolling ──────────────────────────────────────────────────────

    #[test]
    fn scroll_then_click_offsets_index() {
        let model = ten_rows();
        let mut v = view(&model);
        v.scroll_by(3);
        assert_eq!(v.display_index(), 3);
        assert_eq!(v.index_at(Point::new(10, 5)), Some(3));
    }

    #[test]
    fn scroll_is_clamped() {
        let model = ten_rows();
        let mut v = view(&model);
        v.scroll_by(-2);
        assert_eq!(v.display_index(), 0);
        v.scroll_by(50);
        assert_eq!(v.display_index(), 5);
        v.set_display_index(99);
        assert_eq!(v.display_index(), 5);
    }

    #[test]
    fn fontless_view_ignores_events() {
        let model = ten_rows();
        let clicked = Rc::new(Cell::new(false));
        let c = clicked.clone();
        let mut v = view(&model).on_index_clicked(move |_| c.set(true));
        assert!(!v.is_visible());
        assert!(!v.handle_wheel_event(&WheelEvent::new(0, -3, 10, 10)));
        assert_eq!(v.display_index(), 0);
        assert!(!v.handle_mouse_event(&MouseEvent::up(MouseButton::Left, 10, 10)));
        assert!(!clicked.get());
    }

    #[test]
    fn shrinking_model_pulls_window_back() {
        let model = ten_rows();
        let mut v = view(&model);
        v.scroll_by(5);
        assert_eq!(v.display_index(), 5);
        model.borrow_mut().truncate(7);
        assert_eq!(v.display_index(), 2);
        model.borrow_mut().truncate(2);
        assert_eq!(v.display_index(), 0);
        assert_eq!(v.index_at(Point::new(10, 5)), Some(0));
    }

    #[test]
    fn dropped_model_reads_as_empty() {
        let model = ten_rows();
        let v = view(&model);
        drop(model);
        assert_eq!(v.rows(), 0);
        assert!(!v.is_valid());
        assert_eq!(v.index_at(Point::new(10, 5)), None);
    }

    // ── live views ─────────────────────────────────────────────────────

    #[derive(Default)]
    struct Recorder {
        header: i32,
        rows: RefCell<Vec<(u32, i32)>>,
    }

    impl RowPainter<u32> for Recorder {
        fn header_height(&self) -> i32 {
            self.header
        }

        fn paint_row(&self, _: &mut Renderer, _: &RowContext<'_>, item: &u32, bounds: Rect) {
            self.rows.borrow_mut().push((*item, bounds.y));
        }
    }

    fn live_view(model: &Rc<RefCell<Vec<u32>>>, font: &SharedFont) -> DataView<u32, Recorder> {
        DataView::new(Rect::new(0, 0, 200, 100))
            .item_height(20)
            .model(model)
            .item_font(Rc::downgrade(font))
    }

    fn painted(v: &DataView<u32, Recorder>) -> Vec<(u32, i32)> {
        v.painter().rows.borrow_mut().drain(..).collect()
    }

    #[test]
    fn click_reports_row_or_none() {
        let model = ten_rows();
        let font = testing::font(12.0, Colors::BLACK);
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let log = clicks.clone();
        let mut v = live_view(&model, &font).on_index_clicked(move |i| log.borrow_mut().push(i));
        assert!(v.is_visible());

        assert!(v.handle_mouse_event(&MouseEvent::up(MouseButton::Left, 10, 5)));
        assert!(v.handle_mouse_event(&MouseEvent::up(MouseButton::Left, 10, 100)));
        assert!(v.handle_mouse_event(&MouseEvent::down(MouseButton::Left, 10, 5)));
        v.scroll_by(5);
        assert!(v.handle_mouse_event(&MouseEvent::up(MouseButton::Right, 10, 5)));
        assert!(!v.handle_mouse_event(&MouseEvent::up(MouseButton::Left, 300, 5)));

        assert_eq!(*clicks.borrow(), vec![Some(0), None, Some(5)]);
    }

    #[test]
    fn motion_reports_hovered_row() {
        let model = ten_rows();
        let font = testing::font(12.0, Colors::BLACK);
        let hovered = Rc::new(Cell::new(None));
        let h = hovered.clone();
        let mut v = live_view(&model, &font).on_index_hovered(move |i| h.set(i));

        assert!(v.handle_mouse_event(&MouseEvent::motion(10, 45)));
        assert_eq!(hovered.get(), Some(2));
    }

    #[test]
    fn zero_wheel_is_handled_without_scrolling() {
        let model = ten_rows();
        let font = testing::font(12.0, Colors::BLACK);
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let mut v = live_view(&model, &font).on_scrolled(move |_| c.set(c.get() + 1));

        assert!(v.handle_wheel_event(&WheelEvent::new(4, 0, 10, 10)));
        assert_eq!(v.display_index(), 0);
        assert_eq!(calls.get(), 0);
        assert!(!v.handle_wheel_event(&WheelEvent::new(0, -1, 300, 10)));
    }

    #[test]
    fn wheel_scrolls_against_delta_and_reports_raw_event() {
        let model = ten_rows();
        let font = testing::font(12.0, Colors::BLACK);
        let deltas = Rc::new(RefCell::new(Vec::new()));
        let log = deltas.clone();
        let mut v = live_view(&model, &font).on_scrolled(move |ev| log.borrow_mut().push(ev.wheel.y));

        v.handle_wheel_event(&WheelEvent::new(0, -3, 10, 10));
        assert_eq!(v.display_index(), 3);
        v.handle_wheel_event(&WheelEvent::new(0, -50, 10, 10));
        assert_eq!(v.display_index(), 5);
        v.handle_wheel_event(&WheelEvent::new(0, 2, 10, 10));
        assert_eq!(v.display_index(), 3);
        v.handle_wheel_event(&WheelEvent::new(0, 40, 10, 10));
        assert_eq!(v.display_index(), 0);

        assert_eq!(*deltas.borrow(), vec![-3, -50, 2, 40]);
    }

    // ── rendering ──────────────────────────────────────────────────────

    #[test]
    fn render_paints_only_the_visible_window() {
        let model = ten_rows();
        let font = testing::font(12.0, Colors::BLACK);
        let mut v = live_view(&model, &font).background(Colors::CYAN);
        let mut r = Renderer::new(200, 100);

        v.render(&mut r);
        assert_eq!(painted(&v), vec![(0, 0), (1, 20), (2, 40), (3, 60), (4, 80)]);
        assert_eq!(r.screen().pixel(199, 99), Some(Colors::CYAN));

        v.scroll_by(3);
        v.render(&mut r);
        assert_eq!(painted(&v), vec![(3, 0), (4, 20), (5, 40), (6, 60), (7, 80)]);
    }

    #[test]
    fn render_starts_below_margin_and_header() {
        let model = ten_rows();
        let font = testing::font(12.0, Colors::BLACK);
        let painter = Recorder { header: 30, ..Default::default() };
        let v = DataView::with_painter(Rect::new(0, 0, 200, 100), painter)
            .item_height(20)
            .margins(Margins::new(10, 0, 0, 0))
            .model(&model)
            .item_font(Rc::downgrade(&font));
        let mut r = Renderer::new(200, 100);

        v.render(&mut r);
        assert_eq!(painted(&v), vec![(0, 40), (1, 60), (2, 80)]);
    }

    #[test]
    fn render_follows_a_shrunk_model() {
        let model = ten_rows();
        let font = testing::font(12.0, Colors::BLACK);
        let mut v = live_view(&model, &font);
        let mut r = Renderer::new(200, 100);
        v.scroll_by(5);
        model.borrow_mut().truncate(2);

        v.render(&mut r);
        assert_eq!(painted(&v), vec![(0, 0), (1, 20)]);
    }

    #[test]
    fn dropped_font_hides_view() {
        let model = ten_rows();
        let font = testing::font(12.0, Colors::BLACK);
        let v = live_view(&model, &font);
        assert!(v.is_valid());
        drop(font);
        assert!(!v.is_visible());
    }
}
