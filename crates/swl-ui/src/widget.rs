use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Weak;

use swl_engine::coords::{Point, Rect, Size};
use swl_engine::raster::Renderer;

use crate::event::{KeyEvent, MouseEvent, WheelEvent};

/// Identity of a child within its owning canvas. `0` means "not yet inserted".
pub type WidgetId = u32;

/// Changes a child asks its parent canvas to make on its behalf.
///
/// A child cannot reach into the canvas that owns it while the canvas is
/// dispatching to it, so requests are queued and the canvas applies them
/// once the borrow of the child has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Request {
    Show(WidgetId),
    Hide(WidgetId),
    ShowChildren,
    HideChildren,
    Redraw,
}

pub(crate) type RequestQueue = RefCell<VecDeque<Request>>;

// ── WidgetItem ────────────────────────────────────────────────────────────

/// State every widget shares: bounds in parent-local coordinates, the enabled
/// flag and the link to the owning canvas.
///
/// Visibility is not stored here. A widget is visible when its canvas keeps it
/// in the visible partition; [`show`](Self::show) and [`hide`](Self::hide)
/// ask the canvas to move it.
#[derive(Debug, Clone)]
pub struct WidgetItem {
    bounds: Rect,
    enabled: bool,
    id: WidgetId,
    parent: Weak<RequestQueue>,
}

impl Default for WidgetItem {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

impl WidgetItem {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, enabled: true, id: 0, parent: Weak::new() }
    }

    /// Id assigned by the owning canvas, `0` while unparented.
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[inline]
    pub fn is_parented(&self) -> bool {
        self.id != 0 && self.parent.strong_count() > 0
    }

    pub(crate) fn attach(&mut self, id: WidgetId, parent: Weak<RequestQueue>) {
        self.id = id;
        self.parent = parent;
    }

    pub(crate) fn detach(&mut self) {
        self.id = 0;
        self.parent = Weak::new();
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.bounds.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.bounds.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.w
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.h
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.bounds.pos()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    pub fn set_pos(&mut self, x: i32, y: i32) -> &mut Self {
        self.bounds.x = x;
        self.bounds.y = y;
        self
    }

    pub fn set_size(&mut self, w: i32, h: i32) -> &mut Self {
        self.bounds.w = w;
        self.bounds.h = h;
        self
    }

    pub fn set_bounds(&mut self, bounds: Rect) -> &mut Self {
        self.bounds = bounds;
        self
    }

    pub fn set_x(&mut self, x: i32) -> &mut Self {
        self.bounds.x = x;
        self
    }

    pub fn set_y(&mut self, y: i32) -> &mut Self {
        self.bounds.y = y;
        self
    }

    pub fn set_width(&mut self, w: i32) -> &mut Self {
        self.bounds.w = w;
        self
    }

    pub fn set_height(&mut self, h: i32) -> &mut Self {
        self.bounds.h = h;
        self
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) -> &mut Self {
        self.bounds = self.bounds.translate(dx, dy);
        self
    }

    /// Inclusive containment test. `p` must already be in this widget's
    /// parent-local frame.
    #[inline]
    pub fn is_point_inside(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Asks the owning canvas to move this widget into its visible partition.
    /// No-op when unparented.
    pub fn show(&self) {
        self.request(Request::Show(self.id));
    }

    /// Asks the owning canvas to move this widget into its invisible partition.
    /// No-op when unparented.
    pub fn hide(&self) {
        self.request(Request::Hide(self.id));
    }

    fn request(&self, req: Request) {
        if self.id == 0 {
            return;
        }
        if let Some(queue) = self.parent.upgrade() {
            queue.borrow_mut().push_back(req);
        }
    }

    /// `true` when enabled and `p` is inside the bounds.
    #[inline]
    pub fn accepts(&self, p: Point) -> bool {
        self.enabled && self.is_point_inside(p)
    }
}

// ── Widget trait ──────────────────────────────────────────────────────────

/// The contract every retained widget implements.
///
/// Event coordinates arrive in the widget's parent-local frame (the frame its
/// bounds are expressed in); the owning canvas does the translation.
///
/// Capabilities such as click handling, fill color and text are separate
/// components ([`crate::capability`]) that a concrete widget composes.
pub trait Widget: Any {
    fn item(&self) -> &WidgetItem;

    fn item_mut(&mut self) -> &mut WidgetItem;

    /// Extra visibility conditions beyond the partition the widget lives in.
    /// Text-bearing widgets return `false` without a live font.
    fn is_visible(&self) -> bool {
        true
    }

    /// Returns `true` when the event concerns this widget. The default
    /// accepts the event when visible, enabled and under the pointer.
    fn handle_mouse_event(&mut self, event: &MouseEvent) -> bool {
        self.is_visible() && self.item().accepts(event.pos)
    }

    fn handle_wheel_event(&mut self, event: &WheelEvent) -> bool {
        self.is_visible() && self.item().accepts(event.pos)
    }

    fn handle_key_event(&mut self, _event: &KeyEvent) -> bool {
        false
    }

    /// Draws onto the renderer's current target.
    fn render(&self, renderer: &mut Renderer);
}

impl dyn Widget {
    pub fn downcast_ref<T: Widget>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Widget>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}
