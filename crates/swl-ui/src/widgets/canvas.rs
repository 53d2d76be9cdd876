use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};

use swl_engine::coords::Rect;
use swl_engine::paint::{Color, Themes};
use swl_engine::raster::{BlendMode, Renderer, Texture};

use crate::event::{KeyEvent, MouseEvent, WheelEvent};
use crate::widget::{Request, RequestQueue, Widget, WidgetId, WidgetItem};

bitflags::bitflags! {
    /// Which partitions [`Canvas::for_each_child`] walks. A filter without a
    /// visibility flag covers both visible and invisible children; one
    /// without a kind flag covers both items and canvases.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChildFilter: u8 {
        const VISIBLE   = 1 << 0;
        const INVISIBLE = 1 << 1;
        const ITEMS     = 1 << 2;
        const CANVASES  = 1 << 3;

        const ALL = Self::VISIBLE.bits() | Self::INVISIBLE.bits() | Self::ITEMS.bits() | Self::CANVASES.bits();
    }
}

impl ChildFilter {
    fn wants(self, visible: bool, canvas: bool) -> bool {
        let vis = if visible { Self::VISIBLE } else { Self::INVISIBLE };
        let kind = if canvas { Self::CANVASES } else { Self::ITEMS };
        let vis_ok = !self.intersects(Self::VISIBLE | Self::INVISIBLE) || self.contains(vis);
        let kind_ok = !self.intersects(Self::ITEMS | Self::CANVASES) || self.contains(kind);
        vis_ok && kind_ok
    }
}

/// Custom drawing routine run in place of the default child rendering.
/// Receives the canvas so it can still call [`Canvas::render_children`].
pub type RedrawFn = Box<dyn FnMut(&Canvas, &mut Renderer)>;

/// A composite widget that owns child widgets and nested canvases.
///
/// Children live in one of two partitions, visible or invisible, and
/// [`show`](Self::show)/[`hide`](Self::hide) move them between the two.
/// Child bounds are relative to the canvas origin; events are translated
/// before they are forwarded.
///
/// A canvas built with [`with_texture`](Self::with_texture) caches its
/// drawing in an off-screen texture. [`update`](Self::update) rebuilds the
/// cache when the canvas is dirty and [`render`](Widget::render) only copies
/// it. Nothing but [`redraw`](Self::redraw) marks a canvas dirty again after
/// the first update.
///
/// # Example
/// ```rust,ignore
/// let mut menu = Canvas::with_texture(Rect::new(0, 0, 400, 300), &renderer);
/// let quit = menu.add_item("quit", Button::new(Rect::new(10, 10, 80, 30), Colors::RED));
/// menu.hide(quit);
/// menu.redraw();
/// ```
pub struct Canvas {
    item: WidgetItem,

    visible_items: BTreeMap<WidgetId, Box<dyn Widget>>,
    invisible_items: BTreeMap<WidgetId, Box<dyn Widget>>,
    visible_canvases: BTreeMap<WidgetId, Box<Canvas>>,
    invisible_canvases: BTreeMap<WidgetId, Box<Canvas>>,
    names: HashMap<String, WidgetId>,
    next_id: WidgetId,

    requests: Rc<RequestQueue>,

    texture: Option<Texture>,
    background: Color,
    dirty: bool,
    redraw_fn: Option<RedrawFn>,
}

impl Canvas {
    /// A canvas without a cache texture. It draws straight onto whatever
    /// target is active during [`update`](Self::update), in its own local
    /// frame, which makes it suitable as a root covering the whole screen.
    pub fn new(bounds: Rect) -> Self {
        Self {
            item: WidgetItem::new(bounds),
            visible_items: BTreeMap::new(),
            invisible_items: BTreeMap::new(),
            visible_canvases: BTreeMap::new(),
            invisible_canvases: BTreeMap::new(),
            names: HashMap::new(),
            next_id: 1,
            requests: Rc::default(),
            texture: None,
            background: Themes::BACKGROUND,
            dirty: true,
            redraw_fn: None,
        }
    }

    /// A canvas caching its drawing in a texture the size of `bounds`.
    pub fn with_texture(bounds: Rect, renderer: &Renderer) -> Self {
        let texture = renderer.create_target(bounds.w.max(0) as u32, bounds.h.max(0) as u32);
        Self { texture: Some(texture), ..Self::new(bounds) }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    /// Replaces the default "clear and render children" drawing.
    pub fn set_redraw(&mut self, f: impl FnMut(&Canvas, &mut Renderer) + 'static) {
        self.redraw_fn = Some(Box::new(f));
    }

    pub fn clear_redraw(&mut self) {
        self.redraw_fn = None;
    }

    /// A cloneable handle through which callbacks can ask this canvas to
    /// show or hide children and to redraw.
    pub fn handle(&self) -> CanvasHandle {
        CanvasHandle { queue: Rc::downgrade(&self.requests) }
    }

    // ── insertion / removal ───────────────────────────────────────────────

    fn register(&mut self, name: Option<&str>) -> WidgetId {
        let id = self.next_id;
        self.next_id += 1;
        if let Some(name) = name {
            if let Some(old) = self.names.insert(name.to_string(), id) {
                log::warn!("canvas {}: name {name:?} moved from child {old} to {id}", self.item.id());
            }
        }
        id
    }

    /// Adds `widget` to the visible partition and returns its id.
    pub fn add_item<'n, W: Widget>(&mut self, name: impl Into<Option<&'n str>>, mut widget: W) -> WidgetId {
        let id = self.register(name.into());
        widget.item_mut().attach(id, Rc::downgrade(&self.requests));
        self.visible_items.insert(id, Box::new(widget));
        id
    }

    /// Adds a nested canvas to the visible partition and returns its id.
    pub fn add_canvas<'n>(&mut self, name: impl Into<Option<&'n str>>, mut canvas: Canvas) -> WidgetId {
        let id = self.register(name.into());
        canvas.item.attach(id, Rc::downgrade(&self.requests));
        self.visible_canvases.insert(id, Box::new(canvas));
        id
    }

    /// Takes a child out of the canvas for good, whichever partition it is
    /// in, and forgets any name registered for it.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let mut removed: Box<dyn Widget> = if let Some(w) = self.visible_items.remove(&id) {
            w
        } else if let Some(w) = self.invisible_items.remove(&id) {
            w
        } else if let Some(c) = self.visible_canvases.remove(&id) {
            c
        } else {
            self.invisible_canvases.remove(&id)?
        };
        self.names.retain(|_, v| *v != id);
        removed.item_mut().detach();
        Some(removed)
    }

    // ── visibility ────────────────────────────────────────────────────────

    /// Moves child `id` into the visible partition. No-op if it is not
    /// currently hidden.
    pub fn show(&mut self, id: WidgetId) {
        if let Some(w) = self.invisible_items.remove(&id) {
            self.visible_items.insert(id, w);
        } else if let Some(c) = self.invisible_canvases.remove(&id) {
            self.visible_canvases.insert(id, c);
        }
    }

    /// Moves child `id` into the invisible partition. No-op if it is not
    /// currently shown.
    pub fn hide(&mut self, id: WidgetId) {
        if let Some(w) = self.visible_items.remove(&id) {
            self.invisible_items.insert(id, w);
        } else if let Some(c) = self.visible_canvases.remove(&id) {
            self.invisible_canvases.insert(id, c);
        }
    }

    pub fn show_children(&mut self) {
        self.visible_items.append(&mut self.invisible_items);
        self.visible_canvases.append(&mut self.invisible_canvases);
    }

    pub fn hide_children(&mut self) {
        self.invisible_items.append(&mut self.visible_items);
        self.invisible_canvases.append(&mut self.visible_canvases);
    }

    pub fn is_shown(&self, id: WidgetId) -> bool {
        self.visible_items.contains_key(&id) || self.visible_canvases.contains_key(&id)
    }

    /// Ids of the visible children, items first, each group in id order.
    pub fn visible_ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.visible_items.keys().chain(self.visible_canvases.keys()).copied()
    }

    /// Calls `f` on every child selected by `filter`: visible items, visible
    /// canvases, invisible items, then invisible canvases, each in id order.
    pub fn for_each_child(&self, filter: ChildFilter, mut f: impl FnMut(WidgetId, &(dyn Widget + 'static))) {
        if filter.wants(true, false) {
            self.visible_items.iter().for_each(|(&id, w)| f(id, &**w));
        }
        if filter.wants(true, true) {
            self.visible_canvases.iter().for_each(|(&id, c)| f(id, &**c));
        }
        if filter.wants(false, false) {
            self.invisible_items.iter().for_each(|(&id, w)| f(id, &**w));
        }
        if filter.wants(false, true) {
            self.invisible_canvases.iter().for_each(|(&id, c)| f(id, &**c));
        }
    }

    /// Mutable form of [`for_each_child`](Self::for_each_child).
    pub fn for_each_child_mut(&mut self, filter: ChildFilter, mut f: impl FnMut(WidgetId, &mut (dyn Widget + 'static))) {
        if filter.wants(true, false) {
            self.visible_items.iter_mut().for_each(|(&id, w)| f(id, &mut **w));
        }
        if filter.wants(true, true) {
            self.visible_canvases.iter_mut().for_each(|(&id, c)| f(id, &mut **c));
        }
        if filter.wants(false, false) {
            self.invisible_items.iter_mut().for_each(|(&id, w)| f(id, &mut **w));
        }
        if filter.wants(false, true) {
            self.invisible_canvases.iter_mut().for_each(|(&id, c)| f(id, &mut **c));
        }
    }

    /// Applies show/hide/redraw requests queued by children and handles.
    pub fn apply_requests(&mut self) {
        loop {
            let Some(req) = self.requests.borrow_mut().pop_front() else {
                break;
            };
            match req {
                Request::Show(id) => self.show(id),
                Request::Hide(id) => self.hide(id),
                Request::ShowChildren => self.show_children(),
                Request::HideChildren => self.hide_children(),
                Request::Redraw => self.redraw(),
            }
        }
    }

    // ── lookup ────────────────────────────────────────────────────────────

    pub fn id_of(&self, name: &str) -> Option<WidgetId> {
        self.names.get(name).copied()
    }

    /// Any child, item or canvas, shown or hidden.
    pub fn widget(&self, id: WidgetId) -> Option<&(dyn Widget + 'static)> {
        if let Some(w) = self.visible_items.get(&id).or_else(|| self.invisible_items.get(&id)) {
            return Some(w.as_ref());
        }
        self.canvas(id).map(|c| c as &dyn Widget)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> {
        if let Some(w) = self.visible_items.get_mut(&id) {
            return Some(w.as_mut());
        }
        if let Some(w) = self.invisible_items.get_mut(&id) {
            return Some(w.as_mut());
        }
        if let Some(c) = self.visible_canvases.get_mut(&id) {
            return Some(c.as_mut());
        }
        self.invisible_canvases.get_mut(&id).map(|c| c.as_mut() as &mut dyn Widget)
    }

    /// Child `id` as a concrete widget type. `None` if absent or of another type.
    pub fn child<T: Widget>(&self, id: WidgetId) -> Option<&T> {
        self.widget(id)?.downcast_ref()
    }

    pub fn child_mut<T: Widget>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.widget_mut(id)?.downcast_mut()
    }

    pub fn child_by_name<T: Widget>(&self, name: &str) -> Option<&T> {
        self.child(self.id_of(name)?)
    }

    pub fn child_by_name_mut<T: Widget>(&mut self, name: &str) -> Option<&mut T> {
        let id = self.id_of(name)?;
        self.child_mut(id)
    }

    pub fn canvas(&self, id: WidgetId) -> Option<&Canvas> {
        self.visible_canvases
            .get(&id)
            .or_else(|| self.invisible_canvases.get(&id))
            .map(|c| c.as_ref())
    }

    pub fn canvas_mut(&mut self, id: WidgetId) -> Option<&mut Canvas> {
        if let Some(c) = self.visible_canvases.get_mut(&id) {
            return Some(c.as_mut());
        }
        self.invisible_canvases.get_mut(&id).map(|c| c.as_mut())
    }

    pub fn canvas_by_name(&self, name: &str) -> Option<&Canvas> {
        self.canvas(self.id_of(name)?)
    }

    pub fn canvas_by_name_mut(&mut self, name: &str) -> Option<&mut Canvas> {
        let id = self.id_of(name)?;
        self.canvas_mut(id)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Marks the cache stale; the next [`update`](Self::update) rebuilds it.
    pub fn redraw(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// # Panics
    /// If the canvas was built without a texture.
    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        let texture = self.texture.as_ref();
        assert!(texture.is_some(), "set_blend_mode on a canvas without a texture");
        if let Some(texture) = texture {
            texture.set_blend_mode(mode);
        }
    }

    /// Renders the visible children in their draw order: items, then
    /// canvases, each in id order.
    pub fn render_children(&self, renderer: &mut Renderer) {
        for w in self.visible_items.values() {
            if w.is_visible() {
                w.render(renderer);
            }
        }
        for c in self.visible_canvases.values() {
            c.render(renderer);
        }
    }

    /// Refreshes nested caches bottom-up, then this canvas's own drawing if
    /// it is dirty.
    pub fn update(&mut self, renderer: &mut Renderer) {
        self.apply_requests();
        for c in self.visible_canvases.values_mut() {
            c.update(renderer);
        }
        if !self.dirty {
            return;
        }

        match self.texture.clone() {
            Some(texture) => {
                let mut target = renderer.push_target(texture);
                target.clear(self.background);
                self.draw_contents(&mut target);
            }
            None => {
                let local = Rect::from_pos_size(Default::default(), self.item.size());
                renderer.fill_rect(local, self.background);
                self.draw_contents(renderer);
            }
        }
        self.dirty = false;
    }

    fn draw_contents(&mut self, renderer: &mut Renderer) {
        match self.redraw_fn.take() {
            Some(mut f) => {
                f(self, renderer);
                self.redraw_fn = Some(f);
            }
            None => self.render_children(renderer),
        }
    }
}

impl Widget for Canvas {
    fn item(&self) -> &WidgetItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut WidgetItem {
        &mut self.item
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> bool {
        if !self.item.accepts(event.pos) {
            return false;
        }
        let local = event.offset(self.item.x(), self.item.y());
        for w in self.visible_items.values_mut() {
            w.handle_mouse_event(&local);
        }
        for c in self.visible_canvases.values_mut() {
            c.handle_mouse_event(&local);
        }
        self.apply_requests();
        true
    }

    fn handle_wheel_event(&mut self, event: &WheelEvent) -> bool {
        if !self.item.accepts(event.pos) {
            return false;
        }
        let local = event.offset(self.item.x(), self.item.y());
        for w in self.visible_items.values_mut() {
            w.handle_wheel_event(&local);
        }
        for c in self.visible_canvases.values_mut() {
            c.handle_wheel_event(&local);
        }
        self.apply_requests();
        true
    }

    /// Key events carry no position; every visible child sees them.
    fn handle_key_event(&mut self, event: &KeyEvent) -> bool {
        let mut handled = false;
        for w in self.visible_items.values_mut() {
            handled |= w.handle_key_event(event);
        }
        for c in self.visible_canvases.values_mut() {
            handled |= c.handle_key_event(event);
        }
        self.apply_requests();
        handled
    }

    /// Copies the cached texture into the bounds. Textureless canvases draw
    /// during [`Canvas::update`] instead.
    fn render(&self, renderer: &mut Renderer) {
        if let Some(texture) = &self.texture {
            renderer.copy(texture, self.item.bounds());
        }
    }
}

// ── CanvasHandle ──────────────────────────────────────────────────────────

/// Weak, cloneable access to a canvas from inside callbacks.
///
/// Requests are queued and applied by the canvas after the current event
/// dispatch, or at its next [`Canvas::update`]. A handle outliving its
/// canvas does nothing.
#[derive(Debug, Clone, Default)]
pub struct CanvasHandle {
    queue: Weak<RequestQueue>,
}

impl CanvasHandle {
    fn push(&self, req: Request) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().push_back(req);
        }
    }

    pub fn show(&self, id: WidgetId) {
        self.push(Request::Show(id));
    }

    pub fn hide(&self, id: WidgetId) {
        self.push(Request::Hide(id));
    }

    pub fn show_children(&self) {
        self.push(Request::ShowChildren);
    }

    pub fn hide_children(&self) {
        self.push(Request::HideChildren);
    }

    pub fn redraw(&self) {
        self.push(Request::Redraw);
    }

    pub fn is_alive(&self) -> bool {
        self.queue.strong_count() > 0
    }
}
