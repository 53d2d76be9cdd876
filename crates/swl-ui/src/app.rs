use std::cell::Cell;
use std::hash::Hash;
use std::path::Path;
use std::rc::{Rc, Weak};
use std::time::Duration;

use winit::dpi::LogicalSize;

use swl_engine::coords::Rect;
use swl_engine::core::{App as EngineApp, AppControl, FrameCtx};
use swl_engine::device::GpuInit;
use swl_engine::paint::{Color, Themes};
use swl_engine::raster::Renderer;
use swl_engine::text::{Font, FontRef, SharedFont};
use swl_engine::window::{Runtime, RuntimeConfig};

use crate::error::{Error, Result};
use crate::event::{self, UiEvent};
use crate::statemachine::StateMachine;
use crate::theme::Theme;
use crate::widget::Widget;
use crate::widgets::Canvas;

/// Pause between frames unless configured otherwise.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(50);

// ── AppConfig ─────────────────────────────────────────────────────────────

/// Window and pacing settings for an [`Application`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title:       String,
    /// Logical size of the window and of the root canvas.
    pub width:       u32,
    pub height:      u32,
    pub resizable:   bool,
    /// Fill color of the root canvas.
    pub background:  Color,
    pub frame_delay: Duration,
    pub gpu:         GpuInit,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title:       "swl".to_string(),
            width:       800,
            height:      600,
            resizable:   false,
            background:  Themes::BACKGROUND,
            frame_delay: DEFAULT_FRAME_DELAY,
            gpu:         GpuInit::default(),
        }
    }
}

impl AppConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self { title: title.into(), width, height, ..Self::default() }
    }

    pub fn frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

// ── AppHandle ─────────────────────────────────────────────────────────────

struct Shared<S> {
    running:    Cell<bool>,
    next_scene: Cell<Option<S>>,
}

/// Lets widget callbacks quit the application or switch scenes.
///
/// Scene changes requested here are applied at the start of the next frame.
pub struct AppHandle<S> {
    shared: Weak<Shared<S>>,
}

impl<S> Clone for AppHandle<S> {
    fn clone(&self) -> Self {
        Self { shared: self.shared.clone() }
    }
}

impl<S: Copy> AppHandle<S> {
    pub fn quit(&self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.running.set(false);
        }
    }

    pub fn set_scene(&self, scene: S) {
        if let Some(shared) = self.shared.upgrade() {
            shared.next_scene.set(Some(scene));
        }
    }
}

// ── Application ───────────────────────────────────────────────────────────

/// Owns the window-sized root canvas, the fonts and the scene machine, and
/// drives them once per frame.
///
/// Every scene switch first hides all root children, then runs the scene's
/// action, which typically shows the canvases making up that scene.
///
/// ```rust,ignore
/// let mut app = Application::new(AppConfig::new("demo", 640, 480));
/// let font = app.add_font("font.ttf", 24.0, Colors::WHITE)?;
/// let menu = app.root_mut().add_canvas("menu", Canvas::new(Rect::new(0, 0, 640, 480)));
/// app.add_scene(Scene::Menu, move |root| root.show(menu));
/// app.set_scene(Scene::Menu);
/// app.run()?;
/// ```
pub struct Application<S> {
    config:   AppConfig,
    renderer: Renderer,
    root:     Canvas,
    fonts:    Vec<SharedFont>,
    scenes:   StateMachine<S, Canvas>,
    shared:   Rc<Shared<S>>,
}

impl<S: Copy + Eq + Hash + 'static> Application<S> {
    pub fn new(config: AppConfig) -> Self {
        let renderer = Renderer::new(config.width, config.height);
        let bounds = Rect::new(0, 0, config.width as i32, config.height as i32);
        let root = Canvas::new(bounds).background(config.background);

        let mut scenes = StateMachine::new();
        scenes.set_update_action(|root: &mut Canvas| root.hide_children());

        Self {
            config,
            renderer,
            root,
            fonts: Vec::new(),
            scenes,
            shared: Rc::new(Shared { running: Cell::new(true), next_scene: Cell::new(None) }),
        }
    }

    // ── resources ─────────────────────────────────────────────────────────

    /// Loads a font owned by the application. Widgets keep the returned weak
    /// reference; the font lives as long as the application.
    pub fn add_font(&mut self, path: impl AsRef<Path>, size: f32, color: Color) -> Result<FontRef> {
        let path = path.as_ref();
        let font = Rc::new(Font::from_file(path, size, color)?);
        log::info!("loaded font {} at {size}pt", path.display());
        let weak = Rc::downgrade(&font);
        self.fonts.push(font);
        Ok(weak)
    }

    /// Default colors plus the first loaded font.
    pub fn theme(&self) -> Theme {
        let font = self.fonts.first().map(Rc::downgrade).unwrap_or_default();
        Theme::default().with_font(font)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn root(&self) -> &Canvas {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Canvas {
        &mut self.root
    }

    // ── scenes ────────────────────────────────────────────────────────────

    pub fn add_scene(&mut self, scene: S, action: impl FnMut(&mut Canvas) + 'static) {
        self.scenes.add_state_action(scene, action);
    }

    /// Requests `scene`; it becomes current on the next frame.
    pub fn set_scene(&mut self, scene: S) {
        self.scenes.set_next_state(scene);
    }

    pub fn scene(&self) -> Option<S> {
        self.scenes.state()
    }

    pub fn handle(&self) -> AppHandle<S> {
        AppHandle { shared: Rc::downgrade(&self.shared) }
    }

    pub fn quit(&self) {
        self.shared.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Routes one event into the root canvas.
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::Mouse(ev) => {
                self.root.handle_mouse_event(&ev);
            }
            UiEvent::Wheel(ev) => {
                self.root.handle_wheel_event(&ev);
            }
            UiEvent::Key(ev) => {
                self.root.handle_key_event(&ev);
            }
            UiEvent::Quit => self.quit(),
        }
    }

    /// Applies a pending scene change and redraws the root into the
    /// renderer's screen buffer.
    pub fn step(&mut self) {
        if let Some(scene) = self.shared.next_scene.take() {
            self.scenes.set_next_state(scene);
        }
        if self.scenes.update_state(&mut self.root) {
            log::debug!("scene changed");
        }
        self.root.redraw();
        self.root.update(&mut self.renderer);
    }

    /// Opens the window and runs until [`quit`](Self::quit) is called or the
    /// window is closed.
    pub fn run(self) -> Result<()> {
        let config = RuntimeConfig {
            title:          self.config.title.clone(),
            initial_size:   LogicalSize::new(self.config.width as f64, self.config.height as f64),
            resizable:      self.config.resizable,
            frame_interval: self.config.frame_delay,
        };
        let gpu = self.config.gpu.clone();
        Runtime::run(config, gpu, self).map_err(Error::Runtime)
    }
}

impl<S: Copy + Eq + Hash + 'static> EngineApp for Application<S> {
    fn on_start(&mut self, ctx: &mut FrameCtx<'_, '_>) {
        let size = ctx.window.logical_size();
        log::info!(
            "window {}x{} showing a {}x{} root",
            size.w,
            size.h,
            self.config.width,
            self.config.height
        );
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Pointer coordinates arrive in window logical pixels; the root is
        // sized in the configured logical size.
        let window = ctx.window.logical_size();
        let logical = self.renderer.logical_size();
        let scale = (
            logical.w as f32 / window.w.max(1) as f32,
            logical.h as f32 / window.h.max(1) as f32,
        );

        for ev in &ctx.input_frame.events {
            if let Some(ui) = event::translate(ev, ctx.input, scale) {
                self.dispatch(ui);
            }
        }
        if !self.is_running() {
            return AppControl::Exit;
        }

        self.step();

        match ctx.present(self.renderer.screen()) {
            AppControl::Exit => {
                log::error!("surface lost; exiting");
                AppControl::Exit
            }
            AppControl::Continue if self.is_running() => AppControl::Continue,
            AppControl::Continue => AppControl::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MouseEvent;
    use crate::widgets::{Button, RectItem};
    use swl_engine::input::MouseButton;
    use swl_engine::paint::Colors;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Scene {
        Menu,
        Game,
    }

    fn app() -> (Application<Scene>, u32, u32) {
        let mut app = Application::new(AppConfig::new("test", 100, 100));
        let menu = app.root_mut().add_canvas("menu", Canvas::new(Rect::new(0, 0, 100, 100)));
        let game = app.root_mut().add_canvas("game", Canvas::new(Rect::new(0, 0, 100, 100)));
        app.add_scene(Scene::Menu, move |root| root.show(menu));
        app.add_scene(Scene::Game, move |root| root.show(game));
        (app, menu, game)
    }

    #[test]
    fn scene_switch_hides_others_then_shows_own() {
        let (mut app, menu, game) = app();
        app.set_scene(Scene::Menu);
        app.step();
        assert_eq!(app.scene(), Some(Scene::Menu));
        assert!(app.root().is_shown(menu));
        assert!(!app.root().is_shown(game));

        app.handle().set_scene(Scene::Game);
        app.step();
        assert!(!app.root().is_shown(menu));
        assert!(app.root().is_shown(game));
    }

    #[test]
    fn button_callback_quits() {
        let (mut app, menu, _) = app();
        let handle = app.handle();
        app.root_mut()
            .canvas_mut(menu)
            .unwrap()
            .add_item(None, Button::new(Rect::new(0, 0, 10, 10), Colors::RED).on_left_clicked(move |_| handle.quit()));
        app.set_scene(Scene::Menu);
        app.step();

        app.dispatch(UiEvent::Mouse(MouseEvent::up(MouseButton::Left, 5, 5)));
        assert!(!app.is_running());
    }

    #[test]
    fn quit_event_stops() {
        let (mut app, _, _) = app();
        app.dispatch(UiEvent::Quit);
        assert!(!app.is_running());
    }

    #[test]
    fn step_draws_root_to_screen() {
        let (mut app, _, _) = app();
        app.root_mut().add_item(None, RectItem::new(Rect::new(0, 0, 5, 5), Colors::ORANGE));
        app.step();
        assert_eq!(app.renderer().screen().pixel(2, 2), Some(Colors::ORANGE));
        assert_eq!(app.renderer().screen().pixel(50, 50), Some(Themes::BACKGROUND));
    }

    #[test]
    fn configured_background_fills_root() {
        let mut app: Application<Scene> = Application::new(AppConfig::new("bg", 10, 10).background(Colors::PURPLE));
        app.step();
        assert_eq!(app.renderer().screen().pixel(9, 9), Some(Colors::PURPLE));
    }

    #[test]
    fn theme_without_fonts_has_dead_font() {
        let (app, _, _) = app();
        assert_eq!(app.theme().font.strong_count(), 0);
        assert_eq!(app.config().frame_delay, DEFAULT_FRAME_DELAY);
    }

    #[test]
    fn missing_font_is_an_error() {
        let (mut app, _, _) = app();
        let err = app.add_font("/nonexistent/font.ttf", 12.0, Colors::WHITE);
        assert!(matches!(err, Err(Error::Font(_))));
    }
}
