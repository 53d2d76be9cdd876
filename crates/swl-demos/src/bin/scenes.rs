//! Two scenes sharing a title: a bottom menu bar and a tabbed main screen.

use swl_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Scene {
    Menu,
    Main,
}

const WIDTH: i32 = 640;
const HEIGHT: i32 = 480;
const TITLE_HEIGHT: i32 = 60;

fn main() -> anyhow::Result<()> {
    swl_demos::init();
    let font_path = swl_demos::font_path()?;

    let mut app = Application::new(AppConfig::new("Scenes Demo", WIDTH as u32, HEIGHT as u32));
    let font = app.add_font(&font_path, 18.0, Themes::SECONDARY)?;
    let theme = app.theme();

    let title = app.root_mut().add_item(
        "title-text",
        TextItem::new(Rect::new(0, 0, WIDTH, TITLE_HEIGHT), "Scenes Demo", font).align(Alignment::CENTER),
    );

    let menu = menu_scene(&app, &theme);
    let menu = app.root_mut().add_canvas("menu-scene", menu);
    let main = main_scene(&app, &theme);
    let main = app.root_mut().add_canvas("main-scene", main);

    app.add_scene(Scene::Menu, move |root| {
        root.show(title);
        root.show(menu);
    });
    app.add_scene(Scene::Main, move |root| {
        root.show(title);
        root.show(main);
    });
    app.set_scene(Scene::Menu);

    app.run()?;
    Ok(())
}

fn scene_canvas(app: &Application<Scene>) -> Canvas {
    let bounds = Rect::new(0, TITLE_HEIGHT, WIDTH, HEIGHT - TITLE_HEIGHT);
    Canvas::with_texture(bounds, app.renderer()).background(Themes::BACKGROUND)
}

fn menu_scene(app: &Application<Scene>, theme: &Theme) -> Canvas {
    let mut canvas = scene_canvas(app);
    let h = canvas.item().height();
    let labels = ["New", "/", "/", "Exit"];
    let slot = WIDTH / labels.len() as i32;

    for (i, label) in labels.into_iter().enumerate() {
        let bounds = Rect::new(i as i32 * slot + 1, h - 80, slot - 2, 80);
        let handle = app.handle();
        let button = TextButton::themed(bounds, label, theme);
        let button = match label {
            "New" => button.on_clicked(move |_| handle.set_scene(Scene::Main)),
            "Exit" => button.on_clicked(move |_| handle.quit()),
            _ => button.background(Colors::LIGHT_GREY),
        };
        canvas.add_item(label, button);
    }
    canvas
}

fn main_scene(app: &Application<Scene>, theme: &Theme) -> Canvas {
    let mut canvas = scene_canvas(app);
    let (w, h) = (canvas.item().width(), canvas.item().height());

    for i in 0..4 {
        let label = format!("Tab {}", i + 1);
        let tab = TextButton::themed(Rect::new(0, i * 60, 120, 60), label.clone(), theme)
            .on_clicked(move |_| log::info!("{label} clicked"));
        canvas.add_item(None, tab);
    }

    let handle = app.handle();
    let back = TextButton::themed(Rect::new(w - 120, h - 60, 120, 60), "Menu", theme)
        .on_clicked(move |_| handle.set_scene(Scene::Menu));
    canvas.add_item("menu-button", back);
    canvas
}
