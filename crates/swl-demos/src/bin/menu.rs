//! A nested menu with back navigation. Clicking an entry with children opens
//! it; clicking a leaf logs the choice. The status bar shows where we are.

use std::cell::RefCell;
use std::rc::Rc;

use swl_ui::prelude::*;

const WIDTH: i32 = 480;
const HEIGHT: i32 = 480;
const STATUS_HEIGHT: i32 = 50;

fn build_menu() -> MenuModel {
    let mut menu = MenuModel::new();
    menu.back_navigation(true);

    let a = menu.add("A");
    a.add("A1");
    a.add("A2");
    a.add("A3");

    let b = menu.add("B");
    let b1 = b.add("B1");
    b1.add("B1.1");
    b1.add("B1.2");
    b.add("B2");
    b.add("B3");

    menu.add("C");
    menu
}

fn main() -> anyhow::Result<()> {
    swl_demos::init();
    let font_path = swl_demos::font_path()?;

    let mut app: Application<()> = Application::new(AppConfig::new("Menu", WIDTH as u32, HEIGHT as u32));
    let font = app.add_font(&font_path, 20.0, Colors::BLACK)?;
    let status_font = app.add_font(&font_path, 16.0, Themes::SECONDARY)?;

    let model = Rc::new(RefCell::new(build_menu()));

    // The status bar only repaints when the menu moves.
    let mut status = Canvas::with_texture(Rect::new(0, HEIGHT - STATUS_HEIGHT, WIDTH, STATUS_HEIGHT), app.renderer())
        .background(Colors::PURPLE);
    let shown = Rc::clone(&model);
    status.set_redraw(move |canvas, renderer| {
        let Some(font) = status_font.upgrade() else {
            return;
        };
        let menu = shown.borrow();
        let label = if menu.is_root() { "Main menu".to_string() } else { format!("In {}", menu.current_text()) };
        let bounds = Rect::new(10, 0, canvas.item().width() - 20, canvas.item().height());
        renderer.draw_text(&font, &label, bounds, Alignment::LEFT | Alignment::VCENTER);
    });
    let status_bar = status.handle();

    let navigated = Rc::clone(&model);
    let view = MenuView::new(Rect::new(40, 40, WIDTH - 80, HEIGHT - STATUS_HEIGHT - 80))
        .model(&model)
        .item_font(font)
        .item_height(48)
        .margins(Margins::all(8))
        .background(Colors::LIGHT_GREY)
        .on_index_clicked(move |index| {
            let Some(index) = index else {
                return;
            };
            let mut menu = navigated.borrow_mut();
            if menu.is_back(index) {
                menu.go_to_parent();
            } else if menu.is_final(index) {
                log::info!("selected {}", menu.text(index));
                return;
            } else {
                menu.go_to_index(index);
            }
            status_bar.redraw();
        });

    let root = app.root_mut();
    root.add_item("menu", view);
    root.add_canvas("status", status);

    app.run()?;
    Ok(())
}
