//! Two employee lists side by side. Click rows to select them, then move the
//! selection across with the Hire and Fire buttons.

use std::cell::RefCell;
use std::rc::Rc;

use swl_ui::prelude::*;

#[derive(Debug, Clone)]
struct Employee {
    id: u32,
    first: String,
    last: String,
    job: String,
    selected: bool,
}

impl Employee {
    fn new(id: u32, first: &str, last: &str, job: &str) -> Self {
        Self { id, first: first.into(), last: last.into(), job: job.into(), selected: false }
    }
}

impl ListItem for Employee {
    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn fields(&self) -> usize {
        4
    }

    fn field_at(&self, index: usize) -> String {
        match index {
            0 => self.id.to_string(),
            1 => self.first.clone(),
            2 => self.last.clone(),
            3 => self.job.clone(),
            _ => String::new(),
        }
    }
}

type Staff = Rc<RefCell<ListModel<Employee>>>;

const WIDTH: i32 = 1000;
const HEIGHT: i32 = 560;

fn staff(employees: impl IntoIterator<Item = Employee>) -> Staff {
    let mut model = ListModel::new();
    model.sorter(|a: &Employee, b: &Employee| a.id < b.id);
    model.add_items(employees);
    Rc::new(RefCell::new(model))
}

/// Moves the selected rows of `from` into `to`, deselected.
fn transfer(from: &Staff, to: &Staff) {
    let mut moved = from.borrow().selected_items();
    for e in &mut moved {
        e.set_selected(false);
    }
    log::info!("moving {} employee(s)", moved.len());
    from.borrow_mut().remove_selected_items();
    to.borrow_mut().add_items(moved);
}

fn employee_view(bounds: Rect, model: &Staff, font: &FontRef) -> ListView<Employee> {
    let selection = Rc::clone(model);
    ListView::new(bounds)
        .model(model)
        .headers(["ID", "First", "Last", "Job"])
        .column_ratios(&[1, 3, 3, 4])
        .header_font(font.clone())
        .header_height(30)
        .item_font(font.clone())
        .item_height(20)
        .margins(Margins::all(10))
        .item_padding(Margins::new(0, 0, 4, 4))
        .align(Alignment::LEFT | Alignment::VCENTER)
        .selection_color(Colors::LIGHT_BLUE)
        .on_index_clicked(move |index| {
            if let Some(index) = index {
                selection.borrow_mut().toggle_select(index);
            }
        })
}

fn main() -> anyhow::Result<()> {
    swl_demos::init();
    let font_path = swl_demos::font_path()?;

    let mut app: Application<()> = Application::new(AppConfig::new("Hire and Fire", WIDTH as u32, HEIGHT as u32));
    let font = app.add_font(&font_path, 14.0, Colors::BLACK)?;
    let button_font = app.add_font(&font_path, 18.0, Colors::WHITE)?;

    let unemployed = staff([
        Employee::new(3, "Ada", "Byron", "Analyst"),
        Employee::new(1, "Grace", "Hopper", "Admiral"),
        Employee::new(7, "Alan", "Turing", "Cryptanalyst"),
        Employee::new(4, "Edsger", "Dijkstra", "Professor"),
        Employee::new(9, "Barbara", "Liskov", "Researcher"),
    ]);
    let employed = staff([
        Employee::new(2, "Ken", "Thompson", "Engineer"),
        Employee::new(5, "Dennis", "Ritchie", "Engineer"),
        Employee::new(8, "Margaret", "Hamilton", "Director"),
    ]);

    let list_w = (WIDTH - 200) / 2;
    let left = employee_view(Rect::new(20, 20, list_w - 20, HEIGHT - 40), &unemployed, &font);
    let right = employee_view(Rect::new(WIDTH - list_w, 20, list_w - 20, HEIGHT - 40), &employed, &font);

    let (from, to) = (Rc::clone(&unemployed), Rc::clone(&employed));
    let hire = TextButton::new(Rect::new(list_w + 20, HEIGHT / 2 - 70, 140, 50), "Hire >", button_font.clone(), Colors::GREEN)
        .on_left_clicked(move |_| transfer(&from, &to));
    let (from, to) = (Rc::clone(&employed), Rc::clone(&unemployed));
    let fire = TextButton::new(Rect::new(list_w + 20, HEIGHT / 2 + 20, 140, 50), "< Fire", button_font, Colors::RED)
        .on_left_clicked(move |_| transfer(&from, &to));

    let root = app.root_mut();
    root.set_background(Colors::LIGHT_GREY);
    root.add_item("unemployed", left);
    root.add_item("employed", right);
    root.add_item("hire", hire);
    root.add_item("fire", fire);

    app.run()?;
    Ok(())
}
