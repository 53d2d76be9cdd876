use std::cmp::Ordering;

use super::DataModel;

/// A row of a [`ListModel`]: a fixed set of text fields plus a selection flag.
pub trait ListItem {
    fn is_selected(&self) -> bool;

    fn set_selected(&mut self, selected: bool);

    /// Number of fields. `field_at` must answer for every index below it.
    fn fields(&self) -> usize;

    fn field_at(&self, index: usize) -> String;
}

/// Strict weak ordering: `true` when the first argument sorts before the second.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> bool>;

/// Owns a list of items, optionally kept sorted, each independently selectable.
///
/// With a comparator installed every insertion lands at its sorted position,
/// after any elements that compare equal.
pub struct ListModel<T> {
    items: Vec<T>,
    cmp: Option<Comparator<T>>,
}

impl<T> Default for ListModel<T> {
    fn default() -> Self {
        Self { items: Vec::new(), cmp: None }
    }
}

impl<T: ListItem + Clone> ListModel<T> {
    pub fn new() -> Self {
        Self::default()
    }

    // ── modifiers ─────────────────────────────────────────────────────────

    pub fn add(&mut self, item: T) -> &mut Self {
        match &self.cmp {
            Some(cmp) => {
                let idx = self.items.partition_point(|x| !cmp(&item, x));
                self.items.insert(idx, item);
            }
            None => self.items.push(item),
        }
        self
    }

    pub fn add_items(&mut self, items: impl IntoIterator<Item = T>) -> &mut Self {
        let items = items.into_iter();
        self.items.reserve(items.size_hint().0);
        for item in items {
            self.add(item);
        }
        self
    }

    /// Removes the item at `index`; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> &mut Self {
        if index < self.items.len() {
            self.items.remove(index);
        }
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Installs a persistent comparator and sorts once with it.
    pub fn sorter(&mut self, cmp: impl Fn(&T, &T) -> bool + 'static) -> &mut Self {
        self.cmp = Some(Box::new(cmp));
        self.sort_once(None);
        self
    }

    /// Drops the comparator. Later insertions append.
    pub fn clear_sorter(&mut self) -> &mut Self {
        self.cmp = None;
        self
    }

    pub fn has_sorter(&self) -> bool {
        self.cmp.is_some()
    }

    /// Sorts with `cmp`, or with the installed comparator when `cmp` is
    /// `None`. Does nothing when neither exists.
    pub fn sort_once(&mut self, cmp: Option<&dyn Fn(&T, &T) -> bool>) {
        let Some(less) = cmp.or(self.cmp.as_deref()) else {
            return;
        };
        self.items.sort_by(|a, b| ordering(less, a, b));
    }

    /// Moves the items matching `pred` to the front. Relative order within
    /// both groups is preserved.
    pub fn partition_once(&mut self, pred: impl Fn(&T) -> bool) {
        let (mut front, back): (Vec<T>, Vec<T>) = std::mem::take(&mut self.items).into_iter().partition(|x| pred(x));
        front.extend(back);
        self.items = front;
    }

    // ── selection ─────────────────────────────────────────────────────────

    pub fn select(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.set_selected(true);
        }
    }

    pub fn unselect(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.set_selected(false);
        }
    }

    pub fn toggle_select(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            let selected = item.is_selected();
            item.set_selected(!selected);
        }
    }

    pub fn count_selected_items(&self) -> usize {
        self.items.iter().filter(|x| x.is_selected()).count()
    }

    /// Copies of the selected items, in model order.
    pub fn selected_items(&self) -> Vec<T> {
        self.items.iter().filter(|x| x.is_selected()).cloned().collect()
    }

    pub fn remove_selected_items(&mut self) -> &mut Self {
        self.items.retain(|x| !x.is_selected());
        self
    }

    // ── access ────────────────────────────────────────────────────────────

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> DataModel<T> for ListModel<T> {
    fn rows(&self) -> usize {
        self.items.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

fn ordering<T>(less: &dyn Fn(&T, &T) -> bool, a: &T, b: &T) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
        age: u32,
        selected: bool,
    }

    fn p(name: &'static str, age: u32) -> Person {
        Person { name, age, selected: false }
    }

    impl ListItem for Person {
        fn is_selected(&self) -> bool {
            self.selected
        }

        fn set_selected(&mut self, selected: bool) {
            self.selected = selected;
        }

        fn fields(&self) -> usize {
            2
        }

        fn field_at(&self, index: usize) -> String {
            match index {
                0 => self.name.to_string(),
                _ => self.age.to_string(),
            }
        }
    }

    fn names(m: &ListModel<Person>) -> Vec<&'static str> {
        m.iter().map(|x| x.name).collect()
    }

    // ── ordering ───────────────────────────────────────────────────────

    #[test]
    fn unsorted_add_appends() {
        let mut m = ListModel::new();
        m.add(p("c", 3)).add(p("a", 1)).add(p("b", 2));
        assert_eq!(names(&m), ["c", "a", "b"]);
    }

    #[test]
    fn sorted_add_keeps_order() {
        let mut m = ListModel::new();
        m.sorter(|a: &Person, b: &Person| a.age < b.age);
        m.add_items([p("d", 40), p("a", 10), p("c", 30), p("b", 20), p("e", 5), p("f", 30)]);
        let ages: Vec<u32> = m.iter().map(|x| x.age).collect();
        assert!(ages.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(m.rows(), 6);
    }

    #[test]
    fn equal_keys_insert_after_existing() {
        let mut m = ListModel::new();
        m.sorter(|a: &Person, b: &Person| a.age < b.age);
        m.add(p("first", 1)).add(p("second", 1)).add(p("zero", 0));
        assert_eq!(names(&m), ["zero", "first", "second"]);
    }

    #[test]
    fn sorter_sorts_existing_items() {
        let mut m = ListModel::new();
        m.add_items([p("b", 2), p("a", 1)]);
        m.sorter(|a: &Person, b: &Person| a.name < b.name);
        assert_eq!(names(&m), ["a", "b"]);
        m.clear_sorter().add(p("0", 0));
        assert_eq!(names(&m), ["a", "b", "0"]);
    }

    #[test]
    fn sort_once_without_comparator_is_noop() {
        let mut m = ListModel::new();
        m.add_items([p("b", 2), p("a", 1)]);
        m.sort_once(None);
        assert_eq!(names(&m), ["b", "a"]);
        m.sort_once(Some(&|a: &Person, b: &Person| a.age < b.age));
        assert_eq!(names(&m), ["a", "b"]);
    }

    #[test]
    fn partition_is_stable() {
        let mut m = ListModel::new();
        m.add_items([p("a", 1), p("b", 2), p("c", 3), p("d", 4), p("e", 5)]);
        m.partition_once(|x| x.age % 2 == 0);
        assert_eq!(names(&m), ["b", "d", "a", "c", "e"]);
    }

    // ── selection ──────────────────────────────────────────────────────

    #[test]
    fn remove_selected_keeps_unselected_in_order() {
        let mut m = ListModel::new();
        m.add_items([p("a", 1), p("b", 2), p("c", 3), p("d", 4)]);
        m.select(0);
        m.toggle_select(2);
        m.select(3);
        m.unselect(3);
        assert_eq!(m.count_selected_items(), 2);
        assert_eq!(m.selected_items().iter().map(|x| x.name).collect::<Vec<_>>(), ["a", "c"]);

        m.remove_selected_items();
        assert_eq!(m.count_selected_items(), 0);
        assert_eq!(names(&m), ["b", "d"]);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut m = ListModel::new();
        m.add(p("a", 1));
        m.select(5);
        m.toggle_select(5);
        m.remove(5);
        assert_eq!(m.rows(), 1);
        assert!(m.at(5).is_none());
    }
}
