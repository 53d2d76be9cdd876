use super::DataModel;

/// One entry of a menu tree. Owns its sub-entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuNode {
    pub text: String,
    children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), children: Vec::new() }
    }

    /// Appends a child and returns it, so sub-menus can be built in place.
    pub fn add(&mut self, text: impl Into<String>) -> &mut MenuNode {
        self.children.push(MenuNode::new(text));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn get(&self, index: usize) -> Option<&MenuNode> {
        self.children.get(index)
    }

    pub fn position(&self, text: &str) -> Option<usize> {
        self.children.iter().position(|c| c.text == text)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// A leaf: selecting it performs an action rather than opening a sub-menu.
    pub fn is_final(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }
}

/// A menu tree with a cursor.
///
/// Rows are the children of the node under the cursor. With back navigation
/// enabled, non-root nodes get an extra trailing row reading [`BACK`](Self::BACK).
#[derive(Debug, Clone)]
pub struct MenuModel {
    root: MenuNode,
    /// Child indices leading from the root to the current node.
    path: Vec<usize>,
    back_navigation: bool,
    back: String,
}

impl Default for MenuModel {
    fn default() -> Self {
        Self {
            root: MenuNode::default(),
            path: Vec::new(),
            back_navigation: false,
            back: Self::BACK.to_string(),
        }
    }
}

impl MenuModel {
    pub const BACK: &'static str = "Back";

    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self) -> &MenuNode {
        let mut node = &self.root;
        for &i in &self.path {
            node = &node.children[i];
        }
        node
    }

    fn node_mut(&mut self) -> &mut MenuNode {
        let mut node = &mut self.root;
        for &i in &self.path {
            node = &mut node.children[i];
        }
        node
    }

    fn has_back(&self) -> bool {
        self.back_navigation && !self.is_root()
    }

    // ── modifiers ─────────────────────────────────────────────────────────

    /// Adds an entry under the current node.
    pub fn add(&mut self, text: impl Into<String>) -> &mut MenuNode {
        self.node_mut().add(text)
    }

    /// Removes every entry under the current node.
    pub fn clear(&mut self) {
        self.node_mut().clear();
    }

    pub fn back_navigation(&mut self, on: bool) {
        self.back_navigation = on;
    }

    // ── navigation ────────────────────────────────────────────────────────

    pub fn go_to_root(&mut self) {
        self.path.clear();
    }

    /// Returns `false` at the root.
    pub fn go_to_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Descends into child `index`. Returns `false` and stays put if there
    /// is no such child (the synthetic back row included).
    pub fn go_to_index(&mut self, index: usize) -> bool {
        if index >= self.node().len() {
            return false;
        }
        self.path.push(index);
        true
    }

    /// Descends into the first child whose text is `text`.
    pub fn go_to_option(&mut self, text: &str) -> bool {
        match self.node().position(text) {
            Some(index) => {
                self.path.push(index);
                true
            }
            None => false,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn root(&self) -> &MenuNode {
        &self.root
    }

    pub fn current(&self) -> &MenuNode {
        self.node()
    }

    /// Text of the node under the cursor; empty at the root.
    pub fn current_text(&self) -> &str {
        &self.node().text
    }

    /// Row text: a child's text, [`BACK`](Self::BACK) for the synthetic
    /// row, `""` for anything out of range.
    pub fn text(&self, index: usize) -> &str {
        self.at(index).map_or("", String::as_str)
    }

    /// `true` when row `index` is a real child without children of its own.
    pub fn is_final(&self, index: usize) -> bool {
        self.node().get(index).is_some_and(MenuNode::is_final)
    }

    /// `true` when row `index` is the synthetic back row.
    pub fn is_back(&self, index: usize) -> bool {
        self.has_back() && index == self.node().len()
    }
}

impl DataModel<String> for MenuModel {
    fn rows(&self) -> usize {
        self.node().len() + usize::from(self.has_back())
    }

    fn at(&self, index: usize) -> Option<&String> {
        if self.is_back(index) {
            return Some(&self.back);
        }
        self.node().get(index).map(|n| &n.text)
    }
}
