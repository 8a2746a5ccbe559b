use std::fmt;

/// Structural role of a display node. The host maps these onto its own
/// widgets; the component never emits markup or styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Column,
    Row,
    Cell,
    Label,
    EventSummary,
    Picker,
    PickerOption,
    Button,
}

/// One node of the outbound render tree. State tags (`selected`, `current`,
/// `active`, `inactive`, ...) travel as CSS-class-like strings in `classes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub classes: Vec<&'static str>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            classes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn column() -> Self {
        Self::new(NodeKind::Column)
    }

    pub fn row() -> Self {
        Self::new(NodeKind::Row)
    }

    pub fn cell() -> Self {
        Self::new(NodeKind::Cell)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Label).with_text(text)
    }

    pub fn event_summary(text: impl Into<String>) -> Self {
        Self::new(NodeKind::EventSummary).with_text(text)
    }

    pub fn picker() -> Self {
        Self::new(NodeKind::Picker)
    }

    pub fn picker_option(text: impl Into<String>) -> Self {
        Self::new(NodeKind::PickerOption).with_text(text)
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Button).with_text(text)
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn push(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Depth-first search for the first node carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Node> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_class(class))
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{:?}", "", self.kind, indent = depth * 2)?;
        if !self.classes.is_empty() {
            write!(f, " .{}", self.classes.join("."))?;
        }
        if let Some(text) = &self.text {
            write!(f, " {text:?}")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
