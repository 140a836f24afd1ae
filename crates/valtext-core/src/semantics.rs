/// High‑level semantic role of a node, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    Button,
    TextField,
    Image,
}

/// Semantics attached to a widget, used to build the accessibility tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    /// Primary role of this node (what kind of thing it is).
    pub role: Role,
    /// Human‑readable label for screen readers. For text fields this is the
    /// title, or the placeholder when no title is shown.
    pub label: Option<String>,
    /// Current value, e.g. the text of a field. Masked for secure entry.
    pub value: Option<String>,
    /// Whether this node is currently focused.
    pub focused: bool,
    /// Whether this node is actionable; disabled nodes remain in the tree
    /// but are marked not enabled.
    pub enabled: bool,
    /// Whether the node currently reports invalid input.
    pub invalid: bool,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            value: None,
            focused: false,
            enabled: true,
            invalid: false,
        }
    }
}
