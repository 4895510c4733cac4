//! Declarative view fragments and the controls they bind

/// Which slot of the result view a fragment fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKey {
    Summary,
    Transcript,
    LoadAll,
    Item(usize),
    ErrorBanner,
}

/// A control local to one fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LoadAll,
    LoadItem,
    Expand,
    Collapse,
}

/// What pressing a control asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LoadAll,
    LoadItem(usize),
    Expand(usize),
    Collapse(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub control: Control,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading(String),
    Text(String),
    /// De-emphasized line, e.g. "No content available."
    Muted(String),
    Error(String),
    /// Per-item status line
    Status(String),
    /// One entry per source line
    Paragraphs(Vec<String>),
    Button {
        control: Control,
        label: String,
        enabled: bool,
    },
    /// Preview with "View Full Summary", or the full text with "Collapse"
    Collapsible { preview: String, full: Vec<String> },
}

pub const EXPAND_LABEL: &str = "View Full Summary";
pub const COLLAPSE_LABEL: &str = "Collapse";

/// A rendered unit. Nodes and bindings are always replaced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub key: FragmentKey,
    pub nodes: Vec<Node>,
    pub bindings: Vec<Binding>,
}

impl Fragment {
    pub fn new(key: FragmentKey) -> Self {
        Self {
            key,
            nodes: Vec::new(),
            bindings: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Add a button; only enabled buttons get a binding
    pub fn button(&mut self, control: Control, label: impl Into<String>, enabled: bool, action: Action) -> &mut Self {
        self.nodes.push(Node::Button {
            control,
            label: label.into(),
            enabled,
        });
        if enabled {
            self.bind(control, action);
        }
        self
    }

    pub fn bind(&mut self, control: Control, action: Action) -> &mut Self {
        self.bindings.push(Binding { control, action });
        self
    }

    pub fn action_for(&self, control: Control) -> Option<Action> {
        self.bindings
            .iter()
            .find(|binding| binding.control == control)
            .map(|binding| binding.action)
    }

    /// Label and enabled flag of the first button for `control`
    pub fn button_state(&self, control: Control) -> Option<(&str, bool)> {
        self.nodes.iter().find_map(|node| match node {
            Node::Button {
                control: c,
                label,
                enabled,
            } if *c == control => Some((label.as_str(), *enabled)),
            _ => None,
        })
    }

    /// Plain text a user would see, buttons shown as `[label]`
    pub fn visible_text(&self, expanded: bool) -> String {
        let mut lines = Vec::new();
        for node in &self.nodes {
            match node {
                Node::Heading(text)
                | Node::Text(text)
                | Node::Muted(text)
                | Node::Error(text)
                | Node::Status(text) => lines.push(text.clone()),
                Node::Paragraphs(paragraphs) => lines.extend(paragraphs.iter().cloned()),
                Node::Button { label, .. } => lines.push(format!("[{}]", label)),
                Node::Collapsible { preview, full } => {
                    if expanded {
                        lines.extend(full.iter().cloned());
                        lines.push(format!("[{}]", COLLAPSE_LABEL));
                    } else {
                        lines.push(preview.clone());
                        lines.push(format!("[{}]", EXPAND_LABEL));
                    }
                }
            }
        }
        lines.join("\n")
    }

    pub fn is_collapsible(&self) -> bool {
        self.nodes
            .iter()
            .any(|node| matches!(node, Node::Collapsible { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_buttons_have_no_binding() {
        let mut fragment = Fragment::new(FragmentKey::Item(0));
        fragment.button(Control::LoadItem, "Load Summary", false, Action::LoadItem(0));
        assert_eq!(fragment.action_for(Control::LoadItem), None);
        assert_eq!(fragment.button_state(Control::LoadItem), Some(("Load Summary", false)));

        let mut fragment = Fragment::new(FragmentKey::Item(0));
        fragment.button(Control::LoadItem, "Load Summary", true, Action::LoadItem(0));
        assert_eq!(fragment.action_for(Control::LoadItem), Some(Action::LoadItem(0)));
    }

    #[test]
    fn visible_text_follows_expansion() {
        let mut fragment = Fragment::new(FragmentKey::Item(1));
        fragment
            .push(Node::Heading("2. Title".into()))
            .push(Node::Collapsible {
                preview: "abc...".into(),
                full: vec!["abc".into(), "def".into()],
            });

        assert_eq!(fragment.visible_text(false), "2. Title\nabc...\n[View Full Summary]");
        assert_eq!(fragment.visible_text(true), "2. Title\nabc\ndef\n[Collapse]");
    }
}
