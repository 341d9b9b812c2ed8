//! Right-click menu shown at a screen position: either a list of items
//! (optionally nested) or an arbitrary view.

use yew::{Callback, Html};

use super::observable::{Readable, Subscription, Writable};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContextMenuPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuItem {
    pub icon_name: Option<String>,
    pub text: String,
    pub on_click: Callback<()>,
    pub child_actions: Vec<ContextMenuItem>,
}

impl ContextMenuItem {
    pub fn new(text: impl Into<String>, on_click: Callback<()>) -> Self {
        Self {
            icon_name: None,
            text: text.into(),
            on_click,
            child_actions: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = Some(icon_name.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ContextMenuItem>) -> Self {
        self.child_actions = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.child_actions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContextMenu {
    Items {
        position: ContextMenuPosition,
        items: Vec<ContextMenuItem>,
    },
    Component {
        position: ContextMenuPosition,
        view: Html,
    },
}

impl ContextMenu {
    pub fn position(&self) -> ContextMenuPosition {
        match self {
            ContextMenu::Items { position, .. } | ContextMenu::Component { position, .. } => *position,
        }
    }

    pub fn is_items(&self) -> bool {
        matches!(self, ContextMenu::Items { .. })
    }
}

#[derive(Debug, Default)]
pub struct ContextMenuStore {
    menu: Writable<Option<ContextMenu>>,
}

impl ContextMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_items(&self, position: ContextMenuPosition, items: Vec<ContextMenuItem>) {
        self.menu.set(Some(ContextMenu::Items { position, items }));
    }

    pub fn show_component(&self, position: ContextMenuPosition, view: Html) {
        self.menu.set(Some(ContextMenu::Component { position, view }));
    }

    /// Hide the menu; does nothing when none is shown
    pub fn hide(&self) {
        if self.is_open() {
            self.menu.set(None);
        }
    }

    pub fn is_open(&self) -> bool {
        self.menu.with(Option::is_some)
    }

    pub fn get(&self) -> Option<ContextMenu> {
        self.menu.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&Option<ContextMenu>) + 'static) -> Subscription {
        self.menu.subscribe(listener)
    }

    pub fn readable(&self) -> Readable<Option<ContextMenu>> {
        self.menu.readable()
    }
}
