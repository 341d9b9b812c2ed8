//! Extra buttons pages contribute to the sidebar (e.g. "Create Domain").

use yew::Callback;

use super::observable::{Readable, Subscription, Writable};

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarAction {
    pub icon_name: String,
    pub text: String,
    pub on_click: Callback<()>,
}

impl SidebarAction {
    pub fn new(icon_name: impl Into<String>, text: impl Into<String>, on_click: Callback<()>) -> Self {
        Self {
            icon_name: icon_name.into(),
            text: text.into(),
            on_click,
        }
    }
}

#[derive(Debug, Default)]
pub struct SidebarActionsStore {
    actions: Writable<Vec<SidebarAction>>,
}

impl SidebarActionsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append actions after the ones already shown
    pub fn add(&self, actions: Vec<SidebarAction>) {
        self.actions.update(|current| current.extend(actions));
    }

    /// Replace every action
    pub fn set(&self, actions: Vec<SidebarAction>) {
        self.actions.set(actions);
    }

    pub fn clear(&self) {
        self.actions.set(Vec::new());
    }

    pub fn get(&self) -> Vec<SidebarAction> {
        self.actions.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&Vec<SidebarAction>) + 'static) -> Subscription {
        self.actions.subscribe(listener)
    }

    pub fn readable(&self) -> Readable<Vec<SidebarAction>> {
        self.actions.readable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(text: &str) -> SidebarAction {
        SidebarAction::new("mdi:plus", text, Callback::noop())
    }

    fn texts(store: &SidebarActionsStore) -> Vec<String> {
        store.get().into_iter().map(|action| action.text).collect()
    }

    #[test]
    fn test_add_appends() {
        let store = SidebarActionsStore::new();
        store.add(vec![action("Create Domain")]);
        store.add(vec![action("Join Domain"), action("Invite")]);

        assert_eq!(texts(&store), vec!["Create Domain", "Join Domain", "Invite"]);
    }

    #[test]
    fn test_set_replaces_and_clear_empties() {
        let store = SidebarActionsStore::new();
        store.add(vec![action("Old")]);
        store.set(vec![action("New")]);
        assert_eq!(texts(&store), vec!["New"]);

        store.clear();
        assert!(store.get().is_empty());
    }

    #[test]
    fn test_subscribers_see_additions() {
        let store = SidebarActionsStore::new();
        let counts = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let _subscription = {
            let counts = counts.clone();
            store.subscribe(move |actions: &Vec<SidebarAction>| counts.borrow_mut().push(actions.len()))
        };

        store.add(vec![action("A"), action("B")]);

        assert_eq!(*counts.borrow(), vec![0, 2]);
    }
}
