pub mod context_menu;
pub mod modal;
pub mod observable;
pub mod session;
pub mod sidebar_actions;

pub use context_menu::{ContextMenu, ContextMenuItem, ContextMenuPosition, ContextMenuStore};
pub use modal::{ModalController, ModalError, ModalPayload, ModalPhase, ModalState};
pub use observable::{Readable, Subscription, Writable};
pub use session::SessionStores;
pub use sidebar_actions::{SidebarAction, SidebarActionsStore};
