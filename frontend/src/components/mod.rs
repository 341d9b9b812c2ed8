pub mod context_menu_view;
pub mod create_domain_modal;
pub mod domain_list;
pub mod join_domain_modal;
pub mod modal_host;
pub mod sidebar;

pub use context_menu_view::ContextMenuView;
pub use create_domain_modal::CreateDomainModal;
pub use domain_list::DomainList;
pub use join_domain_modal::JoinDomainModal;
pub use modal_host::ModalHost;
pub use sidebar::Sidebar;
