use yew::prelude::*;

use crate::app::AppContext;
use crate::hooks::use_readable::use_readable;
use crate::stores::{ModalController, ModalState};

pub struct UseModalResult {
    pub controller: ModalController,
    pub state: ModalState,
    /// Exit animation length from configuration
    pub transition_ms: u32,
}

impl UseModalResult {
    /// Start the exit animation; the modal unmounts when it finishes
    pub fn dismiss(&self) {
        self.controller.start_closing(Some(self.transition_ms));
    }
}

#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext must be provided by the App root")
}

#[hook]
pub fn use_modal() -> UseModalResult {
    let context = use_app_context();
    let state = use_readable(&context.modal.readable());

    UseModalResult {
        controller: context.modal.clone(),
        state,
        transition_ms: context.config.modal_transition_ms,
    }
}
