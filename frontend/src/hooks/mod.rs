pub mod use_fade_scale;
pub mod use_modal;
pub mod use_readable;

pub use use_fade_scale::use_fade_scale;
pub use use_modal::{use_app_context, use_modal, UseModalResult};
pub use use_readable::use_readable;
