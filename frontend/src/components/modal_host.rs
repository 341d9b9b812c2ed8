use gloo::events::EventListener;
use shared::ModalKind;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::create_domain_modal::CreateDomainModal;
use crate::components::join_domain_modal::JoinDomainModal;
use crate::hooks::{use_fade_scale, use_modal};
use crate::stores::ModalPayload;

/// Renders whatever the modal controller currently shows.
///
/// Backdrop clicks and Escape start the timed exit animation; the payload
/// stays mounted while closing so it can animate out. Opening animates in
/// from a hidden first frame.
#[function_component(ModalHost)]
pub fn modal_host() -> Html {
    let modal = use_modal();
    let style = use_fade_scale(modal.state.is_open(), modal.transition_ms);

    {
        let controller = modal.controller.clone();
        let transition_ms = modal.transition_ms;
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|event| event.key() == "Escape");
                    if escape {
                        controller.start_closing(Some(transition_ms));
                    }
                })
            });
            move || drop(listener)
        });
    }

    let Some(payload) = modal.state.payload().cloned() else {
        return html! {};
    };

    let on_backdrop_click = {
        let controller = modal.controller.clone();
        let transition_ms = modal.transition_ms;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            controller.start_closing(Some(transition_ms));
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let phase_class = if modal.state.is_closing() { "modal-closing" } else { "modal-open" };

    let content = match payload {
        ModalPayload::Kind(ModalKind::CreateDomain) => html! { <CreateDomainModal /> },
        ModalPayload::Kind(ModalKind::JoinDomain) => html! { <JoinDomainModal /> },
        ModalPayload::Component(view) => view,
    };

    html! {
        <div class={classes!("modal-backdrop", phase_class)} onclick={on_backdrop_click}>
            <div class="modal" style={style} onclick={on_modal_click}>
                {content}
            </div>
        </div>
    }
}
