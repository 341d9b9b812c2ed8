use shared::{ModalKind, NewDomainMembership};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_app_context, use_modal};
use crate::services::Logger;

pub const MEMBER_ROLE: &str = "member";

pub fn build_membership(domain_id: &str, user_id: Option<&str>) -> Result<NewDomainMembership, String> {
    let domain_id = Uuid::parse_str(domain_id.trim()).map_err(|_| "Enter a valid domain ID".to_string())?;
    let user_id = user_id
        .and_then(|id| Uuid::parse_str(id).ok())
        .ok_or_else(|| "You need to be signed in to join a domain".to_string())?;

    Ok(NewDomainMembership {
        domain_id,
        user_id,
        role_name: MEMBER_ROLE.to_string(),
    })
}

#[function_component(JoinDomainModal)]
pub fn join_domain_modal() -> Html {
    let context = use_app_context();
    let modal = use_modal();

    let domain_id = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_input = {
        let domain_id = domain_id.clone();
        Callback::from(move |e: InputEvent| {
            domain_id.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let domain_id = domain_id.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let api = context.api.clone();
        let session = context.session.clone();
        let controller = modal.controller.clone();
        let transition_ms = modal.transition_ms;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let user_id = session.current_user_id();
            let request = match build_membership(&domain_id, user_id.as_deref()) {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            error.set(None);
            submitting.set(true);

            let error = error.clone();
            let submitting = submitting.clone();
            let api = api.clone();
            let controller = controller.clone();

            spawn_local(async move {
                match api.join_domain(&request).await {
                    Ok(()) => {
                        Logger::info_with_component("join-domain", &format!("joined domain {}", request.domain_id));
                        controller.start_closing(Some(transition_ms));
                    }
                    Err(e) => {
                        Logger::error_with_component("join-domain", &format!("join failed: {}", e));
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let controller = modal.controller.clone();
        let transition_ms = modal.transition_ms;
        Callback::from(move |_: MouseEvent| controller.start_closing(Some(transition_ms)))
    };

    html! {
        <form class="modal-form" onsubmit={on_submit}>
            <h3 class="modal-title">{ModalKind::JoinDomain.title()}</h3>

            <label class="modal-label" for="join-domain-id">{"Domain ID"}</label>
            <input
                id="join-domain-id"
                class="modal-input"
                type="text"
                placeholder="00000000-0000-0000-0000-000000000000"
                value={(*domain_id).clone()}
                oninput={on_input}
                disabled={*submitting}
            />

            if let Some(message) = (*error).clone() {
                <div class="modal-error">{message}</div>
            }

            <div class="modal-actions">
                <button type="button" class="modal-button secondary" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit" class="modal-button primary" disabled={*submitting}>
                    {if *submitting { "Joining..." } else { "Join" }}
                </button>
            </div>
        </form>
    }
}
