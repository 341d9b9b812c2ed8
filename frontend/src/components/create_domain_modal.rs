use shared::{DomainDetails, ModalKind, NewDomain};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::{use_app_context, use_modal};
use crate::services::Logger;

/// Build the request from raw form input, or explain what is missing
pub fn build_new_domain(name: &str, description: &str) -> Result<NewDomain, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Domain name is required".to_string());
    }
    if name.chars().count() > 64 {
        return Err("Domain name must be 64 characters or fewer".to_string());
    }

    let description = description.trim();
    let details = DomainDetails {
        description: (!description.is_empty()).then(|| description.to_string()),
        ..DomainDetails::default()
    };

    Ok(NewDomain {
        name: name.to_string(),
        details: (!details.is_empty()).then_some(details),
    })
}

#[function_component(CreateDomainModal)]
pub fn create_domain_modal() -> Html {
    let context = use_app_context();
    let modal = use_modal();

    let name = use_state(String::new);
    let description = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            description.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let description = description.clone();
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

            let request = match build_new_domain(&name, &description) {
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
            let session = session.clone();
            let controller = controller.clone();

            spawn_local(async move {
                match api.create_domain(&request).await {
                    Ok(domain) => {
                        Logger::info_with_component("create-domain", &format!("created domain {}", domain.id));
                        session.push_domain(domain);
                        controller.start_closing(Some(transition_ms));
                    }
                    Err(e) => {
                        Logger::error_with_component("create-domain", &format!("create failed: {}", e));
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
            <h3 class="modal-title">{ModalKind::CreateDomain.title()}</h3>

            <label class="modal-label" for="domain-name">{"Name"}</label>
            <input
                id="domain-name"
                class="modal-input"
                type="text"
                value={(*name).clone()}
                oninput={on_name_input}
                disabled={*submitting}
            />

            <label class="modal-label" for="domain-description">{"Description"}</label>
            <textarea
                id="domain-description"
                class="modal-input"
                value={(*description).clone()}
                oninput={on_description_input}
                disabled={*submitting}
            />

            if let Some(message) = (*error).clone() {
                <div class="modal-error">{message}</div>
            }

            <div class="modal-actions">
                <button type="button" class="modal-button secondary" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit" class="modal-button primary" disabled={*submitting}>
                    {if *submitting { "Creating..." } else { "Create" }}
                </button>
            </div>
        </form>
    }
}
