use shared::Domain;
use yew::prelude::*;

use crate::hooks::{use_app_context, use_readable};
use crate::services::Logger;
use crate::stores::{ContextMenuItem, ContextMenuPosition};

fn domain_details(domain: &Domain) -> Html {
    html! {
        <div class="domain-details">
            <h3 class="modal-title">{domain.name.clone()}</h3>
            if let Some(description) = domain.description.clone() {
                <p class="domain-description">{description}</p>
            }
            <div class="domain-id">{domain.id.to_string()}</div>
            <div class="domain-created">{domain.created_at.format("%B %-d, %Y").to_string()}</div>
        </div>
    }
}

#[function_component(DomainList)]
pub fn domain_list() -> Html {
    let context = use_app_context();
    let domains = use_readable(&context.session.domains_view());

    let domains = domains.unwrap_or_default();
    if domains.is_empty() {
        return html! { <div class="domain-list empty">{"You are not in any domains yet"}</div> };
    }

    html! {
        <div class="domain-list">
            {for domains.into_iter().map(|domain| {
                let oncontextmenu = {
                    let context = context.clone();
                    let domain = domain.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        e.stop_propagation();

                        let modal = context.modal.clone();
                        let details = domain_details(&domain);
                        let show_details = Callback::from(move |_| {
                            if let Err(e) = modal.open(details.clone()) {
                                Logger::error_with_component("domain-list", &e.to_string());
                            }
                        });

                        context.context_menu.show_items(
                            ContextMenuPosition { x: e.client_x() as f64, y: e.client_y() as f64 },
                            vec![ContextMenuItem::new("Details", show_details).with_icon("mdi:information")],
                        );
                    })
                };

                html! {
                    <div class="domain-card" key={domain.id.to_string()} {oncontextmenu}>
                        if let Some(icon_url) = domain.icon_url.clone() {
                            <img class="domain-icon" src={icon_url} alt="" />
                        }
                        <span class="domain-name">{domain.name.clone()}</span>
                    </div>
                }
            })}
        </div>
    }
}
