use shared::{ModalKind, TabInfo, TabType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_app_context, use_readable};
use crate::routing::Navigation;
use crate::routing::guard::REDIRECT_STATUS;
use crate::services::Logger;
use crate::stores::SidebarAction;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let context = use_app_context();
    let actions = use_readable(&context.sidebar_actions.readable());
    let active_tab = use_state(|| TabType::Domains);

    // Domain actions are always available from the sidebar
    {
        let context = context.clone();
        use_effect_with((), move |_| {
            let open = |kind: ModalKind| {
                let modal = context.modal.clone();
                Callback::from(move |_| {
                    if let Err(e) = modal.open(kind) {
                        Logger::error_with_component("sidebar", &e.to_string());
                    }
                })
            };

            context.sidebar_actions.set(vec![
                SidebarAction::new("mdi:plus", "Create Domain", open(ModalKind::CreateDomain)),
                SidebarAction::new("mdi:account-plus", "Join Domain", open(ModalKind::JoinDomain)),
            ]);

            let sidebar_actions = context.sidebar_actions.clone();
            move || sidebar_actions.clear()
        });
    }

    let on_tab_click = {
        let active_tab = active_tab.clone();
        let context = context.clone();
        Callback::from(move |tab: TabType| {
            if tab != TabType::Logout {
                active_tab.set(tab);
                return;
            }

            let context = context.clone();
            spawn_local(async move {
                if let Err(e) = context.api.logout().await {
                    Logger::warn_with_component("sidebar", &format!("logout request failed: {}", e));
                }
                context.session.sign_out();
                context.modal.close();
                Navigation::Redirect {
                    status: REDIRECT_STATUS,
                    to: context.config.login_path.clone(),
                }
                .apply();
            });
        })
    };

    html! {
        <nav class="sidebar">
            <ul class="sidebar-tabs">
                {for TabInfo::default_tabs().into_iter().map(|tab| {
                    let onclick = {
                        let on_tab_click = on_tab_click.clone();
                        let name = tab.name;
                        Callback::from(move |_: MouseEvent| on_tab_click.emit(name))
                    };
                    let class = classes!("sidebar-tab", (tab.name == *active_tab).then_some("active"));
                    html! {
                        <li {class} {onclick} data-icon={tab.icon.clone()}>
                            {format!("{:?}", tab.name)}
                        </li>
                    }
                })}
            </ul>

            <div class="sidebar-actions">
                {for actions.iter().map(|action| {
                    let on_click = action.on_click.clone();
                    html! {
                        <button
                            class="sidebar-action"
                            data-icon={action.icon_name.clone()}
                            onclick={Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                on_click.emit(());
                            })}
                        >
                            {action.text.clone()}
                        </button>
                    }
                })}
            </div>
        </nav>
    }
}
