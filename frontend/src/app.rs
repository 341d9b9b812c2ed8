//! # Application Root
//!
//! Builds the one `AppContext` for the lifetime of the client and provides it
//! to every component through Yew's context API, instead of module-level
//! global stores.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{ContextMenuView, DomainList, ModalHost, Sidebar};
use crate::config::ClientConfig;
use crate::routing::{guard_route, session_user_id, CookieJar, Navigation};
use crate::services::{ApiClient, Logger};
use crate::stores::{ContextMenuStore, ModalController, SessionStores, SidebarActionsStore};

/// Everything components share. Cloning is cheap; clones share state.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: Rc<ClientConfig>,
    pub api: ApiClient,
    pub modal: ModalController,
    pub sidebar_actions: Rc<SidebarActionsStore>,
    pub context_menu: Rc<ContextMenuStore>,
    pub session: Rc<SessionStores>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config.api_base_url.clone()),
            config: Rc::new(config),
            modal: ModalController::default(),
            sidebar_actions: Rc::new(SidebarActionsStore::new()),
            context_menu: Rc::new(ContextMenuStore::new()),
            session: Rc::new(SessionStores::new()),
        }
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && self.modal == other.modal
            && Rc::ptr_eq(&self.sidebar_actions, &other.sidebar_actions)
            && Rc::ptr_eq(&self.context_menu, &other.context_menu)
            && Rc::ptr_eq(&self.session, &other.session)
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ClientConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let context = use_memo((), {
        let config = props.config.clone();
        move |_| AppContext::new(config)
    });

    // Guard the current route and restore the session on startup
    {
        let context = (*context).clone();
        use_effect_with((), move |_| {
            let path = web_sys::window()
                .and_then(|window| window.location().pathname().ok())
                .unwrap_or_else(|| context.config.home_path.clone());
            let jar = CookieJar::from_document();
            let navigation = guard_route(&jar, &path, &context.config);

            if navigation != Navigation::Proceed {
                navigation.apply();
            } else if let Some(user_id) = session_user_id(&jar, &context.config) {
                let user_id = user_id.to_string();
                context.session.sign_in(user_id.clone());

                spawn_local(async move {
                    match context.api.get_user(&user_id).await {
                        Ok(user) => {
                            Logger::info_with_component("app", &format!("signed in as {}", user.display_name));
                            context.session.set_user(user);
                        }
                        Err(e) => {
                            Logger::error_with_component("app", &format!("failed to load user {}: {}", user_id, e));
                        }
                    }
                });
            }

            || ()
        });
    }

    let on_background_click = {
        let context_menu = context.context_menu.clone();
        Callback::from(move |_: MouseEvent| context_menu.hide())
    };

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            <div class="app-layout" onclick={on_background_click}>
                <Sidebar />
                <main class="app-content">
                    <DomainList />
                </main>
                <ModalHost />
                <ContextMenuView />
            </div>
        </ContextProvider<AppContext>>
    }
}
