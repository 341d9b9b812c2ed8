use yew::prelude::*;

use crate::hooks::{use_app_context, use_readable};
use crate::stores::{ContextMenu, ContextMenuItem, ContextMenuStore};

fn render_items(items: &[ContextMenuItem], store: &std::rc::Rc<ContextMenuStore>) -> Html {
    html! {
        <ul class="context-menu-items">
            {for items.iter().map(|item| {
                let onclick = {
                    let on_click = item.on_click.clone();
                    let store = store.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        on_click.emit(());
                        store.hide();
                    })
                };
                html! {
                    <li class="context-menu-item">
                        <button {onclick} data-icon={item.icon_name.clone()}>{item.text.clone()}</button>
                        if item.has_children() {
                            {render_items(&item.child_actions, store)}
                        }
                    </li>
                }
            })}
        </ul>
    }
}

#[function_component(ContextMenuView)]
pub fn context_menu_view() -> Html {
    let context = use_app_context();
    let menu = use_readable(&context.context_menu.readable());

    let Some(menu) = menu else {
        return html! {};
    };

    let position = menu.position();
    let style = format!("left: {}px; top: {}px;", position.x, position.y);
    let on_menu_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let content = match menu {
        ContextMenu::Items { items, .. } => render_items(&items, &context.context_menu),
        ContextMenu::Component { view, .. } => view,
    };

    html! {
        <div class="context-menu" {style} onclick={on_menu_click}>
            {content}
        </div>
    }
}
