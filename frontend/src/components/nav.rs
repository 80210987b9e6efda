use shared::Route;
use yew::prelude::*;

/// Switches the visible page. Provided by the app root.
#[derive(Clone, PartialEq)]
pub struct Navigator(pub Callback<Route>);

impl Navigator {
    pub fn go(&self, route: Route) {
        self.0.emit(route);
    }
}

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

pub fn push_history(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
                gloo_console::error!(e);
            }
        }
        Err(e) => gloo_console::error!(e),
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Html,
}

/// An anchor that navigates without reloading the page.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let navigator = use_context::<Navigator>();
    let to = props.to;
    let extra = props.onclick.clone();

    let onclick = Callback::from(move |e: MouseEvent| {
        if let Some(navigator) = &navigator {
            e.prevent_default();
            navigator.go(to);
        }
        if let Some(extra) = &extra {
            extra.emit(());
        }
    });

    html! {
        <a href={to.path()} class={props.class.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}
