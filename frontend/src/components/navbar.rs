use shared::Route;
use yew::prelude::*;

use super::nav::Link;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Route,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let nav_links = |onclick: Option<Callback<()>>| {
        Route::NAV
            .iter()
            .map(|&route| {
                let active = props.current == route;
                html! {
                    <li key={route.path()}>
                        <Link to={route} class={classes!("nav-link", active.then_some("active"))} onclick={onclick.clone()}>
                            { route.label() }
                        </Link>
                    </li>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link to={Route::Home} class="brand">
                    <img src="/images/logo.png" alt="UrticaScan AI Logo" class="brand-logo" />
                    <span class="brand-name">{"UrticaScan AI"}</span>
                </Link>

                <ul class="nav-links">
                    { nav_links(None) }
                </ul>

                <button
                    class={classes!("menu-toggle", menu_open.then_some("open"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! { <ul class="mobile-menu">{ nav_links(Some(close_menu)) }</ul> }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
