mod api;
mod camera;
mod components;
mod config;
mod content;
mod pages;
mod pending_image;

use components::footer::Footer;
use components::nav::{Navigator, current_route, push_history};
use components::navbar::Navbar;
use gloo_events::EventListener;
use pages::about::About;
use pages::home::Home;
use pages::not_found::NotFound;
use pages::predict::Predict;
use pages::team::Team;
use shared::Route;
use yew::prelude::*;

fn render_page(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Predict => html! { <Predict /> },
        Route::Team => html! { <Team /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let route = use_state(current_route);

    // Back and forward buttons.
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| route.set(current_route()))
            });
            move || drop(listener)
        });
    }

    let navigator = {
        let route = route.clone();
        Navigator(Callback::from(move |next: Route| {
            if *route != next {
                log::debug!("Navigating to {}", next.path());
                push_history(next);
                route.set(next);
            }
        }))
    };

    html! {
        <ContextProvider<Navigator> context={navigator}>
            <div class="app">
                <Navbar current={*route} />
                <main class="content">
                    { render_page(*route) }
                </main>
                <Footer />
            </div>
        </ContextProvider<Navigator>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("UrticaScan AI starting on {}", current_route().path());
    yew::Renderer::<App>::new().render();
}
