use shared::Route;
use yew::prelude::*;

use super::nav::Link;
use crate::content::{ADDRESS, SOCIAL_LINKS, TAGLINE};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">
            <div class="footer-grid">
                <div>
                    <h2>{"UrticaScan AI"}</h2>
                    <p class="muted">{ TAGLINE }</p>
                </div>
                <div>
                    <h3>{"Navigation"}</h3>
                    <ul>
                        { for Route::NAV.iter().map(|&route| html! {
                            <li key={route.path()}><Link to={route}>{ route.label() }</Link></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Contact"}</h3>
                    <p class="muted">{ format!("Address: {}", ADDRESS) }</p>
                </div>
                <div>
                    <h3>{"Follow Us"}</h3>
                    <ul>
                        { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                            <li key={*href}><a href={*href}>{ *label }</a></li>
                        }) }
                    </ul>
                </div>
            </div>
            <p class="copyright">{"© 2025 UrticaScan AI. All rights reserved."}</p>
        </footer>
    }
}
