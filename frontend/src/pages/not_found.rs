use shared::Route;
use yew::prelude::*;

use crate::components::nav::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link to={Route::Home} class="primary-btn">{"Back to Home"}</Link>
        </div>
    }
}
