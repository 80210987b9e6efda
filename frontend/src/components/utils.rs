use gloo_timers::callback::Timeout;
use shared::WorkflowError;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

pub fn render_error_message(notice: Option<&WorkflowError>, on_dismiss: Callback<MouseEvent>) -> Html {
    if let Some(error) = notice {
        html! {
            <div class="error-message" role="alert">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error.to_string() }</p>
                <button class="dismiss-btn" aria-label="Dismiss" onclick={on_dismiss}>{"×"}</button>
            </div>
        }
    } else {
        html! {}
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            gloo_console::error!(e);
        }
    }
}
