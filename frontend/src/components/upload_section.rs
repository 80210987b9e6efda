use shared::WorkflowStatus;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::utils::debounce;
use crate::pages::predict::{Msg, Predict};

pub fn render_upload_section(model: &Predict, ctx: &Context<Predict>) -> Html {
    let status: &'static str = model.workflow.status().into();
    html! {
        <div class="upload-section" data-status={status}>
            { render_source_buttons(model, ctx) }
            { render_camera(model, ctx) }
            { render_preview(model) }
            { render_predict_button(model, ctx) }
        </div>
    }
}

fn render_source_buttons(model: &Predict, ctx: &Context<Predict>) -> Html {
    let link = ctx.link();
    let busy = model.workflow.is_submitting();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.get(0));
        // Choosing the same file twice still fires a change event.
        input.set_value("");
        Msg::FileChosen(file)
    });

    // Opened straight from the click; some browsers block pickers opened from timers.
    let trigger_file_input = {
        let input_ref = model.file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    html! {
        <div class="source-buttons">
            <input
                type="file"
                accept="image/*"
                style="display: none;"
                ref={model.file_input_ref.clone()}
                onchange={handle_change}
            />
            <button class="upload-btn" disabled={busy} onclick={trigger_file_input}>
                <i class="fa-solid fa-upload"></i>{" Choose Image"}
            </button>
            <button
                class="camera-btn"
                disabled={busy || model.workflow.is_camera_open()}
                onclick={link.callback(|_| Msg::OpenCamera)}
            >
                <i class="fa-solid fa-camera"></i>{" Use Camera"}
            </button>
        </div>
    }
}

fn render_camera(model: &Predict, ctx: &Context<Predict>) -> Html {
    let link = ctx.link();
    match model.workflow.status() {
        WorkflowStatus::AwaitingCameraPermission => html! {
            <div class="camera-view waiting">
                <p>{"Waiting for camera permission..."}</p>
                <button class="secondary-btn" onclick={link.callback(|_| Msg::CloseCamera)}>{"Cancel"}</button>
            </div>
        },
        WorkflowStatus::CameraActive => html! {
            <div class="camera-view">
                <video ref={model.video_ref.clone()} autoplay=true playsinline=true muted=true class="camera-feed" />
                <div class="camera-controls">
                    <button class="primary-btn" onclick={link.callback(|_| Msg::Capture)}>{"Capture"}</button>
                    <button class="secondary-btn" onclick={link.callback(|_| Msg::CloseCamera)}>{"Close Camera"}</button>
                </div>
            </div>
        },
        _ => html! {},
    }
}

fn render_preview(model: &Predict) -> Html {
    if model.workflow.is_camera_open() {
        return html! {};
    }
    match model.workflow.pending_image() {
        Some(image) => html! {
            <div class="preview-container">
                <img src={image.preview_url()} alt={image.name().to_string()} class="preview-image" />
                <p class="preview-name">{ image.name() }</p>
            </div>
        },
        None => html! {
            <p class="placeholder">{"No image selected yet."}</p>
        },
    }
}

fn render_predict_button(model: &Predict, ctx: &Context<Predict>) -> Html {
    let submitting = model.workflow.is_submitting();
    let link = ctx.link().clone();
    html! {
        <button
            class="analyze-btn"
            disabled={submitting}
            onclick={debounce(200, move || link.send_message(Msg::Predict))}
        >
            {
                if submitting {
                    html! { <><span class="spinner"></span>{"Predicting..."}</> }
                } else {
                    html! { "Predict" }
                }
            }
        </button>
    }
}
