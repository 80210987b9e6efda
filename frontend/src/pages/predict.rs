use shared::{ResultSummary, Ticket, Workflow, WorkflowError};
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlVideoElement};
use yew::prelude::*;

use crate::api::submit_prediction;
use crate::camera::{CameraError, CameraSession, snapshot};
use crate::components::results::render_results;
use crate::components::upload_section::render_upload_section;
use crate::components::utils::{alert, render_error_message};
use crate::config::PREDICT_ENDPOINT;
use crate::pending_image::{PendingImage, is_image};

const SNAPSHOT_NAME: &str = "webcam.jpg";

pub enum Msg {
    FileChosen(Option<File>),
    OpenCamera,
    CameraReady(Ticket, Result<CameraSession, CameraError>),
    CloseCamera,
    Capture,
    Predict,
    PredictionDone(Ticket, Result<shared::PredictionResult, shared::SubmissionError>),
    DismissNotice,
}

/// Capture-and-predict page.
pub struct Predict {
    pub(crate) workflow: Workflow<PendingImage, CameraSession>,
    pub(crate) summary: Option<ResultSummary>,
    pub(crate) video_ref: NodeRef,
    pub(crate) file_input_ref: NodeRef,
}

impl Predict {
    fn handle_file_chosen(&mut self, file: Option<File>) -> bool {
        let Some(file) = file else {
            return false;
        };
        if !is_image(&file) {
            self.workflow.report(WorkflowError::NotAnImage(file.name()));
            return true;
        }
        log::info!("Selected {} ({} bytes)", file.name(), file.size());
        if let Err(e) = self.workflow.select_image(PendingImage::from_file(file)) {
            log::warn!("Ignoring file selection: {}", e);
        }
        self.sync_summary();
        true
    }

    fn handle_open_camera(&mut self, ctx: &Context<Self>) -> bool {
        let ticket = match self.workflow.request_camera() {
            Ok(ticket) => ticket,
            Err(e) => {
                log::warn!("Camera request refused: {}", e);
                return false;
            }
        };
        self.sync_summary();

        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = CameraSession::open().await;
            link.send_message(Msg::CameraReady(ticket, outcome));
        });
        true
    }

    fn handle_camera_ready(
        &mut self,
        ticket: Ticket,
        outcome: Result<CameraSession, CameraError>,
    ) -> bool {
        match outcome {
            Ok(session) => self.workflow.camera_granted(ticket, session),
            Err(e) => {
                log::error!("Camera unavailable: {}", e);
                self.workflow.camera_denied(ticket, e.to_string())
            }
        }
    }

    fn handle_capture(&mut self) -> bool {
        let video = self.video_ref.cast::<HtmlVideoElement>();
        let captured = self.workflow.capture_snapshot(|_session| {
            let video = video.ok_or(CameraError::NoFrame)?;
            let blob = snapshot(&video)?;
            Ok::<_, CameraError>(PendingImage::from_blob(SNAPSHOT_NAME.to_string(), blob))
        });
        if let Err(e) = captured {
            log::error!("Snapshot failed: {}", e);
        }
        self.sync_summary();
        true
    }

    fn handle_predict(&mut self, ctx: &Context<Self>) -> bool {
        let (ticket, image) = match self.workflow.begin_submission() {
            Ok(started) => started,
            Err(WorkflowError::Busy) => return false,
            Err(e @ WorkflowError::NoImageSelected) => {
                alert(&e.to_string());
                return true;
            }
            Err(_) => return true,
        };
        self.summary = None;

        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = submit_prediction(PREDICT_ENDPOINT, &image).await;
            link.send_message(Msg::PredictionDone(ticket, outcome));
        });
        true
    }

    // The displayed confidence is drawn once per result so re-renders keep it stable.
    fn sync_summary(&mut self) {
        self.summary = self
            .workflow
            .result()
            .map(|result| ResultSummary::new(result, &mut rand::thread_rng()));
    }
}

impl Component for Predict {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            workflow: Workflow::new(),
            summary: None,
            video_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => self.handle_file_chosen(file),
            Msg::OpenCamera => self.handle_open_camera(ctx),
            Msg::CameraReady(ticket, outcome) => self.handle_camera_ready(ticket, outcome),
            Msg::CloseCamera => {
                self.workflow.close_camera();
                true
            }
            Msg::Capture => self.handle_capture(),
            Msg::Predict => self.handle_predict(ctx),
            Msg::PredictionDone(ticket, outcome) => {
                let applied = self.workflow.complete_submission(ticket, outcome);
                if applied {
                    self.sync_summary();
                }
                applied
            }
            Msg::DismissNotice => {
                self.workflow.dismiss_notice();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="page predict-page">
                <h1>{"Skin Condition Prediction"}</h1>
                <p class="subtitle">
                    {"Upload a clear photo of the affected skin or take one with your camera."}
                </p>
                { render_error_message(self.workflow.notice(), link.callback(|_| Msg::DismissNotice)) }
                { render_upload_section(self, ctx) }
                { render_results(self.summary.as_ref()) }
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let (Some(session), Some(video)) = (
            self.workflow.camera(),
            self.video_ref.cast::<HtmlVideoElement>(),
        ) {
            session.attach(&video);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Leaving the page releases the camera and the preview URL.
        self.workflow.reset();
        self.summary = None;
    }
}
