//! Capture-and-predict state machine.
//!
//! `Workflow` owns the pending image (`I`) and the camera session (`C`) by
//! value. Dropping a `C` must release the camera, so every path that leaves
//! the camera view simply drops the session.

use std::fmt;

use crate::prediction::{PredictionResult, SubmissionError};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum WorkflowStatus {
    Idle,
    AwaitingCameraPermission,
    CameraActive,
    ImageReady,
    Submitting,
    ResultReady,
    Failed,
}

/// Identifies one camera request or one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkflowError {
    #[error("Please upload or capture an image first.")]
    NoImageSelected,
    #[error("Could not access camera: {0}")]
    CameraDenied(String),
    #[error("{0}")]
    SubmissionFailed(#[from] SubmissionError),
    #[error("Could not capture a photo: {0}")]
    CaptureFailed(String),
    #[error("The camera is already open.")]
    CameraBusy,
    #[error("The camera is not open.")]
    CameraClosed,
    #[error("Capture a photo or close the camera before predicting.")]
    CameraOpen,
    #[error("A prediction is already running.")]
    Busy,
    #[error("{0} is not an image.")]
    NotAnImage(String),
}

pub struct Workflow<I, C> {
    status: WorkflowStatus,
    image: Option<I>,
    camera: Option<C>,
    result: Option<PredictionResult>,
    notice: Option<WorkflowError>,
    outstanding: Option<Ticket>,
    next_ticket: u64,
}

impl<I, C> Default for Workflow<I, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, C> fmt::Debug for Workflow<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workflow")
            .field("status", &self.status)
            .field("has_image", &self.image.is_some())
            .field("has_camera", &self.camera.is_some())
            .field("has_result", &self.result.is_some())
            .field("notice", &self.notice)
            .field("outstanding", &self.outstanding)
            .finish()
    }
}

impl<I, C> Workflow<I, C> {
    pub fn new() -> Self {
        Self {
            status: WorkflowStatus::Idle,
            image: None,
            camera: None,
            result: None,
            notice: None,
            outstanding: None,
            next_ticket: 0,
        }
    }

    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    pub fn pending_image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    pub fn camera(&self) -> Option<&C> {
        self.camera.as_ref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&WorkflowError> {
        self.notice.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == WorkflowStatus::Submitting
    }

    pub fn is_camera_open(&self) -> bool {
        matches!(
            self.status,
            WorkflowStatus::AwaitingCameraPermission | WorkflowStatus::CameraActive
        )
    }

    /// Stages a new image, replacing (and dropping) the previous one.
    /// Closes the camera if it is open.
    pub fn select_image(&mut self, image: I) -> Result<(), WorkflowError> {
        if self.is_submitting() {
            return Err(WorkflowError::Busy);
        }
        self.camera = None;
        self.outstanding = None;
        self.install(image);
        Ok(())
    }

    pub fn request_camera(&mut self) -> Result<Ticket, WorkflowError> {
        match self.status {
            WorkflowStatus::AwaitingCameraPermission | WorkflowStatus::CameraActive => {
                return Err(WorkflowError::CameraBusy);
            }
            WorkflowStatus::Submitting => return Err(WorkflowError::Busy),
            _ => {}
        }
        self.result = None;
        self.notice = None;
        let ticket = self.issue();
        self.enter(WorkflowStatus::AwaitingCameraPermission);
        Ok(ticket)
    }

    /// Hands a granted session to the workflow. A grant for an abandoned
    /// request is dropped here, which releases it; returns whether it was kept.
    pub fn camera_granted(&mut self, ticket: Ticket, session: C) -> bool {
        if !self.awaiting(ticket, WorkflowStatus::AwaitingCameraPermission) {
            log::debug!("discarding camera grant for stale {:?}", ticket);
            drop(session);
            return false;
        }
        self.outstanding = None;
        self.camera = Some(session);
        self.enter(WorkflowStatus::CameraActive);
        true
    }

    pub fn camera_denied(&mut self, ticket: Ticket, reason: impl Into<String>) -> bool {
        if !self.awaiting(ticket, WorkflowStatus::AwaitingCameraPermission) {
            return false;
        }
        self.outstanding = None;
        self.camera = None;
        self.notice = Some(WorkflowError::CameraDenied(reason.into()));
        self.settle();
        true
    }

    pub fn close_camera(&mut self) {
        if !self.is_camera_open() {
            return;
        }
        self.outstanding = None;
        self.camera = None;
        self.settle();
    }

    /// Grabs a still from the open session and stages it. The session is
    /// released before this returns, whether or not `grab` succeeded.
    pub fn capture_snapshot<E: fmt::Display>(
        &mut self,
        grab: impl FnOnce(&C) -> Result<I, E>,
    ) -> Result<(), WorkflowError> {
        let session = self.camera.take().ok_or(WorkflowError::CameraClosed)?;
        self.settle();

        let frame = grab(&session);
        drop(session);

        match frame {
            Ok(image) => {
                self.install(image);
                Ok(())
            }
            Err(e) => Err(self.report(WorkflowError::CaptureFailed(e.to_string()))),
        }
    }

    /// Starts a submission of the pending image. Returns the ticket to
    /// complete it with and a handle to the image to upload.
    pub fn begin_submission(&mut self) -> Result<(Ticket, I), WorkflowError>
    where
        I: Clone,
    {
        if self.is_submitting() {
            return Err(WorkflowError::Busy);
        }
        let Some(image) = self.image.clone() else {
            return Err(self.report(WorkflowError::NoImageSelected));
        };
        if self.is_camera_open() {
            return Err(self.report(WorkflowError::CameraOpen));
        }

        self.result = None;
        self.notice = None;
        let ticket = self.issue();
        self.enter(WorkflowStatus::Submitting);
        Ok((ticket, image))
    }

    /// Applies the outcome of a submission. Outcomes for anything but the
    /// outstanding submission are ignored; returns whether it was applied.
    pub fn complete_submission(
        &mut self,
        ticket: Ticket,
        outcome: Result<PredictionResult, SubmissionError>,
    ) -> bool {
        if !self.awaiting(ticket, WorkflowStatus::Submitting) {
            log::debug!("discarding submission outcome for stale {:?}", ticket);
            return false;
        }
        self.outstanding = None;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.enter(WorkflowStatus::ResultReady);
            }
            Err(e) => {
                log::warn!("prediction failed: {}", e);
                self.notice = Some(WorkflowError::SubmissionFailed(e));
                self.enter(WorkflowStatus::Failed);
            }
        }
        true
    }

    /// Records a user-visible notice without changing state.
    pub fn report(&mut self, error: WorkflowError) -> WorkflowError {
        self.notice = Some(error.clone());
        error
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn reset(&mut self) {
        self.camera = None;
        self.image = None;
        self.result = None;
        self.notice = None;
        self.outstanding = None;
        self.enter(WorkflowStatus::Idle);
    }

    fn install(&mut self, image: I) {
        self.image = Some(image);
        self.result = None;
        self.notice = None;
        self.enter(WorkflowStatus::ImageReady);
    }

    fn settle(&mut self) {
        let status = if self.image.is_some() {
            WorkflowStatus::ImageReady
        } else {
            WorkflowStatus::Idle
        };
        self.enter(status);
    }

    fn awaiting(&self, ticket: Ticket, status: WorkflowStatus) -> bool {
        self.status == status && self.outstanding == Some(ticket)
    }

    fn issue(&mut self) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.outstanding = Some(ticket);
        ticket
    }

    fn enter(&mut self, status: WorkflowStatus) {
        if self.status != status {
            log::debug!("workflow {} -> {}", self.status, status);
        }
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeCamera {
        released: Rc<Cell<bool>>,
    }

    impl Drop for FakeCamera {
        fn drop(&mut self) {
            self.released.set(true);
        }
    }

    fn camera() -> (FakeCamera, Rc<Cell<bool>>) {
        let released = Rc::new(Cell::new(false));
        (
            FakeCamera {
                released: released.clone(),
            },
            released,
        )
    }

    type TestWorkflow = Workflow<&'static str, FakeCamera>;

    fn eczema() -> PredictionResult {
        PredictionResult {
            predicted_class: "Eczema".into(),
            confidence: 87.25,
            affected_area_percent: 12.4,
            stage: "Stage 1".into(),
            treatments: vec!["Moisturize".into(), "Avoid irritants".into()],
            segmentation_mask_base64: "bWFzaw==".into(),
            overlay_image_base64: "b3ZlcmxheQ==".into(),
            threshold: None,
        }
    }

    fn with_open_camera() -> (TestWorkflow, Rc<Cell<bool>>) {
        let mut wf = TestWorkflow::new();
        let ticket = wf.request_camera().unwrap();
        let (cam, released) = camera();
        assert!(wf.camera_granted(ticket, cam));
        (wf, released)
    }

    #[test]
    fn latest_selection_wins() {
        let mut wf = TestWorkflow::new();
        for name in ["a.png", "b.jpg", "c.webp"] {
            wf.select_image(name).unwrap();
        }
        assert_eq!(wf.pending_image(), Some(&"c.webp"));
        assert_eq!(wf.status(), WorkflowStatus::ImageReady);
    }

    #[test]
    fn selection_clears_result_and_notice() {
        let mut wf = TestWorkflow::new();
        wf.select_image("a.png").unwrap();
        let (ticket, _) = wf.begin_submission().unwrap();
        wf.complete_submission(ticket, Ok(eczema()));
        wf.report(WorkflowError::NotAnImage("notes.txt".into()));

        wf.select_image("b.png").unwrap();
        assert!(wf.result().is_none());
        assert!(wf.notice().is_none());
        assert_eq!(wf.status(), WorkflowStatus::ImageReady);
    }

    #[test]
    fn predict_without_image_is_rejected() {
        let mut wf = TestWorkflow::new();
        assert_eq!(wf.begin_submission(), Err(WorkflowError::NoImageSelected));
        assert_eq!(wf.status(), WorkflowStatus::Idle);
        assert_eq!(wf.notice(), Some(&WorkflowError::NoImageSelected));
    }

    #[test]
    fn predict_while_submitting_is_a_no_op() {
        let mut wf = TestWorkflow::new();
        wf.select_image("a.png").unwrap();
        let (first, image) = wf.begin_submission().unwrap();
        assert_eq!(image, "a.png");

        assert_eq!(wf.begin_submission(), Err(WorkflowError::Busy));
        assert_eq!(wf.status(), WorkflowStatus::Submitting);
        assert!(wf.notice().is_none());

        assert!(wf.complete_submission(first, Ok(eczema())));
        assert_eq!(wf.status(), WorkflowStatus::ResultReady);
    }

    #[test]
    fn successful_prediction() {
        let mut wf = TestWorkflow::new();
        wf.select_image("a.png").unwrap();
        let (ticket, _) = wf.begin_submission().unwrap();
        assert!(wf.complete_submission(ticket, Ok(eczema())));
        assert_eq!(wf.status(), WorkflowStatus::ResultReady);
        assert_eq!(wf.result(), Some(&eczema()));
    }

    #[test]
    fn server_error_keeps_pending_image() {
        let mut wf = TestWorkflow::new();
        wf.select_image("a.png").unwrap();
        let (ticket, _) = wf.begin_submission().unwrap();
        let err = SubmissionError::Server {
            status: 500,
            message: "Server error: 500 Internal Server Error".into(),
        };
        assert!(wf.complete_submission(ticket, Err(err.clone())));

        assert_eq!(wf.status(), WorkflowStatus::Failed);
        assert_eq!(wf.notice(), Some(&WorkflowError::SubmissionFailed(err)));
        assert_eq!(wf.pending_image(), Some(&"a.png"));

        // retry without reselecting
        let (retry, image) = wf.begin_submission().unwrap();
        assert_eq!(image, "a.png");
        assert!(wf.notice().is_none());
        assert!(wf.complete_submission(retry, Ok(eczema())));
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut wf = TestWorkflow::new();
        wf.select_image("a.png").unwrap();
        let (first, _) = wf.begin_submission().unwrap();
        assert!(wf.complete_submission(first, Err(SubmissionError::Network("offline".into()))));

        let (second, _) = wf.begin_submission().unwrap();
        assert!(!wf.complete_submission(first, Ok(eczema())));
        assert_eq!(wf.status(), WorkflowStatus::Submitting);
        assert!(wf.complete_submission(second, Ok(eczema())));
        assert!(!wf.complete_submission(second, Ok(eczema())));
    }

    #[test]
    fn selection_during_submission_is_refused() {
        let mut wf = TestWorkflow::new();
        wf.select_image("a.png").unwrap();
        wf.begin_submission().unwrap();
        assert_eq!(wf.select_image("b.png"), Err(WorkflowError::Busy));
        assert_eq!(wf.request_camera(), Err(WorkflowError::Busy));
        assert_eq!(wf.pending_image(), Some(&"a.png"));
    }

    #[test]
    fn camera_grant_then_snapshot() {
        let (mut wf, released) = with_open_camera();
        assert_eq!(wf.status(), WorkflowStatus::CameraActive);
        assert!(!released.get());

        wf.capture_snapshot(|_| Ok::<_, String>("snapshot.jpg")).unwrap();
        assert!(released.get());
        assert!(wf.camera().is_none());
        assert_eq!(wf.status(), WorkflowStatus::ImageReady);
        assert_eq!(wf.pending_image(), Some(&"snapshot.jpg"));
    }

    #[test]
    fn failed_snapshot_still_releases_camera() {
        let (mut wf, released) = with_open_camera();
        let err = wf
            .capture_snapshot(|_| Err::<&'static str, _>("canvas unavailable"))
            .unwrap_err();

        assert!(released.get());
        assert_eq!(
            err,
            WorkflowError::CaptureFailed("canvas unavailable".into())
        );
        assert_eq!(wf.status(), WorkflowStatus::Idle);
        assert!(wf.camera().is_none());
    }

    #[test]
    fn snapshot_sees_the_session_before_release() {
        let (mut wf, released) = with_open_camera();
        wf.capture_snapshot(|cam: &FakeCamera| {
            assert!(!cam.released.get());
            Ok::<_, String>("frame.jpg")
        })
        .unwrap();
        assert!(released.get());
    }

    #[test]
    fn snapshot_without_camera() {
        let mut wf = TestWorkflow::new();
        assert_eq!(
            wf.capture_snapshot(|_| Ok::<_, String>("x.jpg")),
            Err(WorkflowError::CameraClosed)
        );
    }

    #[test]
    fn camera_denied_returns_to_previous_state() {
        let mut wf = TestWorkflow::new();
        let ticket = wf.request_camera().unwrap();
        assert!(wf.camera_denied(ticket, "Permission denied"));
        assert_eq!(wf.status(), WorkflowStatus::Idle);
        assert!(wf.camera().is_none());
        assert_eq!(
            wf.notice(),
            Some(&WorkflowError::CameraDenied("Permission denied".into()))
        );

        wf.select_image("a.png").unwrap();
        let ticket = wf.request_camera().unwrap();
        wf.camera_denied(ticket, "NotFoundError");
        assert_eq!(wf.status(), WorkflowStatus::ImageReady);
        assert_eq!(wf.pending_image(), Some(&"a.png"));
    }

    #[test]
    fn second_camera_request_is_refused() {
        let (mut wf, released) = with_open_camera();
        assert_eq!(wf.request_camera(), Err(WorkflowError::CameraBusy));
        assert!(!released.get());
    }

    #[test]
    fn late_grant_is_released() {
        let mut wf = TestWorkflow::new();
        let ticket = wf.request_camera().unwrap();
        wf.close_camera();
        assert_eq!(wf.status(), WorkflowStatus::Idle);

        let (cam, released) = camera();
        assert!(!wf.camera_granted(ticket, cam));
        assert!(released.get());
        assert!(wf.camera().is_none());
    }

    #[test]
    fn grant_for_superseded_request_is_released() {
        let mut wf = TestWorkflow::new();
        let old = wf.request_camera().unwrap();
        wf.close_camera();
        let current = wf.request_camera().unwrap();

        let (stale_cam, stale_released) = camera();
        assert!(!wf.camera_granted(old, stale_cam));
        assert!(stale_released.get());

        let (cam, released) = camera();
        assert!(wf.camera_granted(current, cam));
        assert!(!released.get());
    }

    #[test]
    fn close_camera_releases_session() {
        let (mut wf, released) = with_open_camera();
        wf.close_camera();
        assert!(released.get());
        assert_eq!(wf.status(), WorkflowStatus::Idle);
    }

    #[test]
    fn file_selection_closes_camera() {
        let (mut wf, released) = with_open_camera();
        wf.select_image("a.png").unwrap();
        assert!(released.get());
        assert_eq!(wf.status(), WorkflowStatus::ImageReady);
    }

    #[test]
    fn dropping_workflow_releases_camera() {
        let (wf, released) = with_open_camera();
        drop(wf);
        assert!(released.get());
    }

    #[test]
    fn predict_with_camera_open_is_refused() {
        let mut wf = TestWorkflow::new();
        wf.select_image("a.png").unwrap();
        let ticket = wf.request_camera().unwrap();
        let (cam, _released) = camera();
        wf.camera_granted(ticket, cam);

        assert_eq!(wf.begin_submission(), Err(WorkflowError::CameraOpen));
        assert_eq!(wf.status(), WorkflowStatus::CameraActive);
    }

    #[test]
    fn camera_request_discards_result() {
        let mut wf = TestWorkflow::new();
        wf.select_image("a.png").unwrap();
        let (ticket, _) = wf.begin_submission().unwrap();
        wf.complete_submission(ticket, Ok(eczema()));

        wf.request_camera().unwrap();
        assert!(wf.result().is_none());
        assert_eq!(wf.status(), WorkflowStatus::AwaitingCameraPermission);
    }

    #[test]
    fn reset_releases_everything() {
        let (mut wf, released) = with_open_camera();
        wf.reset();
        assert!(released.get());
        assert!(wf.pending_image().is_none());
        assert_eq!(wf.status(), WorkflowStatus::Idle);
    }

    #[test]
    fn status_names() {
        assert_eq!(
            WorkflowStatus::AwaitingCameraPermission.to_string(),
            "awaiting-camera-permission"
        );
        assert_eq!(WorkflowStatus::ResultReady.to_string(), "result-ready");
    }

    #[test]
    fn status_attribute_matches_display() {
        for status in [
            WorkflowStatus::Idle,
            WorkflowStatus::CameraActive,
            WorkflowStatus::Submitting,
            WorkflowStatus::Failed,
        ] {
            let name: &'static str = status.into();
            assert_eq!(name, status.to_string());
        }
        assert_eq!(<&'static str>::from(WorkflowStatus::ImageReady), "image-ready");
    }

    #[test]
    fn reset_after_result_starts_over() {
        let mut wf = TestWorkflow::new();
        wf.select_image("a.png").unwrap();
        let (ticket, _) = wf.begin_submission().unwrap();
        wf.complete_submission(ticket, Ok(eczema()));

        wf.reset();
        assert!(wf.result().is_none());
        assert!(wf.notice().is_none());
        assert_eq!(wf.status(), WorkflowStatus::Idle);
        assert!(matches!(
            wf.begin_submission(),
            Err(WorkflowError::NoImageSelected)
        ));
    }
}
