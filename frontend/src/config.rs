/// Where predictions are posted. Set `URTICASCAN_PREDICT_URL` at build time
/// to talk to an inference service directly instead of through the host.
pub const PREDICT_ENDPOINT: &str = match option_env!("URTICASCAN_PREDICT_URL") {
    Some(url) => url,
    None => "/predict/",
};

/// Period of the team ring animation timer.
pub const FRAME_INTERVAL_MS: u32 = 16;
