use std::time::Duration;

use super::state::UploadProgress;

/// Number of progress increments reported before an upload is sent.
pub const UPLOAD_PROGRESS_STEPS: u32 = 10;

/// Reports 0.1, 0.2, ... 1.0, pausing `step` after each increment.
pub(crate) async fn report_upload_steps(progress: &UploadProgress, step: Duration) {
    for i in 1..=UPLOAD_PROGRESS_STEPS {
        progress.report(i as f32 / UPLOAD_PROGRESS_STEPS as f32);
        if !step.is_zero() {
            tokio::time::sleep(step).await;
        }
    }
}
