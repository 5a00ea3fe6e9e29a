//! Presenters: per-screen state holders driving the repositories.
//!
//! Every presenter exposes its list (where it has one) plus an
//! [`OperationState`] with loading, error, last-result and upload-progress
//! cells. Mutating actions complete the whole state transition before
//! returning.

mod account;
mod event_management;
mod list;
mod schedule;
mod schedule_management;
mod speaker_management;
mod state;
mod upload;

pub use account::AccountPresenter;
pub use event_management::{EventDraft, EventManagementPresenter};
pub use list::ListState;
pub use schedule::SchedulePresenter;
pub use schedule_management::ScheduleManagementPresenter;
pub use speaker_management::SpeakerManagementPresenter;
pub use state::{LoadingGuard, OperationResult, OperationState, UploadProgress};
pub use upload::UPLOAD_PROGRESS_STEPS;
