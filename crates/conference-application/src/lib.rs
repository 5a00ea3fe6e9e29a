//! Application layer for the conference core.
//!
//! Presenters translate repository results into observable UI state; the
//! schedule use case is the read-only query surface used by attendee views.

pub mod presenter;
pub mod schedule_usecase;

pub use presenter::{
    AccountPresenter, EventDraft, EventManagementPresenter, OperationResult, OperationState,
    ScheduleManagementPresenter, SchedulePresenter, SpeakerManagementPresenter,
};
pub use schedule_usecase::GetScheduleUseCase;
