//! Page interaction state, kept free of browser types so it runs on the host.

pub mod contact;
pub mod schedule;
pub mod selection;
pub mod viewport;

pub use contact::{
    ContactController, ContactError, ContactFields, ContactMessage, ContactTiming, Field,
    SendError, SubmissionStatus, Transport,
};
pub use schedule::{Scheduler, Step};
pub use selection::{ModalTarget, SelectionState};
pub use viewport::{
    PointerPosition, SectionId, SectionVisibility, UnknownSection, ViewState,
    VISIBILITY_THRESHOLD,
};
