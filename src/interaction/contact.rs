use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::schedule::{Scheduler, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("message service unavailable")]
    Unavailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("a message is already being sent")]
    Busy,
    #[error("contact form has been torn down")]
    Closed,
    #[error(transparent)]
    Send(#[from] SendError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Success => "Sent!",
            Self::Error => "Please fill all fields",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Payload handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactFields> for ContactMessage {
    fn from(fields: &ContactFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
        }
    }
}

/// Delivers a contact message somewhere real.
pub trait Transport {
    fn send(&self, message: &ContactMessage) -> Result<(), SendError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTiming {
    pub send_delay: Duration,
    pub reset_delay: Duration,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            send_delay: Duration::from_millis(1500),
            reset_delay: Duration::from_millis(3000),
        }
    }
}

/// Contact form fields plus the submission state machine.
///
/// `H` is the timer handle type of the [`Scheduler`] driving it. At most one
/// timer is outstanding; it is cancelled by the next submit or by
/// [`ContactController::teardown`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContactController<H> {
    fields: ContactFields,
    status: SubmissionStatus,
    timing: ContactTiming,
    pending: Option<H>,
    closed: bool,
}

impl<H> Default for ContactController<H> {
    fn default() -> Self {
        Self::new(ContactTiming::default())
    }
}

impl<H> ContactController<H> {
    pub fn new(timing: ContactTiming) -> Self {
        Self {
            fields: ContactFields::default(),
            status: SubmissionStatus::Idle,
            timing,
            pending: None,
            closed: false,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// The submit control is disabled for the whole send.
    pub fn is_busy(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    pub fn edit(&mut self, field: Field, value: String) {
        if self.closed {
            return;
        }
        *self.fields.slot(field) = value;
    }

    /// Starts the simulated send.
    pub fn submit<S>(&mut self, scheduler: &mut S) -> Result<(), ContactError>
    where
        S: Scheduler<Handle = H>,
    {
        self.begin(scheduler)?;
        let delay = self.timing.send_delay;
        self.schedule(delay, Step::Delivered, scheduler);
        Ok(())
    }

    /// Sends through a real transport instead of the timed simulation.
    pub fn submit_via<T, S>(&mut self, transport: &T, scheduler: &mut S) -> Result<(), ContactError>
    where
        T: Transport + ?Sized,
        S: Scheduler<Handle = H>,
    {
        self.begin(scheduler)?;
        match transport.send(&ContactMessage::from(&self.fields)) {
            Ok(()) => {
                self.deliver(scheduler);
                Ok(())
            }
            Err(err) => {
                log::warn!("contact message failed: {err}");
                self.set_status(SubmissionStatus::Error);
                Err(err.into())
            }
        }
    }

    /// Called by the host when a scheduled timer fires.
    pub fn advance<S>(&mut self, step: Step, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if self.closed {
            return;
        }
        self.pending = None;
        self.apply(step, scheduler);
    }

    /// Cancels any outstanding timer; the controller ignores everything afterwards.
    pub fn teardown<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        self.closed = true;
    }

    fn begin<S>(&mut self, scheduler: &mut S) -> Result<(), ContactError>
    where
        S: Scheduler<Handle = H>,
    {
        if self.closed {
            return Err(ContactError::Closed);
        }
        if self.is_busy() {
            return Err(ContactError::Busy);
        }
        // a leftover reset timer must not clobber the new outcome
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        if let Some(field) = self.fields.first_missing() {
            self.set_status(SubmissionStatus::Error);
            return Err(ContactError::MissingField(field));
        }
        self.set_status(SubmissionStatus::Sending);
        Ok(())
    }

    fn apply<S>(&mut self, step: Step, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        match (step, self.status) {
            (Step::Delivered, SubmissionStatus::Sending) => self.deliver(scheduler),
            (Step::Reset, SubmissionStatus::Success) => self.set_status(SubmissionStatus::Idle),
            (step, status) => log::debug!("ignoring stale {step:?} in {status:?}"),
        }
    }

    fn deliver<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.set_status(SubmissionStatus::Success);
        self.fields.clear();
        let delay = self.timing.reset_delay;
        self.schedule(delay, Step::Reset, scheduler);
    }

    fn schedule<S>(&mut self, delay: Duration, step: Step, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        match scheduler.schedule(delay, step) {
            Some(handle) => self.pending = Some(handle),
            None => {
                log::warn!("could not schedule {step:?}, applying now");
                self.apply(step, scheduler);
            }
        }
    }

    fn set_status(&mut self, status: SubmissionStatus) {
        log::debug!("contact status {:?} -> {:?}", self.status, status);
        self.status = status;
    }
}
