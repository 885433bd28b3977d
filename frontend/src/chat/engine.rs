use chrono::{DateTime, Utc};
use log::{info, warn};
use thiserror::Error;

use super::lead::{LeadAction, LeadData, LeadField, LeadStore, Navigate, StoredLead};
use super::steps::{default_steps, Step, StepKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Rendered as a row of option buttons instead of a bubble.
    pub is_options: bool,
    /// Rendered with the two terminal action buttons.
    pub is_action: bool,
    pub options: Vec<&'static str>,
}

impl Message {
    fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            timestamp: Utc::now(),
            is_options: false,
            is_action: false,
            options: Vec::new(),
        }
    }

    fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            ..Self::bot(text)
        }
    }

    fn options(text: impl Into<String>, options: &'static [&'static str]) -> Self {
        Self {
            is_options: true,
            options: options.to_vec(),
            ..Self::bot(text)
        }
    }

    fn action(text: impl Into<String>) -> Self {
        Self {
            is_action: true,
            ..Self::bot(text)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Closed,
    Welcome,
    AwaitingChoice(usize),
    AwaitingInput(usize),
    Confirmation,
    PostActionNavigating,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    #[error("the conversation is not open")]
    Closed,
    #[error("still waiting for the previous reply")]
    Typing,
    #[error("the current step does not take a choice")]
    NotAwaitingChoice,
    #[error("the current step does not take free text")]
    NotAwaitingInput,
    #[error("'{0}' is not one of the offered options")]
    UnknownOption(String),
    #[error("please type an answer")]
    EmptyInput,
    #[error("the conversation has not reached the confirmation")]
    NotConfirming,
    #[error("the chat was closed after this was scheduled")]
    StaleSession,
}

/// Linear lead-capture conversation.
///
/// The cursor walks the authored steps in order; reaching the end of the
/// step list is what moves the conversation into the confirmation. Answers
/// are recorded immediately, the next prompt is only appended once
/// [`ConversationEngine::deliver_pending`] runs, which the widget calls after
/// its typing pause.
///
/// Every close bumps the session number. Delayed work carries the session it
/// was scheduled in and is ignored once that session is over.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEngine {
    steps: Vec<Step>,
    cursor: usize,
    session: u64,
    open: bool,
    pending: bool,
    finished: Option<LeadAction>,
    record: LeadData,
    transcript: Vec<Message>,
}

impl Default for ConversationEngine {
    fn default() -> Self {
        Self::new(default_steps())
    }
}

impl ConversationEngine {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            cursor: 0,
            session: 0,
            open: false,
            pending: false,
            finished: None,
            record: LeadData::default(),
            transcript: Vec::new(),
        }
    }

    pub fn state(&self) -> ConversationState {
        if !self.open {
            return ConversationState::Closed;
        }
        if self.finished.is_some() {
            return ConversationState::PostActionNavigating;
        }
        match self.steps.get(self.cursor).map(|s| s.kind) {
            None | Some(StepKind::Confirmation) => ConversationState::Confirmation,
            Some(StepKind::Welcome) => ConversationState::Welcome,
            Some(StepKind::Choice) => ConversationState::AwaitingChoice(self.cursor),
            Some(StepKind::Input) => ConversationState::AwaitingInput(self.cursor),
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_typing(&self) -> bool {
        self.pending
    }

    #[cfg(test)]
    pub fn record(&self) -> &LeadData {
        &self.record
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn current_step(&self) -> Option<&Step> {
        if self.open && self.finished.is_none() {
            self.steps.get(self.cursor)
        } else {
            None
        }
    }

    /// Index of the one options message that still takes a click: the latest
    /// one, and only while a choice is awaited.
    pub fn active_options(&self) -> Option<usize> {
        if self.pending || !matches!(self.state(), ConversationState::Welcome | ConversationState::AwaitingChoice(_)) {
            return None;
        }
        self.transcript.iter().rposition(|m| m.is_options)
    }

    pub fn awaiting_action(&self) -> bool {
        self.state() == ConversationState::Confirmation
    }

    /// First choice step after the welcome, whose options double as the
    /// quick-start buttons.
    fn quick_start_step(&self) -> Option<usize> {
        self.steps
            .iter()
            .enumerate()
            .skip(self.cursor + 1)
            .find(|(_, s)| s.kind == StepKind::Choice)
            .map(|(i, _)| i)
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.cursor = 0;

        let Some((prompt, kind, options)) = self.steps.first().map(|s| (s.prompt, s.kind, s.options)) else {
            return;
        };
        self.transcript.push(Message::bot(prompt));

        if kind == StepKind::Welcome {
            if let Some(idx) = self.quick_start_step() {
                let options = self.steps[idx].options;
                self.transcript.push(Message::options("Quick start: pick a service", options));
            }
        } else if !options.is_empty() {
            self.transcript.push(Message::options("", options));
        }
        info!("Chat opened");
    }

    fn ready(&self) -> Result<(), ConversationError> {
        if !self.open {
            return Err(ConversationError::Closed);
        }
        if self.pending {
            return Err(ConversationError::Typing);
        }
        Ok(())
    }

    fn record_answer(&mut self, field: Option<LeadField>, answer: String) {
        if let Some(field) = field {
            self.record.set(field, answer.clone());
        }
        self.transcript.push(Message::user(answer));
        self.pending = true;
    }

    pub fn select_option(&mut self, option: &str) -> Result<(), ConversationError> {
        self.ready()?;
        let idx = match self.state() {
            ConversationState::AwaitingChoice(idx) => idx,
            ConversationState::Welcome => self
                .quick_start_step()
                .ok_or(ConversationError::NotAwaitingChoice)?,
            _ => return Err(ConversationError::NotAwaitingChoice),
        };

        let step = &self.steps[idx];
        let chosen = step
            .options
            .iter()
            .find(|o| **o == option)
            .ok_or_else(|| ConversationError::UnknownOption(option.to_string()))?;
        let field = step.field;
        let chosen = chosen.to_string();

        self.cursor = idx;
        self.record_answer(field, chosen);
        Ok(())
    }

    pub fn submit_input(&mut self, text: &str) -> Result<(), ConversationError> {
        self.ready()?;
        let ConversationState::AwaitingInput(idx) = self.state() else {
            return Err(ConversationError::NotAwaitingInput);
        };
        let text = text.trim();
        if text.is_empty() {
            return Err(ConversationError::EmptyInput);
        }
        let field = self.steps[idx].field;
        self.record_answer(field, text.to_string());
        Ok(())
    }

    /// Append the next prompt after an answer. Returns `false` when nothing
    /// was waiting or `session` has ended, e.g. because the chat was closed
    /// during the pause.
    pub fn deliver_pending(&mut self, session: u64) -> bool {
        if session != self.session || !self.open || !self.pending {
            return false;
        }
        self.pending = false;
        self.cursor += 1;

        match self.steps.get(self.cursor) {
            Some(step) if step.kind == StepKind::Choice => {
                self.transcript.push(Message::options(step.prompt, step.options));
            }
            Some(step) if step.kind == StepKind::Confirmation => {
                self.cursor = self.steps.len();
                self.confirm();
            }
            Some(step) => {
                self.transcript.push(Message::bot(step.prompt));
            }
            None => self.confirm(),
        }
        true
    }

    fn confirm(&mut self) {
        let greeting = match self.record.get(LeadField::Name) {
            Some(name) => format!("Thank you, {}! Here's a summary of your details:", name),
            None => "Thank you! Here's a summary of your details:".to_string(),
        };
        let lines: Vec<String> = [
            LeadField::Name,
            LeadField::BusinessType,
            LeadField::Phone,
            LeadField::Service,
            LeadField::Location,
        ]
        .iter()
        .map(|f| format!("{}: {}", f.label(), self.record.get(*f).unwrap_or("Not provided")))
        .chain(self.record.get(LeadField::Email).map(|email| format!("{}: {}", LeadField::Email.label(), email)))
        .collect();

        self.transcript.push(Message::bot(format!("{}\n{}", greeting, lines.join("\n"))));
        self.transcript.push(Message::action("How would you like to proceed?"));
        info!("Chat reached confirmation");
    }

    /// Store the lead for `action` and say goodbye. The returned path is where
    /// the visitor goes once [`ConversationEngine::hand_off`] runs.
    pub fn finish<S: LeadStore + ?Sized>(
        &mut self,
        action: LeadAction,
        store: &S,
    ) -> Result<&'static str, ConversationError> {
        if self.state() != ConversationState::Confirmation {
            return Err(ConversationError::NotConfirming);
        }

        let stored = StoredLead {
            lead: self.record.clone(),
            timestamp: Utc::now(),
            action,
        };
        if let Err(e) = store.save(&stored) {
            warn!("Could not store lead: {}", e);
        }

        self.transcript.push(Message::bot(action.closing_message()));
        self.finished = Some(action);
        Ok(action.destination())
    }

    /// Close the chat and send the visitor on after a terminal action.
    pub fn hand_off<N: Navigate + ?Sized>(
        &mut self,
        session: u64,
        navigator: &N,
    ) -> Result<(), ConversationError> {
        if session != self.session {
            return Err(ConversationError::StaleSession);
        }
        let Some(action) = self.finished else {
            return Err(ConversationError::NotConfirming);
        };
        self.reset();
        navigator.navigate(action.destination());
        Ok(())
    }

    /// Visitor closed the widget. Nothing collected so far is kept.
    pub fn close(&mut self) {
        if self.record.is_empty() {
            info!("Chat closed at step {}", self.cursor);
        } else {
            info!("Chat closed at step {}, discarding partial lead", self.cursor);
        }
        self.reset();
    }

    pub fn reset(&mut self) {
        self.session = self.session.wrapping_add(1);
        self.cursor = 0;
        self.open = false;
        self.pending = false;
        self.finished = None;
        self.record = LeadData::default();
        self.transcript.clear();
    }
}
