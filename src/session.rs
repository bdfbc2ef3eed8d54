use crate::error::SessionError;
use crate::models::AttendanceSnapshot;

/// Login lifecycle. Replaces a bare busy flag with explicit states so that a
/// second submission while one is in flight is rejected rather than racing.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginState {
    Idle,
    Pending,
    Succeeded(AttendanceSnapshot),
    Failed(String),
}

#[derive(Debug)]
pub struct Session {
    state: LoginState,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: LoginState::Idle,
        }
    }

    /// Start a login attempt. At most one request is in flight; a previous
    /// outcome (success or failure) may be replaced by a fresh attempt.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        if matches!(self.state, LoginState::Pending) {
            return Err(SessionError::LoginInFlight);
        }
        self.state = LoginState::Pending;
        Ok(())
    }

    pub fn complete(&mut self, snapshot: AttendanceSnapshot) {
        self.state = LoginState::Succeeded(snapshot);
    }

    pub fn fail(&mut self, message: String) {
        self.state = LoginState::Failed(message);
    }

    /// Drop the snapshot. Any view still open must treat the missing data as
    /// "re-authenticate", never as zero attendance.
    pub fn logout(&mut self) {
        self.state = LoginState::Idle;
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&AttendanceSnapshot> {
        match &self.state {
            LoginState::Succeeded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LoginState::Pending)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
