//! Sign-in / sign-up page state

use crate::gateway::{AuthFailure, AuthGateway, AuthMode};
use crate::graphql::GraphqlTransport;
use crate::types::{Credentials, User};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(AuthFailure),
}

impl FormPhase {
    fn after(result: &Result<User, AuthFailure>) -> Self {
        match result {
            Ok(_) => FormPhase::Succeeded,
            Err(failure) => FormPhase::Failed(failure.clone()),
        }
    }
}

/// Resets a still-`Submitting` phase when a submission is cancelled
struct InFlight<'a> {
    phase: &'a mut FormPhase,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.phase == FormPhase::Submitting {
            *self.phase = FormPhase::Idle;
        }
    }
}

/// Field values plus where the current request stands
///
/// Field edits are never gated; a failed form keeps what the user typed.
#[derive(Debug, Clone)]
pub struct AuthForm {
    mode: AuthMode,
    credentials: Credentials,
    phase: FormPhase,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            credentials: Credentials::default(),
            phase: FormPhase::Idle,
        }
    }

    pub fn sign_in() -> Self {
        Self::new(AuthMode::SignIn)
    }

    pub fn sign_up() -> Self {
        Self::new(AuthMode::SignUp)
    }

    pub fn email(&self) -> &str {
        &self.credentials.email
    }

    pub fn password(&self) -> &str {
        &self.credentials.password
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    /// Enter `Submitting` and hand out the credentials to send
    ///
    /// Returns `None` while a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.phase == FormPhase::Submitting {
            return None;
        }
        self.phase = FormPhase::Submitting;
        Some(self.credentials.clone())
    }

    pub fn finish(&mut self, result: &Result<User, AuthFailure>) {
        self.phase = FormPhase::after(result);
    }

    /// Abandon an attempt started with [`begin_submit`](Self::begin_submit)
    /// whose result will never arrive
    pub fn reset(&mut self) {
        self.phase = FormPhase::Idle;
    }

    /// Message to show under the form, if the last attempt failed
    pub fn error_message(&self) -> Option<String> {
        match &self.phase {
            FormPhase::Failed(failure) => Some(failure.to_string()),
            _ => None,
        }
    }

    /// Run one submission through `gateway`
    ///
    /// `None` if a submission was already running. Dropping the future
    /// before it completes puts the form back to `Idle`.
    pub async fn submit<T>(&mut self, gateway: &AuthGateway<T>) -> Option<Result<User, AuthFailure>>
    where
        T: GraphqlTransport + Sync,
    {
        let credentials = self.begin_submit()?;
        let in_flight = InFlight {
            phase: &mut self.phase,
        };
        let result = gateway.submit(self.mode, &credentials).await;
        *in_flight.phase = FormPhase::after(&result);
        Some(result)
    }
}
