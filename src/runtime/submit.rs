use crate::account::client::{AccountClient, AccountRecord, CreateAccountRequest, SignInRequest};
use crate::account::error::ApiError;
use crate::form::form::FormKind;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Values snapshotted from a validated form, ready to cross the client
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionRequest {
    SignUp(CreateAccountRequest),
    SignIn(SignInRequest),
}

impl SubmissionRequest {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::SignUp(_) => FormKind::SignUp,
            Self::SignIn(_) => FormKind::SignIn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub kind: FormKind,
    pub result: Result<AccountRecord, ApiError>,
}

/// Runs one submission per worker thread and hands completions back to the
/// event loop over a channel. Draining a completion is the only place the
/// in-flight flag is released, so [`run_submission`] must produce an outcome
/// on every path.
pub struct SubmissionExecutor {
    completion_tx: Sender<SubmissionOutcome>,
    completion_rx: Receiver<SubmissionOutcome>,
}

impl SubmissionExecutor {
    pub fn new() -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<SubmissionOutcome>();
        Self {
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, client: Arc<dyn AccountClient>, request: SubmissionRequest) {
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let outcome = run_submission(client.as_ref(), &request);
            let _ = completion_tx.send(outcome);
        });
    }

    pub fn drain_ready(&self) -> Vec<SubmissionOutcome> {
        let mut out = Vec::<SubmissionOutcome>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(outcome) => out.push(outcome),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

impl Default for SubmissionExecutor {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_submission(client: &dyn AccountClient, request: &SubmissionRequest) -> SubmissionOutcome {
    let kind = request.kind();
    // A panicking client must still settle, or the guard never releases.
    let result = panic::catch_unwind(AssertUnwindSafe(|| call_client(client, request)))
        .unwrap_or_else(|_| Err(ApiError::Unexpected("account client panicked".to_string())));
    SubmissionOutcome { kind, result }
}

fn call_client(
    client: &dyn AccountClient,
    request: &SubmissionRequest,
) -> Result<AccountRecord, ApiError> {
    match request {
        SubmissionRequest::SignUp(request) => client.create_account(request),
        SubmissionRequest::SignIn(request) => client.sign_in(request),
    }
}
