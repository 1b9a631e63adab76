use crate::runtime::submit::SubmissionRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a validated submission to the executor.
    Submit(SubmissionRequest),
    RequestRender,
}
