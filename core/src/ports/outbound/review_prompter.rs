use localconnect_common::error::DirectoryResult;
use localconnect_common::models::business::Business;

/// Operator interaction needed while leaving a review.
pub trait ReviewPrompter {
    /// Presents the matching businesses and returns the index of the one
    /// the operator accepts, or `None` to cancel.
    ///
    /// Called with one or more candidates, never with none.
    fn choose(&mut self, candidates: &[Business]) -> DirectoryResult<Option<usize>>;

    /// Raw rating text as typed; validation happens in the workflow.
    fn rating(&mut self) -> DirectoryResult<String>;

    fn comment(&mut self) -> DirectoryResult<String>;
}
