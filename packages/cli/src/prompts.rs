// ABOUTME: Helpers for interactive prompts
// ABOUTME: Treats Esc and Ctrl-C as "go back" instead of a fatal error

use inquire::InquireError;

/// Map a cancelled or interrupted prompt to `None`; other errors pass through
pub fn cancelled_as_none<T>(result: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e),
    }
}
