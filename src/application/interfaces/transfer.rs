/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::FileListResponse;
use async_trait::async_trait;

/// Operations for provisioning and inspecting submission directories on a
/// Globus endpoint
#[async_trait]
pub trait TransferService: Send + Sync {
    /// Creates the full directory chain for a submission path.
    ///
    /// Each cumulative prefix of `directory` is checked with an `ls` call
    /// and created with `mkdir` when missing, one segment at a time. A
    /// `mkdir` the API rejects is logged and skipped; the remaining
    /// segments are still attempted.
    ///
    /// # Arguments
    /// * `directory` - Directory path relative to the endpoint root,
    ///   e.g. `submissions/PRJEB00001/inbox`
    async fn create_submission_directory(&self, directory: &str) -> Result<(), AppError>;

    /// Checks whether a directory exists on the endpoint.
    ///
    /// A listing that the API rejects with a client error counts as
    /// "does not exist"; server errors propagate.
    async fn directory_exists(&self, directory: &str) -> Result<bool, AppError>;

    /// Lists the files in a submission directory and returns the raw JSON
    /// body the Transfer API answered with.
    ///
    /// A non-2xx answer is logged and mapped to an empty string.
    async fn list_submitted_files(&self, directory: &str) -> Result<String, AppError>;

    /// Lists a directory as a typed [`FileListResponse`].
    ///
    /// Unlike [`list_submitted_files`](Self::list_submitted_files), API
    /// errors propagate to the caller.
    async fn list_directory(&self, directory: &str) -> Result<FileListResponse, AppError>;
}
