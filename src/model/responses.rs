/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A single entry in a Transfer API directory listing
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Document type discriminator, always `file`
    #[serde(rename = "DATA_TYPE")]
    pub data_type: String,
    /// Entry name, without its parent path
    pub name: String,
    /// Entry type: `dir`, `file`, `link` or `chr_special`
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Size in bytes
    pub size: u64,
    /// Last modification time as reported by the endpoint
    pub last_modified: String,
    /// POSIX permission string (e.g. `0755`)
    pub permissions: String,
    /// Owning user as known to the endpoint
    #[serde(default)]
    pub user: Option<String>,
    /// Owning group as known to the endpoint
    #[serde(default)]
    pub group: Option<String>,
    /// Target of a symbolic link entry
    #[serde(default)]
    pub link_target: Option<String>,
}

impl FileEntry {
    /// Whether this entry is a directory
    pub fn is_dir(&self) -> bool {
        self.entry_type == "dir"
    }
}

/// Response from the Transfer API `ls` operation
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct FileListResponse {
    /// Document type discriminator, always `file_list`
    #[serde(rename = "DATA_TYPE")]
    pub data_type: String,
    /// Endpoint the listing was taken from
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Absolute path that was listed
    pub path: String,
    /// The entries in the listed directory
    #[serde(rename = "DATA")]
    pub entries: Vec<FileEntry>,
}

impl FileListResponse {
    /// Names of the directories contained in the listing
    pub fn directory_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.is_dir())
            .map(|e| e.name.as_str())
            .collect()
    }
}

/// Result document returned by the Transfer API `mkdir` operation
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct MkdirResponse {
    /// Document type discriminator, always `mkdir_result`
    #[serde(rename = "DATA_TYPE")]
    pub data_type: String,
    /// Result code (e.g. `DirectoryCreated`)
    pub code: String,
    /// Human-readable result message
    pub message: String,
    /// Request id assigned by the API, useful when contacting support
    pub request_id: String,
    /// Resource the operation was performed against
    #[serde(default)]
    pub resource: Option<String>,
}

/// Error envelope the Transfer API wraps non-2xx answers in
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct TransferApiMessage {
    /// Machine-readable error code (e.g. `EndpointNotFound`)
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request id assigned by the API
    #[serde(default)]
    pub request_id: Option<String>,
}
