/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/
use crate::constants::DATA_TYPE_MKDIR;
use crate::utils::path::absolute;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Body for the Transfer API `mkdir` operation.
///
/// The API expects a typed document with an absolute path:
/// `{"DATA_TYPE": "mkdir", "path": "/submissions/PRJEB00001"}`.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct MkdirRequest {
    /// Document type discriminator, always `mkdir`
    #[serde(rename = "DATA_TYPE")]
    pub data_type: String,
    /// Absolute path of the directory to create
    pub path: String,
}

impl MkdirRequest {
    /// Creates a mkdir request for the given directory, normalizing the
    /// path to the absolute form the API expects.
    pub fn new(directory: &str) -> Self {
        Self {
            data_type: DATA_TYPE_MKDIR.to_string(),
            path: absolute(directory),
        }
    }
}
