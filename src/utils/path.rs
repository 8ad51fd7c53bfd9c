/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/

//! Path segmentation helpers for directory provisioning.
//!
//! Remote directories are created one segment at a time, so a requested
//! path is expanded into the chain of prefixes that must each exist.

/// Expands a directory path into its chain of cumulative prefixes.
///
/// Empty segments are skipped, so leading, trailing and duplicate
/// separators are tolerated. The returned prefixes are relative; callers
/// decide how to anchor them on the remote endpoint.
///
/// # Example
///
/// ```
/// use globus_client::utils::path::cumulative_prefixes;
///
/// let prefixes = cumulative_prefixes("submissions/PRJEB00001/inbox");
/// assert_eq!(
///     prefixes,
///     vec!["submissions", "submissions/PRJEB00001", "submissions/PRJEB00001/inbox"]
/// );
/// ```
pub fn cumulative_prefixes(path: &str) -> Vec<String> {
    let mut prefixes = Vec::new();
    let mut so_far = String::new();

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if !so_far.is_empty() {
            so_far.push('/');
        }
        so_far.push_str(segment);
        prefixes.push(so_far.clone());
    }

    prefixes
}

/// Normalizes a directory path to the absolute form the Transfer API
/// expects (`/a/b`). The root itself normalizes to `/`.
pub fn absolute(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}
