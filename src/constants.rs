/// User agent string used in HTTP requests to identify this client to the Globus APIs
pub const USER_AGENT: &str = "globus-client/0.1.0";
/// Default base URL for the Globus Transfer REST API
pub const DEFAULT_TRANSFER_BASE_URL: &str = "https://transfer.api.globus.org/v0.10";
/// Default token endpoint for Globus Auth
pub const DEFAULT_AUTH_TOKEN_URL: &str = "https://auth.globus.org/v2/oauth2/token";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;
/// Safety margin in seconds before token expiry at which a refresh is triggered.
/// Globus transfer tokens live for 48 hours, so five minutes is comfortable.
pub const DEFAULT_TOKEN_REFRESH_MARGIN_SECS: u64 = 300;
/// Wire value for the Transfer API mkdir document type
pub const DATA_TYPE_MKDIR: &str = "mkdir";
/// Wire value for the Transfer API file list document type
pub const DATA_TYPE_FILE_LIST: &str = "file_list";
