//! API endpoints, defaults and header names

/// Voice API base URL for the sandbox environment
pub const SANDBOX_BASE_URL: &str = "https://voice.sandbox.africastalking.com/";

/// Voice API base URL for live traffic
pub const PRODUCTION_BASE_URL: &str = "https://voice.africastalking.com/";

/// Username that always targets the sandbox
pub const SANDBOX_USERNAME: &str = "sandbox";

/// Endpoint paths, relative to the base URL
pub const ENDPOINT_CALL: &str = "call";
pub const ENDPOINT_MEDIA_UPLOAD: &str = "mediaUpload";
pub const ENDPOINT_QUEUE_STATUS: &str = "queueStatus";

/// Header names
pub const HEADER_API_KEY: &str = "apikey";
pub const HEADER_ACCEPT: &str = "Accept";

/// Header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Environment variable names read by `VoiceConfig::from_env`
pub const ENV_USERNAME: &str = "AT_USERNAME";
pub const ENV_API_KEY: &str = "AT_API_KEY";
pub const ENV_ENVIRONMENT: &str = "AT_ENVIRONMENT";

/// Request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Voice used by `Say` when none is given
pub const DEFAULT_VOICE: &str = "man";

/// Rendering of a `true` boolean attribute
pub const BOOL_TRUE: &str = "1";

/// Format hint included in phone-number errors
pub const PHONE_FORMAT_HINT: &str = "'+2XXYYYYYYYYY'";
