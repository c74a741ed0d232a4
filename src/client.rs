//! Voice API client: remote operations and the method dispatcher.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::VoiceConfig;
use crate::dispatch::{Dispatched, VoiceMethod};
use crate::error::VoiceResult;
use crate::operations::{CallRequest, MediaUpload, QueuedCallsQuery, VoiceOperation};
use crate::options::options_from_arg;
use crate::session::VoiceSession;
use crate::transport::{ApiResponse, HttpTransport, Transport};

/// Client for one Voice API account.
///
/// Generic over its [`Transport`]; [`VoiceClient::new`] wires up the
/// `reqwest`-backed [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct VoiceClient<T = HttpTransport> {
    username: String,
    transport: T,
}

impl VoiceClient<HttpTransport> {
    pub fn new(config: VoiceConfig) -> VoiceResult<Self> {
        let transport = HttpTransport::new(&config)?;
        info!(
            "Voice client ready for {} ({})",
            config.username,
            config.effective_environment()
        );
        Ok(Self {
            username: config.username,
            transport,
        })
    }

    /// Build a client from `AT_USERNAME`, `AT_API_KEY` and `AT_ENVIRONMENT`
    pub fn from_env() -> VoiceResult<Self> {
        Self::new(VoiceConfig::from_env()?)
    }
}

impl<T: Transport> VoiceClient<T> {
    pub fn with_transport(username: impl Into<String>, transport: T) -> Self {
        Self {
            username: username.into(),
            transport,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Start composing a new call flow for this account
    pub fn session(&self) -> VoiceSession {
        VoiceSession::new(self.username.as_str())
    }

    /// Place a call between two numbers
    pub async fn call(&self, request: CallRequest) -> VoiceResult<ApiResponse> {
        self.execute(VoiceOperation::Call(request))
            .await
    }

    /// Upload an audio file for a number
    pub async fn upload_media_file(&self, request: MediaUpload) -> VoiceResult<ApiResponse> {
        self.execute(VoiceOperation::UploadMediaFile(request))
            .await
    }

    /// Fetch the queue status of a number
    pub async fn fetch_queued_calls(
        &self,
        phone_number: impl Into<String>,
    ) -> VoiceResult<ApiResponse> {
        self.execute(VoiceOperation::FetchQueuedCalls(QueuedCallsQuery::new(
            phone_number,
        )))
        .await
    }

    /// Validate and send one operation. Nothing is sent if validation fails.
    pub async fn execute(&self, operation: VoiceOperation) -> VoiceResult<ApiResponse> {
        let kind = operation.kind();
        if let Err(e) = operation.validate() {
            warn!("Rejected {} request: {}", kind, e);
            return Err(e);
        }

        let payload = operation.payload(&self.username);
        debug!("Sending {} request to {}", kind, kind.endpoint());
        let response = self
            .transport
            .post(kind.endpoint(), &payload)
            .await?;
        debug!("{} succeeded with status {}", kind, response.status());
        Ok(response)
    }

    /// Route a method call by name.
    ///
    /// Markup actions are appended to `session`; remote operations are sent
    /// through the transport. Only the first argument is used. A remote
    /// operation called without arguments receives `""`.
    pub async fn dispatch(
        &self,
        session: &mut VoiceSession,
        name: &str,
        args: &[Value],
    ) -> VoiceResult<Dispatched> {
        let method = match name.parse::<VoiceMethod>() {
            Ok(method) => method,
            Err(e) => {
                warn!("{}", e);
                return Err(e);
            }
        };

        match method {
            VoiceMethod::Action(kind) => {
                let options = args
                    .first()
                    .map(|arg| options_from_arg(arg, kind.shorthand_key()))
                    .unwrap_or_default();
                session.apply(kind, &options)?;
                Ok(Dispatched::Markup {
                    fragments: session.len(),
                })
            }
            VoiceMethod::Operation(kind) => {
                let empty = Value::String(String::new());
                let arg = args
                    .first()
                    .unwrap_or(&empty);
                let operation = VoiceOperation::from_arg(kind, arg)?;
                let response = self
                    .execute(operation)
                    .await?;
                Ok(Dispatched::Response(response))
            }
        }
    }
}
