//! Remote operations: typed requests for the `call`, `mediaUpload` and
//! `queueStatus` endpoints.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::constants::*;
use crate::error::{VoiceError, VoiceResult};
use crate::options::{options_from_arg, ActionOptions, OptionReader};
use crate::transport::RequestPayload;
use crate::validation::{is_phone_number, is_valid_url};

const MISSING_CALL_PARTIES: &str = "The parameters to and from must be defined";
const MISSING_MEDIA_NUMBER: &str = "Phone number must be defined";
const MISSING_MEDIA_URL: &str = "url must be defined";
const INVALID_MEDIA_URL: &str = "URL not valid";

fn phone_format_error(field: &str) -> VoiceError {
    VoiceError::validation(format!(
        "{} must be in the format {}",
        field, PHONE_FORMAT_HINT
    ))
}

/// Names of the remote operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Call,
    UploadMediaFile,
    FetchQueuedCalls,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Call,
        OperationKind::UploadMediaFile,
        OperationKind::FetchQueuedCalls,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Call => "call",
            OperationKind::UploadMediaFile => "uploadMediaFile",
            OperationKind::FetchQueuedCalls => "fetchQueuedCalls",
        }
    }

    /// Endpoint path relative to the API base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            OperationKind::Call => ENDPOINT_CALL,
            OperationKind::UploadMediaFile => ENDPOINT_MEDIA_UPLOAD,
            OperationKind::FetchQueuedCalls => ENDPOINT_QUEUE_STATUS,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .iter()
            .find(|kind| {
                kind.as_str()
                    .eq_ignore_ascii_case(s)
            })
            .copied()
            .ok_or_else(|| VoiceError::invalid_method(s))
    }
}

/// Place an outbound call from one of the account's numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    pub to: String,
    pub from: String,
}

impl CallRequest {
    pub fn new(to: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
        }
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if self.to.is_empty() || self.from.is_empty() {
            return Err(VoiceError::validation(MISSING_CALL_PARTIES));
        }
        if !is_phone_number(&self.to) {
            return Err(phone_format_error("callTo"));
        }
        if !is_phone_number(&self.from) {
            return Err(phone_format_error("callFrom"));
        }
        Ok(())
    }
}

impl TryFrom<&ActionOptions> for CallRequest {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let reader = OptionReader::new(options);
        match (reader.text("to"), reader.text("from")) {
            (Some(to), Some(from)) => Ok(CallRequest::new(to, from)),
            _ => Err(VoiceError::validation(MISSING_CALL_PARTIES)),
        }
    }
}

/// Upload an audio file to be cached against one of the account's numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpload {
    pub phone_number: String,
    pub url: String,
}

impl MediaUpload {
    pub fn new(phone_number: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            url: url.into(),
        }
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if self.phone_number.is_empty() {
            return Err(VoiceError::validation(MISSING_MEDIA_NUMBER));
        }
        if !is_phone_number(&self.phone_number) {
            return Err(phone_format_error("Phone number"));
        }
        if self.url.is_empty() {
            return Err(VoiceError::validation(MISSING_MEDIA_URL));
        }
        if !is_valid_url(&self.url) {
            return Err(VoiceError::validation(INVALID_MEDIA_URL));
        }
        Ok(())
    }
}

impl TryFrom<&ActionOptions> for MediaUpload {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let reader = OptionReader::new(options);
        let phone_number = reader.required_text("phoneNumber", MISSING_MEDIA_NUMBER)?;
        let url = reader.required_text("url", MISSING_MEDIA_URL)?;
        Ok(MediaUpload::new(phone_number, url))
    }
}

/// Look up how many calls are waiting in the queues of a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedCallsQuery {
    pub phone_number: String,
}

impl QueuedCallsQuery {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if self.phone_number.is_empty() {
            return Err(VoiceError::validation(format!(
                "Phone number is required and must be in the format {}",
                PHONE_FORMAT_HINT
            )));
        }
        if !is_phone_number(&self.phone_number) {
            return Err(phone_format_error("Phone number"));
        }
        Ok(())
    }
}

impl TryFrom<&ActionOptions> for QueuedCallsQuery {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let phone_number = OptionReader::new(options)
            .text("phoneNumber")
            .unwrap_or_default();
        Ok(QueuedCallsQuery::new(phone_number))
    }
}

/// One remote operation with its typed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceOperation {
    Call(CallRequest),
    UploadMediaFile(MediaUpload),
    FetchQueuedCalls(QueuedCallsQuery),
}

impl VoiceOperation {
    /// Build the operation named by `kind` from its single dispatcher argument.
    ///
    /// `fetchQueuedCalls` also accepts the phone number as a bare string.
    pub fn from_arg(kind: OperationKind, arg: &Value) -> VoiceResult<Self> {
        Ok(match kind {
            OperationKind::Call => {
                VoiceOperation::Call((&options_from_arg(arg, None)).try_into()?)
            }
            OperationKind::UploadMediaFile => {
                VoiceOperation::UploadMediaFile((&options_from_arg(arg, None)).try_into()?)
            }
            OperationKind::FetchQueuedCalls => VoiceOperation::FetchQueuedCalls(
                (&options_from_arg(arg, Some("phoneNumber"))).try_into()?,
            ),
        })
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            VoiceOperation::Call(_) => OperationKind::Call,
            VoiceOperation::UploadMediaFile(_) => OperationKind::UploadMediaFile,
            VoiceOperation::FetchQueuedCalls(_) => OperationKind::FetchQueuedCalls,
        }
    }

    pub fn validate(&self) -> VoiceResult<()> {
        match self {
            VoiceOperation::Call(r) => r.validate(),
            VoiceOperation::UploadMediaFile(r) => r.validate(),
            VoiceOperation::FetchQueuedCalls(r) => r.validate(),
        }
    }

    /// Form fields for the request, stamped with `username`
    pub fn payload(&self, username: &str) -> RequestPayload {
        let payload = RequestPayload::new(username);
        match self {
            VoiceOperation::Call(r) => payload
                .field("to", r.to.as_str())
                .field("from", r.from.as_str()),
            VoiceOperation::UploadMediaFile(r) => payload
                .field("phoneNumber", r.phone_number.as_str())
                .field("url", r.url.as_str()),
            VoiceOperation::FetchQueuedCalls(r) => {
                payload.field("phoneNumbers", r.phone_number.as_str())
            }
        }
    }
}

/// One dialled leg in a `call` reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CallEntry {
    pub phone_number: String,
    pub status: String,
    pub session_id: String,
}

/// Body of a `call` reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CallResponse {
    pub entries: Vec<CallEntry>,
    pub error_message: String,
}

/// One queue in a `queueStatus` reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueueEntry {
    pub phone_number: String,
    pub queue_name: String,
    pub num_calls: u32,
}

/// Body of a `queueStatus` reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueuedCallsResponse {
    pub entries: Vec<QueueEntry>,
    pub status: String,
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_from_str() {
        assert_eq!(
            "fetchqueuedcalls"
                .parse::<OperationKind>()
                .unwrap(),
            OperationKind::FetchQueuedCalls
        );
        assert_eq!(OperationKind::UploadMediaFile.endpoint(), "mediaUpload");
        assert!("say"
            .parse::<OperationKind>()
            .is_err());
    }

    #[test]
    fn call_requires_both_parties() {
        let err = VoiceOperation::from_arg(OperationKind::Call, &json!({"to": "+254700000000"}))
            .unwrap_err();
        assert_eq!(err.to_string(), MISSING_CALL_PARTIES);

        let err = VoiceOperation::from_arg(OperationKind::Call, &json!("")).unwrap_err();
        assert_eq!(err.to_string(), MISSING_CALL_PARTIES);
    }

    #[test]
    fn call_numbers_need_plus() {
        let err = CallRequest::new("254700000000", "+254711111111")
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "callTo must be in the format '+2XXYYYYYYYYY'"
        );
        let err = CallRequest::new("+254700000000", "254711111111")
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "callFrom must be in the format '+2XXYYYYYYYYY'"
        );
    }

    #[test]
    fn call_payload() {
        let op = VoiceOperation::Call(CallRequest::new("+254700000000", "+254711111111"));
        let payload = op.payload("sandbox");
        assert_eq!(payload.get("username"), Some("sandbox"));
        assert_eq!(payload.get("to"), Some("+254700000000"));
        assert_eq!(payload.get("from"), Some("+254711111111"));
    }

    #[test]
    fn media_upload_checks() {
        let err = MediaUpload::try_from(json!({"url": "https://x.io/a.mp3"}).as_object().unwrap())
            .unwrap_err();
        assert_eq!(err.to_string(), MISSING_MEDIA_NUMBER);

        let err = MediaUpload::try_from(json!({"phoneNumber": "+254700000000"}).as_object().unwrap())
            .unwrap_err();
        assert_eq!(err.to_string(), MISSING_MEDIA_URL);

        let err = MediaUpload::new("+254700000000", "a.mp3")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), INVALID_MEDIA_URL);
    }

    #[test]
    fn queued_calls_accepts_bare_string() {
        let op = VoiceOperation::from_arg(OperationKind::FetchQueuedCalls, &json!("+254700000000"))
            .unwrap();
        assert!(op
            .validate()
            .is_ok());
        assert_eq!(
            op.payload("sandbox")
                .get("phoneNumbers"),
            Some("+254700000000")
        );
    }

    #[test]
    fn queued_calls_empty_number() {
        let op = VoiceOperation::from_arg(OperationKind::FetchQueuedCalls, &json!("")).unwrap();
        assert_eq!(
            op.validate()
                .unwrap_err()
                .to_string(),
            "Phone number is required and must be in the format '+2XXYYYYYYYYY'"
        );
    }

    #[test]
    fn call_response_deserializes() {
        let body = r#"{"entries":[{"phoneNumber":"+254711082000","status":"Queued","sessionId":"ATVId_abc"}],"errorMessage":"None"}"#;
        let response: CallResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.entries.len(), 1);
        assert_eq!(response.entries[0].session_id, "ATVId_abc");
        assert_eq!(response.error_message, "None");
    }

    #[test]
    fn queued_calls_response_deserializes() {
        let body = r#"{"entries":[{"phoneNumber":"+254711082000","queueName":"support","numCalls":3}],"status":"Success","errorMessage":"None"}"#;
        let response: QueuedCallsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.entries[0].num_calls, 3);
        assert_eq!(response.status, "Success");
    }
}
