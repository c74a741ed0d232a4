//! Example call flow
//!
//! Builds an IVR menu, prints the XML, and optionally places a call when
//! AT_USERNAME and AT_API_KEY are set.
//!
//! Usage: cargo run --example compose_flow [to] [from]

use africastalking_voice::{
    ActionKind, CallRequest, CallResponse, GetDigits, Say, VoiceClient, VoiceError, VoiceSession,
};
use serde_json::json;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut session = VoiceSession::new("sandbox");
    session
        .say(Say::new("Welcome to the support line").voice("woman"))?
        .get_digits(
            GetDigits::new("Press 1 for billing, 2 for sales")
                .num_digits(1)
                .timeout(10)
                .finish_on_key("#")
                .callback_url("https://example.com/voice/menu"),
        )?;

    // Invalid actions are reported and leave the flow intact
    let dial = json!({"phoneNumbers": "0711082000"});
    if let Some(options) = dial.as_object() {
        if let Err(e) = session.apply(ActionKind::Dial, options) {
            warn!("Skipped dial: {}", e);
        }
    }

    println!("{}", session.build().unwrap_or_default());

    let args: Vec<String> = std::env::args().collect();
    let (Some(to), Some(from)) = (args.get(1), args.get(2)) else {
        info!("No numbers given, not placing a call");
        return Ok(());
    };

    let client = match VoiceClient::from_env() {
        Ok(client) => client,
        Err(VoiceError::Config { message }) => {
            error!("Cannot place a call: {}", message);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let response = client
        .call(CallRequest::new(to.as_str(), from.as_str()))
        .await?;
    let parsed: CallResponse = response.json()?;
    for entry in parsed.entries {
        info!("{} -> {} ({})", entry.phone_number, entry.status, entry.session_id);
    }

    Ok(())
}
