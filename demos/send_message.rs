use std::io;

use messagebird::{MessageBirdConfig, MessagingService, Recipient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = MessageBirdConfig::from_env()?;
    let phone_raw = std::env::var("MESSAGEBIRD_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MESSAGEBIRD_RECIPIENT environment variable is required",
        )
    })?;
    let body = std::env::var("MESSAGEBIRD_BODY")
        .unwrap_or_else(|_| "Hello from the messagebird demo.".to_owned());

    let service = MessagingService::from_config(&config)?;
    let recipient = Recipient::new(phone_raw)?;

    match service.send_text(recipient, body).await? {
        Some(result) => println!(
            "delivery status: {}, success: {}, errors: {:?}",
            result.delivery_status(),
            result.is_success(),
            result.errors_as_string()
        ),
        None => println!("message was not sent; see the log output for details"),
    }

    Ok(())
}
