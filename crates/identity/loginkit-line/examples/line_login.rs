//! Example showing how to wire the LINE strategy into a host application
//!
//! This example demonstrates:
//! 1. Building the LINE channel configuration
//! 2. Inspecting the settings handed to the OAuth2 engine
//! 3. Fetching and normalizing a user profile once a token is available

use loginkit_line::{LineConfig, LineStrategy, LoginStrategy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = LineConfig::new(
        std::env::var("LINE_CHANNEL_ID").unwrap_or_else(|_| "your-channel-id".to_string()),
        std::env::var("LINE_CHANNEL_SECRET")
            .unwrap_or_else(|_| "your-channel-secret".to_string()),
        "http://localhost:3000/auth/line/callback",
    );

    let strategy = LineStrategy::new(config)?;
    let settings = strategy.settings();

    println!("LINE Login Example");
    println!("==================");
    println!("Provider:               {}", strategy.name());
    println!("Authorization endpoint: {}", settings.authorization_endpoint);
    println!("Token endpoint:         {}", settings.token_endpoint);
    println!("Profile endpoint:       {}", settings.profile_endpoint);
    println!();
    println!("In a real application, the OAuth2 engine would:");
    println!("1. Redirect the user to the authorization endpoint");
    println!("2. Exchange the callback code at the token endpoint");
    println!("3. Hand the access token to the strategy for the profile fetch");

    // With a real token in hand the profile fetch runs end to end
    match std::env::var("LINE_ACCESS_TOKEN") {
        Ok(token) => match strategy.user_profile(&token).await {
            Ok(profile) => {
                println!("\nFetched profile:");
                println!("  id:             {:?}", profile.id);
                println!("  display name:   {:?}", profile.display_name);
                println!("  picture url:    {:?}", profile.picture_url);
                println!("  status message: {:?}", profile.status_message);
            }
            Err(e) => println!("\nProfile fetch failed: {}", e),
        },
        Err(_) => {
            println!("\nSet LINE_ACCESS_TOKEN to fetch a real profile");
        }
    }

    Ok(())
}
