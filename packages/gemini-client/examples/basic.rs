//! Basic Gemini client usage example

use gemini_client::{GeminiClient, GenerateContentRequest, GenerationConfig, DEFAULT_MODEL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = GeminiClient::from_env()?;

    // Simple prompt
    println!("=== Generate Text ===");
    let text = client
        .generate_text(DEFAULT_MODEL, "What is Rust in one sentence?")
        .await?;
    println!("Response: {}", text);

    // JSON output with explicit config
    println!("\n=== JSON Output ===");
    let request = GenerateContentRequest::from_prompt(
        "Return a JSON array of three primary colors as strings.",
    )
    .generation_config(GenerationConfig {
        temperature: Some(0.2),
        response_mime_type: Some("application/json".into()),
        ..Default::default()
    });
    let response = client.generate_content(DEFAULT_MODEL, &request).await?;
    println!("Response: {}", response.text().unwrap_or_default());

    if let Some(usage) = response.usage_metadata {
        println!("Tokens used: {}", usage.total_token_count);
    }

    Ok(())
}
