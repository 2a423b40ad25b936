use zimage::{Config, GenerationRequest, ZImageClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    zimage::logger::init()?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }

    let client = ZImageClient::new(Config::from_env())?;

    let request = GenerationRequest::new(
        "A serene landscape with mountains and a lake at sunset, digital art style",
    )
    .with_size(1024, 1024)
    .with_steps(4);

    let path = client.generate_and_save(request, ".").await?;
    println!("{}", path.display());

    Ok(())
}
