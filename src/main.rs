use std::env;
use zimage::{logger, models, Config, GenerationRequest, ZImageClient};

const DEFAULT_PROMPT: &str = "A cinematic shot of a futuristic city";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug),
    )?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    log::info!("🔍 Checking API environment...");

    match env::var("ZIMAGE_API_URLS") {
        Ok(raw) => log::info!("ZIMAGE_API_URLS: {}", raw),
        Err(_) => {
            log::warn!("⚠️  ZIMAGE_API_URLS is not set");
            log::error!("❌ This will cause every generation request to fail");
        }
    }

    let config = Config::from_env();
    logger::log_config_info(&config);

    let output_dir = config.output_dir.clone().unwrap_or_else(|| ".".to_string());

    log::info!("🔄 Creating Z-Image client...");
    let client = match ZImageClient::new(config) {
        Ok(client) => {
            log::info!(
                "✅ Client initialized successfully ({} policy, {} nodes)",
                client.policy().as_str(),
                client.endpoints().len()
            );
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize client: {}", e);
            return Err(e.into());
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let prompt = if args.is_empty() {
        DEFAULT_PROMPT.to_string()
    } else {
        args.join(" ")
    };

    let mut request = GenerationRequest::new(&prompt);

    if let Ok(name) = env::var("ZIMAGE_SIZE") {
        match models::find_preset(&name) {
            Some(preset) => {
                request = request.with_size(preset.width, preset.height);
            }
            None => {
                log::warn!("⚠️  Unknown size preset '{}', using defaults", name);
                log::info!("💡 Available presets:");
                for preset in models::PRESET_SIZES {
                    log::info!("   {} - {}x{}", preset.name, preset.width, preset.height);
                }
            }
        }
    }

    if let Some(width) = read_env_u32("ZIMAGE_WIDTH") {
        request.width = Some(width);
    }
    if let Some(height) = read_env_u32("ZIMAGE_HEIGHT") {
        request.height = Some(height);
    }
    if let Some(steps) = read_env_u32("ZIMAGE_STEPS") {
        request.steps = Some(steps);
    }

    let request = request.clamped();

    log::info!("🎨 Generating image...");
    log::info!("📝 Prompt: {}", request.prompt);
    log::info!(
        "📐 Size: {}x{}",
        request.width.unwrap_or(models::DEFAULT_WIDTH),
        request.height.unwrap_or(models::DEFAULT_HEIGHT)
    );
    log::info!("🔢 Steps: {}", request.steps.unwrap_or(models::DEFAULT_STEPS));

    match client.generate(request).await {
        Ok(image) => {
            log::info!("✅ Image generation successful!");
            log::info!("🌐 Node: {}", image.endpoint);
            log::info!("📏 Image data length: {} bytes", image.len());

            match image.save_timestamped(&output_dir) {
                Ok(path) => {
                    log::info!("💾 Image saved to: {}", path.display());
                }
                Err(e) => {
                    log::error!("❌ Failed to save image: {}", e);
                    return Err(e.into());
                }
            }
        }
        Err(e) => {
            log::error!("❌ Image generation failed: {}", e);
            log::warn!("💡 Check that your API nodes are reachable and try again");
            return Err(e.into());
        }
    }

    Ok(())
}

fn read_env_u32(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|val| val.parse().ok())
}
