use std::env;

use axum::http::HeaderValue;

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";

pub struct Config {
    pub port: u16,
    pub allowed_origin: HeaderValue,
    pub seed_demo_assets: bool,
}

impl Config {
    /// Reads the environment, falling back to `default_port` when `PORT` is unset.
    pub fn from_env(default_port: u16) -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => default_port,
        };

        let origin = env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin = HeaderValue::from_str(&origin)
            .map_err(|_| anyhow::anyhow!("Invalid ALLOWED_ORIGIN value: {}", origin))?;

        let seed_demo_assets = match env::var("SEED_DEMO_ASSETS") {
            Ok(raw) => parse_flag(&raw)?,
            Err(_) => true,
        };

        Ok(Config {
            port,
            allowed_origin,
            seed_demo_assets,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| anyhow::anyhow!("Invalid PORT value: {}", raw))
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow::anyhow!("Invalid SEED_DEMO_ASSETS value: {}", raw)),
    }
}
