use pharmacy_directory_utils::create_random_secret;
use tracing::{info, warn};

const DEFAULT_PORT: usize = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Api key that must be sent in the `x-api-key` header to
    /// create, update or delete `Pharmacy`s
    pub admin_api_key: String,
    /// Whether the built-in demo pharmacies are listed while the
    /// store does not hold any active `Pharmacy`
    pub demo_data: bool,
}

impl Config {
    pub fn new() -> Self {
        let admin_api_key = match std::env::var("ADMIN_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                info!("Did not find ADMIN_API_KEY environment variable. Going to create one.");
                let key = create_random_secret(16);
                info!("Api key for the admin routes was generated and set to: {}", key);
                key
            }
        };
        let port = match std::env::var("PORT") {
            Ok(port) => parse_port(&port),
            Err(_) => DEFAULT_PORT,
        };
        let demo_data = match std::env::var("PHARMACY_DEMO_DATA") {
            Ok(flag) => parse_flag(&flag),
            Err(_) => true,
        };
        Self {
            port,
            admin_api_key,
            demo_data,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_port(port: &str) -> usize {
    match port.trim().parse::<u16>() {
        Ok(port) => port as usize,
        Err(_) => {
            warn!(
                "The given PORT: {} is not valid, falling back to the default port: {}.",
                port, DEFAULT_PORT
            );
            DEFAULT_PORT
        }
    }
}

fn parse_flag(flag: &str) -> bool {
    !matches!(
        flag.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_falls_back_to_the_default_port() {
        assert_eq!(parse_port("8080"), 8080);
        assert_eq!(parse_port(" 0 "), 0);
        assert_eq!(parse_port("eighty"), DEFAULT_PORT);
        assert_eq!(parse_port("70000"), DEFAULT_PORT);
    }

    #[test]
    fn it_parses_flags() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
    }
}
