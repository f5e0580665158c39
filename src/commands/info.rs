use anyhow::Result;
use shopify_admin::config::credentials::CredentialsFile;
use shopify_admin::config::mask;

use crate::output::print_key_value;

pub fn run() -> Result<()> {
    let binary = std::env::current_exe()
        .map_or_else(|_| "-".to_string(), |path| path.display().to_string());
    let config = CredentialsFile::default_location()
        .map_or_else(|_| "-".to_string(), |file| file.path().display().to_string());

    print_key_value(&[
        ("Version", env!("CARGO_PKG_VERSION").to_string()),
        ("Binary", binary),
        (
            "Platform",
            format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        ),
        ("Config", config),
        ("SHOPIFY_SHOP", env_display("SHOPIFY_SHOP", false)),
        ("SHOPIFY_ACCESS_TOKEN", env_display("SHOPIFY_ACCESS_TOKEN", true)),
    ])
}

fn env_display(name: &str, secret: bool) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => {
            if secret {
                mask(&value)
            } else {
                value
            }
        }
        _ => "(not set)".to_string(),
    }
}
