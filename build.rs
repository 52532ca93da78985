use std::env;
use std::fs;
use std::path::Path;

// Claves que src/config.rs lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL",
    "TOKEN_STORAGE_KEY",
    "SESSION_STORAGE_KEY",
    "BANNER_TIMEOUT_MS",
    "ENABLE_LOGGING",
];

fn main() {
    let env_file = Path::new(".env");

    if let Ok(contents) = fs::read_to_string(env_file) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // KEY=VALUE, con o sin comillas
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                if !CONFIG_KEYS.contains(&key) {
                    println!("cargo:warning=Ignoring unknown key {} in .env", key);
                    continue;
                }
                // El entorno real tiene prioridad sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");
}
