//! Bakes the backend base URLs into the binary.
//!
//! The browser has no process environment, so `API_URL` and `UPLOADS_URL` are
//! resolved at compile time: first from the build environment, then from a
//! `.env` file in the workspace (loaded with `dotenvy`).

const KEYS: [&str; 2] = ["API_URL", "UPLOADS_URL"];

fn main() {
    dotenvy::dotenv().ok();

    for key in KEYS {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
