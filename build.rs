use chrono::Datelike;

const EMAILJS_VARS: [&str; 3] = [
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
];

fn main() {
    let now = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // EmailJS identifiers are public by design; they're baked into the WASM bundle.
    // Missing values become empty strings so `env!` always resolves.
    for var in EMAILJS_VARS {
        let value = std::env::var(var).unwrap_or_default();
        println!("cargo:rustc-env={var}={value}");
        println!("cargo:rerun-if-env-changed={var}");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
