fn main() {
    println!("cargo:rerun-if-changed=sdkconfig.defaults");

    if std::env::var("ESP_IDF_SDKCONFIG_DEFAULTS").is_err() {
        eprintln!("WARNING: ESP_IDF_SDKCONFIG_DEFAULTS not set, using ESP-IDF defaults");
        eprintln!(
            "Build with: export ESP_IDF_SDKCONFIG_DEFAULTS=crates/boilerboard-firmware/sdkconfig.defaults"
        );
    }

    embuild::espidf::sysenv::output();
}
