fn main() {
    for (source, exported) in [
        ("TARGET", "UIMSG_BUILD_TARGET"),
        ("PROFILE", "UIMSG_BUILD_PROFILE"),
    ] {
        if let Ok(value) = std::env::var(source) {
            println!("cargo:rustc-env={exported}={value}");
        }
        println!("cargo:rerun-if-env-changed={source}");
    }
}
