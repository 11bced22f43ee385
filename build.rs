fn main() {
    // Stamp the build date into the binary for the version report
    let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    println!("cargo:rustc-env=BUILD_DATE={stamp}");
}
