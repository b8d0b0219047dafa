// Generates the filter protobuf types into OUT_DIR.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let protoc = protoc_bin_vendored::protoc_bin_path()?;
    // SAFETY: build scripts run single threaded.
    unsafe { std::env::set_var("PROTOC", protoc) };

    prost_build::Config::new().compile_protos(&["proto/filters.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/filters.proto");
    Ok(())
}
