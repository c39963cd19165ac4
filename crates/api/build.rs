// Compiles `proto/catalog.proto` with a pure-Rust protobuf parser so the
// build does not depend on a system `protoc`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/catalog.proto");

    let file_descriptors = protox::compile(["proto/catalog.proto"], ["proto"])?;
    tonic_build::configure()
        .build_client(false)
        .compile_fds(file_descriptors)?;
    Ok(())
}
