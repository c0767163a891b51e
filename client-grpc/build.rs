//! Regenerates `src/gobgpapi.rs` from `proto/gobgp.proto`.
//!
//! The generated file is checked in so regular builds don't need `protoc`.
//! Set `PROTO_REGEN=1` after editing the proto file to refresh it.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-env-changed=PROTO_REGEN");
    if std::env::var_os("PROTO_REGEN").is_none() {
        return Ok(());
    }

    let proto_dir = "../proto";
    println!("cargo:rerun-if-changed={}", proto_dir);

    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .out_dir("src/")
        .compile(&[format!("{}/gobgp.proto", proto_dir)], &[proto_dir])?;

    Ok(())
}
