//! gRPC client implementation

use gobgp_client_grpc::prelude::*;

/// Example gobgp-client-grpc
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let host = std::env::var("GOBGP_HOST").unwrap_or_else(|_| String::from("localhost"));
    let port = std::env::var("GOBGP_PORT_GRPC")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(50051);

    let connection = GrpcClient::new_client(&host, port, "gobgp", TransportSecurity::None)?;
    println!("Connection created");
    println!(
        "NOTE: Ensure gobgpd is running on {} or this example will fail.",
        connection.get_address()
    );

    let mut client = GobgpApiClient::new(connection.channel());
    let peers = client.list_peers().await?;

    println!("RESPONSE={:?}", peers);

    Ok(())
}
