use log::info;
use tonic::transport::Endpoint;
use tonic::Streaming;

use crate::config::ServerAddress;
use crate::core::proto::{Battleground, BattlegroundsClient, Empty};
use crate::core::receiver::ReceiverError;

/// Connects to the server and opens the battleground stream.
pub async fn open_battleground_stream(
    address: &ServerAddress,
) -> Result<Streaming<Battleground>, ReceiverError> {
    let connect_err = |source| ReceiverError::Connect {
        endpoint: address.to_string(),
        source,
    };

    let channel = Endpoint::from_shared(address.uri())
        .map_err(connect_err)?
        .connect()
        .await
        .map_err(connect_err)?;
    info!("Connected!");

    let mut client = BattlegroundsClient::new(channel);
    let stream = client
        .stream_battleground(Empty {})
        .await
        .map_err(ReceiverError::Open)?
        .into_inner();
    info!("Battleground stream opened");
    Ok(stream)
}
