//! Wire schema of the `futurebattlegrounds.Battlegrounds` service.
//!
//! Written in the shape `tonic-build` emits, so no `protoc` is needed at build
//! time. Only the one call this client makes is exposed.

use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Empty {}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Vector {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Ship {
    #[prost(message, optional, tag = "1")]
    pub position: ::core::option::Option<Vector>,
    #[prost(message, optional, tag = "2")]
    pub rotation_vector: ::core::option::Option<Vector>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Bullet {
    #[prost(message, optional, tag = "1")]
    pub position: ::core::option::Option<Vector>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Battleground {
    #[prost(message, repeated, tag = "1")]
    pub ships: ::prost::alloc::vec::Vec<Ship>,
    #[prost(message, repeated, tag = "2")]
    pub bullets: ::prost::alloc::vec::Vec<Bullet>,
}

const STREAM_BATTLEGROUND: &str = "/futurebattlegrounds.Battlegrounds/StreamBattleground";

#[derive(Debug, Clone)]
pub struct BattlegroundsClient {
    inner: tonic::client::Grpc<Channel>,
}

impl BattlegroundsClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn stream_battleground(
        &mut self,
        request: impl tonic::IntoRequest<Empty>,
    ) -> Result<tonic::Response<tonic::Streaming<Battleground>>, tonic::Status> {
        self.inner
            .ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static(STREAM_BATTLEGROUND);
        self.inner
            .server_streaming(request.into_request(), path, codec)
            .await
    }
}
