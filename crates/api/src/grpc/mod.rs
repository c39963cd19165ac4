//! gRPC adapter over the product repository.

mod product_service;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use catalog_db::models::product::Product;
use catalog_db::repositories::Repository;
use tonic::transport::Server;

pub use product_service::ProductGrpcService;

/// Code generated from `proto/catalog.proto`.
pub mod proto {
    tonic::include_proto!("catalog.v1");
}

/// Serve `catalog.v1.ProductService` on `addr` until `shutdown` resolves.
pub async fn serve(
    addr: SocketAddr,
    products: Arc<dyn Repository<Product>>,
    shutdown: impl Future<Output = ()>,
) -> Result<(), tonic::transport::Error> {
    let service = proto::product_service_server::ProductServiceServer::new(
        ProductGrpcService::new(products),
    );

    tracing::info!(%addr, "Starting gRPC server");
    Server::builder()
        .add_service(service)
        .serve_with_shutdown(addr, shutdown)
        .await
}
