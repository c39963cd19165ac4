//! `catalog.v1.ProductService` implementation.

use std::sync::Arc;

use catalog_core::error::CoreError;
use catalog_core::patch::Patch;
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, Product, UpdateProduct};
use catalog_db::models::ValidateInput;
use catalog_db::repositories::Repository;
use tonic::{Request, Response, Status};

use super::proto::product_service_server::ProductService;
use super::proto::{
    CreateProductRequest, DeleteProductRequest, DeleteResponse, GetAllProductsRequest,
    GetProductRequest, ProductListResponse, ProductResponse, UpdateProductRequest,
};

pub struct ProductGrpcService {
    products: Arc<dyn Repository<Product>>,
}

impl ProductGrpcService {
    pub fn new(products: Arc<dyn Repository<Product>>) -> Self {
        Self { products }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

impl From<CreateProductRequest> for CreateProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            description: request.description,
        }
    }
}

/// Build the patch from presence markers, never from zero values.
fn update_from_request(request: UpdateProductRequest) -> Result<(DbId, UpdateProduct), Status> {
    let description = match (request.clear_description, request.description) {
        (true, Some(_)) => {
            return Err(Status::invalid_argument(
                "description and clear_description are mutually exclusive",
            ))
        }
        (true, None) => Patch::Set(None),
        (false, description) => Patch::from(description.map(Some)),
    };

    let patch = UpdateProduct {
        name: Patch::from(request.name),
        price: Patch::from(request.price),
        description,
    };
    Ok((request.id, patch))
}

fn not_found(id: DbId) -> Status {
    Status::not_found(format!("Product with id {id} not found"))
}

fn core_status(err: CoreError) -> Status {
    match err {
        CoreError::NotFound { entity, id } => {
            Status::not_found(format!("{entity} with id {id} not found"))
        }
        CoreError::Validation(msg) => Status::invalid_argument(msg),
    }
}

fn storage_status(err: sqlx::Error) -> Status {
    tracing::error!(error = %err, "Database error");
    Status::internal("An internal error occurred")
}

#[tonic::async_trait]
impl ProductService for ProductGrpcService {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<ProductResponse>, Status> {
        let input = CreateProduct::from(request.into_inner());
        input.validate_input().map_err(core_status)?;

        let product = self.products.create(&input).await.map_err(storage_status)?;
        tracing::info!(id = product.id, "Product created via gRPC");
        Ok(Response::new(product.into()))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<ProductResponse>, Status> {
        let id = request.into_inner().id;
        let product = self
            .products
            .get_by_id(id)
            .await
            .map_err(storage_status)?
            .ok_or_else(|| not_found(id))?;
        Ok(Response::new(product.into()))
    }

    async fn get_all_products(
        &self,
        _request: Request<GetAllProductsRequest>,
    ) -> Result<Response<ProductListResponse>, Status> {
        let products = self.products.get_all().await.map_err(storage_status)?;
        Ok(Response::new(ProductListResponse {
            products: products.into_iter().map(ProductResponse::from).collect(),
        }))
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<ProductResponse>, Status> {
        let (id, patch) = update_from_request(request.into_inner())?;
        patch.validate_input().map_err(core_status)?;

        let product = self
            .products
            .update(id, &patch)
            .await
            .map_err(storage_status)?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, "Product updated via gRPC");
        Ok(Response::new(product.into()))
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let id = request.into_inner().id;
        if !self.products.delete(id).await.map_err(storage_status)? {
            return Err(not_found(id));
        }
        tracing::info!(id, "Product deleted via gRPC");
        Ok(Response::new(DeleteResponse { success: true }))
    }
}
