use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::image::fetcher::ImageUpload;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::{PageRequest, ProductFilter};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductForm, ProductListResponse, ProductResponse, UpdateProductRequest,
};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}

fn invalid_price() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_price".to_string(),
    })
}

fn admin_required() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "Forbidden".to_string(),
        message: "auth.admin_required".to_string(),
    })
}

/// Product catalog API
///
/// Public listing and lookup, admin-gated catalog management.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns one page of the catalog, newest first, optionally filtered
    /// by a case-insensitive name search and an exact category.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
        search: Query<Option<String>>,
        category: Query<Option<String>>,
    ) -> ListProductsResponse {
        let request = match PageRequest::new(
            page.0.unwrap_or(1),
            limit.0.unwrap_or(PageRequest::DEFAULT_PAGE_SIZE),
        ) {
            Ok(request) => request,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return ListProductsResponse::BadRequest(json);
            }
        };

        let filter = ProductFilter {
            search: search.0.filter(|s| !s.trim().is_empty()),
            category: category.0.filter(|c| !c.trim().is_empty()),
        };

        match self
            .list_use_case
            .execute(ListProductsParams { request, filter })
            .await
        {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListProductsResponse::BadRequest(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetProductByIdResponse::BadRequest(invalid_id()),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Admin only. Accepts a multipart form; every attached image is
    /// uploaded to the remote store before the product is persisted with
    /// the returned locators. A form without images is rejected.
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: BearerAuth,
        form: CreateProductForm,
    ) -> CreateProductResponse {
        if !auth.0.is_admin {
            return CreateProductResponse::Forbidden(admin_required());
        }

        let price = match form.price.parse::<BigDecimal>() {
            Ok(price) => price,
            Err(_) => return CreateProductResponse::BadRequest(invalid_price()),
        };

        let mut images = Vec::with_capacity(form.images.len());
        for upload in form.images {
            let file_name = upload.file_name().map(|n| n.to_string());
            let content_type = upload.content_type().map(|c| c.to_string());
            let bytes = match upload.into_vec().await {
                Ok(bytes) => bytes,
                Err(_) => {
                    return CreateProductResponse::BadRequest(Json(ErrorResponse {
                        name: "ValidationError".to_string(),
                        message: "product.unreadable_image".to_string(),
                    }));
                }
            };
            images.push(ImageUpload {
                file_name,
                content_type,
                bytes,
            });
        }

        let params = CreateProductParams {
            name: form.name,
            description: form.description.unwrap_or_default(),
            price,
            stock: form.stock,
            category: form.category,
            brand: form.brand,
            images,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Admin only. Replaces the editable fields; image locators are kept
    /// as they are.
    #[oai(path = "/api/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        if !auth.0.is_admin {
            return UpdateProductResponse::Forbidden(admin_required());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateProductResponse::BadRequest(invalid_id()),
        };

        let price = match body.0.price.parse::<BigDecimal>() {
            Ok(price) => price,
            Err(_) => return UpdateProductResponse::BadRequest(invalid_price()),
        };

        let params = UpdateProductParams {
            id: uuid,
            name: body.0.name,
            description: body.0.description.unwrap_or_default(),
            price,
            stock: body.0.stock,
            category: body.0.category,
            brand: body.0.brand,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Admin only. Permanently removes the product from the catalog.
    #[oai(path = "/api/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: BearerAuth, id: Path<String>) -> DeleteProductResponse {
        if !auth.0.is_admin {
            return DeleteProductResponse::Forbidden(admin_required());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteProductResponse::BadRequest(invalid_id()),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
