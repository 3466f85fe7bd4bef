use axum::{extract::{Multipart, Query, State}, http::StatusCode, response::{IntoResponse, Response}, Json};
use bytes::BytesMut;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info};
use crate::dto::pagination::PageParams;
use crate::dto::product_dto::{CreateProductRequest, IdQuery, ImageUpload, ProductQuery, ProductResponse, UpdateProductRequest};
use crate::handler::validate_payload;
use crate::repository::product_repo::ProductFilter;
use crate::service::parse_object_id;
use crate::service::product_service::{ProductService, ProductServiceImpl};
use crate::util::error::HandlerError;

/// Product form: a `json` part with the fields and an optional `image` file part
struct ProductForm<T> {
    json: Option<T>,
    image: Option<ImageUpload>,
}

async fn read_product_form<T: DeserializeOwned>(mut multipart: Multipart) -> Result<ProductForm<T>, HandlerError> {
    let mut form = ProductForm { json: None, image: None };

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Error getting next multipart field: {}", e);
        HandlerError::bad_request(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        debug!("Processing multipart field: {}", name);

        match name.as_str() {
            "json" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| HandlerError::bad_request(format!("Failed to read json field: {}", e)))?;
                let parsed = serde_json::from_slice(&data)
                    .map_err(|e| HandlerError::bad_request(format!("Invalid JSON: {}", e)))?;
                form.json = Some(parsed);
            }
            "image" => {
                let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
                let content_type = field.content_type().map(|s| s.to_string()).unwrap_or_default();
                let mut buf = BytesMut::new();
                let mut stream = field;
                while let Some(chunk) = stream
                    .chunk()
                    .await
                    .map_err(|e| HandlerError::bad_request(format!("Failed to read image chunk: {}", e)))?
                {
                    buf.extend_from_slice(&chunk);
                }
                if buf.is_empty() {
                    debug!("Ignoring empty image part");
                    continue;
                }
                info!("Received image: {} ({} bytes)", filename, buf.len());
                form.image = Some(ImageUpload { filename, content_type, content: buf.to_vec() });
            }
            other => debug!("Ignoring unknown multipart field: {}", other),
        }
    }

    Ok(form)
}

/// `GET /api/products` lists; `GET /api/products?id=` returns one product
pub async fn get_products_handler(
    State(service): State<Arc<ProductServiceImpl>>,
    Query(query): Query<ProductQuery>,
) -> Result<Response, HandlerError> {
    if let Some(ref id) = query.id {
        let product = service.get_product(parse_object_id(id, "product")?).await?;
        return Ok(Json(ProductResponse::from(product)).into_response());
    }

    let filter = ProductFilter {
        category: query.category.filter(|c| !c.is_empty()),
        in_stock: query.in_stock,
    };
    let page = service
        .list_products(filter, PageParams::new(query.page, query.limit))
        .await?;
    Ok(Json(page.map(ProductResponse::from)).into_response())
}

// Admin
pub async fn create_product_handler(
    State(service): State<Arc<ProductServiceImpl>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let form = read_product_form::<CreateProductRequest>(multipart).await?;
    let request = form
        .json
        .ok_or_else(|| HandlerError::bad_request("Missing product JSON data"))?;
    validate_payload(&request)?;

    let created = service.create_product(request, form.image).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(created))))
}

pub async fn update_product_handler(
    State(service): State<Arc<ProductServiceImpl>>,
    Query(query): Query<IdQuery>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&query.id, "product")?;
    let form = read_product_form::<UpdateProductRequest>(multipart).await?;
    let request = form.json.unwrap_or_default();
    validate_payload(&request)?;

    let updated = service.update_product(id, request, form.image).await?;
    Ok(Json(ProductResponse::from(updated)))
}

pub async fn delete_product_handler(
    State(service): State<Arc<ProductServiceImpl>>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&query.id, "product")?;
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
