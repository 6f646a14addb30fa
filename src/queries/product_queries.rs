use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{CreateProductRequest, PLACEHOLDER_IMAGE, Product, ProductQuery, UpdateProductRequest},
};

const MAX_PAGE_SIZE: i64 = 100;

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT p.*,
                COALESCE(AVG(r.rating), 0)::float8 AS rating,
                COUNT(r.id)::bigint AS review_count
         FROM products p
         LEFT JOIN reviews r ON r.product_id = p.id
         WHERE p.id = $1
         GROUP BY p.id",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn search_products(pool: &PgPool, params: ProductQuery) -> Result<Vec<Product>> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
        "SELECT p.*,
                COALESCE(AVG(r.rating), 0)::float8 AS rating,
                COUNT(r.id)::bigint AS review_count
         FROM products p
         LEFT JOIN reviews r ON r.product_id = p.id
         WHERE 1=1",
    );

    // free text matches any of title, description, primary category
    if let Some(ref q) = params.query {
        let pattern = format!("%{}%", q);
        query.push(" AND (p.title ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR p.description ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR p.category ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    if let Some(ref category) = params.category {
        query.push(" AND p.category = ");
        query.push_bind(category.clone());
    }

    // inclusive price bounds
    if let Some(price_from) = params.price_from {
        query.push(" AND p.price >= ");
        query.push_bind(price_from);
    }

    if let Some(price_to) = params.price_to {
        query.push(" AND p.price <= ");
        query.push_bind(price_to);
    }

    query.push(" GROUP BY p.id ORDER BY p.created_at DESC");

    if let Some(limit) = params.limit {
        query.push(" LIMIT ");
        query.push_bind(limit.min(MAX_PAGE_SIZE));
    }

    if let Some(offset) = params.offset {
        query.push(" OFFSET ");
        query.push_bind(offset);
    }

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok(products)
}

pub async fn create_product(
    pool: &PgPool,
    seller_id: i32,
    req: &CreateProductRequest,
) -> Result<Product> {
    let image = req
        .images
        .first()
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (title, description, price, currency, image, images,
                               seller, seller_id, category, categories)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING *, 0::float8 AS rating, 0::bigint AS review_count",
    )
    .bind(req.title.trim())
    .bind(req.description.as_deref().filter(|d| !d.trim().is_empty()))
    .bind(req.price)
    .bind(&req.currency)
    .bind(image)
    .bind(&req.images)
    .bind(req.seller.trim())
    .bind(seller_id)
    .bind(&req.categories[0])
    .bind(&req.categories)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn update_product(
    pool: &PgPool,
    id: i32,
    req: &UpdateProductRequest,
) -> Result<Option<Product>> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE products SET ");
    let mut has_fields = false;

    if let Some(ref title) = req.title {
        query_builder.push("title = ");
        query_builder.push_bind(title.trim().to_string());
        has_fields = true;
    }

    if let Some(ref description) = req.description {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("description = ");
        query_builder.push_bind(description.clone());
        has_fields = true;
    }

    if let Some(price) = req.price {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("price = ");
        query_builder.push_bind(price);
        has_fields = true;
    }

    if let Some(ref currency) = req.currency {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("currency = ");
        query_builder.push_bind(currency.clone());
        has_fields = true;
    }

    if let Some(ref image) = req.image {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("image = ");
        query_builder.push_bind(image.clone());
        has_fields = true;
    }

    if let Some(ref images) = req.images {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("images = ");
        query_builder.push_bind(images.clone());
        has_fields = true;
    }

    // updating the category set re-derives the primary category
    if let Some(ref categories) = req.categories {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("category = ");
        query_builder.push_bind(categories[0].clone());
        query_builder.push(", categories = ");
        query_builder.push_bind(categories.clone());
        has_fields = true;
    }

    if let Some(downloads) = req.downloads {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("downloads = ");
        query_builder.push_bind(downloads);
        has_fields = true;
    }

    if !has_fields {
        return find_by_id(pool, id).await;
    }

    query_builder.push(", updated_at = NOW() WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(
        " RETURNING *,
          (SELECT COALESCE(AVG(rating), 0)::float8 FROM reviews
            WHERE product_id = products.id) AS rating,
          (SELECT COUNT(*)::bigint FROM reviews
            WHERE product_id = products.id) AS review_count",
    );

    let product = query_builder
        .build_query_as::<Product>()
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Deletes the product row and returns its stored image references so the
/// caller can clean up object storage. `None` when the product didn't exist.
pub async fn delete_product(pool: &PgPool, id: i32) -> Result<Option<Vec<String>>> {
    let images: Option<Vec<String>> =
        sqlx::query_scalar("DELETE FROM products WHERE id = $1 RETURNING images")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(images)
}
