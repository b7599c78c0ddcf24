//! Product Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, make_record_id};
use crate::db::models::{Product, ProductCreate, ProductUpdate};

const PRODUCT_TABLE: &str = "products";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All products, oldest first
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM products ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Products in one category
    pub async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM products WHERE category = $category ORDER BY created_at")
            .bind(("category", category.to_string()))
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Catalog items flagged as discounted offers
    pub async fn find_offer_products(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM products WHERE is_offer = true ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let rid = make_record_id(PRODUCT_TABLE, id);
        let product: Option<Product> = self.base.db().select(rid).await?;
        Ok(product)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        let products: Vec<Product> = self.base.db().select(PRODUCT_TABLE).await?;
        Ok(products.len())
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        validate(&data)?;

        let now = Utc::now();
        let product = Product {
            id: None,
            name: data.name,
            name_ar: data.name_ar,
            price: data.price,
            category: data.category,
            image: data.image.unwrap_or_default(),
            description: data.description.unwrap_or_default(),
            description_ar: data.description_ar.unwrap_or_default(),
            flavors: data.flavors.unwrap_or_default(),
            in_stock: data.in_stock.unwrap_or(true),
            is_offer: data.is_offer.unwrap_or(false),
            original_price: data.original_price,
            discount_percentage: data.discount_percentage,
            created_at: Some(now),
            updated_at: Some(now),
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product; only the provided fields change
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let rid = make_record_id(PRODUCT_TABLE, id);

        if let Some(name) = &data.name
            && name.trim().is_empty()
        {
            return Err(RepoError::Validation("name must not be empty".into()));
        }
        if let Some(price) = data.price
            && price < 0
        {
            return Err(RepoError::Validation("price must not be negative".into()));
        }

        let mut set_parts: Vec<&str> = vec!["updated_at = $updated_at"];
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.name_ar.is_some() {
            set_parts.push("name_ar = $name_ar");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.category.is_some() {
            set_parts.push("category = $category");
        }
        if data.image.is_some() {
            set_parts.push("image = $image");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.description_ar.is_some() {
            set_parts.push("description_ar = $description_ar");
        }
        if data.flavors.is_some() {
            set_parts.push("flavors = $flavors");
        }
        if data.in_stock.is_some() {
            set_parts.push("in_stock = $in_stock");
        }
        if data.is_offer.is_some() {
            set_parts.push("is_offer = $is_offer");
        }
        if data.original_price.is_some() {
            set_parts.push("original_price = $original_price");
        }
        if data.discount_percentage.is_some() {
            set_parts.push("discount_percentage = $discount_percentage");
        }

        let query_str = format!("UPDATE $rid SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self
            .base
            .db()
            .query(&query_str)
            .bind(("rid", rid))
            .bind(("updated_at", Utc::now()));

        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.name_ar {
            query = query.bind(("name_ar", v));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.category {
            query = query.bind(("category", v));
        }
        if let Some(v) = data.image {
            query = query.bind(("image", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.description_ar {
            query = query.bind(("description_ar", v));
        }
        if let Some(v) = data.flavors {
            query = query.bind(("flavors", v));
        }
        if let Some(v) = data.in_stock {
            query = query.bind(("in_stock", v));
        }
        if let Some(v) = data.is_offer {
            query = query.bind(("is_offer", v));
        }
        if let Some(v) = data.original_price {
            query = query.bind(("original_price", v));
        }
        if let Some(v) = data.discount_percentage {
            query = query.bind(("discount_percentage", v));
        }

        let products: Vec<Product> = query.await?.take(0)?;
        products
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = make_record_id(PRODUCT_TABLE, id);
        let _deleted: Option<Product> = self.base.db().delete(rid).await?;
        Ok(())
    }
}

fn validate(data: &ProductCreate) -> RepoResult<()> {
    if data.name.trim().is_empty() || data.name_ar.trim().is_empty() {
        return Err(RepoError::Validation("name must not be empty".into()));
    }
    if data.category.trim().is_empty() {
        return Err(RepoError::Validation("category must not be empty".into()));
    }
    if data.price < 0 {
        return Err(RepoError::Validation("price must not be negative".into()));
    }
    if let Some(pct) = data.discount_percentage
        && pct > 100
    {
        return Err(RepoError::Validation(
            "discount_percentage must be between 0 and 100".into(),
        ));
    }
    Ok(())
}
