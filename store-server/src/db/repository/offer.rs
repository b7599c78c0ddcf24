//! Offer Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, make_record_id};
use crate::db::models::{Offer, OfferCreate, OfferUpdate};

const OFFER_TABLE: &str = "offers";

#[derive(Clone)]
pub struct OfferRepository {
    base: BaseRepository,
}

impl OfferRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All offers, newest first (back-office listing)
    pub async fn find_all(&self) -> RepoResult<Vec<Offer>> {
        let offers: Vec<Offer> = self
            .base
            .db()
            .query("SELECT * FROM offers ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(offers)
    }

    /// Offers that are active and not yet expired
    pub async fn find_live(&self) -> RepoResult<Vec<Offer>> {
        let offers: Vec<Offer> = self
            .base
            .db()
            .query("SELECT * FROM offers WHERE is_active = true ORDER BY created_at DESC")
            .await?
            .take(0)?;
        let now = Utc::now();
        Ok(offers.into_iter().filter(|o| o.is_live(now)).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Offer>> {
        let rid = make_record_id(OFFER_TABLE, id);
        let offer: Option<Offer> = self.base.db().select(rid).await?;
        Ok(offer)
    }

    /// Create a new offer
    pub async fn create(&self, data: OfferCreate) -> RepoResult<Offer> {
        if data.title.trim().is_empty() || data.title_ar.trim().is_empty() {
            return Err(RepoError::Validation("title must not be empty".into()));
        }
        if data.discount_percentage > 100 {
            return Err(RepoError::Validation(
                "discount_percentage must be between 0 and 100".into(),
            ));
        }

        let offer = Offer {
            id: None,
            title: data.title,
            title_ar: data.title_ar,
            description: data.description.unwrap_or_default(),
            description_ar: data.description_ar.unwrap_or_default(),
            discount_percentage: data.discount_percentage,
            product_ids: data.product_ids.unwrap_or_default(),
            price: data.price,
            image_url: data.image_url,
            is_active: data.is_active.unwrap_or(true),
            valid_until: data.valid_until,
            created_at: Some(Utc::now()),
        };

        let created: Option<Offer> = self.base.db().create(OFFER_TABLE).content(offer).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create offer".to_string()))
    }

    /// Update an offer; only the provided fields change
    pub async fn update(&self, id: &str, data: OfferUpdate) -> RepoResult<Offer> {
        let rid = make_record_id(OFFER_TABLE, id);

        if let Some(pct) = data.discount_percentage
            && pct > 100
        {
            return Err(RepoError::Validation(
                "discount_percentage must be between 0 and 100".into(),
            ));
        }

        let mut set_parts: Vec<&str> = Vec::new();
        if data.title.is_some() {
            set_parts.push("title = $title");
        }
        if data.title_ar.is_some() {
            set_parts.push("title_ar = $title_ar");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.description_ar.is_some() {
            set_parts.push("description_ar = $description_ar");
        }
        if data.discount_percentage.is_some() {
            set_parts.push("discount_percentage = $discount_percentage");
        }
        if data.product_ids.is_some() {
            set_parts.push("product_ids = $product_ids");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.image_url.is_some() {
            set_parts.push("image_url = $image_url");
        }
        if data.is_active.is_some() {
            set_parts.push("is_active = $is_active");
        }
        if data.valid_until.is_some() {
            set_parts.push("valid_until = $valid_until");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Offer {} not found", id)));
        }

        let query_str = format!("UPDATE $rid SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self.base.db().query(&query_str).bind(("rid", rid));

        if let Some(v) = data.title {
            query = query.bind(("title", v));
        }
        if let Some(v) = data.title_ar {
            query = query.bind(("title_ar", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.description_ar {
            query = query.bind(("description_ar", v));
        }
        if let Some(v) = data.discount_percentage {
            query = query.bind(("discount_percentage", v));
        }
        if let Some(v) = data.product_ids {
            query = query.bind(("product_ids", v));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.image_url {
            query = query.bind(("image_url", v));
        }
        if let Some(v) = data.is_active {
            query = query.bind(("is_active", v));
        }
        if let Some(v) = data.valid_until {
            query = query.bind(("valid_until", v));
        }

        let offers: Vec<Offer> = query.await?.take(0)?;
        offers
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Offer {} not found", id)))
    }

    /// Hard delete an offer
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = make_record_id(OFFER_TABLE, id);
        let _deleted: Option<Offer> = self.base.db().delete(rid).await?;
        Ok(())
    }
}
