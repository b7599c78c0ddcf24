//! Coupon Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, make_record_id};
use crate::db::models::{Coupon, CouponCreate, CouponUpdate};

const COUPON_TABLE: &str = "coupons";

#[derive(Clone)]
pub struct CouponRepository {
    base: BaseRepository,
}

impl CouponRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Coupon>> {
        let coupons: Vec<Coupon> = self
            .base
            .db()
            .query("SELECT * FROM coupons ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(coupons)
    }

    /// Look up an active coupon by code, case-insensitively
    pub async fn find_active_by_code(&self, code: &str) -> RepoResult<Option<Coupon>> {
        let coupons: Vec<Coupon> = self
            .base
            .db()
            .query(
                "SELECT * FROM coupons \
                 WHERE is_active = true AND string::lowercase(code) = $code",
            )
            .bind(("code", code.trim().to_lowercase()))
            .await?
            .take(0)?;
        Ok(coupons.into_iter().next())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Coupon>> {
        let rid = make_record_id(COUPON_TABLE, id);
        let coupon: Option<Coupon> = self.base.db().select(rid).await?;
        Ok(coupon)
    }

    /// Create a new coupon; codes are unique case-insensitively
    pub async fn create(&self, data: CouponCreate) -> RepoResult<Coupon> {
        let code = data.code.trim().to_string();
        if code.is_empty() {
            return Err(RepoError::Validation("code must not be empty".into()));
        }
        if data.discount_percentage < 1 || data.discount_percentage > 100 {
            return Err(RepoError::Validation(
                "discount_percentage must be between 1 and 100".into(),
            ));
        }
        if self.code_exists(&code, None).await? {
            return Err(RepoError::Duplicate(format!("Coupon code {}", code)));
        }

        let now = Utc::now();
        let coupon = Coupon {
            id: None,
            code,
            discount_percentage: data.discount_percentage,
            is_active: data.is_active.unwrap_or(true),
            created_at: Some(now),
            updated_at: Some(now),
        };

        let created: Option<Coupon> = self.base.db().create(COUPON_TABLE).content(coupon).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create coupon".to_string()))
    }

    /// Update a coupon; only the provided fields change
    pub async fn update(&self, id: &str, data: CouponUpdate) -> RepoResult<Coupon> {
        let rid = make_record_id(COUPON_TABLE, id);

        if let Some(pct) = data.discount_percentage
            && !(1..=100).contains(&pct)
        {
            return Err(RepoError::Validation(
                "discount_percentage must be between 1 and 100".into(),
            ));
        }
        let code = match data.code {
            Some(code) => {
                let code = code.trim().to_string();
                if code.is_empty() {
                    return Err(RepoError::Validation("code must not be empty".into()));
                }
                if self.code_exists(&code, Some(id)).await? {
                    return Err(RepoError::Duplicate(format!("Coupon code {}", code)));
                }
                Some(code)
            }
            None => None,
        };

        let mut set_parts: Vec<&str> = vec!["updated_at = $updated_at"];
        if code.is_some() {
            set_parts.push("code = $code");
        }
        if data.discount_percentage.is_some() {
            set_parts.push("discount_percentage = $discount_percentage");
        }
        if data.is_active.is_some() {
            set_parts.push("is_active = $is_active");
        }

        let query_str = format!("UPDATE $rid SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self
            .base
            .db()
            .query(&query_str)
            .bind(("rid", rid))
            .bind(("updated_at", Utc::now()));

        if let Some(v) = code {
            query = query.bind(("code", v));
        }
        if let Some(v) = data.discount_percentage {
            query = query.bind(("discount_percentage", v));
        }
        if let Some(v) = data.is_active {
            query = query.bind(("is_active", v));
        }

        let coupons: Vec<Coupon> = query.await?.take(0)?;
        coupons
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Coupon {} not found", id)))
    }

    /// Hard delete a coupon
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = make_record_id(COUPON_TABLE, id);
        let _deleted: Option<Coupon> = self.base.db().delete(rid).await?;
        Ok(())
    }

    /// Case-insensitive code collision check, optionally excluding one record
    async fn code_exists(&self, code: &str, exclude_id: Option<&str>) -> RepoResult<bool> {
        let coupons: Vec<Coupon> = self
            .base
            .db()
            .query("SELECT * FROM coupons WHERE string::lowercase(code) = $code")
            .bind(("code", code.to_lowercase()))
            .await?
            .take(0)?;

        let exclude = exclude_id.map(|id| make_record_id(COUPON_TABLE, id));
        Ok(coupons.iter().any(|c| match (&c.id, &exclude) {
            (Some(cid), Some(excluded)) => cid != excluded,
            _ => true,
        }))
    }
}
