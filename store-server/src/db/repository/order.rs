//! Order Repository
//!
//! The order sink: orders are created whole at checkout and afterwards only
//! their status moves. Status transition policy is a back-office convention
//! (see `shared::order::OrderStatus`) — the sink accepts any status write.

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::order::OrderStatus;

use super::{BaseRepository, RepoError, RepoResult, make_record_id};
use crate::db::models::{Order, OrderCreate};

const ORDER_TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new order; returns the stored record with its id
    pub async fn place(&self, data: OrderCreate) -> RepoResult<Order> {
        if data.items.is_empty() {
            return Err(RepoError::Validation(
                "order must contain at least one item".into(),
            ));
        }

        let now = Utc::now();
        let order = Order {
            id: None,
            items: data.items,
            customer: data.customer,
            summary: data.summary,
            status: OrderStatus::Pending,
            created_at: Some(now),
            updated_at: Some(now),
        };

        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// All orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let rid = make_record_id(ORDER_TABLE, id);
        let order: Option<Order> = self.base.db().select(rid).await?;
        Ok(order)
    }

    /// Set the order status and bump `updated_at`
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let rid = make_record_id(ORDER_TABLE, id);
        let orders: Vec<Order> = self
            .base
            .db()
            .query("UPDATE $rid SET status = $status, updated_at = $updated_at RETURN AFTER")
            .bind(("rid", rid))
            .bind(("status", status))
            .bind(("updated_at", Utc::now()))
            .await?
            .take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Hard delete an order
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = make_record_id(ORDER_TABLE, id);
        let _deleted: Option<Order> = self.base.db().delete(rid).await?;
        Ok(())
    }

    /// Total income: sum of `total_cost` across delivered orders
    pub async fn total_income(&self) -> RepoResult<i64> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE status = $status")
            .bind(("status", OrderStatus::Delivered))
            .await?
            .take(0)?;
        Ok(orders.iter().map(|o| o.summary.total_cost).sum())
    }
}
