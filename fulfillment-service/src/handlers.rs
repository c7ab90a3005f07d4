use bigdecimal::BigDecimal;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::{error, info, warn};

use crate::db::DbPool;
use crate::models::{Customer, LineItem, NewPurchase, WarehouseItem};
use crate::schema::{customers, line_items, purchases, stock_entries, warehouse_items};
use shared::{MissingEntity, PurchaseError, PurchaseRequest};

pub struct PurchaseHandler {
    pool: DbPool,
}

impl PurchaseHandler {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Books a single item/quantity pair for a member and returns the
    /// generated transaction id.
    ///
    /// All reads and both inserts run under one transaction: a failure at any
    /// step rolls back everything written so far, so a purchase header is
    /// never visible without its line item. The stock decrement itself is
    /// performed by a storage-side trigger on line item insertion.
    pub async fn create_purchase(&self, request: PurchaseRequest) -> Result<i32, PurchaseError> {
        if request.quantity <= 0 {
            return Err(PurchaseError::InvalidQuantity {
                quantity: request.quantity,
            });
        }

        let mut conn = self.pool.get().await.map_err(|e| PurchaseError::Storage {
            detail: e.to_string(),
        })?;

        let result = conn
            .transaction::<i32, PurchaseError, _>(|conn| {
                Box::pin(async move {
                    validate_customer(conn, request.membership_id).await?;
                    let item = validate_item(conn, request.item_id).await?;

                    // No row locking here: two concurrent purchases can both
                    // pass this check and jointly oversubscribe the item.
                    let available = available_stock(conn, request.item_id).await?;
                    if available < i64::from(request.quantity) {
                        return Err(PurchaseError::InsufficientStock { available });
                    }

                    let total = price_total(&item, request.quantity)?;

                    let new_purchase = NewPurchase {
                        membership_id: request.membership_id,
                        purchase_date: Utc::now().date_naive(),
                        total,
                    };
                    let transaction_id = diesel::insert_into(purchases::table)
                        .values(&new_purchase)
                        .returning(purchases::transaction_id)
                        .get_result::<i32>(conn)
                        .await?;

                    let line_item = LineItem {
                        transaction_id,
                        line_no: 1,
                        item_id: request.item_id,
                        quantity: request.quantity,
                    };
                    diesel::insert_into(line_items::table)
                        .values(&line_item)
                        .execute(conn)
                        .await?;

                    Ok(transaction_id)
                })
            })
            .await;

        match &result {
            Ok(transaction_id) => info!(
                "purchase {} committed: member {}, {} x item {}",
                transaction_id, request.membership_id, request.quantity, request.item_id
            ),
            Err(e) if e.is_retryable() => error!("purchase aborted: {}", e),
            Err(e) => warn!("purchase rejected: {}", e),
        }

        result
    }
}

async fn validate_customer(
    conn: &mut AsyncPgConnection,
    membership_id: i32,
) -> Result<(), PurchaseError> {
    let found = customers::table
        .find(membership_id)
        .first::<Customer>(conn)
        .await
        .optional()?;

    match found {
        Some(_) => Ok(()),
        None => Err(PurchaseError::NotFound {
            entity: MissingEntity::Customer { membership_id },
        }),
    }
}

async fn validate_item(
    conn: &mut AsyncPgConnection,
    item_id: i32,
) -> Result<WarehouseItem, PurchaseError> {
    warehouse_items::table
        .find(item_id)
        .first::<WarehouseItem>(conn)
        .await
        .optional()?
        .ok_or(PurchaseError::NotFound {
            entity: MissingEntity::Item { item_id },
        })
}

/// Total stock for an item across all warehouses; an item with no stock
/// entries counts as zero.
async fn available_stock(conn: &mut AsyncPgConnection, item_id: i32) -> Result<i64, PurchaseError> {
    let total = stock_entries::table
        .filter(stock_entries::item_id.eq(item_id))
        .select(diesel::dsl::sum(stock_entries::stock))
        .first::<Option<i64>>(conn)
        .await?;

    Ok(total.unwrap_or(0))
}

fn price_total(item: &WarehouseItem, quantity: i32) -> Result<BigDecimal, PurchaseError> {
    let unit_price = item
        .unit_price
        .clone()
        .ok_or(PurchaseError::PricingUnavailable {
            item_id: item.item_id,
        })?;

    Ok(unit_price * BigDecimal::from(quantity))
}
