use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::customers, primary_key(membership_id))]
pub struct Customer {
    pub membership_id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::warehouses, primary_key(warehouse_id))]
pub struct Warehouse {
    pub warehouse_id: i32,
    pub location: String,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::warehouse_items, primary_key(item_id))]
pub struct WarehouseItem {
    pub item_id: i32,
    pub unit_price: Option<BigDecimal>,
}

#[derive(Debug, Clone, Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::stock_entries)]
pub struct StockEntry {
    pub warehouse_id: i32,
    pub item_id: i32,
    pub stock: i32,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::purchases, primary_key(transaction_id))]
pub struct Purchase {
    pub transaction_id: i32,
    pub membership_id: i32,
    pub purchase_date: NaiveDate,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::purchases)]
pub struct NewPurchase {
    pub membership_id: i32,
    pub purchase_date: NaiveDate,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::line_items)]
pub struct LineItem {
    pub transaction_id: i32,
    pub line_no: i32,
    pub item_id: i32,
    pub quantity: i32,
}
