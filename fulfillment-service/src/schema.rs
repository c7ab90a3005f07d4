diesel::table! {
    customers (membership_id) {
        membership_id -> Int4,
        name -> Varchar,
        date_of_birth -> Date,
        email -> Varchar,
        phone -> Varchar,
    }
}

diesel::table! {
    warehouses (warehouse_id) {
        warehouse_id -> Int4,
        location -> Varchar,
    }
}

diesel::table! {
    warehouse_items (item_id) {
        item_id -> Int4,
        unit_price -> Nullable<Numeric>,
    }
}

diesel::table! {
    stock_entries (warehouse_id, item_id) {
        warehouse_id -> Int4,
        item_id -> Int4,
        stock -> Int4,
    }
}

diesel::table! {
    purchases (transaction_id) {
        transaction_id -> Int4,
        membership_id -> Int4,
        purchase_date -> Date,
        total -> Numeric,
    }
}

diesel::table! {
    line_items (transaction_id, line_no) {
        transaction_id -> Int4,
        line_no -> Int4,
        item_id -> Int4,
        quantity -> Int4,
    }
}

diesel::joinable!(stock_entries -> warehouses (warehouse_id));
diesel::joinable!(stock_entries -> warehouse_items (item_id));
diesel::joinable!(purchases -> customers (membership_id));
diesel::joinable!(line_items -> purchases (transaction_id));
diesel::joinable!(line_items -> warehouse_items (item_id));

diesel::allow_tables_to_appear_in_same_query!(
    customers,
    warehouses,
    warehouse_items,
    stock_entries,
    purchases,
    line_items,
);
