//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Reference
//! columns are plain `BIGINT`s with no foreign-key constraints.

diesel::table! {
    /// Registered users.
    users (id) {
        id -> Int8,
        username -> Nullable<Text>,
        email -> Nullable<Text>,
        first_name -> Nullable<Text>,
        last_name -> Nullable<Text>,
    }
}

diesel::table! {
    /// Printers with per-page pricing.
    printers (id) {
        id -> Int8,
        location -> Nullable<Text>,
        price_per_page -> Float8,
        supports_color -> Bool,
        additional_notes -> Nullable<Text>,
        /// Owning user id; may reference a user that does not exist.
        owner_id -> Nullable<Int8>,
    }
}

diesel::table! {
    /// Print orders placed against printers.
    print_orders (id) {
        id -> Int8,
        file_name -> Nullable<Text>,
        page_count -> Int4,
        color -> Bool,
        status -> Nullable<Text>,
        user_id -> Int8,
        printer_id -> Int8,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, printers, print_orders);
