pub mod routine;
pub mod update_inventory_columns;
