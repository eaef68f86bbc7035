#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PantryItemError {
    #[error("pantry_item.name_empty")]
    NameEmpty,
    #[error("pantry_item.invalid_quantity")]
    InvalidQuantity,
    #[error("pantry_item.invalid_category")]
    InvalidCategory,
    #[error("pantry_item.invalid_unit")]
    InvalidUnit,
    #[error("pantry_item.invalid_expiry")]
    InvalidExpiry,
}
