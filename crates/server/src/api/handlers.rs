mod category;
mod health;

pub use category::{
    create_category, delete_category, get_category_by_id, list_categories, update_category,
};
pub use health::{health_check, HealthResponse};

// Re-export utoipa path structs for OpenAPI routing
#[doc(hidden)]
pub use category::{
    __path_create_category, __path_delete_category, __path_get_category_by_id,
    __path_list_categories, __path_update_category,
};
#[doc(hidden)]
pub use health::__path_health_check;
