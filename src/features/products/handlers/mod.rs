pub mod product_handler;

pub use product_handler::{
    __path_create_product, __path_get_product, __path_list_products, create_product, get_product,
    list_products,
};
