use super::StoreAdapter;

pub struct Terabyte;

impl StoreAdapter for Terabyte {
    fn store_name(&self) -> &str {
        "terabyte"
    }

    fn hosts(&self) -> &[&str] {
        &["terabyteshop.com.br"]
    }

    fn card_selector(&self) -> &str {
        ".product-item, .product"
    }

    fn price_selectors(&self) -> &[&str] {
        &[".price", ".valor"]
    }

    fn id_prefix(&self) -> &str {
        "ter"
    }
}
