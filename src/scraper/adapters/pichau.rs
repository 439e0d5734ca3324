use super::StoreAdapter;

pub struct Pichau;

impl StoreAdapter for Pichau {
    fn store_name(&self) -> &str {
        "pichau"
    }

    fn hosts(&self) -> &[&str] {
        &["pichau.com.br"]
    }

    fn card_selector(&self) -> &str {
        ".product-card, .produto, .product"
    }

    fn price_selectors(&self) -> &[&str] {
        &[".price", ".valor", ".price-box"]
    }

    fn id_prefix(&self) -> &str {
        "pich"
    }
}
