use super::StoreAdapter;

pub struct Kabum;

impl StoreAdapter for Kabum {
    fn store_name(&self) -> &str {
        "kabum"
    }

    fn hosts(&self) -> &[&str] {
        &["kabum.com.br"]
    }

    fn card_selector(&self) -> &str {
        "[id^=produto-], .productCard, .card-produto, a[href*='/produto/']"
    }

    fn name_selector(&self) -> Option<&str> {
        Some(".nameCard, .name, h2, h3")
    }

    fn price_selectors(&self) -> &[&str] {
        &[".priceCard", ".price", ".valor", ".preco"]
    }

    fn id_prefix(&self) -> &str {
        "kb"
    }
}
