use scraper::{Html, Selector};

// Product names live in the card headings of the storefront grid, six divs
// deep under <main>. Pages with a different layout yield a different set.
const PRODUCT_HEADING_PATH: &str = "body > main > div > div > div > div > div > div > h5";

pub fn extract_product_names(page_source: &str) -> Vec<String> {
    let heading_selector = Selector::parse(PRODUCT_HEADING_PATH).unwrap();
    let html_document = Html::parse_document(page_source);

    html_document
        .select(&heading_selector)
        .map(|tag| tag.text().collect::<String>().trim().to_string())
        .collect()
}
