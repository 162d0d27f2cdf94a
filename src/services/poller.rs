use anyhow::Context;

use crate::domain::{
    backend::{Backend, Tally},
    catalog_page::extract_product_names,
};

use super::CatalogClient;

/// One full cycle: fetch the page, extract the product headings, classify the
/// serving backend and record it. Returns the headings for the caller to
/// print. A page with no headings leaves the tally untouched and errors out.
pub async fn poll_once(client: &CatalogClient, tally: &mut Tally) -> anyhow::Result<Vec<String>> {
    let page_source = client
        .fetch_page()
        .await
        .with_context(|| format!("Request to {} failed", client.url()))?;

    let products = extract_product_names(&page_source);
    if products.is_empty() {
        anyhow::bail!("No product headings found on catalog page");
    }

    tally.record(Backend::classify(&products));
    Ok(products)
}

pub async fn poller_handler(client: CatalogClient) -> anyhow::Result<()> {
    log::info!("Started catalog poller against {}", client.url());
    let mut tally = Tally::default();

    loop {
        let products = poll_once(&client, &mut tally).await?;
        println!(
            "Kubernetes vs VM requests handled {} / {}, products: {:?}",
            tally.kubernetes, tally.vm, products
        );
    }
}
