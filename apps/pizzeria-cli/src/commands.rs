//! # Commands
//!
//! Each command drives the core and returns the text to print.
//!
//! ```text
//! commands.rs
//! ├── list_catalog   ◄─── `pizzeria catalog`
//! └── place_order    ◄─── `pizzeria order --name Ana --size large --add ham`
//! ```

use pizzeria_core::{Catalog, CrustType, OrderSession, OrderSummary, PizzaSize, ProductId};
use tracing::debug;

use crate::config::AppConfig;
use crate::error::AppError;

/// Form values for one order, as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct OrderRequest {
    pub customer_name: String,
    /// `None` leaves the session's default size in place.
    pub size: Option<PizzaSize>,
    /// Explicitly unselect the size (prices at 0.00).
    pub clear_size: bool,
    pub crust: CrustType,
    /// Product ids or names, one entry per unit.
    pub products: Vec<String>,
    pub json: bool,
}

/// Lists the catalog, one product per line.
pub fn list_catalog(config: &AppConfig, catalog: &Catalog) -> String {
    let mut out = format!("{} - extras\n", config.store_name);
    for product in catalog.products() {
        out.push_str(&format!(
            "{:>3}  {:<20}{:>10}\n",
            product.id,
            product.name,
            config.format_currency(product.unit_price)
        ));
    }
    out
}

/// Fills a session from `request`, submits it and renders the summary.
pub fn place_order(
    config: &AppConfig,
    catalog: Catalog,
    request: &OrderRequest,
) -> Result<String, AppError> {
    let mut session = OrderSession::new(catalog);

    session.set_customer_name(request.customer_name.as_str());
    if request.clear_size {
        session.set_size(None);
    } else if let Some(size) = request.size {
        session.set_size(Some(size));
    }
    session.set_crust(request.crust);

    for product in &request.products {
        add_by_reference(&mut session, product)?;
    }
    debug!(units = session.total_units(), "cart filled");

    let order = session.submit()?;
    let summary = OrderSummary::from_order(&order);

    if request.json {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    let mut out = format!("{}\n", config.store_name);
    out.push_str(&summary.render(&config.currency_symbol, config.symbol_position));
    Ok(out)
}

/// Numeric references are catalog ids, anything else is a product name.
fn add_by_reference(session: &mut OrderSession, reference: &str) -> Result<(), AppError> {
    match reference.trim().parse::<u32>() {
        Ok(id) => session.add_product_by_id(ProductId(id))?,
        Err(_) => session.add_product_by_name(reference)?,
    }
    Ok(())
}
