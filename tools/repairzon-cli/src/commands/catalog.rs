//! Catalog browsing commands.

use anyhow::{Context as _, Result};
use repairzon_commerce::catalog::{Catalog, Offering};
use repairzon_commerce::money::Money;
use repairzon_commerce::search::{Filter, SearchQuery};
use serde::Serialize;

use super::{CatalogArgs, CatalogCommand, ServicesArgs, ShowArgs};
use crate::context::Context;
use crate::output::price_label;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::Validate { file } => validate(file.as_deref(), ctx),
        CatalogCommand::Export => {
            ctx.output.json(&ctx.catalog);
            Ok(())
        }
    }
}

/// List browsable categories.
pub fn categories(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let categories: Vec<_> = ctx.catalog.browsable_categories().collect();
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Browse by Category");
    for category in ctx.catalog.browsable_categories() {
        let name = format!("{} {}", category.icon, category.name);
        let count = ctx.catalog.offerings_in(category.id.as_str()).count().to_string();
        ctx.output.table_row(
            &[category.id.as_str(), name.as_str(), count.as_str()],
            &[16, 36, 3],
        );
    }
    Ok(())
}

/// List services matching the filters.
pub fn services(args: ServicesArgs, ctx: &Context) -> Result<()> {
    if args.category != repairzon_commerce::catalog::ALL_CATEGORY {
        ctx.catalog.category(&args.category)?;
    }

    let results = services_query(args).apply(&ctx.catalog);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output.info("No services match.");
        return Ok(());
    }

    ctx.output.header("Services");
    print_offering_rows(ctx, &results);
    Ok(())
}

fn services_query(args: ServicesArgs) -> SearchQuery {
    let mut query = SearchQuery::new().with_category(args.category);
    if let Some(text) = args.search {
        query = query.with_query(text);
    }
    if let Some(max) = args.max_price {
        query = query.with_filter(Filter::MaxPrice(Money::new(max)));
    }
    if args.on_sale {
        query = query.with_filter(Filter::OnSale);
    }
    query
}

/// Show one service with variants, inclusions and reviews.
pub fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let offering = resolve_offering(&ctx.catalog, &args.id)?;

    if ctx.output.is_json() {
        #[derive(Serialize)]
        struct Detail<'a> {
            offering: &'a Offering,
            reviews: &'a [repairzon_commerce::catalog::Review],
        }
        ctx.output.json(&Detail {
            offering,
            reviews: ctx.catalog.reviews(),
        });
        return Ok(());
    }

    ctx.output.header(&offering.title);
    if let Some(ref badge) = offering.badge {
        ctx.output.kv("offer", badge);
    }
    if let Some(ref details) = offering.details {
        ctx.output.kv("details", details);
    }

    ctx.output.header("Variants");
    for variant in &offering.variants {
        let price = price_label(variant.price, variant.old_price);
        let add_hint = format!("add {} {}", offering.id, variant.id);
        ctx.output.table_row(
            &[variant.label.as_str(), price.as_str(), add_hint.as_str()],
            &[18, 28, 0],
        );
    }

    if !offering.included.is_empty() {
        ctx.output.header("Included");
        for item in &offering.included {
            ctx.output.list_item(item);
        }
    }
    if !offering.excluded.is_empty() {
        ctx.output.header("Excluded");
        for item in &offering.excluded {
            ctx.output.list_item(item);
        }
    }

    let reviews = ctx.catalog.reviews();
    if !reviews.is_empty() {
        ctx.output.header("Reviews");
        for review in reviews {
            ctx.output.list_item(&format!(
                "{} {} ({}): {}",
                review.author,
                review.stars(),
                review.ago,
                review.text
            ));
        }
    }

    Ok(())
}

/// Show the featured strips.
pub fn home(ctx: &Context) -> Result<()> {
    let showcase = ctx.catalog.showcase();

    if ctx.output.is_json() {
        ctx.output.json(&showcase);
        return Ok(());
    }

    for (title, offerings) in showcase.strips() {
        ctx.output.header(title);
        print_offering_rows(ctx, offerings);
    }
    Ok(())
}

fn validate(file: Option<&str>, ctx: &Context) -> Result<()> {
    let loaded;
    let (catalog, source) = match file {
        Some(path) => {
            let resolved = ctx.resolve_path(path);
            loaded = Catalog::load(&resolved)
                .with_context(|| format!("Failed to load catalog: {}", resolved.display()))?;
            (&loaded, resolved.display().to_string())
        }
        None => (&ctx.catalog, ctx.catalog_source.clone()),
    };

    ctx.output.header(&format!("Validating catalog ({})", source));
    catalog.validate()?;
    ctx.output.success(&format!(
        "Catalog is valid: {} categories, {} services",
        catalog.browsable_categories().count(),
        catalog.offerings().len()
    ));
    Ok(())
}

/// A service id, or a category id that opens the category's default service.
fn resolve_offering<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Offering> {
    if let Ok(offering) = catalog.offering(id) {
        return Ok(offering);
    }
    if catalog.category(id).is_ok() {
        if let Some(offering) = catalog.default_offering_for(id) {
            tracing::debug!(category = id, offering = %offering.id, "opened category default");
            return Ok(offering);
        }
    }
    Err(repairzon_commerce::CommerceError::OfferingNotFound(id.to_string()).into())
}

fn print_offering_rows(ctx: &Context, offerings: &[&Offering]) {
    for offering in offerings {
        let from = offering
            .starting_price()
            .map(|p| format!("from {}", p.display()))
            .unwrap_or_default();
        let badge = offering.badge.clone().unwrap_or_default();
        ctx.output.table_row(
            &[
                offering.id.as_str(),
                offering.title.as_str(),
                from.as_str(),
                badge.as_str(),
            ],
            &[16, 46, 14, 0],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_offering_by_id_or_category() {
        let catalog = Catalog::demo();
        assert_eq!(
            resolve_offering(&catalog, "drill").unwrap().id.as_str(),
            "drill"
        );
        assert_eq!(
            resolve_offering(&catalog, "ac").unwrap().id.as_str(),
            "ac-install"
        );
        assert!(resolve_offering(&catalog, "solar").is_err());
        assert!(resolve_offering(&catalog, "nothing").is_err());
    }

    fn ids(catalog: &Catalog, args: ServicesArgs) -> Vec<String> {
        services_query(args)
            .apply(catalog)
            .iter()
            .map(|o| o.id.to_string())
            .collect()
    }

    #[test]
    fn test_services_max_price_and_on_sale() {
        let catalog = Catalog::demo();
        let args = |category: &str, max_price: Option<u64>, on_sale: bool| ServicesArgs {
            category: category.to_string(),
            search: None,
            max_price,
            on_sale,
        };

        assert_eq!(ids(&catalog, args("all", Some(1000), false)), vec!["carpet-clean", "drill"]);
        assert_eq!(ids(&catalog, args("ac", Some(1100), false)), vec!["ac-master"]);
        assert_eq!(ids(&catalog, args("all", Some(1100), true)), vec!["ac-master"]);
        assert_eq!(ids(&catalog, args("all", None, false)).len(), 5);
    }
}
