//! Terminal storefront: browse the catalog, open product details, and poke
//! the cart/wishlist/share actions from a line-oriented prompt.

mod platform;
mod render;

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use shopfront_catalog::ProductStore;
use shopfront_core::ProductId;
use shopfront_service::CatalogService;
use shopfront_ui::{CardEvent, Navigator, ProductCard, ProductDetailPage, Route};

use crate::platform::TerminalPlatform;

type InputLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let store = load_store()?;
    tracing::info!(products = store.len(), "catalog ready");

    let service = CatalogService::with_default_latency(Arc::new(store));
    run(service).await
}

/// Catalog comes from `SHOPFRONT_FIXTURES` (a JSON product array) when set,
/// otherwise from the seeded demo data.
fn load_store() -> anyhow::Result<ProductStore> {
    match std::env::var("SHOPFRONT_FIXTURES") {
        Ok(path) => {
            let bytes =
                std::fs::read(&path).with_context(|| format!("reading fixture {path}"))?;
            Ok(ProductStore::from_json(&bytes)?)
        }
        Err(_) => {
            tracing::warn!("SHOPFRONT_FIXTURES not set; using the seeded demo catalog");
            Ok(ProductStore::seeded())
        }
    }
}

async fn run(service: CatalogService) -> anyhow::Result<()> {
    let platform = TerminalPlatform::new();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("shopfront — type `help` for commands");
    loop {
        let keep_going = match platform.current_route() {
            Route::Catalog { category } => {
                catalog_page(&service, &platform, category.as_deref(), &mut input).await?
            }
            Route::Product(id) => detail_page(&service, &platform, id, &mut input).await?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn make_cards(products: Vec<shopfront_catalog::Product>) -> Vec<ProductCard> {
    products
        .into_iter()
        .map(|p| {
            let mut card = ProductCard::new(p);
            // No images in a terminal; settle the placeholder immediately.
            card.image_settled();
            card
        })
        .collect()
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

async fn catalog_page(
    service: &CatalogService,
    platform: &TerminalPlatform,
    category: Option<&str>,
    input: &mut InputLines,
) -> anyhow::Result<bool> {
    match category {
        Some(c) => println!("# Catalog — {c}"),
        None => println!("# Catalog"),
    }
    let cards = make_cards(service.list_products(category).await);
    if cards.is_empty() {
        println!("  (no products)");
    }
    for card in &cards {
        println!("  #{}", card.product().id);
        render::card(&card.view());
    }

    loop {
        prompt()?;
        let Some(line) = input.next_line().await? else {
            return Ok(false);
        };
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            "" => {}
            "help" => {
                println!("  open <id> | cart <id> | search <q> | category <c> | all");
                println!("  categories | export <id> | go <path> | quit");
            }
            "open" => match ProductId::parse(rest) {
                Some(id) => {
                    match cards.iter().find(|c| c.product().id == id) {
                        // Clicking the card requests navigation.
                        Some(card) => {
                            card.handle(CardEvent::Clicked, platform, platform);
                        }
                        // Not on this page; follow the route convention directly.
                        None => platform.push(Route::product(id)),
                    }
                    return Ok(true);
                }
                None => println!("  usage: open <id>"),
            },
            "cart" => match ProductId::parse(rest) {
                Some(id) => match cards.iter().find(|c| c.product().id == id) {
                    Some(card) => {
                        card.handle(CardEvent::AddToCartClicked, platform, platform);
                    }
                    None => println!("  no product #{id} on this page"),
                },
                None => println!("  usage: cart <id>"),
            },
            "search" => {
                let hits = make_cards(service.search_products(rest).await);
                println!("  {} result(s) for {rest:?}", hits.len());
                for card in &hits {
                    println!("  #{}", card.product().id);
                    render::card(&card.view());
                }
            }
            "categories" => {
                for category in service.list_categories().await {
                    println!("  {category}");
                }
            }
            "category" if !rest.is_empty() => {
                platform.push(Route::Catalog {
                    category: Some(rest.to_string()),
                });
                return Ok(true);
            }
            "all" => {
                platform.push(Route::catalog());
                return Ok(true);
            }
            "export" => export(service, rest).await,
            "go" => {
                if go(platform, rest) {
                    return Ok(true);
                }
            }
            "quit" | "exit" => return Ok(false),
            _ => println!("  unknown command; try `help`"),
        }
    }
}

async fn detail_page(
    service: &CatalogService,
    platform: &TerminalPlatform,
    id: ProductId,
    input: &mut InputLines,
) -> anyhow::Result<bool> {
    let mut page = ProductDetailPage::new();
    render::detail(&page.view());
    page.load(service, &id.to_string(), platform).await;
    page.image_settled();
    render::detail(&page.view());

    loop {
        prompt()?;
        let Some(line) = input.next_line().await? else {
            return Ok(false);
        };
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            "" => {}
            "help" => {
                println!("  cart | wishlist | share | export | back | go <path> | quit");
            }
            "cart" => page.add_to_cart(platform),
            "wishlist" => page.add_to_wishlist(platform),
            "share" => page.share(platform, platform),
            "export" => export(service, &id.to_string()).await,
            "back" => {
                platform.push(Route::catalog());
                return Ok(true);
            }
            "go" => {
                if go(platform, rest) {
                    return Ok(true);
                }
            }
            "quit" | "exit" => return Ok(false),
            _ => println!("  unknown command; try `help`"),
        }
    }
}

/// Dump one product as JSON.
async fn export(service: &CatalogService, raw_id: &str) {
    let Some(id) = ProductId::parse(raw_id) else {
        println!("  usage: export <id>");
        return;
    };
    match service.get_product(id).await {
        Some(product) => match serde_json::to_string_pretty(&product) {
            Ok(json) => println!("{json}"),
            Err(error) => tracing::error!(%error, "product serialization failed"),
        },
        None => println!("  no product #{id}"),
    }
}

/// Navigate by raw path; returns whether the route changed.
fn go(platform: &TerminalPlatform, path: &str) -> bool {
    match Route::parse(path) {
        Some(route) => {
            platform.push(route);
            true
        }
        None => {
            println!("  no route for {path:?}");
            false
        }
    }
}
