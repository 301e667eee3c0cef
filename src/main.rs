use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use rental_catalog::catalog::{CatalogSource, EmbeddedCatalog, JsonFileCatalog, DEFAULT_PRICE_MAX};
use rental_catalog::{BookingSession, Catalog, FilterCriteria, Guest, RentalTerms, TypeFilter};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Browse the rental catalog and price a stay
#[derive(Debug, Parser)]
#[command(name = "rental-catalog", version)]
struct Args {
    /// JSON file with listings; the built-in demo catalog is used when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Listing type: all, apartment, villa, studio or room
    #[arg(long = "type", default_value = "all", value_parser = parse_type_filter)]
    kind: TypeFilter,

    #[arg(long, default_value_t = 0)]
    min_price: i64,

    #[arg(long, default_value_t = DEFAULT_PRICE_MAX)]
    max_price: i64,

    /// Listing id to book
    #[arg(long, requires_all = ["check_in", "check_out", "name", "phone", "email"])]
    book: Option<u32>,

    /// Check-in date, YYYY-MM-DD
    #[arg(long, requires = "book")]
    check_in: Option<NaiveDate>,

    /// Check-out date, YYYY-MM-DD
    #[arg(long, requires = "book")]
    check_out: Option<NaiveDate>,

    /// Guest name
    #[arg(long, requires = "book")]
    name: Option<String>,

    /// Guest phone
    #[arg(long, requires = "book")]
    phone: Option<String>,

    /// Guest email
    #[arg(long, requires = "book")]
    email: Option<String>,

    /// Save the filtered listings as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print guest reviews
    #[arg(long)]
    reviews: bool,

    /// Print rental terms
    #[arg(long)]
    terms: bool,
}

fn parse_type_filter(value: &str) -> Result<TypeFilter, String> {
    TypeFilter::try_from(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let terms = RentalTerms::default();

    let source: Box<dyn CatalogSource> = match &args.catalog {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(EmbeddedCatalog::new()),
    };
    let catalog = Catalog::load(source.as_ref()).await?;

    let criteria = FilterCriteria::new(args.kind, args.min_price, args.max_price)?;
    let visible = catalog.filter(&criteria);

    println!("Найдено объектов: {}\n", visible.len());
    for listing in &visible {
        println!(
            "{}. {} ({} ₽/сутки)",
            listing.id, listing.title, listing.price_per_night
        );
        println!(
            "   {} · {} м² · {} beds · {} baths",
            listing.kind, listing.area_sqm, listing.beds, listing.baths
        );
        println!("   {}", listing.address);
        println!("   ★ {} ({} reviews)", listing.rating, listing.review_count);
        if !listing.available {
            println!("   Забронировано");
        }
        println!();
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&visible)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved {} listings to {}", visible.len(), path.display());
    }

    if args.reviews {
        for review in EmbeddedCatalog::reviews()? {
            println!(
                "{} ({}) {}/5",
                review.author, review.date.format("%Y-%m-%d"), review.rating
            );
            println!("   {}", review.text);
        }
        println!();
    }

    if args.terms {
        println!("Условия аренды");
        println!("   Предоплата: {}% от стоимости проживания", terms.prepayment_percent);
        println!(
            "   Заезд с {}:00, выезд до {}:00",
            terms.check_in_hour, terms.check_out_hour
        );
        println!(
            "   Бесплатная отмена за {} дней до заезда, позже возврат {}%",
            terms.free_cancellation_days, terms.late_refund_percent
        );
        println!("   Залог: {} ₽, возвращается после выезда", terms.deposit());
        println!();
    }

    if let Some(id) = args.book {
        let (Some(check_in), Some(check_out)) = (args.check_in, args.check_out) else {
            anyhow::bail!("--book needs --check-in and --check-out");
        };
        let guest = Guest::new(
            args.name.unwrap_or_default(),
            args.phone.unwrap_or_default(),
            args.email.unwrap_or_default(),
        );

        let listing = catalog
            .get(id)
            .with_context(|| format!("No listing with id {id}"))?;

        let session = BookingSession::new()
            .select(listing)?
            .set_check_in(check_in)?
            .set_check_out(check_out)?;

        match session.confirm(&guest) {
            Ok(confirmed) => {
                if let Some(booking) = confirmed.booking() {
                    println!("Цена за сутки: {} ₽", booking.price_per_night);
                    println!("Количество суток: {}", booking.quote.nights);
                    println!("Итого: {} ₽", booking.quote.total);
                    println!("Предоплата: {} ₽", terms.prepayment(&booking.quote));
                    println!("Остаток при заезде: {} ₽", terms.balance(&booking.quote));
                    println!("Залог: {} ₽", terms.deposit());
                    println!("{}", serde_json::to_string_pretty(booking)?);
                }
            }
            Err(err) => {
                warn!("Booking rejected: {}", err);
                return Err(err.into());
            }
        }
    }

    Ok(())
}
