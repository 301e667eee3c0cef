use crate::catalog::traits::CatalogSource;
use crate::models::{Listing, ListingType, Location, Review};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

const IMAGE_SEA_VIEW: &str = concat!(
    "https://cdn.poehali.dev/projects/def3cd57-0b41-474e-99d3-d9434be9074b/files/",
    "3e52603f-b5b9-47ff-a739-da94c1e7a189.jpg"
);
const IMAGE_VILLA: &str = concat!(
    "https://cdn.poehali.dev/projects/def3cd57-0b41-474e-99d3-d9434be9074b/files/",
    "287de535-3c7e-4c6a-9f89-881c872eddfa.jpg"
);
const IMAGE_CENTER: &str = concat!(
    "https://cdn.poehali.dev/projects/def3cd57-0b41-474e-99d3-d9434be9074b/files/",
    "5612420e-d2b7-4663-8c1f-d2ce0d1cfb02.jpg"
);

/// Built-in demo catalog of Sochi rentals
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn listings() -> Vec<Listing> {
        vec![
            listing(
                1,
                "Современная квартира с видом на море",
                ListingType::Apartment,
                5000,
                IMAGE_SEA_VIEW,
                (2, 1, 65),
                "ул. Приморская, 12",
                (43.5855, 39.7231),
                (4.8, 24),
                true,
            ),
            listing(
                2,
                "Вилла на берегу моря",
                ListingType::Villa,
                15000,
                IMAGE_VILLA,
                (4, 3, 180),
                "Курортный проспект, 75",
                (43.5890, 39.7201),
                (4.9, 31),
                true,
            ),
            listing(
                3,
                "Уютная студия в центре",
                ListingType::Studio,
                3000,
                IMAGE_CENTER,
                (1, 1, 35),
                "ул. Навагинская, 8",
                (43.5854, 39.7208),
                (4.6, 18),
                true,
            ),
            listing(
                4,
                "Апартаменты с панорамным видом",
                ListingType::Apartment,
                7000,
                IMAGE_SEA_VIEW,
                (3, 2, 95),
                "пр. Пушкина, 24",
                (43.5901, 39.7189),
                (4.7, 22),
                false,
            ),
            listing(
                5,
                "Комната в центре города",
                ListingType::Room,
                1500,
                IMAGE_CENTER,
                (1, 1, 18),
                "ул. Морская, 45",
                (43.5868, 39.7215),
                (4.5, 12),
                true,
            ),
        ]
    }

    /// Guest reviews shown alongside the catalog
    pub fn reviews() -> Result<Vec<Review>> {
        Ok(vec![
            review(
                1,
                "Анна Петрова",
                5,
                "Прекрасная квартира! Все как на фото, чисто и уютно. \
                 Рядом море и все необходимое для отдыха.",
                (2024, 10, 15),
            )?,
            review(
                2,
                "Дмитрий Иванов",
                5,
                "Отличное место для семейного отдыха. \
                 Хозяева очень отзывчивые, помогли с трансфером.",
                (2024, 9, 22),
            )?,
            review(
                3,
                "Елена Смирнова",
                4,
                "Хорошие апартаменты, удобное расположение. \
                 Единственный минус - парковка платная.",
                (2024, 8, 8),
            )?,
        ])
    }
}

fn review(
    id: u32,
    author: &str,
    rating: u8,
    text: &str,
    (y, m, d): (i32, u32, u32),
) -> Result<Review> {
    let date = NaiveDate::from_ymd_opt(y, m, d)
        .with_context(|| format!("Review {id} has an invalid date {y}-{m}-{d}"))?;

    Ok(Review {
        id,
        author: author.to_string(),
        rating,
        text: text.to_string(),
        date,
    })
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    kind: ListingType,
    price_per_night: i64,
    image: &str,
    (beds, baths, area_sqm): (u32, u32, u32),
    address: &str,
    (latitude, longitude): (f64, f64),
    (rating, review_count): (f32, u32),
    available: bool,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        kind,
        price_per_night,
        image: image.to_string(),
        beds,
        baths,
        area_sqm,
        address: address.to_string(),
        location: Location {
            latitude,
            longitude,
        },
        rating,
        review_count,
        available,
    }
}

#[async_trait]
impl CatalogSource for EmbeddedCatalog {
    async fn load(&self) -> Result<Vec<Listing>> {
        let listings = Self::listings();
        debug!("Embedded catalog holds {} listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "embedded"
    }
}
