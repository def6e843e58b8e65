//! Seed the database with catalog data from a YAML file.
//!
//! The file describes settings, categories, farms, products (referencing
//! categories and farms by name), social links and footer content. The
//! whole file is validated before anything touches the database.

use std::collections::HashMap;
use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{error, info};

use fraiche_admin::db::{
    self, CategoryRepository, ContentRepository, FarmRepository, NewCategory, NewFarm,
    NewFooterContent, NewPriceVariant, NewProduct, NewSocialLink, ProductRepository,
    SettingsRepository,
};
use fraiche_core::{FooterLink, FooterSection, Money, SiteSettings};

/// Top-level seed file shape.
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    pub settings: Option<SeedSettings>,
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub farms: Vec<SeedFarm>,
    #[serde(default)]
    pub products: Vec<SeedProduct>,
    #[serde(default)]
    pub social_links: Vec<SeedSocialLink>,
    #[serde(default)]
    pub footer: Vec<SeedFooterContent>,
}

#[derive(Debug, Deserialize)]
pub struct SeedSettings {
    pub shop_name: String,
    #[serde(default)]
    pub shop_description: String,
    pub logo_url: Option<String>,
    pub whatsapp_number: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub schedule: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedCategory {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedFarm {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    pub category: String,
    pub farm: Option<String>,
    #[serde(default)]
    pub stock: i32,
    pub prices: Vec<SeedPrice>,
}

#[derive(Debug, Deserialize)]
pub struct SeedPrice {
    pub label: String,
    pub price: Money,
    pub original_price: Option<Money>,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Deserialize)]
pub struct SeedSocialLink {
    pub platform: String,
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedFooterContent {
    pub section: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// Validate the seed file; returns one message per problem found.
#[must_use]
pub fn validate_config(config: &SeedConfig) -> Vec<String> {
    let mut errors = Vec::new();

    let category_names: Vec<&str> = config.categories.iter().map(|c| c.name.as_str()).collect();
    let farm_names: Vec<&str> = config.farms.iter().map(|f| f.name.as_str()).collect();

    for product in &config.products {
        if !category_names.contains(&product.category.as_str()) {
            errors.push(format!(
                "product '{}' references unknown category '{}'",
                product.name, product.category
            ));
        }
        if let Some(farm) = &product.farm
            && !farm_names.contains(&farm.as_str())
        {
            errors.push(format!(
                "product '{}' references unknown farm '{farm}'",
                product.name
            ));
        }
        if product.prices.is_empty() {
            errors.push(format!("product '{}' has no price variants", product.name));
        }
    }

    for footer in &config.footer {
        if FooterSection::parse(&footer.section).is_none() {
            errors.push(format!(
                "footer block '{}' has unknown section '{}'",
                footer.title, footer.section
            ));
        }
    }

    errors
}

/// Seed the database from a YAML file.
///
/// # Errors
///
/// Returns an error if the file is missing or invalid, the database is
/// unreachable, or an insert fails.
pub async fn run(file_path: &str, reset: bool) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| "DATABASE_URL not set")?;

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading seed data from file");

    // Read and validate YAML before connecting to the database
    let content = tokio::fs::read_to_string(path).await?;
    let config: SeedConfig = serde_yaml::from_str(&content)?;

    let errors = validate_config(&config);
    if !errors.is_empty() {
        for message in &errors {
            error!("{message}");
        }
        return Err(format!("seed file has {} problem(s)", errors.len()).into());
    }

    let pool = db::create_pool(&database_url).await?;

    if reset {
        info!("Clearing existing shop data");
        clear_shop_data(&pool).await?;
    }

    seed_all(&pool, config).await?;

    info!("Database seeded successfully");
    Ok(())
}

async fn clear_shop_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Products cascade their variants
    sqlx::query("DELETE FROM shop.products").execute(pool).await?;
    sqlx::query("DELETE FROM shop.categories").execute(pool).await?;
    sqlx::query("DELETE FROM shop.farms").execute(pool).await?;
    sqlx::query("DELETE FROM shop.social_links").execute(pool).await?;
    sqlx::query("DELETE FROM shop.footer_contents").execute(pool).await?;
    sqlx::query("DELETE FROM shop.site_settings").execute(pool).await?;
    Ok(())
}

async fn seed_all(pool: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let categories = CategoryRepository::new(pool);
    let mut category_ids = HashMap::new();
    for (index, seed) in config.categories.into_iter().enumerate() {
        let created = categories
            .create(NewCategory {
                name: seed.name.clone(),
                description: seed.description,
                image: seed.image,
                is_active: true,
                position: i32::try_from(index).unwrap_or(i32::MAX),
            })
            .await?;
        category_ids.insert(seed.name, created.id);
    }
    info!(count = category_ids.len(), "Categories seeded");

    let farms = FarmRepository::new(pool);
    let mut farm_ids = HashMap::new();
    for seed in config.farms {
        let created = farms
            .create(NewFarm {
                name: seed.name.clone(),
                description: seed.description,
                location: seed.location,
                image: seed.image,
                is_active: true,
            })
            .await?;
        farm_ids.insert(seed.name, created.id);
    }
    info!(count = farm_ids.len(), "Farms seeded");

    let products = ProductRepository::new(pool);
    let mut product_count = 0;
    for seed in config.products {
        let category_id = *category_ids
            .get(&seed.category)
            .ok_or_else(|| format!("unknown category '{}'", seed.category))?;
        let farm_id = seed
            .farm
            .as_ref()
            .map(|name| {
                farm_ids
                    .get(name)
                    .copied()
                    .ok_or_else(|| format!("unknown farm '{name}'"))
            })
            .transpose()?;

        products
            .create(NewProduct {
                name: seed.name,
                description: seed.description,
                images: seed.images,
                videos: seed.videos,
                category_id,
                farm_id,
                stock: seed.stock,
                is_active: true,
                prices: seed
                    .prices
                    .into_iter()
                    .map(|p| NewPriceVariant {
                        label: p.label,
                        price: p.price,
                        original_price: p.original_price,
                        is_default: p.is_default,
                    })
                    .collect(),
            })
            .await?;
        product_count += 1;
    }
    info!(count = product_count, "Products seeded");

    let content = ContentRepository::new(pool);
    for (index, seed) in config.social_links.into_iter().enumerate() {
        content
            .create_social_link(NewSocialLink {
                platform: seed.platform,
                name: seed.name,
                url: seed.url,
                icon: seed.icon,
                is_active: true,
                position: i32::try_from(index).unwrap_or(i32::MAX),
            })
            .await?;
    }

    for (index, seed) in config.footer.into_iter().enumerate() {
        let section = FooterSection::parse(&seed.section)
            .ok_or_else(|| format!("unknown footer section '{}'", seed.section))?;
        content
            .create_footer_content(NewFooterContent {
                section,
                title: seed.title,
                content: seed.content,
                links: seed.links,
                is_active: true,
                position: i32::try_from(index).unwrap_or(i32::MAX),
            })
            .await?;
    }

    if let Some(seed) = config.settings {
        let settings = SiteSettings {
            shop_name: seed.shop_name,
            shop_description: seed.shop_description,
            logo_url: seed.logo_url,
            whatsapp_number: seed.whatsapp_number,
            address: seed.address,
            phone: seed.phone,
            email: seed.email,
            schedule: seed.schedule,
            ..SiteSettings::default()
        };
        SettingsRepository::new(pool).upsert(&settings).await?;
        info!("Settings seeded");
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const VALID_SEED: &str = r#"
settings:
  shop_name: Boutique Fraîche
categories:
  - name: Légumes
farms:
  - name: Ferme du Soleil
products:
  - name: Tomates Cerises Bio
    category: Légumes
    farm: Ferme du Soleil
    prices:
      - label: 500g
        price: 4.5
        is_default: true
"#;

    #[test]
    fn test_valid_seed_parses_and_validates() {
        let config: SeedConfig = serde_yaml::from_str(VALID_SEED).unwrap();
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_unknown_category_is_reported() {
        let config: SeedConfig = serde_yaml::from_str(
            r"
products:
  - name: Tomates
    category: Inconnue
    prices:
      - label: 500g
        price: 4.5
",
        )
        .unwrap();

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Inconnue"));
    }

    #[test]
    fn test_product_without_prices_is_reported() {
        let config: SeedConfig = serde_yaml::from_str(
            r"
categories:
  - name: Fruits
products:
  - name: Pommes
    category: Fruits
    prices: []
",
        )
        .unwrap();

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("no price variants"));
    }

    #[test]
    fn test_unknown_footer_section_is_reported() {
        let config: SeedConfig = serde_yaml::from_str(
            r"
footer:
  - section: sidebar
    title: Liens
",
        )
        .unwrap();

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("sidebar"));
    }
}
