//! Sample catalog seeding
//!
//! Inserts a small bilingual starter catalog when the product collection is
//! empty. Gated behind the `SEED_SAMPLE_DATA` config flag; existing data is
//! never touched.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::ProductCreate;
use crate::db::repository::{ProductRepository, RepoResult};

/// Seed the sample catalog if the product collection is empty
pub async fn seed_sample_catalog(db: &Surreal<Db>) -> RepoResult<()> {
    let repo = ProductRepository::new(db.clone());
    if repo.count().await? > 0 {
        tracing::debug!("Catalog already populated, skipping sample data");
        return Ok(());
    }

    for product in sample_products() {
        repo.create(product).await?;
    }
    tracing::info!("Sample catalog seeded");
    Ok(())
}

fn sample_products() -> Vec<ProductCreate> {
    vec![
        ProductCreate {
            name: "Elite Whey Protein".into(),
            name_ar: "بروتين إليت واي".into(),
            price: 850,
            category: "protein".into(),
            image: Some("/api/placeholder/300/300".into()),
            description: Some("Premium whey protein isolate for maximum muscle growth".into()),
            description_ar: Some("بروتين واي عالي الجودة لنمو العضلات الأقصى".into()),
            flavors: Some(vec![
                "Chocolate".into(),
                "Vanilla".into(),
                "Strawberry".into(),
                "Cookies & Cream".into(),
            ]),
            in_stock: Some(true),
            is_offer: None,
            original_price: None,
            discount_percentage: None,
        },
        ProductCreate {
            name: "Elite Mass Gainer".into(),
            name_ar: "إليت لزيادة الكتلة".into(),
            price: 1200,
            category: "massGainer".into(),
            image: Some("/api/placeholder/300/300".into()),
            description: Some("High-calorie mass gainer for serious size gains".into()),
            description_ar: Some("مكمل عالي السعرات لزيادة الكتلة".into()),
            flavors: Some(vec!["Chocolate".into(), "Vanilla".into(), "Banana".into()]),
            in_stock: Some(true),
            is_offer: Some(true),
            original_price: Some(1400),
            discount_percentage: Some(20),
        },
        ProductCreate {
            name: "Elite Pre-Workout".into(),
            name_ar: "إليت ما قبل التمرين".into(),
            price: 650,
            category: "energyProducts".into(),
            image: Some("/api/placeholder/300/300".into()),
            description: Some("Explosive energy and focus for intense workouts".into()),
            description_ar: Some("طاقة انفجارية وتركيز للتمارين المكثفة".into()),
            flavors: Some(vec![
                "Fruit Punch".into(),
                "Blue Raspberry".into(),
                "Green Apple".into(),
            ]),
            in_stock: Some(true),
            is_offer: None,
            original_price: None,
            discount_percentage: None,
        },
    ]
}
