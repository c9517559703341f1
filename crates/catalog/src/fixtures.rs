//! Seeded demo catalog.

use shopfront_core::{Price, ProductId};

use crate::product::Product;

/// The six demo products the shop ships with.
pub fn seeded() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Wireless Pro Headphones".to_string(),
            brand: "AudioTech".to_string(),
            description: "Premium wireless headphones with noise cancellation and superior \
                          sound quality for professionals and music lovers."
                .to_string(),
            price: Price::from_cents(12_999),
            original_price: Some(Price::from_cents(15_999)),
            discount: Some(18.75),
            image: "assets/headphones.jpg".to_string(),
            category: "Audio".to_string(),
            in_stock: true,
            rating: 4.8,
            reviews: 245,
        },
        Product {
            id: ProductId::new(2),
            name: "Smartphone Pro Max".to_string(),
            brand: "TechCorp".to_string(),
            description: "Latest smartphone with advanced camera system, powerful processor, \
                          and all-day battery life."
                .to_string(),
            price: Price::from_cents(89_999),
            original_price: Some(Price::from_cents(99_999)),
            discount: Some(10.0),
            image: "assets/smartphone.jpg".to_string(),
            category: "Mobile".to_string(),
            in_stock: true,
            rating: 4.6,
            reviews: 482,
        },
        Product {
            id: ProductId::new(3),
            name: "UltraBook Pro".to_string(),
            brand: "CompuTech".to_string(),
            description: "Lightweight laptop with high-performance processor, stunning \
                          display, and premium build quality."
                .to_string(),
            price: Price::from_cents(129_999),
            original_price: Some(Price::from_cents(149_999)),
            discount: Some(13.33),
            image: "assets/laptop.jpg".to_string(),
            category: "Computers".to_string(),
            in_stock: true,
            rating: 4.9,
            reviews: 156,
        },
        Product {
            id: ProductId::new(4),
            name: "Smart Fitness Watch".to_string(),
            brand: "WearTech".to_string(),
            description: "Advanced fitness tracker with heart rate monitoring, GPS, and \
                          comprehensive health insights."
                .to_string(),
            price: Price::from_cents(24_999),
            original_price: Some(Price::from_cents(29_999)),
            discount: Some(16.67),
            // Placeholder asset until a real shot exists.
            image: "assets/headphones.jpg".to_string(),
            category: "Wearables".to_string(),
            in_stock: false,
            rating: 4.5,
            reviews: 89,
        },
        Product {
            id: ProductId::new(5),
            name: "Portable Bluetooth Speaker".to_string(),
            brand: "SoundWave".to_string(),
            description: "Compact wireless speaker with 360-degree sound, waterproof design, \
                          and 12-hour battery life."
                .to_string(),
            price: Price::from_cents(7_999),
            original_price: Some(Price::from_cents(9_999)),
            discount: Some(20.0),
            image: "assets/smartphone.jpg".to_string(),
            category: "Audio".to_string(),
            in_stock: true,
            rating: 4.4,
            reviews: 312,
        },
        Product {
            id: ProductId::new(6),
            name: "Gaming Controller Pro".to_string(),
            brand: "GameTech".to_string(),
            description: "Professional gaming controller with customizable buttons, precision \
                          triggers, and wireless connectivity."
                .to_string(),
            price: Price::from_cents(6_999),
            original_price: Some(Price::from_cents(8_999)),
            discount: Some(22.22),
            image: "assets/laptop.jpg".to_string(),
            category: "Gaming".to_string(),
            in_stock: true,
            rating: 4.7,
            reviews: 198,
        },
    ]
}
