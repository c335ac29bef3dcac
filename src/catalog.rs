use std::collections::HashMap;

use crate::domain::Product;

// Color palette names used across the site. Image files exist for every
// palette color under /products/<id>/.
pub static COLOR_PALETTE: [&str; 4] = ["tabaco", "marfil", "negro", "blanco"];

static IMAGE_BASE_PATH: &str = "/products";

fn product(
    id: &str,
    name_es: &str,
    name_en: &str,
    description_es: &str,
    description_en: &str,
    base_price: f64,
) -> Product {
    let colors: Vec<String> = COLOR_PALETTE.iter().map(|c| String::from(*c)).collect();
    let images: HashMap<String, String> = colors
        .iter()
        .map(|c| (c.clone(), format!("{}/{}/{}.jpg", IMAGE_BASE_PATH, id, c)))
        .collect();

    Product {
        id: String::from(id),
        name_es: String::from(name_es),
        name_en: String::from(name_en),
        description_es: String::from(description_es),
        description_en: String::from(description_en),
        base_price,
        colors,
        images,
    }
}

/// The fixed catalog. Rebuilt on every call; products change rarely enough
/// that redeploying beats loading them from config or a database.
pub fn build_products() -> Vec<Product> {
    vec![
        product(
            "matrimonial",
            "Matrimonial",
            "Matrimonial",
            "Amplia, elegante y perfecta para compartir.",
            "Spacious, elegant and perfect for two.",
            220.0,
        ),
        product(
            "unipersonal",
            "Unipersonal",
            "Single",
            "Clásica y cómoda para relajarse.",
            "Classic and comfortable for daily rest.",
            140.0,
        ),
        product(
            "familiar",
            "Familiar",
            "Family",
            "Resistente y amplia para toda la familia.",
            "Durable and roomy for the whole family.",
            280.0,
        ),
        product(
            "hamacasilla",
            "Hamacasilla",
            "Hammock Chair",
            "Silla colgante artesanal para espacios íntimos.",
            "Artisanal hanging chair for cozy corners.",
            160.0,
        ),
        product(
            "chino",
            "Chino",
            "Chino",
            "Trenzado fino con estética minimalista.",
            "Fine weave with minimal aesthetic.",
            180.0,
        ),
        product(
            "montanera",
            "Montañera",
            "Montañera",
            "Inspirada en la tradición, ideal para exteriores.",
            "Tradition-inspired, perfect for outdoors.",
            200.0,
        ),
        product(
            "ninos",
            "Niños",
            "Kids",
            "Segura y divertida para los más pequeños.",
            "Safe and fun for the little ones.",
            110.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_products_in_fixed_order() {
        let products = build_products();

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "matrimonial",
                "unipersonal",
                "familiar",
                "hamacasilla",
                "chino",
                "montanera",
                "ninos"
            ]
        );
    }

    #[test]
    fn every_declared_color_has_an_image() {
        for product in build_products() {
            assert!(!product.colors.is_empty(), "{} has no colors", product.id);
            for color in &product.colors {
                let image = product.images.get(color);
                assert!(
                    image.is_some(),
                    "{} is missing an image for color {}",
                    product.id,
                    color
                );
                assert_eq!(
                    image.unwrap(),
                    &format!("/products/{}/{}.jpg", product.id, color)
                );
            }
            assert_eq!(product.images.len(), product.colors.len());
        }
    }

    #[test]
    fn build_products_is_idempotent() {
        assert_eq!(build_products(), build_products());
    }

    #[test]
    fn base_prices_are_non_negative() {
        for product in build_products() {
            assert!(product.base_price >= 0.0, "{} has a negative price", product.id);
        }
    }
}
