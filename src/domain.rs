use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name_es: String,
    pub name_en: String,
    pub description_es: String,
    pub description_en: String,
    pub base_price: f64,
    pub colors: Vec<String>,
    pub images: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub name: String,
    pub color: String,
    pub hammock_type: String,
    pub phone: String,
    pub message: Option<String>,
}
