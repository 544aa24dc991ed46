use std::fmt::Display;

use itertools::Itertools;
use tab_set::TabbedFieldArray;

pub type ProductTabs = TabbedFieldArray<Vec<Product>>;

/// Form entry edited under one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub file: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            file: "New Tab".to_owned(),
            name: String::new(),
            description: String::new(),
            price: "0".to_owned(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    #[default]
    Name,
    File,
    Description,
    Price,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::File, Self::Description, Self::Price];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Product Name",
            Self::File => "Product File",
            Self::Description => "Product Desc",
            Self::Price => "Product Price",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::File,
            Self::File => Self::Description,
            Self::Description => Self::Price,
            Self::Price => Self::Name,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Price,
            Self::File => Self::Name,
            Self::Description => Self::File,
            Self::Price => Self::Description,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub file: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("Product Name is required")]
    NameRequired,
    #[error("Product Description is required")]
    DescriptionRequired,
    #[error("Product Price {0:?} is not a number")]
    InvalidPrice(String),
}

impl ProductError {
    pub const fn field(&self) -> Field {
        match self {
            Self::NameRequired => Field::Name,
            Self::DescriptionRequired => Field::Description,
            Self::InvalidPrice(_) => Field::Price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Product is required")]
    NoProducts,
    #[error("Tab {}: {source}", .index + 1)]
    Product {
        index: usize,
        #[source]
        source: ProductError,
    },
}

impl Product {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::File => &self.file,
            Field::Description => &self.description,
            Field::Price => &self.price,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::File => &mut self.file,
            Field::Description => &mut self.description,
            Field::Price => &mut self.price,
        }
    }

    /// All problems of the entry, in field order.
    pub fn errors(&self) -> Vec<ProductError> {
        [
            self.name.is_empty().then_some(ProductError::NameRequired),
            self.description
                .is_empty()
                .then_some(ProductError::DescriptionRequired),
            self.parse_price().err(),
        ]
        .into_iter()
        .flatten()
        .collect_vec()
    }

    pub fn validate(&self) -> Result<ValidProduct, ProductError> {
        if let Some(error) = self.errors().into_iter().next() {
            return Err(error);
        }

        Ok(ValidProduct {
            file: self.file.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.parse_price()?,
        })
    }

    fn parse_price(&self) -> Result<f64, ProductError> {
        let price = self.price.trim();
        if price.is_empty() {
            return Ok(0.0);
        }
        price
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(|| ProductError::InvalidPrice(self.price.clone()))
    }
}

pub fn validate(products: &[Product]) -> Result<Vec<ValidProduct>, FormError> {
    if products.is_empty() {
        return Err(FormError::NoProducts);
    }

    products
        .iter()
        .enumerate()
        .map(|(index, product)| {
            product
                .validate()
                .map_err(|source| FormError::Product { index, source })
        })
        .collect()
}
