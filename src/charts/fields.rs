use crate::domain::listing::{format_number, Listing};

/// Numeric selectors over a `Listing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Score,
    Price,
    Bedrooms,
    Bathrooms,
    LivingArea,
    YearBuilt,
    PricePerSqft,
}

impl Metric {
    pub fn of(self, l: &Listing) -> f64 {
        match self {
            Metric::Score => l.score,
            Metric::Price => l.price,
            Metric::Bedrooms => l.bedrooms,
            Metric::Bathrooms => l.bathrooms,
            Metric::LivingArea => l.living_area,
            Metric::YearBuilt => l.year_built,
            Metric::PricePerSqft => l.price_per_sqft(),
        }
    }
}

/// Category selectors. Numeric fields are stringified as JSON would print them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    HomeType,
    HomeStatus,
    City,
    Zipcode,
    Bedrooms,
    Bathrooms,
    YearBuilt,
}

impl Category {
    pub fn of(self, l: &Listing) -> String {
        match self {
            Category::HomeType => l.home_type.clone(),
            Category::HomeStatus => l.home_status.clone(),
            Category::City => l.city.clone(),
            Category::Zipcode => l.zipcode.clone(),
            Category::Bedrooms => format_number(l.bedrooms),
            Category::Bathrooms => format_number(l.bathrooms),
            Category::YearBuilt => format_number(l.year_built),
        }
    }
}
