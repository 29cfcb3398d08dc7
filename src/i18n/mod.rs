mod countries;

pub use countries::{Country, all_countries, country_for_alpha2, country_for_calling_code};
