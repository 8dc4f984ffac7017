pub mod money;
pub mod product;

pub use money::{Money, MoneyError};
pub use product::{NewProduct, Product, ProductError};
