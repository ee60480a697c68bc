mod category;
mod product;

pub use category::{CategoryChangeset, CategoryRow, NewCategoryRow};
pub use product::{
    NewProductRow, PRICE_OUT_OF_RANGE, ProductChangeset, ProductRow, price_fits_column,
};
