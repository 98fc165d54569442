//! Currency reference data adapters.

mod static_currency_table;

pub use static_currency_table::StaticCurrencyTable;
