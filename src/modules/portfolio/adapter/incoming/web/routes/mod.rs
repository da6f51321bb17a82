mod get_portfolio_page;

pub use get_portfolio_page::*;
