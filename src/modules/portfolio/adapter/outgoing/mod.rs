mod portfolio_query_postgrest;

pub use portfolio_query_postgrest::PortfolioQueryPostgrest;
