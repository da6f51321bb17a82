mod get_portfolio_page_service;

pub use get_portfolio_page_service::GetPortfolioPageService;
