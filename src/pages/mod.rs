//! Page components for the portfolio.

mod home;

pub use home::Home;
