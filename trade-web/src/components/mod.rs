pub mod loading;
pub mod navbar;
pub mod toast;
pub mod trade_table;

pub use loading::LoadingScreen;
pub use navbar::Navbar;
pub use toast::{provide_toaster, use_toaster, ToastHost, Toaster};
pub use trade_table::{TradeRow, TradeTable};
