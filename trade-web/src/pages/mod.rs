//! Page components. Each protected page assumes the session gate has already
//! hydrated the user context; page-specific data is fetched ad hoc.

pub mod asks;
pub mod bids;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod investments;
pub mod login;
pub mod maintenance;
pub mod plans;
pub mod referrals;
pub mod register;
pub mod transactions;
pub mod verify_telegram;

pub use asks::AsksPage;
pub use bids::BidsPage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use investments::InvestmentsPage;
pub use login::LoginPage;
pub use maintenance::MaintenancePage;
pub use plans::PlansPage;
pub use referrals::ReferralsPage;
pub use register::RegisterPage;
pub use transactions::TransactionsPage;
pub use verify_telegram::VerifyTelegramPage;

/// The server's message when it has one, a fallback otherwise.
pub(crate) fn message_or(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
