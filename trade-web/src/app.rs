//! Application shell: contexts, router, and the protected route tree.

use leptos::prelude::*;
use leptos_router::{
    components::{Outlet, ParentRoute, Route, Router, Routes, A},
    path,
};

use crate::components::{provide_toaster, Navbar, ToastHost};
use crate::pages::{
    AsksPage, BidsPage, DashboardPage, ForgotPasswordPage, HomePage, InvestmentsPage, LoginPage,
    MaintenancePage, PlansPage, ReferralsPage, RegisterPage, TransactionsPage, VerifyTelegramPage,
};
use crate::session::{provide_session_context, SessionGate};

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();
    provide_toaster();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <ToastHost/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                    <Route path=path!("/maintenance") view=MaintenancePage/>
                    // Deliberately outside the gate: the gate redirects here,
                    // so wrapping it would loop.
                    <Route path=path!("/verify-telegram") view=VerifyTelegramPage/>
                    <ParentRoute path=path!("") view=ProtectedShell>
                        <Route path=path!("dashboard") view=DashboardPage/>
                        <Route path=path!("bids") view=BidsPage/>
                        <Route path=path!("asks") view=AsksPage/>
                        <Route path=path!("transactions") view=TransactionsPage/>
                        <Route path=path!("investments") view=InvestmentsPage/>
                        <Route path=path!("referrals") view=ReferralsPage/>
                        <Route path=path!("plans") view=PlansPage/>
                    </ParentRoute>
                </Routes>
            </div>
        </Router>
    }
}

/// Every route under here renders only after the session gate admits the user.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <SessionGate>
            <Outlet/>
        </SessionGate>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <div class="card">
                <h1>"404 - Page not found"</h1>
                <p>"The page you are looking for does not exist."</p>
                <A href="/">
                    <span class="btn">"Go home"</span>
                </A>
            </div>
        </div>
    }
}
