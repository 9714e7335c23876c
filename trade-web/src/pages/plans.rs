//! Investment plans offered by the platform.

use leptos::prelude::*;
use shared::Plan;

use crate::api::endpoints;
use crate::utils::format::format_usdt;

#[component]
pub fn PlansPage() -> impl IntoView {
    let (plans, set_plans) = signal(Vec::<Plan>::new());

    leptos::task::spawn_local(async move {
        match endpoints::plans().await {
            Ok(envelope) => {
                if let Some(plans) = envelope.into_data() {
                    set_plans.set(plans);
                }
            }
            Err(err) => log::error!("failed to load plans: {err}"),
        }
    });

    view! {
        <div class="page plans">
            <h1>"Investment plans"</h1>
            <div class="plan-cards">
                {move || {
                    plans
                        .get()
                        .into_iter()
                        .map(|plan| {
                            view! {
                                <div class="card plan-card">
                                    <h2>{plan.name.clone()}</h2>
                                    <p>
                                        {format!(
                                            "{} – {}",
                                            format_usdt(&plan.minimum),
                                            format_usdt(&plan.maximum),
                                        )}
                                    </p>
                                    <p class="interest">{format!("{}% interest", plan.interest)}</p>
                                    <p class="duration">{format!("{} days", plan.duration_days)}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
