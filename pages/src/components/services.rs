//! Services grid - one Bootstrap card per entry of [`SERVICES`].

use super::Icon;
use crate::content::{SERVICES, SERVICES_HEADING, SERVICES_LEAD};
use crate::types::Service;
use leptos::prelude::*;

/// Services section with a card per offering.
#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="content-section bg-light" data-section="services">
            <div class="container">
                <div class="text-center mb-5">
                    <h2 class="display-5 fw-bold">{SERVICES_HEADING}</h2>
                    <p class="lead">{SERVICES_LEAD}</p>
                </div>
                <div class="row g-4">
                    {SERVICES.iter().map(|service| view! {
                        <ServiceCard service=*service />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <div class="col-md-4">
            <div class="card service-card h-100 border-0 shadow-sm">
                <div class="card-body text-center p-4">
                    <div class="mb-3">
                        <Icon path=service.icon size="48" class="service-icon" />
                    </div>
                    <h5 class="card-title">{service.title}</h5>
                    <p class="card-text">{service.description}</p>
                </div>
            </div>
        </div>
    }
}
