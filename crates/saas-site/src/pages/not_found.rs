//! Fallback for unmatched routes

use leptos::*;

use crate::components::{ButtonVariant, LinkButton};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Outside a request (tests, client-side routing) there is no response to mark.
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="container py-24">
            <div class="mx-auto max-w-md text-center space-y-6">
                <p class="text-sm font-semibold text-primary">"404"</p>
                <h1 class="text-3xl font-bold tracking-tight">"Page not found"</h1>
                <p class="text-muted-foreground">
                    "The page you are looking for does not exist or has moved."
                </p>
                <LinkButton href="/" variant=ButtonVariant::Outline>
                    "Back to home"
                </LinkButton>
            </div>
        </section>
    }
}
