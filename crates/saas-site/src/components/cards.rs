//! Card components for the landing page

use leptos::*;

use crate::components::IconSvg;
use crate::content::{Feature, TechEntry};

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div
            class="rounded-lg border bg-card text-card-foreground shadow-sm"
            data-testid="feature-card"
        >
            <div class="flex flex-col space-y-1.5 p-6">
                <IconSvg icon=feature.icon class="h-10 w-10 text-primary mb-2"/>
                <h3 class="text-2xl font-semibold leading-none tracking-tight">{feature.title}</h3>
                <p class="text-sm text-muted-foreground">{feature.description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn TechCard(tech: TechEntry) -> impl IntoView {
    view! {
        <div class="text-center space-y-2" data-testid="tech-card">
            <div class="h-16 w-16 mx-auto rounded-lg bg-primary/10 flex items-center justify-center">
                <span class="text-2xl font-bold text-primary">{tech.monogram().to_string()}</span>
            </div>
            <div>
                <p class="font-semibold">{tech.name}</p>
                <p class="text-sm text-muted-foreground">{tech.description}</p>
            </div>
        </div>
    }
}
