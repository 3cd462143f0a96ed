//! Landing page

use leptos::*;

use crate::components::*;
use crate::content::{DOCS, FEATURES, REPOSITORY_URL, SIGNUP, TECH_STACK};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <HeroSection/>
            <FeaturesSection/>
            <TechStackSection/>
            <CtaSection/>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="hero" class="container py-24 md:py-32 space-y-8">
            <div class="mx-auto max-w-3xl text-center space-y-6">
                <div class="inline-flex items-center rounded-full border px-4 py-1.5 text-sm font-medium">
                    "🚀 Now available with AWS infrastructure"
                </div>
                <h1 class="text-4xl font-bold tracking-tight sm:text-6xl">
                    "Build Your SaaS Faster with AWS & Next.js"
                </h1>
                <p class="text-xl text-muted-foreground">
                    "A production-ready template with authentication, API, database, and beautiful UI components. "
                    "Deploy in minutes, not weeks."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <LinkButton href=SIGNUP.href size=ButtonSize::Lg class="w-full sm:w-auto">
                        "Get Started Free"
                    </LinkButton>
                    <LinkButton
                        href=DOCS.href
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Lg
                        class="w-full sm:w-auto"
                    >
                        "View Documentation"
                    </LinkButton>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="container py-24 bg-muted/50">
            <div class="text-center space-y-4 mb-12">
                <h2 class="text-3xl font-bold">"Everything You Need"</h2>
                <p class="text-muted-foreground max-w-2xl mx-auto">
                    "All the essential features for building modern SaaS applications, configured and ready to use"
                </p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {FEATURES
                    .into_iter()
                    .map(|feature| view! { <FeatureCard feature=feature/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TechStackSection() -> impl IntoView {
    view! {
        <section id="tech-stack" class="container py-24">
            <div class="text-center space-y-4 mb-12">
                <h2 class="text-3xl font-bold">"Modern Tech Stack"</h2>
                <p class="text-muted-foreground max-w-2xl mx-auto">
                    "Built with the latest technologies and best practices"
                </p>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-8 max-w-4xl mx-auto">
                {TECH_STACK
                    .into_iter()
                    .map(|tech| view! { <TechCard tech=tech/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section id="cta" class="container py-24 bg-primary text-primary-foreground">
            <div class="max-w-3xl mx-auto text-center space-y-6">
                <h2 class="text-3xl font-bold">"Ready to Build Your SaaS?"</h2>
                <p class="text-xl opacity-90">
                    "Clone the template and start building in minutes. No setup required."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center pt-4">
                    <LinkButton
                        href=SIGNUP.href
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Lg
                        class="w-full sm:w-auto"
                    >
                        "Get Started Now"
                    </LinkButton>
                    <LinkButton
                        href=REPOSITORY_URL
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Lg
                        class="w-full sm:w-auto bg-transparent border-primary-foreground text-primary-foreground hover:bg-primary-foreground hover:text-primary"
                    >
                        "View on GitHub"
                    </LinkButton>
                </div>
            </div>
        </section>
    }
}
