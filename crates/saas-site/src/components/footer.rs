//! Site footer

use leptos::*;

use crate::content::{FOOTER_COLUMNS, SITE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t">
            <div class="container py-12 grid grid-cols-2 md:grid-cols-4 gap-8">
                <div class="col-span-2 space-y-3">
                    <a href="/" class="flex items-center space-x-2">
                        <div class="h-6 w-6 rounded-md bg-primary flex items-center justify-center">
                            <span class="text-primary-foreground font-bold text-sm">{SITE.brand_mark}</span>
                        </div>
                        <span class="font-semibold">{SITE.brand}</span>
                    </a>
                    <p class="text-sm text-muted-foreground max-w-xs">
                        "Production-ready SaaS starter built on AWS."
                    </p>
                </div>
                {FOOTER_COLUMNS
                    .into_iter()
                    .map(|column| view! {
                        <div class="space-y-3">
                            <h4 class="text-sm font-semibold">{column.heading}</h4>
                            <ul class="space-y-2">
                                {column
                                    .links
                                    .iter()
                                    .map(|link| view! {
                                        <li>
                                            <a
                                                href=link.href
                                                class="text-sm text-muted-foreground hover:text-foreground transition-colors"
                                            >
                                                {link.label}
                                            </a>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="container border-t py-6">
                <p class="text-center text-sm text-muted-foreground">
                    "© 2024 " {SITE.brand} ". All rights reserved."
                </p>
            </div>
        </footer>
    }
}
