//! Main application component and page shell

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::*;
use crate::content::SITE;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="en"/>
        <Title text=SITE.title/>
        <Meta name="description" content=SITE.description/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg"/>
        <Link rel="preconnect" href="https://fonts.googleapis.com"/>
        <Link
            rel="stylesheet"
            href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap"
        />
        <Stylesheet id="leptos" href="/pkg/saas-site.css"/>
        <Body class="font-sans antialiased bg-background text-foreground"/>

        <Router fallback=not_found>
            <div class="flex min-h-screen flex-col max-w-screen-xl mx-auto">
                <SiteHeader/>
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=LandingPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

/// Rendered by the router when no route matches.
fn not_found() -> View {
    view! { <NotFoundPage/> }.into_view()
}
