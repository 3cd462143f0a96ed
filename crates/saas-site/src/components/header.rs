//! Site header with collapsible mobile menu

use leptos::*;

use crate::components::{button_class, ButtonSize, ButtonVariant, Icon, IconSvg};
use crate::content::{LOGIN, NAV_LINKS, SIGNUP, SITE};
use crate::menu::{MenuEvent, MenuState};

const NAV_LINK_CLASS: &str = "text-sm font-medium text-muted-foreground hover:text-foreground transition-colors";

#[component]
pub fn SiteHeader() -> impl IntoView {
    let menu = create_rw_signal(MenuState::default());

    view! {
        <header class="sticky top-0 z-50 w-full border-b bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60">
            <nav class="container flex h-16 items-center justify-between">
                // Logo
                <a href="/" class="flex items-center space-x-2">
                    <div class="h-8 w-8 rounded-lg bg-primary flex items-center justify-center">
                        <span class="text-primary-foreground font-bold text-xl">{SITE.brand_mark}</span>
                    </div>
                    <span class="font-bold text-xl">{SITE.brand}</span>
                </a>

                // Desktop Nav
                <div class="hidden md:flex items-center space-x-6">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| view! {
                            <a href=link.href class=NAV_LINK_CLASS data-testid="nav-link">{link.label}</a>
                        })
                        .collect_view()}
                </div>

                // Desktop auth
                <div class="hidden md:flex items-center space-x-4">
                    <a href=LOGIN.href class=button_class(ButtonVariant::Ghost, ButtonSize::Default, "")>
                        {LOGIN.label}
                    </a>
                    <a href=SIGNUP.href class=button_class(ButtonVariant::Default, ButtonSize::Default, "")>
                        {SIGNUP.label}
                    </a>
                </div>

                // Mobile menu button
                <button
                    type="button"
                    class="md:hidden"
                    aria-controls="mobile-menu"
                    aria-expanded=move || menu.get().aria_expanded()
                    aria-label=move || menu.get().toggle_label()
                    on:click=move |_| dispatch_menu_event(menu, MenuEvent::Toggle)
                >
                    <Show
                        when=move || menu.get().is_open()
                        fallback=|| view! { <IconSvg icon=Icon::Menu class="h-6 w-6"/> }
                    >
                        <IconSvg icon=Icon::Close class="h-6 w-6"/>
                    </Show>
                </button>
            </nav>

            // Mobile menu
            <Show when=move || menu.get().is_open()>
                <MobileMenu menu=menu/>
            </Show>
        </header>
    }
}

/// Applies `event` to the header's menu signal.
pub fn dispatch_menu_event(menu: RwSignal<MenuState>, event: MenuEvent) {
    menu.update(|state| *state = state.apply(event));
    tracing::debug!(?event, open = menu.get_untracked().is_open(), "mobile menu");
}

/// Panel shown while the menu is open. Every link closes it.
#[component]
fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    let select = move |_: ev::MouseEvent| dispatch_menu_event(menu, MenuEvent::SelectLink);

    view! {
        <div id="mobile-menu" class="md:hidden border-t bg-background" data-testid="mobile-menu">
            <div class="container py-4 space-y-4">
                {NAV_LINKS
                    .into_iter()
                    .map(|link| view! {
                        <a
                            href=link.href
                            class=format!("block {NAV_LINK_CLASS}")
                            data-testid="mobile-link"
                            on:click=select
                        >
                            {link.label}
                        </a>
                    })
                    .collect_view()}
                <div class="pt-4 space-y-2">
                    <a
                        href=LOGIN.href
                        class=button_class(ButtonVariant::Outline, ButtonSize::Default, "w-full")
                        data-testid="mobile-link"
                        on:click=select
                    >
                        {LOGIN.label}
                    </a>
                    <a
                        href=SIGNUP.href
                        class=button_class(ButtonVariant::Default, ButtonSize::Default, "w-full")
                        data-testid="mobile-link"
                        on:click=select
                    >
                        {SIGNUP.label}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render() -> String {
        leptos::ssr::render_to_string(|| view! { <SiteHeader/> }).to_string()
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let runtime = create_runtime();
        let menu = create_rw_signal(MenuState::default());

        dispatch_menu_event(menu, MenuEvent::Toggle);
        assert!(menu.get_untracked().is_open());

        dispatch_menu_event(menu, MenuEvent::Toggle);
        assert!(!menu.get_untracked().is_open());

        runtime.dispose();
    }

    #[test]
    fn test_select_link_closes_open_menu() {
        let runtime = create_runtime();
        let menu = create_rw_signal(MenuState::default());

        dispatch_menu_event(menu, MenuEvent::Toggle);
        dispatch_menu_event(menu, MenuEvent::SelectLink);
        assert_eq!(menu.get_untracked(), MenuState::Closed);

        dispatch_menu_event(menu, MenuEvent::SelectLink);
        assert_eq!(menu.get_untracked(), MenuState::Closed);

        runtime.dispose();
    }

    #[test]
    fn test_open_panel_lists_every_link() {
        let html = leptos::ssr::render_to_string(|| {
            let menu = create_rw_signal(MenuState::Open);
            view! { <MobileMenu menu=menu/> }
        })
        .to_string();

        assert_eq!(
            html.matches(r#"data-testid="mobile-link""#).count(),
            NAV_LINKS.len() + 2
        );
        for link in NAV_LINKS.iter().chain([&LOGIN, &SIGNUP]) {
            assert!(html.contains(&format!(r#"href="{}""#, link.href)), "{}", link.label);
        }
    }

    #[test]
    fn test_initial_render_is_closed() {
        let html = render();
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"aria-label="Open menu""#));
        assert!(!html.contains(r#"data-testid="mobile-menu""#));
    }

    #[test]
    fn test_desktop_nav_lists_links_in_order() {
        let html = render();
        assert_eq!(html.matches(r#"data-testid="nav-link""#).count(), NAV_LINKS.len());

        let positions: Vec<usize> = NAV_LINKS
            .iter()
            .map(|link| html.find(&format!(r#"href="{}""#, link.href)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_auth_links_present() {
        let html = render();
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains(r#"href="/signup""#));
    }
}
