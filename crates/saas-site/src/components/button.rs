//! Link-styled buttons

use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Secondary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
}

const BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium \
                    transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
                    focus-visible:ring-offset-2";

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
            ButtonVariant::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
        }
    }
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Lg => "h-11 rounded-md px-8",
        }
    }
}

/// Full class list for a button; `extra` is appended last so it can override.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut class = format!("{BASE} {} {}", variant.classes(), size.classes());
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn LinkButton(
    href: &'static str,
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(optional)]
    size: ButtonSize,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=button_class(variant, size, class)>
            {children()}
        </a>
    }
}
