//! Button and link-button components

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Spotify green - for the main call to action
    Primary,
    /// Gray background - for secondary actions
    Secondary,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-sm
    Small,
    /// Standard padding
    Medium,
}

fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let base = match size {
        ButtonSize::Small => "inline-flex items-center gap-2 text-sm rounded-full transition-colors",
        ButtonSize::Medium => "inline-flex items-center gap-2 font-semibold rounded-full transition-colors",
    };

    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5",
        ButtonSize::Medium => "px-6 py-3",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-green-600 hover:bg-green-500 text-white"
        }
        ButtonVariant::Secondary => {
            "bg-gray-700 hover:bg-gray-600 text-green-400"
        }
    };

    match extra {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    }
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] testid: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = button_class(variant, size, None);

    rsx! {
        button {
            class: "{computed_class}",
            r#type: "button",
            "data-testid": testid,
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

/// Anchor styled as a button. External targets open in a new tab.
#[component]
pub fn LinkButton(
    href: String,
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] external: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] testid: Option<&'static str>,
    children: Element,
) -> Element {
    let computed_class = button_class(variant, size, class.as_deref());

    rsx! {
        a {
            class: "{computed_class}",
            href: "{href}",
            target: if external { Some("_blank") } else { None },
            rel: if external { Some("noopener noreferrer") } else { None },
            "data-testid": testid,
            {children}
        }
    }
}
