use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "info", "accent", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Show a coloured dot before the content
    #[prop(optional)]
    dot: bool,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "info" => "badge--info",
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {dot.then(|| view! { <span class="badge__dot"></span> })}
            {children()}
        </span>
    }
}
