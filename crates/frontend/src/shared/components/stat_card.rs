use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Line below the value
    #[prop(into)]
    subtitle: Signal<String>,
    /// Colour modifier: "primary", "info", "success" or "accent"
    #[prop(optional)]
    accent: Option<&'static str>,
) -> impl IntoView {
    let icon_class = format!(
        "stat-card__icon stat-card__icon--{}",
        accent.unwrap_or("primary")
    );

    view! {
        <div class="stat-card">
            <div class=icon_class>
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__subtitle">{move || subtitle.get()}</div>
            </div>
        </div>
    }
}
