use contracts::domain::a001_news::NewsStats;
use leptos::prelude::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::number_format::format_thousands;

/// The four summary cards above the news table and on the dashboard.
#[component]
pub fn NewsStatCards(#[prop(into)] stats: Signal<NewsStats>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            <StatCard
                label="Total Berita"
                icon_name="news"
                value=Signal::derive(move || stats.get().total.to_string())
                subtitle=Signal::derive(|| "Semua kategori".to_string())
            />
            <StatCard
                label="Total Views"
                icon_name="trending-up"
                accent="info"
                value=Signal::derive(move || format_thousands(stats.get().total_views))
                subtitle=Signal::derive(|| "Akumulasi semua berita".to_string())
            />
            <StatCard
                label="Published"
                icon_name="bookmark"
                accent="success"
                value=Signal::derive(move || stats.get().published.to_string())
                subtitle=Signal::derive(move || format!("{} draft tersisa", stats.get().drafts))
            />
            <StatCard
                label="Rata-rata Views"
                icon_name="bar-chart"
                accent="accent"
                value=Signal::derive(move || stats.get().average_views.to_string())
                subtitle=Signal::derive(|| "Per artikel".to_string())
            />
        </div>
    }
}
