use contracts::domain::a001_news::{NewsListItem, PublishStatus};
use leptos::prelude::*;

use crate::domain::a001_news::ui::list::use_news_store;
use crate::domain::a001_news::ui::stats::NewsStatCards;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_long_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_thousands;
use crate::system::auth::context::use_auth;

const LATEST_COUNT: usize = 5;

/// Newest first; ties keep the higher id first.
fn latest(items: &[NewsListItem], count: usize) -> Vec<NewsListItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    sorted.truncate(count);
    sorted
}

/// Landing page after login
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let store = use_news_store();
    let (auth_state, _) = use_auth();

    let stats = Signal::derive(move || store.stats());
    let greeting = move || {
        auth_state.with(|s| match &s.user_info {
            Some(user) => format!("Selamat datang, {}", user.display_name()),
            None => "Selamat datang".to_string(),
        })
    };
    let latest_items = move || store.items.with(|items| latest(items, LATEST_COUNT));

    view! {
        <div class="page">
            <PageHeader title="Dashboard" icon_name="layout-dashboard">
                <span class="page-header__greeting">{greeting}</span>
            </PageHeader>

            <NewsStatCards stats=stats />

            <section class="card">
                <div class="card__header">
                    <h2 class="card__title">"Berita Terbaru"</h2>
                    <a class="card__link" href="/protected/berita">
                        "Lihat semua"
                        {icon("chevron-right")}
                    </a>
                </div>
                <Show
                    when=move || store.items.with(|items| !items.is_empty())
                    fallback=|| view! { <div class="card__empty">"Belum ada berita."</div> }
                >
                    <ul class="latest-list">
                        <For
                            each=latest_items
                            key=|item| item.id
                            children=move |item| {
                                let status = item.status;
                                view! {
                                    <li class="latest-list__item">
                                        <div class="latest-list__main">
                                            <span class="latest-list__title">{item.title.clone()}</span>
                                            <span class="latest-list__meta">
                                                {icon("calendar")}
                                                {format_long_date(item.created_at)}
                                                " · "
                                                {item.category.as_str()}
                                            </span>
                                        </div>
                                        <span class="latest-list__views">
                                            {icon("eye")}
                                            {format_thousands(item.views)}
                                        </span>
                                        {(status == PublishStatus::Draft).then(|| view! {
                                            <Badge variant="neutral">"Draft"</Badge>
                                        })}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_news::ui::list::mock::seed_news;

    #[test]
    fn latest_is_newest_first() {
        let ids: Vec<i64> = latest(&seed_news(), 3).iter().map(|i| i.id.value()).collect();
        // seven articles share 2025-02-20; the higher ids come first
        assert_eq!(ids, vec![7, 6, 5]);
    }

    #[test]
    fn latest_never_exceeds_the_list() {
        assert_eq!(latest(&seed_news()[..2], LATEST_COUNT).len(), 2);
    }
}
