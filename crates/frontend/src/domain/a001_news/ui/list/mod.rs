pub mod mock;
pub mod store;

use std::rc::Rc;
use std::sync::Arc;

use contracts::domain::a001_news::{Category, NewsId, NewsListItem, PublishStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

use super::create::{NewsWizardModal, SaveFn};
use super::stats::NewsStatCards;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::data_table::{Align, CellValue, ColumnDef, DataTable, FilterDef, FilterOption, TableRow};
use crate::shared::date_utils::format_long_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_thousands;

pub use store::{use_news_store, NewsStore};

const PAGE_SIZE: usize = 10;
const SIMULATED_SAVE_DELAY_MS: u32 = 1200;

impl TableRow for NewsListItem {
    type Key = NewsId;

    fn row_key(&self) -> NewsId {
        self.id
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "title" => self.title.as_str().into(),
            "category" => self.category.as_str().into(),
            "created_at" => self.created_at.format("%Y-%m-%d").to_string().into(),
            "views" => CellValue::Number(self.views as f64),
            "read_time" => CellValue::Number(f64::from(self.read_time)),
            "status" => self.status.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

fn category_variant(category: Category) -> &'static str {
    match category {
        Category::Education => "success",
        Category::Activity => "info",
        Category::Announcement => "warning",
        Category::Article => "accent",
    }
}

fn status_variant(status: PublishStatus) -> &'static str {
    match status {
        PublishStatus::Published => "success",
        PublishStatus::Draft => "neutral",
    }
}

fn title_cell(row: &NewsListItem) -> AnyView {
    view! { <span class="news-title">{row.title.clone()}</span> }.into_any()
}

fn category_cell(row: &NewsListItem) -> AnyView {
    let category = row.category;
    view! {
        <Badge variant=category_variant(category) dot=true>{category.as_str()}</Badge>
    }
    .into_any()
}

fn created_cell(row: &NewsListItem) -> AnyView {
    view! {
        <span class="cell-meta">{icon("calendar")}{format_long_date(row.created_at)}</span>
    }
    .into_any()
}

fn views_cell(row: &NewsListItem) -> AnyView {
    view! {
        <span class="cell-meta">{icon("eye")}{format_thousands(row.views)}</span>
    }
    .into_any()
}

fn read_time_cell(row: &NewsListItem) -> AnyView {
    view! {
        <span class="cell-meta">{icon("clock")}{format!("{} menit", row.read_time)}</span>
    }
    .into_any()
}

fn status_cell(row: &NewsListItem) -> AnyView {
    let status = row.status;
    view! {
        <Badge variant=status_variant(status) dot=true>{status.label()}</Badge>
    }
    .into_any()
}

fn columns() -> Vec<ColumnDef<NewsListItem>> {
    vec![
        ColumnDef::new("title", "Judul")
            .sortable()
            .width(260.0)
            .cell(title_cell),
        ColumnDef::new("category", "Kategori").cell(category_cell),
        ColumnDef::new("created_at", "Tanggal Dibuat")
            .sortable()
            .cell(created_cell),
        ColumnDef::new("views", "Views")
            .sortable()
            .align(Align::Right)
            .cell(views_cell),
        ColumnDef::new("read_time", "Waktu Baca").cell(read_time_cell),
        ColumnDef::new("status", "Status").cell(status_cell),
    ]
}

fn filters() -> Vec<FilterDef> {
    vec![
        FilterDef::new(
            "category",
            "Kategori",
            Category::ALL
                .iter()
                .map(|c| FilterOption::new(c.as_str(), c.as_str()))
                .collect(),
        ),
        FilterDef::new(
            "status",
            "Status",
            PublishStatus::ALL
                .iter()
                .map(|s| FilterOption::new(s.label(), s.as_str()))
                .collect(),
        ),
    ]
}

/// Stand-in for a backend call: waits, then prepends the article to the store.
fn simulated_save(store: NewsStore, ctx: AppGlobalContext) -> SaveFn {
    Rc::new(move |article| {
        Box::pin(async move {
            ctx.begin_request();
            TimeoutFuture::new(SIMULATED_SAVE_DELAY_MS).await;
            store.prepend(article);
            ctx.end_request();
            Ok(())
        })
    })
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_news_store();
    let show_wizard = RwSignal::new(false);

    let stats = Signal::derive(move || store.stats());
    let total = move || store.items.with(Vec::len);

    let on_edit = Callback::new(|id: NewsId| {
        log::debug!("edit requested for news {}", id);
    });
    let on_delete = Callback::new(move |id: NewsId| {
        log::info!("news {} deleted", id);
        store.remove(id);
    });
    let on_bulk_delete = Callback::new(move |ids: Vec<NewsId>| {
        log::info!("{} news deleted", ids.len());
        store.remove_many(&ids);
    });

    let toolbar: ChildrenFn = Arc::new(move || {
        view! {
            <span class="data-table__total">
                "Total " <strong>{total}</strong> " berita"
            </span>
        }
        .into_any()
    });

    view! {
        <div class="page">
            <PageHeader
                title="Kelola Berita"
                subtitle="Manajemen konten berita & artikel pesantren"
                icon_name="news"
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| show_wizard.set(true)
                >
                    {icon("plus")}
                    " Tambah Baru"
                </Button>
            </PageHeader>

            <hr class="page__divider" />

            <NewsStatCards stats=stats />

            <DataTable
                data=store.items
                columns=columns()
                search_fields=vec!["title"]
                filters=filters()
                page_size=PAGE_SIZE
                search_placeholder="Cari berita..."
                selectable=true
                empty_message="Tidak ada berita ditemukan."
                on_bulk_delete=on_bulk_delete
                on_edit=on_edit
                on_delete=on_delete
                toolbar=toolbar
            />

            <Show when=move || show_wizard.get()>
                <NewsWizardModal
                    on_close=Callback::new(move |_| show_wizard.set(false))
                    on_save=simulated_save(store, ctx)
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::model::{derive_view, TableQuery};

    fn view_of(query: &TableQuery) -> Vec<i64> {
        derive_view(&mock::seed_news(), &["title"], &filters(), query, PAGE_SIZE)
            .rows
            .iter()
            .map(|r| r.id.value())
            .collect()
    }

    #[test]
    fn search_matches_titles_case_insensitively() {
        let mut query = TableQuery::default();
        query.set_search("SANTRI".to_string());
        assert_eq!(view_of(&query), vec![1, 3, 9]);
    }

    #[test]
    fn category_and_status_filters_combine() {
        let mut query = TableQuery::default();
        query.set_filter("category", "Kegiatan".to_string());
        assert_eq!(view_of(&query), vec![2, 5, 8, 11]);

        query.set_filter("status", "draft".to_string());
        assert_eq!(view_of(&query), vec![11]);
    }

    #[test]
    fn views_sort_numerically() {
        let mut query = TableQuery::default();
        query.toggle_sort("views");
        query.toggle_sort("views");
        let ids = view_of(&query);
        assert_eq!(&ids[..3], &[10, 9, 2]);
    }

    #[test]
    fn second_page_holds_the_remaining_rows() {
        let mut query = TableQuery::default();
        query.set_page(2);
        assert_eq!(view_of(&query), vec![11, 12]);
    }

    #[test]
    fn created_date_is_exposed_as_iso_text() {
        let row = &mock::seed_news()[7];
        assert_eq!(row.field("created_at"), CellValue::Text("2025-02-18".into()));
        assert_eq!(row.field("read_time"), CellValue::Number(3.0));
        assert_eq!(row.field("unknown"), CellValue::Empty);
    }
}
