use super::view_model::NewsWizardViewModel;
use super::wizard::{
    FormField, MarkdownAction, NewsWizard, EXCERPT_MAX_CHARS, CONTENT_MAX_CHARS, MAX_READ_TIME,
    MAX_TAGS, MIN_READ_TIME, TITLE_MAX_CHARS,
};
use crate::shared::date_utils::{datetime_local_min, format_schedule};
use crate::shared::icons::icon;
use contracts::domain::a001_news::{estimate_read_time, Category, PublishStatus};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Colour class of a character counter: warns above 75%, alarms above 90%.
fn char_count_class(current: usize, max: usize) -> &'static str {
    let ratio = current as f64 / max.max(1) as f64;
    if ratio > 0.9 {
        "char-count char-count--danger"
    } else if ratio > 0.75 {
        "char-count char-count--warning"
    } else {
        "char-count"
    }
}

#[component]
fn CharCount(#[prop(into)] current: Signal<usize>, max: usize) -> impl IntoView {
    view! {
        <span class=move || char_count_class(current.get(), max)>
            {move || format!("{}/{}", current.get(), max)}
        </span>
    }
}

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            view! {
                <p class="field-error">
                    {icon("alert-circle")}
                    {m}
                </p>
            }
        })
    }
}

fn error_signal(vm: NewsWizardViewModel, field: FormField) -> Signal<Option<&'static str>> {
    Signal::derive(move || vm.wizard.with(|w| w.errors().get(field)))
}

// ============================================================================
// Step 1: Informasi Dasar
// ============================================================================

#[component]
pub fn BasicInfoStep(vm: NewsWizardViewModel) -> impl IntoView {
    let title_error = error_signal(vm, FormField::Title);
    let slug_error = error_signal(vm, FormField::Slug);
    let slug_locked = move || vm.wizard.with(|w| w.form().slug_locked);

    view! {
        <div class="wizard-step">
            <div class="form-group">
                <div class="form-group__label-row">
                    <label for="news-title">"Judul Berita" <span class="required">"*"</span></label>
                    <CharCount
                        current=Signal::derive(move || vm.wizard.with(|w| w.form().title.chars().count()))
                        max=TITLE_MAX_CHARS
                    />
                </div>
                <input
                    id="news-title"
                    type="text"
                    class="form-input"
                    class:form-input--error=move || title_error.get().is_some()
                    maxlength=TITLE_MAX_CHARS.to_string()
                    placeholder="Masukkan judul berita yang menarik..."
                    prop:value=move || vm.wizard.with(|w| w.form().title.clone())
                    on:input=move |ev| vm.update(|w| w.set_title(event_target_value(&ev)))
                />
                <FieldError message=title_error />
            </div>

            <div class="form-group">
                <label for="news-slug">"Slug URL" <span class="required">"*"</span></label>
                <div class="slug-field" class:slug-field--locked=slug_locked>
                    <span class="slug-field__prefix">{icon("link")} "/berita/"</span>
                    <input
                        id="news-slug"
                        type="text"
                        class="form-input slug-field__input"
                        class:form-input--error=move || slug_error.get().is_some()
                        readonly=slug_locked
                        placeholder="slug-otomatis-dari-judul"
                        prop:value=move || vm.wizard.with(|w| w.form().slug.clone())
                        on:input=move |ev| vm.update(|w| w.set_slug(&event_target_value(&ev)))
                    />
                    <button
                        type="button"
                        class="button button--icon"
                        title=move || if slug_locked() { "Edit slug manual" } else { "Kunci slug ke judul" }
                        on:click=move |_| vm.update(NewsWizard::toggle_slug_lock)
                    >
                        {move || if slug_locked() { icon("lock") } else { icon("unlock") }}
                    </button>
                    <button
                        type="button"
                        class="button button--icon"
                        title="Buat ulang dari judul"
                        on:click=move |_| vm.update(NewsWizard::regenerate_slug)
                    >
                        {icon("refresh")}
                    </button>
                </div>
                <p class="form-hint">
                    {move || if slug_locked() {
                        "Slug mengikuti judul secara otomatis."
                    } else {
                        "Mode manual: slug dinormalisasi setiap kali diubah."
                    }}
                </p>
                <FieldError message=slug_error />
            </div>

            <div class="form-group">
                <label>"Kategori"</label>
                <div class="category-grid">
                    {Category::ALL.into_iter().map(|category| view! {
                        <button
                            type="button"
                            class="category-option"
                            class:category-option--active=move || vm.wizard.with(|w| w.form().category == category)
                            on:click=move |_| vm.update(|w| w.set_category(category))
                        >
                            {icon(category_icon(category))}
                            <span>{category.as_str()}</span>
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <div class="form-group">
                <label for="news-author">"Penulis"</label>
                <input
                    id="news-author"
                    type="text"
                    class="form-input"
                    placeholder="Nama penulis"
                    prop:value=move || vm.wizard.with(|w| w.form().author.clone())
                    on:input=move |ev| vm.update(|w| w.set_author(event_target_value(&ev)))
                />
            </div>

            <label class="featured-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || vm.wizard.with(|w| w.form().featured)
                    on:change=move |ev| vm.update(|w| w.set_featured(event_target_checked(&ev)))
                />
                <div>
                    <span class="featured-toggle__title">{icon("sparkles")} "Berita Unggulan"</span>
                    <span class="featured-toggle__desc">"Tampilkan di bagian utama halaman berita"</span>
                </div>
            </label>
        </div>
    }
}

pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Education => "book-open",
        Category::Activity => "calendar",
        Category::Announcement => "megaphone",
        Category::Article => "news",
    }
}

// ============================================================================
// Step 2: Konten
// ============================================================================

#[component]
pub fn ContentStep(vm: NewsWizardViewModel) -> impl IntoView {
    let excerpt_error = error_signal(vm, FormField::Excerpt);
    let content_error = error_signal(vm, FormField::Content);
    let content_ref = NodeRef::<leptos::html::Textarea>::new();

    let apply = move |action: MarkdownAction| {
        let Some(el) = content_ref.get() else {
            return;
        };
        let start = el.selection_start().ok().flatten().unwrap_or(0);
        let end = el.selection_end().ok().flatten().unwrap_or(start);
        let (sel_start, sel_end) = vm.apply_markdown(start, end, action);
        // Restore focus once the new value is rendered.
        Timeout::new(0, move || {
            let _ = el.focus();
            let _ = el.set_selection_range(sel_start, sel_end);
        })
        .forget();
    };

    view! {
        <div class="wizard-step">
            <div class="form-group">
                <div class="form-group__label-row">
                    <label for="news-excerpt">"Ringkasan / Excerpt" <span class="required">"*"</span></label>
                    <CharCount
                        current=Signal::derive(move || vm.wizard.with(|w| w.form().excerpt.chars().count()))
                        max=EXCERPT_MAX_CHARS
                    />
                </div>
                <textarea
                    id="news-excerpt"
                    rows="3"
                    class="form-input"
                    class:form-input--error=move || excerpt_error.get().is_some()
                    maxlength=EXCERPT_MAX_CHARS.to_string()
                    placeholder="Tuliskan ringkasan singkat yang menarik perhatian pembaca..."
                    prop:value=move || vm.wizard.with(|w| w.form().excerpt.clone())
                    on:input=move |ev| vm.update(|w| w.set_excerpt(event_target_value(&ev)))
                ></textarea>
                <FieldError message=excerpt_error />
            </div>

            <div class="form-group">
                <div class="form-group__label-row">
                    <label for="news-content">"Konten Berita" <span class="required">"*"</span></label>
                    <div class="form-group__meta">
                        <span class="read-time">
                            {icon("clock")}
                            {move || format!("~{} menit baca", vm.wizard.with(|w| estimate_read_time(&w.form().content)))}
                        </span>
                        <CharCount
                            current=Signal::derive(move || vm.wizard.with(|w| w.form().content.chars().count()))
                            max=CONTENT_MAX_CHARS
                        />
                    </div>
                </div>

                <div class="markdown-toolbar">
                    {MarkdownAction::ALL.into_iter().map(|action| view! {
                        <button
                            type="button"
                            class="markdown-toolbar__button"
                            title=action.label()
                            on:click=move |_| apply(action)
                        >
                            {icon(action.icon())}
                        </button>
                    }).collect_view()}
                </div>

                <textarea
                    node_ref=content_ref
                    id="news-content"
                    rows="12"
                    class="form-input form-input--mono"
                    class:form-input--error=move || content_error.get().is_some()
                    maxlength=CONTENT_MAX_CHARS.to_string()
                    placeholder="Tulis konten berita di sini... (## heading, **bold**, _italic_, - list, > quote)"
                    prop:value=move || vm.wizard.with(|w| w.form().content.clone())
                    on:input=move |ev| vm.update(|w| w.set_content(event_target_value(&ev)))
                ></textarea>
                <FieldError message=content_error />
            </div>
        </div>
    }
}

// ============================================================================
// Step 3: Media & Tags
// ============================================================================

#[component]
pub fn MediaStep(vm: NewsWizardViewModel) -> impl IntoView {
    let thumbnail = move || vm.wizard.with(|w| w.form().thumbnail.clone());
    let can_add_tag = move || vm.wizard.with(NewsWizard::can_add_tag);
    let read_time = move || vm.wizard.with(|w| w.form().read_time);

    view! {
        <div class="wizard-step">
            <div class="form-group">
                <label for="news-thumbnail">"URL Thumbnail"</label>
                <div class="input-with-icon">
                    {icon("image")}
                    <input
                        id="news-thumbnail"
                        type="url"
                        class="form-input"
                        placeholder="https://contoh.com/gambar.jpg"
                        prop:value=thumbnail
                        on:input=move |ev| vm.update(|w| w.set_thumbnail(event_target_value(&ev)))
                    />
                </div>
                {move || {
                    let src = thumbnail();
                    (!src.trim().is_empty()).then(|| view! {
                        <div class="thumbnail-preview">
                            <img src=src alt="Preview thumbnail" />
                        </div>
                    })
                }}
            </div>

            <div class="form-group">
                <div class="form-group__label-row">
                    <label for="news-tag">"Tags"</label>
                    <span class="char-count">
                        {move || format!("{}/{} tag", vm.wizard.with(|w| w.form().tags.len()), MAX_TAGS)}
                    </span>
                </div>
                <div class="tag-input">
                    {move || vm.wizard.with(|w| w.form().tags.clone()).into_iter().map(|tag| {
                        let tag_for_remove = tag.clone();
                        view! {
                            <span class="tag-chip">
                                {icon("tag")}
                                {tag}
                                <button
                                    type="button"
                                    class="tag-chip__remove"
                                    aria-label="Hapus tag"
                                    on:click=move |_| vm.update(|w| w.remove_tag(&tag_for_remove))
                                >
                                    {icon("x")}
                                </button>
                            </span>
                        }
                    }).collect_view()}
                    <input
                        id="news-tag"
                        type="text"
                        class="tag-input__field"
                        disabled=move || !can_add_tag()
                        placeholder=move || if can_add_tag() { "Ketik tag lalu tekan Enter" } else { "Maksimal 10 tag" }
                        prop:value=move || vm.tag_input.get()
                        on:input=move |ev| vm.tag_input.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            let key = ev.key();
                            if key == "Enter" || key == "," {
                                ev.prevent_default();
                                vm.add_tag_from_input();
                            } else if key == "Backspace" && vm.tag_input.get_untracked().is_empty() {
                                vm.update(|w| {
                                    w.remove_last_tag();
                                });
                            }
                        }
                        on:blur=move |_| vm.add_tag_from_input()
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="news-read-time">"Estimasi Waktu Baca (menit)"</label>
                <div class="range-field">
                    <input
                        id="news-read-time"
                        type="range"
                        min=MIN_READ_TIME.to_string()
                        max=MAX_READ_TIME.to_string()
                        prop:value=move || read_time().to_string()
                        on:input=move |ev| {
                            let minutes = event_target_value(&ev).parse().unwrap_or(MIN_READ_TIME);
                            vm.update(|w| w.set_read_time(minutes));
                        }
                    />
                    <span class="range-field__value">{move || format!("{} mnt", read_time())}</span>
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// Step 4: Publikasi
// ============================================================================

fn status_description(status: PublishStatus) -> &'static str {
    match status {
        PublishStatus::Published => "Langsung tayang setelah disimpan",
        PublishStatus::Draft => "Disimpan tapi belum ditampilkan",
    }
}

#[component]
pub fn PublicationStep(vm: NewsWizardViewModel) -> impl IntoView {
    let min_schedule = datetime_local_min(chrono::Local::now().naive_local());
    let publish_at = move || vm.wizard.with(|w| w.form().publish_at.clone());

    view! {
        <div class="wizard-step">
            <div class="form-group">
                <label>"Status Publikasi"</label>
                <div class="status-grid">
                    {PublishStatus::ALL.into_iter().map(|status| view! {
                        <button
                            type="button"
                            class="status-option"
                            class:status-option--active=move || vm.wizard.with(|w| w.form().status == status)
                            on:click=move |_| vm.update(|w| w.set_status(status))
                        >
                            {icon(if status == PublishStatus::Published { "check-circle" } else { "file-text" })}
                            <div>
                                <p class="status-option__label">{status.label()}</p>
                                <p class="status-option__desc">{status_description(status)}</p>
                            </div>
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <div class="form-group">
                <label for="news-publish-at">"Jadwal Penerbitan (opsional)"</label>
                <p class="form-hint">"Biarkan kosong untuk langsung terbit (jika status Published)."</p>
                <input
                    id="news-publish-at"
                    type="datetime-local"
                    class="form-input"
                    min=min_schedule
                    prop:value=publish_at
                    on:change=move |ev| vm.update(|w| w.set_publish_at(event_target_value(&ev)))
                />
            </div>

            <div class="publication-summary">
                <p class="publication-summary__title">"Pratinjau Pengaturan"</p>
                <div class="publication-summary__grid">
                    <div>
                        <p class="publication-summary__label">"Status"</p>
                        <p class="publication-summary__value">
                            {move || vm.wizard.with(|w| w.form().status.label())}
                        </p>
                    </div>
                    <div>
                        <p class="publication-summary__label">"Jadwal"</p>
                        <p class="publication-summary__value">
                            {move || format_schedule(&publish_at()).unwrap_or_else(|| "Segera".to_string())}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_count_warns_near_the_limit() {
        assert_eq!(char_count_class(0, 120), "char-count");
        assert_eq!(char_count_class(90, 120), "char-count");
        assert_eq!(char_count_class(91, 120), "char-count char-count--warning");
        assert_eq!(char_count_class(109, 120), "char-count char-count--danger");
    }

    #[test]
    fn every_category_has_an_icon() {
        for category in Category::ALL {
            assert!(!category_icon(category).is_empty());
        }
    }
}
