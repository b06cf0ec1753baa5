//! State machine of the "add news" wizard, free of any Leptos types.
//!
//! The wizard walks four steps in order. Moving forward validates the current
//! step; moving back is always allowed and clears the shown errors. Saving
//! validates every step and jumps to the first one that fails.

use chrono::NaiveDate;
use contracts::domain::a001_news::{
    estimate_read_time, generate_slug, normalize_tag, Category, NewNewsArticle, PublishStatus,
};
use std::collections::BTreeMap;
use thiserror::Error;

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 120;
pub const EXCERPT_MAX_CHARS: usize = 250;
pub const CONTENT_MIN_CHARS: usize = 50;
pub const CONTENT_MAX_CHARS: usize = 50_000;
pub const MAX_TAGS: usize = 10;
pub const MIN_READ_TIME: u32 = 1;
pub const MAX_READ_TIME: u32 = 60;
pub const DEFAULT_READ_TIME: u32 = 2;

// ============================================================================
// Steps
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WizardStep {
    #[default]
    BasicInfo,
    Content,
    Media,
    Publication,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::Content,
        WizardStep::Media,
        WizardStep::Publication,
    ];

    /// 1-based position.
    pub fn number(self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Content => 2,
            WizardStep::Media => 3,
            WizardStep::Publication => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Informasi Dasar",
            WizardStep::Content => "Konten",
            WizardStep::Media => "Media & Tags",
            WizardStep::Publication => "Publikasi",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn prev(self) -> Option<Self> {
        self.number().checked_sub(2).map(|i| Self::ALL[i])
    }

    pub fn is_first(self) -> bool {
        self == WizardStep::BasicInfo
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::Publication
    }
}

// ============================================================================
// Form and validation
// ============================================================================

/// Fields that carry validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Slug,
    Excerpt,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<FormField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsForm {
    pub title: String,
    pub slug: String,
    /// While locked the slug is derived from the title.
    pub slug_locked: bool,
    pub category: Category,
    pub author: String,
    pub featured: bool,
    pub excerpt: String,
    pub content: String,
    pub thumbnail: String,
    pub tags: Vec<String>,
    pub read_time: u32,
    pub status: PublishStatus,
    /// `datetime-local` value or empty for "publish now".
    pub publish_at: String,
}

impl Default for NewsForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            slug_locked: true,
            category: Category::Education,
            author: String::new(),
            featured: false,
            excerpt: String::new(),
            content: String::new(),
            thumbnail: String::new(),
            tags: Vec::new(),
            read_time: DEFAULT_READ_TIME,
            status: PublishStatus::Published,
            publish_at: String::new(),
        }
    }
}

pub fn validate_step(step: WizardStep, form: &NewsForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    match step {
        WizardStep::BasicInfo => {
            if form.title.trim().is_empty() {
                errors.insert(FormField::Title, "Judul tidak boleh kosong");
            } else if form.title.chars().count() < TITLE_MIN_CHARS {
                errors.insert(FormField::Title, "Judul minimal 5 karakter");
            }
            if form.slug.trim().is_empty() {
                errors.insert(FormField::Slug, "Slug tidak boleh kosong");
            }
        }
        WizardStep::Content => {
            if form.excerpt.trim().is_empty() {
                errors.insert(FormField::Excerpt, "Ringkasan tidak boleh kosong");
            }
            if form.content.trim().is_empty() {
                errors.insert(FormField::Content, "Konten tidak boleh kosong");
            } else if form.content.chars().count() < CONTENT_MIN_CHARS {
                errors.insert(FormField::Content, "Konten minimal 50 karakter");
            }
        }
        WizardStep::Media | WizardStep::Publication => {}
    }
    errors
}

fn truncate_chars(mut value: String, max: usize) -> String {
    if let Some((idx, _)) = value.char_indices().nth(max) {
        value.truncate(idx);
    }
    value
}

// ============================================================================
// Wizard
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Close,
    ConfirmDiscard,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("form has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("save already in progress")]
    AlreadySaving,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsWizard {
    form: NewsForm,
    step: WizardStep,
    errors: FieldErrors,
    saving: bool,
}

impl NewsWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &NewsForm {
        &self.form
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Steps before the current one; only those can be jumped to.
    pub fn is_step_completed(&self, step: WizardStep) -> bool {
        step < self.step
    }

    // ---- Step 1 ----

    pub fn set_title(&mut self, value: String) {
        self.form.title = truncate_chars(value, TITLE_MAX_CHARS);
        self.errors.remove(FormField::Title);
        if self.form.slug_locked {
            self.form.slug = generate_slug(&self.form.title);
            if !self.form.slug.is_empty() {
                self.errors.remove(FormField::Slug);
            }
        }
    }

    /// Manual slug edit, ignored while the slug is locked to the title.
    pub fn set_slug(&mut self, value: &str) {
        if self.form.slug_locked {
            return;
        }
        self.form.slug = generate_slug(value);
        self.errors.remove(FormField::Slug);
    }

    pub fn toggle_slug_lock(&mut self) {
        self.form.slug_locked = !self.form.slug_locked;
    }

    pub fn regenerate_slug(&mut self) {
        self.form.slug = generate_slug(&self.form.title);
        if !self.form.slug.is_empty() {
            self.errors.remove(FormField::Slug);
        }
    }

    pub fn set_category(&mut self, category: Category) {
        self.form.category = category;
    }

    pub fn set_author(&mut self, value: String) {
        self.form.author = value;
    }

    pub fn set_featured(&mut self, featured: bool) {
        self.form.featured = featured;
    }

    // ---- Step 2 ----

    pub fn set_excerpt(&mut self, value: String) {
        self.form.excerpt = truncate_chars(value, EXCERPT_MAX_CHARS);
        self.errors.remove(FormField::Excerpt);
    }

    /// Also re-estimates the read time.
    pub fn set_content(&mut self, value: String) {
        self.form.content = truncate_chars(value, CONTENT_MAX_CHARS);
        self.form.read_time = estimate_read_time(&self.form.content).clamp(MIN_READ_TIME, MAX_READ_TIME);
        self.errors.remove(FormField::Content);
    }

    // ---- Step 3 ----

    pub fn set_thumbnail(&mut self, value: String) {
        self.form.thumbnail = value;
    }

    pub fn can_add_tag(&self) -> bool {
        self.form.tags.len() < MAX_TAGS
    }

    /// Adds the normalized tag. Returns `false` for empty, duplicate or
    /// over-limit tags.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = normalize_tag(raw);
        if tag.is_empty() || !self.can_add_tag() || self.form.tags.contains(&tag) {
            return false;
        }
        self.form.tags.push(tag);
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.form.tags.retain(|t| t != tag);
    }

    pub fn remove_last_tag(&mut self) -> Option<String> {
        self.form.tags.pop()
    }

    pub fn set_read_time(&mut self, minutes: u32) {
        self.form.read_time = minutes.clamp(MIN_READ_TIME, MAX_READ_TIME);
    }

    // ---- Step 4 ----

    pub fn set_status(&mut self, status: PublishStatus) {
        self.form.status = status;
    }

    pub fn set_publish_at(&mut self, value: String) {
        self.form.publish_at = value;
    }

    // ---- Navigation ----

    /// Validates the current step and advances when it passes.
    pub fn next_step(&mut self) -> bool {
        let errors = validate_step(self.step, &self.form);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        self.errors.clear();
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        true
    }

    pub fn prev_step(&mut self) {
        self.errors.clear();
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Jumps back to an already completed step. Forward jumps are refused.
    pub fn go_to_step(&mut self, step: WizardStep) -> bool {
        if step >= self.step {
            return false;
        }
        self.errors.clear();
        self.step = step;
        true
    }

    // ---- Closing ----

    /// True once any free-text field or the tag list holds something.
    pub fn is_dirty(&self) -> bool {
        let f = &self.form;
        [
            &f.title,
            &f.slug,
            &f.author,
            &f.excerpt,
            &f.content,
            &f.thumbnail,
            &f.publish_at,
        ]
        .iter()
        .any(|s| !s.is_empty())
            || !f.tags.is_empty()
    }

    pub fn request_close(&self) -> CloseDecision {
        if self.is_dirty() {
            CloseDecision::ConfirmDiscard
        } else {
            CloseDecision::Close
        }
    }

    pub fn discard(&mut self) {
        *self = Self::new();
    }

    // ---- Saving ----

    /// Validates every step and, on success, marks the wizard as saving and
    /// returns the record for the save collaborator. On failure the wizard
    /// moves to the first failing step with its errors shown.
    pub fn begin_save(&mut self, today: NaiveDate) -> Result<NewNewsArticle, WizardError> {
        if self.saving {
            return Err(WizardError::AlreadySaving);
        }
        for step in WizardStep::ALL {
            let errors = validate_step(step, &self.form);
            if !errors.is_empty() {
                self.step = step;
                self.errors = errors.clone();
                return Err(WizardError::Validation(errors));
            }
        }
        self.errors.clear();
        self.saving = true;

        let f = &self.form;
        let optional = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());
        Ok(NewNewsArticle {
            title: f.title.clone(),
            slug: f.slug.clone(),
            category: f.category,
            content: f.content.clone(),
            excerpt: f.excerpt.clone(),
            thumbnail: optional(&f.thumbnail),
            tags: f.tags.clone(),
            read_time: f.read_time,
            status: f.status,
            created_at: today,
            publish_at: optional(&f.publish_at),
            author: f.author.clone(),
            views: 0,
            featured: f.featured,
        })
    }

    /// A successful save resets the wizard, so closing afterwards never asks
    /// for confirmation. A failed save keeps everything for another attempt.
    pub fn finish_save(&mut self, succeeded: bool) {
        self.saving = false;
        if succeeded {
            self.discard();
        }
    }
}

// ============================================================================
// Markdown toolbar
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownAction {
    Heading,
    Bold,
    Italic,
    List,
    Quote,
}

impl MarkdownAction {
    pub const ALL: [MarkdownAction; 5] = [
        MarkdownAction::Heading,
        MarkdownAction::Bold,
        MarkdownAction::Italic,
        MarkdownAction::List,
        MarkdownAction::Quote,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MarkdownAction::Heading => "Heading",
            MarkdownAction::Bold => "Bold",
            MarkdownAction::Italic => "Italic",
            MarkdownAction::List => "List",
            MarkdownAction::Quote => "Quote",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MarkdownAction::Heading => "heading",
            MarkdownAction::Bold => "bold",
            MarkdownAction::Italic => "italic",
            MarkdownAction::List => "list",
            MarkdownAction::Quote => "quote",
        }
    }

    /// `(prefix, suffix)` wrapped around the selection.
    pub fn markers(self) -> (&'static str, &'static str) {
        match self {
            MarkdownAction::Heading => ("## ", ""),
            MarkdownAction::Bold => ("**", "**"),
            MarkdownAction::Italic => ("_", "_"),
            MarkdownAction::List => ("- ", ""),
            MarkdownAction::Quote => ("> ", ""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownEdit {
    pub text: String,
    /// New selection, in UTF-16 code units like the DOM reports them.
    pub selection_start: u32,
    pub selection_end: u32,
}

/// Byte index of a UTF-16 offset, clamped to the end of `text`.
fn byte_index(text: &str, utf16_offset: u32) -> usize {
    let mut units = 0u32;
    for (idx, c) in text.char_indices() {
        if units >= utf16_offset {
            return idx;
        }
        units += c.len_utf16() as u32;
    }
    text.len()
}

/// Wraps the `[start, end)` selection of a textarea with the action's
/// markers and keeps the same text selected.
pub fn insert_markdown(text: &str, start: u32, end: u32, action: MarkdownAction) -> MarkdownEdit {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let (prefix, suffix) = action.markers();
    let start_byte = byte_index(text, start);
    let end_byte = byte_index(text, end);

    let mut out = String::with_capacity(text.len() + prefix.len() + suffix.len());
    out.push_str(&text[..start_byte]);
    out.push_str(prefix);
    out.push_str(&text[start_byte..end_byte]);
    out.push_str(suffix);
    out.push_str(&text[end_byte..]);

    let shift = prefix.encode_utf16().count() as u32;
    let start_units = text[..start_byte].encode_utf16().count() as u32;
    let end_units = text[..end_byte].encode_utf16().count() as u32;
    MarkdownEdit {
        text: out,
        selection_start: start_units + shift,
        selection_end: end_units + shift,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_CONTENT: &str =
        "Santri RTQ Al-Hikmah mengikuti kegiatan bakti sosial di desa sekitar pondok.";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 20).unwrap()
    }

    fn filled_wizard() -> NewsWizard {
        let mut w = NewsWizard::new();
        w.set_title("Bakti Sosial Santri".into());
        w.set_author("Admin".into());
        w.set_excerpt("Kegiatan bakti sosial bersama warga.".into());
        w.set_content(LONG_CONTENT.into());
        w
    }

    #[test]
    fn defaults_match_a_fresh_form() {
        let w = NewsWizard::new();
        let f = w.form();
        assert!(f.slug_locked);
        assert_eq!(f.category, Category::Education);
        assert_eq!(f.read_time, DEFAULT_READ_TIME);
        assert_eq!(f.status, PublishStatus::Published);
        assert_eq!(w.step(), WizardStep::BasicInfo);
        assert!(!w.is_dirty());
    }

    #[test]
    fn step_order_and_labels() {
        assert_eq!(WizardStep::BasicInfo.next(), Some(WizardStep::Content));
        assert_eq!(WizardStep::Publication.next(), None);
        assert_eq!(WizardStep::BasicInfo.prev(), None);
        assert_eq!(WizardStep::Media.prev(), Some(WizardStep::Content));
        let labels: Vec<_> = WizardStep::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Informasi Dasar", "Konten", "Media & Tags", "Publikasi"]);
    }

    #[test]
    fn empty_title_blocks_step_two() {
        let mut w = NewsWizard::new();
        assert!(!w.next_step());
        assert_eq!(w.step(), WizardStep::BasicInfo);
        assert_eq!(w.errors().get(FormField::Title), Some("Judul tidak boleh kosong"));
        assert_eq!(w.errors().get(FormField::Slug), Some("Slug tidak boleh kosong"));
    }

    #[test]
    fn short_title_blocks_step_two() {
        let mut w = NewsWizard::new();
        w.set_title("Abcd".into());
        assert!(!w.next_step());
        assert_eq!(w.step(), WizardStep::BasicInfo);
        assert_eq!(w.errors().get(FormField::Title), Some("Judul minimal 5 karakter"));
        assert_eq!(w.errors().get(FormField::Slug), None);
    }

    #[test]
    fn valid_title_advances_and_clears_errors() {
        let mut w = NewsWizard::new();
        w.next_step();
        w.set_title("Kajian Rutin".into());
        assert!(w.errors().get(FormField::Title).is_none());
        assert!(w.next_step());
        assert_eq!(w.step(), WizardStep::Content);
        assert!(w.errors().is_empty());
    }

    #[test]
    fn content_step_requires_excerpt_and_long_content() {
        let mut w = NewsWizard::new();
        w.set_title("Kajian Rutin".into());
        w.next_step();

        w.set_content("terlalu pendek".into());
        assert!(!w.next_step());
        assert_eq!(w.errors().get(FormField::Excerpt), Some("Ringkasan tidak boleh kosong"));
        assert_eq!(w.errors().get(FormField::Content), Some("Konten minimal 50 karakter"));

        w.set_excerpt("Ringkasan".into());
        w.set_content(LONG_CONTENT.into());
        assert!(w.next_step());
        assert_eq!(w.step(), WizardStep::Media);
    }

    #[test]
    fn back_is_always_allowed_and_clears_errors() {
        let mut w = filled_wizard();
        w.next_step();
        w.set_content(String::new());
        assert!(!w.next_step());
        assert!(!w.errors().is_empty());

        w.prev_step();
        assert_eq!(w.step(), WizardStep::BasicInfo);
        assert!(w.errors().is_empty());

        w.prev_step();
        assert_eq!(w.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn go_to_step_only_moves_back() {
        let mut w = filled_wizard();
        w.next_step();
        w.next_step();
        assert_eq!(w.step(), WizardStep::Media);
        assert!(w.is_step_completed(WizardStep::BasicInfo));
        assert!(!w.is_step_completed(WizardStep::Media));

        assert!(!w.go_to_step(WizardStep::Publication));
        assert!(!w.go_to_step(WizardStep::Media));
        assert!(w.go_to_step(WizardStep::BasicInfo));
        assert_eq!(w.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn locked_slug_follows_title() {
        let mut w = NewsWizard::new();
        w.set_title("Peringatan HUT RTQ ke-10".into());
        assert_eq!(w.form().slug, "peringatan-hut-rtq-ke-10");

        w.set_slug("ignored while locked");
        assert_eq!(w.form().slug, "peringatan-hut-rtq-ke-10");
    }

    #[test]
    fn unlocked_slug_is_normalized_on_every_edit() {
        let mut w = NewsWizard::new();
        w.set_title("Judul Pertama".into());
        w.toggle_slug_lock();
        assert!(!w.form().slug_locked);

        w.set_slug("Slug Manual!!");
        assert_eq!(w.form().slug, "slug-manual");

        w.set_title("Judul Kedua".into());
        assert_eq!(w.form().slug, "slug-manual");

        w.regenerate_slug();
        assert_eq!(w.form().slug, "judul-kedua");
    }

    #[test]
    fn relocking_resyncs_on_next_title_edit() {
        let mut w = NewsWizard::new();
        w.toggle_slug_lock();
        w.set_slug("custom");
        w.toggle_slug_lock();
        assert_eq!(w.form().slug, "custom");

        w.set_title("Judul Baru".into());
        assert_eq!(w.form().slug, "judul-baru");
    }

    #[test]
    fn content_updates_read_time() {
        let mut w = NewsWizard::new();
        w.set_content(vec!["kata"; 450].join(" "));
        assert_eq!(w.form().read_time, 3);

        w.set_read_time(0);
        assert_eq!(w.form().read_time, MIN_READ_TIME);
        w.set_read_time(500);
        assert_eq!(w.form().read_time, MAX_READ_TIME);
    }

    #[test]
    fn long_inputs_are_cut_at_their_limit() {
        let mut w = NewsWizard::new();
        w.set_title("é".repeat(200));
        assert_eq!(w.form().title.chars().count(), TITLE_MAX_CHARS);
        w.set_excerpt("x".repeat(300));
        assert_eq!(w.form().excerpt.len(), EXCERPT_MAX_CHARS);
    }

    #[test]
    fn tags_are_normalized_unique_and_capped() {
        let mut w = NewsWizard::new();
        assert!(w.add_tag("  Santri Baru "));
        assert!(!w.add_tag("santri baru"));
        assert!(!w.add_tag("   "));
        assert_eq!(w.form().tags, vec!["santri-baru"]);

        for i in 0..20 {
            w.add_tag(&format!("tag {}", i));
        }
        assert_eq!(w.form().tags.len(), MAX_TAGS);
        assert!(!w.can_add_tag());

        w.remove_tag("santri-baru");
        assert!(!w.form().tags.contains(&"santri-baru".to_string()));
        assert_eq!(w.remove_last_tag(), Some("tag 8".replace(' ', "-")));
    }

    #[test]
    fn empty_wizard_closes_without_prompt() {
        let w = NewsWizard::new();
        assert_eq!(w.request_close(), CloseDecision::Close);
    }

    #[test]
    fn settings_alone_do_not_make_the_form_dirty() {
        let mut w = NewsWizard::new();
        w.set_category(Category::Article);
        w.set_status(PublishStatus::Draft);
        w.set_featured(true);
        w.set_read_time(10);
        assert_eq!(w.request_close(), CloseDecision::Close);
    }

    #[test]
    fn typed_text_or_tags_ask_before_discarding() {
        let mut w = NewsWizard::new();
        w.set_author("Ustadz Ahmad".into());
        assert_eq!(w.request_close(), CloseDecision::ConfirmDiscard);

        let mut w = NewsWizard::new();
        w.add_tag("kajian");
        assert_eq!(w.request_close(), CloseDecision::ConfirmDiscard);

        w.discard();
        assert_eq!(w, NewsWizard::new());
    }

    #[test]
    fn whitespace_only_content_still_asks_before_discarding() {
        let mut w = NewsWizard::new();
        w.set_content("    \n\n   ".into());
        assert_eq!(w.request_close(), CloseDecision::ConfirmDiscard);
    }

    #[test]
    fn save_jumps_to_first_failing_step() {
        let mut w = filled_wizard();
        w.next_step();
        w.next_step();
        w.next_step();
        assert_eq!(w.step(), WizardStep::Publication);

        w.go_to_step(WizardStep::Content);
        w.set_excerpt(String::new());
        w.next_step();
        // Content step now fails, so the wizard stays there.
        assert_eq!(w.step(), WizardStep::Content);

        let err = w.begin_save(today()).unwrap_err();
        assert!(matches!(err, WizardError::Validation(_)));
        assert_eq!(w.step(), WizardStep::Content);
        assert!(w.errors().get(FormField::Excerpt).is_some());
        assert!(!w.is_saving());
    }

    #[test]
    fn successful_save_builds_record_and_resets() {
        let mut w = filled_wizard();
        w.add_tag("Bakti Sosial");
        w.set_status(PublishStatus::Draft);

        let record = w.begin_save(today()).unwrap();
        assert!(w.is_saving());
        assert_eq!(w.begin_save(today()), Err(WizardError::AlreadySaving));

        assert_eq!(record.slug, "bakti-sosial-santri");
        assert_eq!(record.tags, vec!["bakti-sosial"]);
        assert_eq!(record.status, PublishStatus::Draft);
        assert_eq!(record.created_at, today());
        assert_eq!(record.thumbnail, None);
        assert_eq!(record.publish_at, None);
        assert_eq!(record.views, 0);

        w.finish_save(true);
        assert!(!w.is_saving());
        assert_eq!(w.request_close(), CloseDecision::Close);
    }

    #[test]
    fn failed_save_keeps_the_form() {
        let mut w = filled_wizard();
        w.begin_save(today()).unwrap();
        w.finish_save(false);
        assert!(!w.is_saving());
        assert_eq!(w.form().title, "Bakti Sosial Santri");
        assert_eq!(w.request_close(), CloseDecision::ConfirmDiscard);
    }

    #[test]
    fn markdown_wraps_selection() {
        let edit = insert_markdown("halo dunia", 5, 10, MarkdownAction::Bold);
        assert_eq!(edit.text, "halo **dunia**");
        assert_eq!((edit.selection_start, edit.selection_end), (7, 12));
    }

    #[test]
    fn markdown_prefix_at_cursor() {
        let edit = insert_markdown("judul", 0, 0, MarkdownAction::Heading);
        assert_eq!(edit.text, "## judul");
        assert_eq!((edit.selection_start, edit.selection_end), (3, 3));
    }

    #[test]
    fn markdown_uses_utf16_offsets() {
        // "é" is one UTF-16 unit but two bytes; "😀" is two units.
        let text = "é😀 kata";
        let edit = insert_markdown(text, 4, 8, MarkdownAction::Italic);
        assert_eq!(edit.text, "é😀 _kata_");
        assert_eq!((edit.selection_start, edit.selection_end), (5, 9));
    }

    #[test]
    fn markdown_clamps_and_orders_offsets() {
        let edit = insert_markdown("abc", 99, 1, MarkdownAction::Quote);
        assert_eq!(edit.text, "a> bc");
        assert_eq!((edit.selection_start, edit.selection_end), (3, 5));
    }
}
