use super::wizard::{insert_markdown, CloseDecision, MarkdownAction, NewsWizard, WizardError};
use crate::shared::date_utils::today;
use contracts::domain::a001_news::NewNewsArticle;
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Save collaborator supplied by the hosting page.
pub type SaveFn = Rc<dyn Fn(NewNewsArticle) -> Pin<Box<dyn Future<Output = Result<(), String>>>>>;

/// ViewModel of the "add news" wizard
#[derive(Clone, Copy)]
pub struct NewsWizardViewModel {
    pub wizard: RwSignal<NewsWizard>,
    /// Discard prompt shown after a close request on a dirty form.
    pub confirm_discard: RwSignal<bool>,
    pub save_error: RwSignal<Option<String>>,
    /// Text typed in the tag box, not yet part of the form.
    pub tag_input: RwSignal<String>,
}

impl NewsWizardViewModel {
    pub fn new() -> Self {
        Self {
            wizard: RwSignal::new(NewsWizard::new()),
            confirm_discard: RwSignal::new(false),
            save_error: RwSignal::new(None),
            tag_input: RwSignal::new(String::new()),
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut NewsWizard)) {
        self.wizard.update(f);
    }

    pub fn next_step(&self) {
        self.wizard.update(|w| {
            if !w.next_step() {
                log::debug!("step {} has errors", w.step().number());
            }
        });
    }

    pub fn prev_step(&self) {
        self.wizard.update(NewsWizard::prev_step);
    }

    pub fn add_tag_from_input(&self) {
        let raw = self.tag_input.get_untracked();
        if raw.trim().is_empty() {
            return;
        }
        self.wizard.update(|w| {
            w.add_tag(&raw);
        });
        self.tag_input.set(String::new());
    }

    /// Applies a toolbar action to the content and returns the selection to
    /// restore in the textarea.
    pub fn apply_markdown(&self, start: u32, end: u32, action: MarkdownAction) -> (u32, u32) {
        let content = self.wizard.with_untracked(|w| w.form().content.clone());
        let edit = insert_markdown(&content, start, end, action);
        self.wizard.update(|w| w.set_content(edit.text));
        (edit.selection_start, edit.selection_end)
    }

    pub fn request_close(&self, on_close: Callback<()>) {
        if self.wizard.with_untracked(NewsWizard::is_saving) {
            return;
        }
        match self.wizard.with_untracked(NewsWizard::request_close) {
            CloseDecision::Close => {
                self.reset();
                on_close.run(());
            }
            CloseDecision::ConfirmDiscard => self.confirm_discard.set(true),
        }
    }

    pub fn discard(&self, on_close: Callback<()>) {
        self.reset();
        on_close.run(());
    }

    pub fn keep_editing(&self) {
        self.confirm_discard.set(false);
    }

    fn reset(&self) {
        self.wizard.update(NewsWizard::discard);
        self.confirm_discard.set(false);
        self.save_error.set(None);
        self.tag_input.set(String::new());
    }

    /// Validate and hand the record to `on_save`; closes on success.
    pub fn save_command(&self, on_save: SaveFn, on_close: Callback<()>) {
        let today = today();
        let mut result = Err(WizardError::AlreadySaving);
        self.wizard.update(|w| result = w.begin_save(today));

        let record = match result {
            Ok(record) => record,
            Err(WizardError::Validation(errors)) => {
                log::debug!("save blocked by {} invalid field(s)", errors.len());
                return;
            }
            Err(WizardError::AlreadySaving) => {
                log::warn!("save requested while a save is running");
                return;
            }
        };

        self.save_error.set(None);
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match on_save(record).await {
                Ok(()) => {
                    this.wizard.update(|w| w.finish_save(true));
                    this.reset();
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("failed to save news: {}", e);
                    this.wizard.update(|w| w.finish_save(false));
                    this.save_error.set(Some(e));
                }
            }
        });
    }
}
