use super::steps::{BasicInfoStep, ContentStep, MediaStep, PublicationStep};
use super::view_model::{NewsWizardViewModel, SaveFn};
use super::wizard::{NewsWizard, WizardStep};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

#[component]
fn StepIndicator(#[prop(into)] current: Signal<WizardStep>) -> impl IntoView {
    view! {
        <div class="step-indicator">
            {WizardStep::ALL.into_iter().map(|step| view! {
                <div
                    class="step-indicator__dot"
                    class:step-indicator__dot--current=move || current.get() == step
                    class:step-indicator__dot--done=move || step < current.get()
                ></div>
            }).collect_view()}
        </div>
    }
}

/// Step labels; completed steps can be clicked to go back.
#[component]
fn StepPills(vm: NewsWizardViewModel) -> impl IntoView {
    view! {
        <div class="step-pills">
            {WizardStep::ALL.into_iter().map(|step| {
                let completed = move || vm.wizard.with(|w| w.is_step_completed(step));
                view! {
                    <button
                        type="button"
                        class="step-pill"
                        class:step-pill--current=move || vm.wizard.with(|w| w.step() == step)
                        class:step-pill--done=completed
                        disabled=move || !completed()
                        on:click=move |_| vm.update(|w| {
                            w.go_to_step(step);
                        })
                    >
                        {step.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// "Add news" wizard dialog. Mount it while the dialog is open.
#[component]
pub fn NewsWizardModal(
    /// Called once the dialog should disappear (cancelled, discarded or saved)
    on_close: Callback<()>,
    /// Receives the validated record
    on_save: SaveFn,
) -> impl IntoView {
    let vm = NewsWizardViewModel::new();
    let on_save = StoredValue::new_local(on_save);

    let step = Signal::derive(move || vm.wizard.with(NewsWizard::step));
    let saving = Signal::derive(move || vm.wizard.with(NewsWizard::is_saving));
    let request_close = Callback::new(move |_| vm.request_close(on_close));

    let subtitle = Signal::derive(move || {
        let s = step.get();
        format!("Langkah {} dari {}: {}", s.number(), WizardStep::ALL.len(), s.label())
    });

    let header_extra: ChildrenFn = Arc::new(move || view! { <StepIndicator current=step /> }.into_any());

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <div class="wizard-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=saving
                    on_click=move |_| {
                        if step.get_untracked().is_first() {
                            request_close.run(());
                        } else {
                            vm.prev_step();
                        }
                    }
                >
                    {move || if step.get().is_first() { "Batal" } else { "← Sebelumnya" }}
                </Button>

                <Show
                    when=move || step.get().is_last()
                    fallback=move || view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.next_step()>
                            "Selanjutnya →"
                        </Button>
                    }
                >
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=saving
                        on_click=move |_| vm.save_command(on_save.get_value(), on_close)
                    >
                        <Show
                            when=move || saving.get()
                            fallback=|| view! { {icon("check-circle")} "Simpan Berita" }
                        >
                            <Spinner size=SpinnerSize::Tiny />
                            "Menyimpan..."
                        </Show>
                    </Button>
                </Show>
            </div>
        }
        .into_any()
    });

    view! {
        <Modal
            title="Tambah Berita Baru"
            subtitle=subtitle
            on_close=request_close
            header_extra=header_extra
            footer=footer
        >
            <StepPills vm=vm />

            {move || vm.save_error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert-circle")}</span>
                    <span class="warning-box__text">{format!("Gagal menyimpan: {}", e)}</span>
                </div>
            })}

            <div class="wizard-body">
                {move || match step.get() {
                    WizardStep::BasicInfo => view! { <BasicInfoStep vm=vm /> }.into_any(),
                    WizardStep::Content => view! { <ContentStep vm=vm /> }.into_any(),
                    WizardStep::Media => view! { <MediaStep vm=vm /> }.into_any(),
                    WizardStep::Publication => view! { <PublicationStep vm=vm /> }.into_any(),
                }}
            </div>

            <Show when=move || vm.confirm_discard.get()>
                <div class="confirm-discard">
                    <div class="confirm-discard__box">
                        <p class="confirm-discard__title">"Buang perubahan?"</p>
                        <p class="confirm-discard__text">"Data yang sudah diisi akan hilang."</p>
                        <div class="confirm-discard__actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.keep_editing()
                            >
                                "Lanjut mengisi"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.discard(on_close)
                            >
                                "Buang"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </Modal>
    }
}
