//! Work hour log: list past entries and record new ones.

use chrono::NaiveDate;
use dioxus::prelude::*;
use monolite_shared::{NewWorkHourLog, WorkHourLog};

use crate::auth::AuthContext;
use crate::components::ui::{Button, Card, CardBody, CardHeader, InputType, TextInput};
use crate::hooks::{use_refresh_resource, use_refreshable_resource};
use crate::stores::push_success;

#[component]
pub fn Activities() -> Element {
    let auth = use_context::<AuthContext>();

    let logs = use_refreshable_resource(move || async move {
        let Some(user_id) = auth.user_id() else {
            return Err("Not signed in".to_string());
        };
        auth.client()
            .list_work_hour_logs(user_id)
            .await
            .map_err(|e| e.user_message())
    });

    rsx! {
        div { class: "mx-auto max-w-3xl space-y-6 p-6",
            h1 { class: "text-2xl font-bold text-white", "Work hours" }

            LogHoursForm {}

            match logs.read().as_ref() {
                Some(Ok(entries)) => rsx! {
                    if entries.is_empty() {
                        div { class: "rounded-lg border border-[#22302d] p-8 text-center text-gray-500",
                            "No hours logged yet."
                        }
                    } else {
                        div { class: "space-y-2",
                            for entry in entries.iter() {
                                LogRow { key: "{entry.id}", entry: entry.clone() }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "text-sm text-rose-400", "{e}" }
                },
                None => rsx! {
                    p { class: "text-sm text-gray-500", "Loading..." }
                },
            }
        }
    }
}

#[component]
fn LogRow(entry: WorkHourLog) -> Element {
    rsx! {
        div { class: "flex items-center justify-between rounded-lg border border-[#22302d] bg-[#16211f] px-4 py-3",
            div {
                span { class: "font-medium text-white",
                    {entry.work_date.format("%a %d %b %Y").to_string()}
                }
                if let Some(notes) = &entry.notes {
                    p { class: "text-xs text-gray-500", "{notes}" }
                }
            }
            span { class: "text-teal-300 font-semibold", "{entry.hours} h" }
        }
    }
}

#[component]
fn LogHoursForm() -> Element {
    let auth = use_context::<AuthContext>();
    let mut refresh = use_refresh_resource::<Result<Vec<WorkHourLog>, String>>();

    let mut date = use_signal(String::new);
    let mut hours = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let Ok(work_date) = NaiveDate::parse_from_str(date.read().trim(), "%Y-%m-%d") else {
            error.set(Some("Pick a date".to_string()));
            return;
        };
        let parsed_hours: f64 = match hours.read().trim().parse() {
            Ok(h) if (0.0..=24.0).contains(&h) && h > 0.0 => h,
            _ => {
                error.set(Some("Hours must be between 0 and 24".to_string()));
                return;
            }
        };
        let Some(user_id) = auth.user_id() else {
            return;
        };

        is_saving.set(true);
        error.set(None);
        let notes_value = notes.read().trim().to_string();

        spawn(async move {
            let log = NewWorkHourLog {
                user_id,
                work_date,
                hours: parsed_hours,
                notes: if notes_value.is_empty() {
                    None
                } else {
                    Some(notes_value)
                },
            };
            match auth.client().create_work_hour_log(&log).await {
                Ok(_) => {
                    push_success("Hours logged");
                    date.set(String::new());
                    hours.set(String::new());
                    notes.set(String::new());
                    refresh.write();
                    is_saving.set(false);
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    is_saving.set(false);
                }
            }
        });
    };

    rsx! {
        Card {
            CardHeader { title: "Log hours".to_string() }
            CardBody {
                form { onsubmit: handle_submit, class: "space-y-4",
                    div { class: "grid gap-4 sm:grid-cols-2",
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2", "Date" }
                            TextInput {
                                value: date.read().clone(),
                                input_type: Some(InputType::Date),
                                oninput: move |e: FormEvent| {
                                    date.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2", "Hours" }
                            TextInput {
                                value: hours.read().clone(),
                                input_type: Some(InputType::Number),
                                placeholder: Some("8".to_string()),
                                oninput: move |e: FormEvent| {
                                    hours.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-300 mb-2", "Notes (optional)" }
                        TextInput {
                            value: notes.read().clone(),
                            placeholder: Some("Site visit, overtime...".to_string()),
                            oninput: move |e: FormEvent| notes.set(e.value()),
                        }
                    }
                    if let Some(err) = error.read().as_ref() {
                        div { class: "p-3 bg-rose-500/10 border border-rose-500/30 rounded-lg text-rose-400 text-sm",
                            "{err}"
                        }
                    }
                    Button {
                        r#type: Some("submit".to_string()),
                        disabled: Some(*is_saving.read()),
                        if *is_saving.read() { "Saving..." } else { "Log hours" }
                    }
                }
            }
        }
    }
}
