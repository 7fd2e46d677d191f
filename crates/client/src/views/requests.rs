//! Leave and material requests: list existing ones and submit new ones.

use chrono::NaiveDate;
use dioxus::prelude::*;
use monolite_shared::{
    LeaveKind, LeaveRequest, MaterialRequest, NewLeaveRequest, NewMaterialRequest, RequestStatus,
};

use crate::auth::AuthContext;
use crate::components::ui::{Button, Card, CardBody, CardHeader, InputType, TextInput};
use crate::hooks::{use_refresh_resource, use_refreshable_resource};
use crate::stores::push_success;

fn status_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "bg-amber-500/20 text-amber-300",
        RequestStatus::Approved => "bg-emerald-500/20 text-emerald-300",
        RequestStatus::Rejected => "bg-rose-500/20 text-rose-300",
    }
}

#[component]
pub fn Requests() -> Element {
    let auth = use_context::<AuthContext>();
    let mut show_leave_form = use_signal(|| false);
    let mut show_material_form = use_signal(|| false);

    let leave_requests = use_refreshable_resource(move || async move {
        let Some(user_id) = auth.user_id() else {
            return Err("Not signed in".to_string());
        };
        auth.client()
            .list_leave_requests(user_id)
            .await
            .map_err(|e| e.user_message())
    });

    let material_requests = use_refreshable_resource(move || async move {
        let Some(user_id) = auth.user_id() else {
            return Err("Not signed in".to_string());
        };
        auth.client()
            .list_material_requests(user_id)
            .await
            .map_err(|e| e.user_message())
    });

    rsx! {
        div { class: "mx-auto max-w-3xl space-y-8 p-6",
            section { class: "space-y-4",
                div { class: "flex items-center justify-between",
                    h1 { class: "text-2xl font-bold text-white", "Leave" }
                    Button {
                        onclick: move |_| {
                            let shown = *show_leave_form.read();
                            show_leave_form.set(!shown);
                        },
                        if *show_leave_form.read() { "Close" } else { "Request leave" }
                    }
                }
                if *show_leave_form.read() {
                    LeaveRequestForm {
                        on_created: move |_| show_leave_form.set(false),
                    }
                }
                match leave_requests.read().as_ref() {
                    Some(Ok(requests)) => rsx! {
                        if requests.is_empty() {
                            div { class: "rounded-lg border border-[#22302d] p-6 text-center text-gray-500",
                                "No leave requests yet."
                            }
                        } else {
                            div { class: "space-y-2",
                                for request in requests.iter() {
                                    LeaveRow { key: "{request.id}", request: request.clone() }
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

            section { class: "space-y-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-2xl font-bold text-white", "Materials" }
                    Button {
                        onclick: move |_| {
                            let shown = *show_material_form.read();
                            show_material_form.set(!shown);
                        },
                        if *show_material_form.read() { "Close" } else { "Request materials" }
                    }
                }
                if *show_material_form.read() {
                    MaterialRequestForm {
                        on_created: move |_| show_material_form.set(false),
                    }
                }
                match material_requests.read().as_ref() {
                    Some(Ok(requests)) => rsx! {
                        if requests.is_empty() {
                            div { class: "rounded-lg border border-[#22302d] p-6 text-center text-gray-500",
                                "No material requests yet."
                            }
                        } else {
                            div { class: "space-y-2",
                                for request in requests.iter() {
                                    MaterialRow { key: "{request.id}", request: request.clone() }
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
}

#[component]
fn LeaveRow(request: LeaveRequest) -> Element {
    let badge = status_class(request.status);
    rsx! {
        div { class: "flex items-center justify-between rounded-lg border border-[#22302d] bg-[#16211f] px-4 py-3",
            div {
                span { class: "font-medium text-white", {request.kind.label()} }
                p { class: "text-xs text-gray-500",
                    {format!(
                        "{} to {}",
                        request.start_date.format("%d %b %Y"),
                        request.end_date.format("%d %b %Y"),
                    )}
                }
                if let Some(reason) = &request.reason {
                    p { class: "text-xs text-gray-500", "{reason}" }
                }
            }
            span { class: "rounded px-2 py-0.5 text-xs {badge}",
                {request.status.label()}
            }
        }
    }
}

#[component]
fn MaterialRow(request: MaterialRequest) -> Element {
    let badge = status_class(request.status);
    rsx! {
        div { class: "flex items-center justify-between rounded-lg border border-[#22302d] bg-[#16211f] px-4 py-3",
            div {
                span { class: "font-medium text-white", "{request.quantity} × {request.item}" }
                if let Some(notes) = &request.notes {
                    p { class: "text-xs text-gray-500", "{notes}" }
                }
            }
            span { class: "rounded px-2 py-0.5 text-xs {badge}",
                {request.status.label()}
            }
        }
    }
}

#[component]
fn LeaveRequestForm(on_created: EventHandler<()>) -> Element {
    let auth = use_context::<AuthContext>();
    let mut refresh = use_refresh_resource::<Result<Vec<LeaveRequest>, String>>();

    let mut kind = use_signal(|| LeaveKind::Vacation);
    let mut start = use_signal(String::new);
    let mut end = use_signal(String::new);
    let mut reason = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let Ok(start_date) = NaiveDate::parse_from_str(start.read().trim(), "%Y-%m-%d") else {
            error.set(Some("Pick a start date".to_string()));
            return;
        };
        let Ok(end_date) = NaiveDate::parse_from_str(end.read().trim(), "%Y-%m-%d") else {
            error.set(Some("Pick an end date".to_string()));
            return;
        };
        if end_date < start_date {
            error.set(Some("End date must not be before the start date".to_string()));
            return;
        }
        let Some(user_id) = auth.user_id() else {
            return;
        };

        is_saving.set(true);
        error.set(None);
        let kind_value = *kind.read();
        let reason_value = reason.read().trim().to_string();
        let on_created = on_created.clone();

        spawn(async move {
            let request = NewLeaveRequest {
                user_id,
                kind: kind_value,
                start_date,
                end_date,
                reason: if reason_value.is_empty() {
                    None
                } else {
                    Some(reason_value)
                },
            };
            match auth.client().create_leave_request(&request).await {
                Ok(_) => {
                    push_success("Leave request submitted");
                    refresh.write();
                    on_created.call(());
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
            CardHeader { title: "New leave request".to_string() }
            CardBody {
                form { onsubmit: handle_submit, class: "space-y-4",
                    div {
                        label { class: "block text-sm font-medium text-gray-300 mb-2", "Type" }
                        div { class: "flex flex-wrap gap-2",
                            for option in LeaveKind::ALL {
                                button {
                                    r#type: "button",
                                    class: format!(
                                        "rounded-lg px-3 py-1.5 text-sm transition-colors {}",
                                        if *kind.read() == option {
                                            "bg-teal-500/30 text-teal-200"
                                        } else {
                                            "bg-[#22302d] text-gray-400 hover:text-gray-200"
                                        },
                                    ),
                                    onclick: move |_| kind.set(option),
                                    {option.label()}
                                }
                            }
                        }
                    }
                    div { class: "grid gap-4 sm:grid-cols-2",
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2", "From" }
                            TextInput {
                                value: start.read().clone(),
                                input_type: Some(InputType::Date),
                                oninput: move |e: FormEvent| {
                                    start.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2", "To" }
                            TextInput {
                                value: end.read().clone(),
                                input_type: Some(InputType::Date),
                                oninput: move |e: FormEvent| {
                                    end.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-300 mb-2", "Reason (optional)" }
                        TextInput {
                            value: reason.read().clone(),
                            oninput: move |e: FormEvent| reason.set(e.value()),
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
                        if *is_saving.read() { "Submitting..." } else { "Submit" }
                    }
                }
            }
        }
    }
}

#[component]
fn MaterialRequestForm(on_created: EventHandler<()>) -> Element {
    let auth = use_context::<AuthContext>();
    let mut refresh = use_refresh_resource::<Result<Vec<MaterialRequest>, String>>();

    let mut item = use_signal(String::new);
    let mut quantity = use_signal(|| "1".to_string());
    let mut notes = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let item_value = item.read().trim().to_string();
        if item_value.is_empty() {
            error.set(Some("Name the item you need".to_string()));
            return;
        }
        let quantity_value: i32 = match quantity.read().trim().parse() {
            Ok(q) if q > 0 => q,
            _ => {
                error.set(Some("Quantity must be a positive number".to_string()));
                return;
            }
        };
        let Some(user_id) = auth.user_id() else {
            return;
        };

        is_saving.set(true);
        error.set(None);
        let notes_value = notes.read().trim().to_string();
        let on_created = on_created.clone();

        spawn(async move {
            let request = NewMaterialRequest {
                user_id,
                item: item_value,
                quantity: quantity_value,
                notes: if notes_value.is_empty() {
                    None
                } else {
                    Some(notes_value)
                },
            };
            match auth.client().create_material_request(&request).await {
                Ok(_) => {
                    push_success("Material request submitted");
                    refresh.write();
                    on_created.call(());
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
            CardHeader { title: "New material request".to_string() }
            CardBody {
                form { onsubmit: handle_submit, class: "space-y-4",
                    div { class: "grid gap-4 sm:grid-cols-2",
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2", "Item" }
                            TextInput {
                                value: item.read().clone(),
                                placeholder: Some("Safety gloves".to_string()),
                                oninput: move |e: FormEvent| {
                                    item.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2", "Quantity" }
                            TextInput {
                                value: quantity.read().clone(),
                                input_type: Some(InputType::Number),
                                oninput: move |e: FormEvent| {
                                    quantity.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-300 mb-2", "Notes (optional)" }
                        TextInput {
                            value: notes.read().clone(),
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
                        if *is_saving.read() { "Submitting..." } else { "Submit" }
                    }
                }
            }
        }
    }
}
