use shared::models::{NewTask, TaskPriority, TaskStatus};
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{
    Callback, Html, Properties, TargetCast, classes, function_component, html, use_state,
};

#[derive(Properties, PartialEq, Clone)]
pub struct TaskFormProps {
    pub on_submit: Callback<NewTask>,
    #[prop_or(false)]
    pub disabled: bool,
}

/// Create form. The date input yields `YYYY-MM-DD`; the store normalizes it.
#[function_component(TaskForm)]
pub fn task_form(props: &TaskFormProps) -> Html {
    let draft = use_state(NewTask::default);

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            draft.set(NewTask {
                task_title: target.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            draft.set(NewTask {
                task_description: target.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_due_date = {
        let draft = draft.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            draft.set(NewTask {
                due_date: target.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_status = {
        let draft = draft.clone();
        Callback::from(move |event: yew::events::Event| {
            let target: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(status) = TaskStatus::from_str(&target.value()) {
                draft.set(NewTask {
                    status,
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_priority = {
        let draft = draft.clone();
        Callback::from(move |event: yew::events::Event| {
            let target: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(priority) = TaskPriority::from_str(&target.value()) {
                draft.set(NewTask {
                    priority,
                    ..(*draft).clone()
                });
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: yew::events::SubmitEvent| {
            event.prevent_default();
            on_submit.emit((*draft).clone());
            draft.set(NewTask::default());
        })
    };

    let incomplete = draft.task_title.trim().is_empty() || draft.due_date.is_empty();

    html! {
        <form class="card bg-base-200 shadow-md" onsubmit={onsubmit}>
            <div class="card-body space-y-2">
                <h2 class="card-title">{"New task"}</h2>
                <input
                    class={classes!("input", "input-bordered", "w-full")}
                    type="text"
                    placeholder="Title"
                    value={draft.task_title.clone()}
                    oninput={on_title}
                />
                <textarea
                    class={classes!("textarea", "textarea-bordered", "w-full")}
                    placeholder="Description"
                    value={draft.task_description.clone()}
                    oninput={on_description}
                />
                <div class="flex gap-2">
                    <input
                        class="input input-bordered"
                        type="date"
                        value={draft.due_date.clone()}
                        oninput={on_due_date}
                    />
                    <select class="select select-bordered" onchange={on_status}>
                        { for TaskStatus::iter().map(|status| html! {
                            <option value={status.to_string()} selected={status == draft.status}>
                                { status.to_string() }
                            </option>
                        })}
                    </select>
                    <select class="select select-bordered" onchange={on_priority}>
                        { for TaskPriority::iter().map(|priority| html! {
                            <option value={priority.to_string()} selected={priority == draft.priority}>
                                { priority.to_string() }
                            </option>
                        })}
                    </select>
                </div>
                <div class="card-actions justify-end">
                    <button
                        class="btn btn-primary"
                        type="submit"
                        disabled={props.disabled || incomplete}
                    >
                        {"Add task"}
                    </button>
                </div>
            </div>
        </form>
    }
}
