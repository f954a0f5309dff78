use shared::models::{Task, TaskStatus};
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::HtmlSelectElement;
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub on_status_change: Callback<(u64, TaskStatus)>,
    pub on_delete: Callback<u64>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    if props.tasks.is_empty() {
        return html! {
            <div class="p-4 text-sm text-base-content/70">
                {"No tasks on this page. Add one to get started."}
            </div>
        };
    }

    html! {
        <ul class="divide-y divide-base-300">
            { for props.tasks.iter().map(|task| {
                let id = task.id;
                let on_status = {
                    let on_status_change = props.on_status_change.clone();
                    Callback::from(move |event: yew::events::Event| {
                        let target: HtmlSelectElement = event.target_unchecked_into();
                        if let Ok(status) = TaskStatus::from_str(&target.value()) {
                            on_status_change.emit((id, status));
                        }
                    })
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    Callback::from(move |_| on_delete.emit(id))
                };
                let title_class = if task.status == TaskStatus::Completed {
                    classes!("font-medium", "line-through", "text-base-content/60")
                } else {
                    classes!("font-medium")
                };
                html! {
                    <li key={id} class="p-3 flex items-start justify-between gap-4">
                        <div>
                            <div class={title_class}>{ task.task_title.clone() }</div>
                            <div class="text-sm text-base-content/70">{ task.task_description.clone() }</div>
                            <div class="text-xs text-base-content/50 mt-1">
                                { format!("Due {} · {} priority", task.due_date, task.priority) }
                            </div>
                        </div>
                        <div class="flex items-center gap-2">
                            <select class="select select-bordered select-sm" onchange={on_status}>
                                { for TaskStatus::iter().map(|status| html! {
                                    <option value={status.to_string()} selected={status == task.status}>
                                        { status.to_string() }
                                    </option>
                                })}
                            </select>
                            <button class="btn btn-ghost btn-sm" type="button" onclick={on_delete}>
                                {"Delete"}
                            </button>
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}
