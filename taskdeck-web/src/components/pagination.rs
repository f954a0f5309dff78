use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub on_page: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let current = props.current_page;
    let on_previous = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(current.saturating_sub(1).max(1)))
    };
    let on_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(current + 1))
    };

    html! {
        <div class="join">
            <button class="join-item btn" type="button" disabled={!props.has_previous} onclick={on_previous}>
                {"«"}
            </button>
            <button class="join-item btn btn-disabled" type="button">
                { format!("Page {} of {}", current, props.total_pages.max(1)) }
            </button>
            <button
                class="join-item btn"
                type="button"
                disabled={!props.has_next}
                onclick={on_next}
            >
                {"»"}
            </button>
        </div>
    }
}
