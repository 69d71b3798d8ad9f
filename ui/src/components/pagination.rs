use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub on_page_change: Callback<u32>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn Pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }
    let current = props.current_page;

    let go_to = |page: u32| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page))
    };

    let button_class = "px-3 py-1 rounded-md border border-neutral-300 dark:border-neutral-600 text-sm \
                        disabled:opacity-50 disabled:cursor-not-allowed";

    html! {
        <nav class="flex items-center justify-center gap-4" aria-label="Pagination">
            <button class={button_class} onclick={go_to(current.saturating_sub(1))}
                disabled={props.disabled || !props.has_previous}>
                {"Previous"}
            </button>
            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("Page {current} of {}", props.total_pages)}
            </span>
            <button class={button_class} onclick={go_to(current + 1)}
                disabled={props.disabled || !props.has_next}>
                {"Next"}
            </button>
        </nav>
    }
}
