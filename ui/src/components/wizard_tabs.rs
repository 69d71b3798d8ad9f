use yew::prelude::*;

use crate::ad_form::WizardSection;

#[derive(Properties, PartialEq)]
pub struct WizardTabsProps {
    pub active: WizardSection,
    /// Sections that currently hold errors the user has been shown.
    #[prop_or_default]
    pub flagged: Vec<WizardSection>,
    pub on_select: Callback<WizardSection>,
}

#[function_component]
pub fn WizardTabs(props: &WizardTabsProps) -> Html {
    html! {
        <div class="border-b border-neutral-200 dark:border-neutral-700 mb-6">
            <nav class="flex space-x-6" role="tablist">
                {for WizardSection::ALL.into_iter().map(|section| {
                    let is_active = section == props.active;
                    let is_flagged = props.flagged.contains(&section);
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_select.emit(section);
                        })
                    };
                    let class = if is_active {
                        "border-neutral-900 dark:border-neutral-100 text-neutral-900 dark:text-neutral-100"
                    } else {
                        "border-transparent text-neutral-500 dark:text-neutral-400 hover:text-neutral-700 dark:hover:text-neutral-300"
                    };
                    html! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected={is_active.to_string()}
                            class={classes!("py-3", "px-1", "border-b-2", "text-sm", "font-medium", class)}
                            {onclick}
                        >
                            {section.label()}
                            if is_flagged {
                                <span class="ml-1 text-red-600 dark:text-red-400">{"•"}</span>
                            }
                        </button>
                    }
                })}
            </nav>
        </div>
    }
}
