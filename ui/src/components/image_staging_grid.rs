use web_sys::HtmlInputElement;
use yew::prelude::*;

use payloads::ACCEPTED_IMAGE_TYPES;

#[derive(Properties, PartialEq)]
pub struct ImageStagingGridProps {
    /// `(file name, preview URL)` in staging order.
    pub images: Vec<(String, String)>,
    pub on_add: Callback<Vec<web_sys::File>>,
    pub on_remove: Callback<usize>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Picker and preview grid for the images staged with a new ad.
#[function_component]
pub fn ImageStagingGrid(props: &ImageStagingGridProps) -> Html {
    let on_files = {
        let on_add = props.on_add.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(list) = input.files() else {
                return;
            };
            let files = (0..list.length()).filter_map(|i| list.get(i)).collect();
            // Allow picking the same file again after removing it.
            input.set_value("");
            on_add.emit(files);
        })
    };

    html! {
        <div class="space-y-4">
            <label class="flex flex-col items-center justify-center w-full h-32 border-2 border-dashed border-neutral-300 dark:border-neutral-600 rounded-lg cursor-pointer hover:bg-neutral-50 dark:hover:bg-neutral-800">
                <span class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Click to add images"}
                </span>
                <span class="text-xs text-neutral-500 dark:text-neutral-500">
                    {"JPEG, PNG or WebP, up to 5MB each"}
                </span>
                <input
                    type="file"
                    multiple={true}
                    accept={ACCEPTED_IMAGE_TYPES.join(",")}
                    class="hidden"
                    disabled={props.disabled}
                    onchange={on_files}
                />
            </label>

            if !props.images.is_empty() {
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {for props.images.iter().enumerate().map(|(index, (name, url))| {
                        let onclick = {
                            let on_remove = props.on_remove.clone();
                            Callback::from(move |_: MouseEvent| on_remove.emit(index))
                        };
                        html! {
                            <div key={url.clone()} class="relative aspect-square rounded-lg overflow-hidden border border-neutral-200 dark:border-neutral-700">
                                <img src={url.clone()} alt={name.clone()} class="w-full h-full object-cover" />
                                <button
                                    type="button"
                                    title="Remove"
                                    disabled={props.disabled}
                                    class="absolute top-1 right-1 w-6 h-6 rounded-full bg-neutral-900/70 text-white text-sm leading-none"
                                    {onclick}
                                >
                                    {"×"}
                                </button>
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}
