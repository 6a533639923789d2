use leptos::prelude::*;

/// Label shown in the footer and used as the document title.
pub const CENTER_NAME: &str = "Family Planning & Fertility Center";

/// Element id of the footer landmark, the target of `#about` links.
pub const ANCHOR_ID: &str = "about";

/// Site footer. Stateless: every render produces the same markup.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer
            id=ANCHOR_ID
            class="max-w-7xl mx-auto mt-8 py-6 sm:py-8 px-4 sm:px-6 flex flex-col sm:flex-row justify-between text-xs sm:text-sm text-gray-600 border-t border-gray-200 gap-6 sm:gap-0 scroll-mt-20"
        >
            <div>
                <p class="font-bold text-gray-800 mb-2">{CENTER_NAME}</p>
            </div>
        </footer>
    }
}
