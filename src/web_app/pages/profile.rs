// web_app/pages/profile.rs - Account page reached from the Account tab

use leptos::prelude::*;

use crate::web_app::components::BackLink;
use crate::web_app::model::HOME_PATH;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto px-4 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">"Account"</h1>
            <p class="text-gray-600">"Sign-in and order history are not available yet."</p>
            <BackLink href=HOME_PATH>"Back to shop"</BackLink>
        </div>
    }
}
