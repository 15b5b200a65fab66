// web_app/app.rs - Root application component
//
// Sets up meta tags, routing and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::EmptyState;
use crate::web_app::pages::TrackerPage;

pub const APP_TITLE: &str = "ShopSmart Price Tracker";

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Router with the tracker routes
/// - 404 fallback
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Compare supplier prices across currencies and share your comparison" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/price_tracker.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=TrackerPage />
                    <Route path=path!("/tracker") view=TrackerPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Fallback for unknown routes
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-pink-100 via-purple-50 to-indigo-100 flex items-center justify-center">
            <div class="bg-white rounded-2xl shadow-xl p-8 text-center">
                <EmptyState icon="🔍" message="No supplier stall at this address." />
                <a
                    href="/"
                    class="inline-block bg-gradient-to-r from-purple-500 to-pink-500 text-white px-6 py-3 \
                           rounded-full font-semibold hover:shadow-lg transition-all duration-300"
                >
                    "🛒 Back to the price tracker"
                </a>
            </div>
        </div>
    }
}

/// HTML document shell used for server-side rendering
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
