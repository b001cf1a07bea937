use leptos::*;
use leptos_router::{use_location, A};

const SECTIONS: &[(&str, &str)] = &[
    ("#education", "Education"),
    ("#projects", "Projects"),
    ("#certificates", "Certificates"),
    ("#comments", "Comments"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;
    // Section anchors only resolve on the home page
    let on_home = move || pathname.get() == "/";

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"Portfolio"</A>
                <div class="nav-links">
                    {SECTIONS
                        .iter()
                        .map(|&(anchor, label)| {
                            let href = move || if on_home() { anchor.to_string() } else { format!("/{}", anchor) };
                            view! { <a href=href class="nav-link">{label}</a> }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
