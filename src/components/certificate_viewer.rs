use leptos::*;

/// Thumbnail that opens a full-screen overlay. Any click on the overlay closes it.
#[component]
pub fn CertificateViewer(image: &'static str, title: &'static str) -> impl IntoView {
    let (open, set_open) = create_signal(false);

    view! {
        <figure class="certificate">
            <button class="certificate-thumb" on:click=move |_| set_open.set(true)>
                <img src=image alt=title/>
            </button>
            <figcaption>{title}</figcaption>

            <Show when=move || open.get()>
                <div class="certificate-overlay" on:click=move |_| set_open.set(false)>
                    <img src=image alt=format!("{} (full view)", title)/>
                </div>
            </Show>
        </figure>
    }
}
