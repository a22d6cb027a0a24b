//! Document head metadata: title, description, canonical link, Open Graph,
//! Twitter card and Organization JSON-LD.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Title};

use crate::config::SiteConfig;
use crate::content::{SERVICES, TAGLINE};

/// `schema.org` Organization description of the studio.
pub fn organization_json_ld(config: &SiteConfig) -> serde_json::Value {
    let services: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": config.site_name,
        "url": config.absolute_url("/"),
        "logo": config.absolute_url("/logo.svg"),
        "description": TAGLINE,
        "knowsAbout": services,
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "new business",
            "url": config.absolute_url("/#contact"),
        },
    })
}

/// Full `<title>` text.
pub fn page_title(config: &SiteConfig) -> String {
    format!("{} | Design studio", config.site_name)
}

#[component]
pub fn SeoMeta() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let title = page_title(&config);
    let canonical = config.absolute_url("/");
    let og_image = config.absolute_url("/og.png");
    let json_ld = organization_json_ld(&config).to_string();

    view! {
        <Title text=title.clone()/>
        <Meta name="description" content=TAGLINE/>
        <Link rel="canonical" href=canonical.clone()/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:title" content=title.clone()/>
        <Meta property="og:description" content=TAGLINE/>
        <Meta property="og:url" content=canonical/>
        <Meta property="og:image" content=og_image.clone()/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=title/>
        <Meta name="twitter:image" content=og_image/>
        <Script type_="application/ld+json">{json_ld}</Script>
    }
}
