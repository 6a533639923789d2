use crate::components::Footer;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page"></main>
        <Footer/>
    }
}

#[cfg(test)]
#[cfg(feature = "ssr")]
mod tests {
    use super::*;
    use crate::components::footer::tests::text_content;

    #[test]
    fn test_home_page_hosts_footer() {
        let html = HomePage().to_html();
        assert!(html.contains(r#"id="about""#));
        assert!(text_content(&html).contains("Family Planning & Fertility Center"));
    }

    #[test]
    fn test_footer_follows_main() {
        let html = HomePage().to_html();
        let main = html.find("<main").expect("main missing");
        let footer = html.find("<footer").expect("footer missing");
        assert!(main < footer);
    }
}
