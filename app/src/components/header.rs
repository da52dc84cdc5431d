//! Header component

use demo_routes::RouteDefinition;
use leptos::prelude::*;

/// title of the page a resolution renders; unmatched paths get the 404 title
pub fn page_title(route: Option<&RouteDefinition>) -> &'static str {
    route.map_or("Not Found", |route| route.view.title())
}

/// app title plus the page the current route renders
#[component]
pub fn Header(active: Memo<Option<RouteDefinition>>) -> impl IntoView {
    let page = move || active.with(|route| page_title(route.as_ref()));
    let route_name = move || active.get().map(|route| route.name).unwrap_or("-");

    view! {
        <header class="header">
            <div>
                <h1>"Request Examples"</h1>
                <p class="subtitle">{page}</p>
            </div>
            <span class="badge">"route: "{route_name}</span>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demo_routes::RouteTable;
    use rstest::rstest;

    #[rstest]
    #[case("/lets-post", "Let's POST")]
    #[case("/", "Most Common Use Case")]
    #[case("/does-not-exist", "Not Found")]
    fn test_page_title_follows_resolution(#[case] path: &str, #[case] expected: &str) {
        let table = RouteTable::demo();

        assert_eq!(page_title(table.resolve(path).route()), expected);
    }
}
