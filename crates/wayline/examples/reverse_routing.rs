//! Bidirectional routing walkthrough.
//!
//! Registers two routes, matches a request forward, then generates a URL
//! backward from a route name and variables.
//!
//! Run with: cargo run --example reverse_routing -p wayline

use wayline::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Registration order is precedence order.
    let mut routes = RouteSet::new();
    routes.add(
        Route::builder()
            .method(Method::Get)
            .path_pattern("/articles/{id:int}")
            .name("article")
            .handle("article-detail")
            .build()?,
    );
    routes.add(
        Route::builder()
            .scheme("https")
            .host_pattern("{tenant}.example.com")
            .path(["dashboard"])
            .name("dashboard")
            .handle("tenant-dashboard")
            .build()?,
    );

    // Forward: request in, handle and variables out.
    let request = Request::new(Method::Get, "http://example.com/articles/17")?;
    let matched = routes.match_request(&request).expect("article route matches");
    println!("handle: {:?}", matched.handle());
    println!("id:     {:?}", matched.var("id"));

    // Reverse: route name and variables in, canonical URL out.
    let vars = VarMap::from_iter([("tenant", "acme")]);
    let url = routes.url("dashboard", &vars)?;
    println!("url:    {url}");
    assert_eq!(url.to_string(), "https://acme.example.com/dashboard");

    Ok(())
}
