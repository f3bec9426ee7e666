//! Server-rendered homepage.
//!
//! Renders the same `list_all` data the JSON list endpoint serves, as a
//! plain HTML document. Record fields are text-escaped before insertion.

use crate::store::Cupcake;

/// Escape text for safe insertion into HTML element content or
/// double-quoted attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the homepage listing every stored cupcake.
pub fn render_home(cupcakes: &[Cupcake]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Cupcakes</title></head>\n\
         <body>\n\
         <h1>Cupcakes</h1>\n\
         <ul id=\"cupcakes\">\n",
    );

    for cupcake in cupcakes {
        html.push_str(&format!(
            "  <li data-id=\"{}\">\
             <img src=\"{}\" alt=\"{}\" width=\"100\"> \
             {} / {} / rated {}</li>\n",
            cupcake.id,
            escape(&cupcake.image),
            escape(&cupcake.flavor),
            escape(&cupcake.flavor),
            escape(&cupcake.size),
            cupcake.rating,
        ));
    }

    html.push_str("</ul>\n</body>\n</html>\n");
    html
}
