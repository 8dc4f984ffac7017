//! Server-rendered HTML for the storefront.

use depot_catalog::Product;

const IMAGE_ROOT: &str = "/images/";

/// Escape text for use in element content and quoted attributes
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn image_src(image_url: &str) -> String {
    if image_url.starts_with('/') || image_url.contains("://") {
        image_url.to_string()
    } else {
        format!("{}{}", IMAGE_ROOT, image_url)
    }
}

/// Full page wrapper with the store banner
pub fn layout(store_name: &str, body: &str) -> String {
    let name = escape(store_name);
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{name}</title>\n\
         </head>\n\
         <body>\n\
         <div class=\"navbar\"><div class=\"navbar-inner\"><div class=\"container\">\
         <a class=\"brand\" href=\"/\">{name}</a>\
         </div></div></div>\n\
         <div class=\"container\">\n\
         {body}\
         </div>\n\
         </body>\n\
         </html>\n"
    )
}

/// Store index: one `.row` per product, each holding a single `.span4` with
/// the `title: price` heading
pub fn store_index(store_name: &str, products: &[Product]) -> String {
    let mut body = String::from("<h1>Your Pragmatic Catalog</h1>\n");

    for product in products {
        body.push_str(&format!(
            "<div class=\"row\">\n\
             <div class=\"span2\"><img src=\"{src}\" alt=\"{title}\"></div>\n\
             <div class=\"span4\">\n\
             <h4>{heading}</h4>\n\
             <p>{description}</p>\n\
             </div>\n\
             </div>\n",
            src = escape(&image_src(&product.image_url)),
            title = escape(&product.title),
            heading = escape(&product.listing_heading()),
            description = escape(&product.description),
        ));
    }

    layout(store_name, &body)
}
